//! Venue pages

use askama::Template;
use axum::response::Response;
use booking_common::db::models::Venue;
use booking_common::query::{Area, VenueDetail};

use crate::flash::{Flash, IncomingFlash};
use crate::ui::render;
use crate::ui::shows::{show_panels, ShowPanel};

#[derive(Template)]
#[template(path = "areas.html")]
pub struct AreasPage<'a> {
    pub title: &'static str,
    pub flash: Option<Flash>,
    pub search_action: &'static str,
    pub search_placeholder: &'static str,
    pub search_term: &'static str,
    pub areas: &'a [Area],
}

pub fn areas_page(flash: IncomingFlash, areas: &[Area]) -> Response {
    let page = AreasPage {
        title: "Venues",
        flash: flash.0,
        search_action: "/venues/search",
        search_placeholder: "Find a venue",
        search_term: "",
        areas,
    };
    render(&page, page.flash.is_some())
}

#[derive(Template)]
#[template(path = "venue.html")]
pub struct VenuePage<'a> {
    pub title: &'a str,
    pub flash: Option<Flash>,
    pub venue: &'a Venue,
    pub panels: Vec<ShowPanel>,
}

pub fn venue_page(flash: IncomingFlash, detail: &VenueDetail) -> Response {
    let page = VenuePage {
        title: &detail.venue.name,
        flash: flash.0,
        venue: &detail.venue,
        panels: show_panels(&detail.shows, "/artists"),
    };
    render(&page, page.flash.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use booking_common::db::models::VenueFields;
    use booking_common::query::{AreaVenue, ShowSplit};

    #[test]
    fn test_areas_page_lists_each_area() {
        let areas = vec![
            Area {
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                venues: vec![AreaVenue {
                    id: 1,
                    name: "The Musical Hop".to_string(),
                    num_upcoming_shows: 0,
                }],
            },
            Area {
                city: "New York".to_string(),
                state: "NY".to_string(),
                venues: vec![AreaVenue {
                    id: 2,
                    name: "The Dueling Pianos Bar".to_string(),
                    num_upcoming_shows: 4,
                }],
            },
        ];

        let page = AreasPage {
            title: "Venues",
            flash: None,
            search_action: "/venues/search",
            search_placeholder: "Find a venue",
            search_term: "",
            areas: &areas,
        };
        let html = page.render().unwrap();

        assert_eq!(html.matches(r#"<section class="area">"#).count(), 2);
        assert!(html.contains("New York, NY"));
        assert!(html.contains(r#"<a href="/venues/2">The Dueling Pianos Bar</a>"#));
        assert!(html.contains("4 upcoming"));
        assert!(html.contains(r#"action="/venues/search""#));
    }

    #[test]
    fn test_venue_page_without_shows() {
        let venue = VenueFields {
            name: "Park Square Live Music & Coffee".to_string(),
            genres: vec!["Jazz".to_string(), "R&B".to_string()],
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "34 Whiskey Moore Ave".to_string(),
            ..Default::default()
        }
        .with_id(3);

        let page = VenuePage {
            title: &venue.name,
            flash: None,
            venue: &venue,
            panels: show_panels(&ShowSplit::default(), "/artists"),
        };
        let html = page.render().unwrap();

        assert!(html.contains("<h1>Park Square Live Music &amp; Coffee</h1>"));
        assert!(html.contains(r#"<span class="genre">R&amp;B</span>"#));
        assert!(html.contains("0 Upcoming Shows"));
        assert!(html.contains("0 Past Shows"));
        assert!(html.contains("Not currently seeking talent"));
        assert!(html.contains(r#"action="/venues/3/delete""#));
    }
}
