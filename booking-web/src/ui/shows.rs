//! Show listings: the /shows page and the past/upcoming panels on detail pages

use askama::Template;
use axum::response::Response;
use booking_common::query::{ShowListingView, ShowSplit, ShowSummary};
use booking_common::time::{format_datetime, DateFormat};

use crate::flash::{Flash, IncomingFlash};
use crate::ui::render;

/// One show card linking to the counterpart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowCard {
    pub link: String,
    pub name: String,
    pub image_link: String,
    pub time: String,
}

/// "N Upcoming Shows" / "N Past Shows" section of a detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowPanel {
    pub heading: &'static str,
    pub count: usize,
    pub cards: Vec<ShowCard>,
}

fn cards(shows: &[ShowSummary], link_prefix: &str, time: impl Fn(&ShowSummary) -> String) -> Vec<ShowCard> {
    shows
        .iter()
        .map(|s| ShowCard {
            link: format!("{}/{}", link_prefix, s.counterpart_id),
            name: s.counterpart_name.clone(),
            image_link: s.counterpart_image_link.clone(),
            time: time(s),
        })
        .collect()
}

/// Upcoming panel first, then past. Upcoming times go through the datetime
/// filter; past shows keep their fixed-format string.
pub fn show_panels(split: &ShowSplit, link_prefix: &str) -> Vec<ShowPanel> {
    vec![
        ShowPanel {
            heading: "Upcoming Shows",
            count: split.upcoming_count,
            cards: cards(&split.upcoming, link_prefix, |s| {
                format_datetime(s.start_time, DateFormat::Medium)
            }),
        },
        ShowPanel {
            heading: "Past Shows",
            count: split.past_count,
            cards: cards(&split.past, link_prefix, |s| s.start_time_display.clone()),
        },
    ]
}

/// A listing with its start time spelled out in full
pub struct ListedShow<'a> {
    pub show: &'a ShowListingView,
    pub when: String,
}

#[derive(Template)]
#[template(path = "shows.html")]
pub struct ShowsPage<'a> {
    pub title: &'static str,
    pub flash: Option<Flash>,
    pub shows: Vec<ListedShow<'a>>,
}

pub fn shows_page(flash: IncomingFlash, shows: &[ShowListingView]) -> Response {
    let page = ShowsPage {
        title: "Shows",
        flash: flash.0,
        shows: shows
            .iter()
            .map(|show| ListedShow {
                show,
                when: format_datetime(show.start_time, DateFormat::Full),
            })
            .collect(),
    };
    render(&page, page.flash.is_some())
}
