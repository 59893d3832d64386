//! Create/edit forms for venues, artists and shows

use askama::Template;
use axum::response::Response;
use booking_common::db::models::{Artist, ArtistFields, Venue, VenueFields};

use crate::flash::{Flash, IncomingFlash};
use crate::ui::{render, SelectOption};

pub const GENRES: [&str; 19] = [
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

pub const STATES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

/// State choices with `selected` marked. A stored state outside the list is
/// offered first so an edit round-trips it.
pub fn state_options(selected: &str) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = STATES
        .iter()
        .map(|s| SelectOption {
            value: s.to_string(),
            selected: *s == selected,
        })
        .collect();

    if !selected.is_empty() && !STATES.contains(&selected) {
        options.insert(
            0,
            SelectOption {
                value: selected.to_string(),
                selected: true,
            },
        );
    }
    options
}

/// Genre choices; stored genres outside the list are appended, selected
pub fn genre_options(selected: &[String]) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = GENRES
        .iter()
        .map(|g| SelectOption {
            value: g.to_string(),
            selected: selected.iter().any(|s| s.as_str() == *g),
        })
        .collect();

    options.extend(
        selected
            .iter()
            .filter(|s| !GENRES.contains(&s.as_str()))
            .map(|s| SelectOption {
                value: s.clone(),
                selected: true,
            }),
    );
    options
}

/// Venue and artist forms share one template; `address` is venue-only
#[derive(Template)]
#[template(path = "entity_form.html")]
pub struct EntityForm {
    pub title: &'static str,
    pub flash: Option<Flash>,
    pub noun: &'static str,
    pub editing: Option<String>,
    pub action: String,
    pub submit: &'static str,
    pub seeking_label: &'static str,
    pub name: String,
    pub city: String,
    pub address: Option<String>,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
    pub state_options: Vec<SelectOption>,
    pub genre_options: Vec<SelectOption>,
}

impl EntityForm {
    pub fn venue(fields: VenueFields, id: Option<i64>) -> Self {
        let (title, action, submit) = match id {
            Some(id) => ("Edit Venue", format!("/venues/{}/edit", id), "Save Venue"),
            None => ("New Venue", "/venues/create".to_string(), "Create Venue"),
        };

        Self {
            title,
            flash: None,
            noun: "venue",
            editing: id.map(|_| fields.name.clone()),
            action,
            submit,
            seeking_label: "Seeking talent",
            state_options: state_options(&fields.state),
            genre_options: genre_options(&fields.genres),
            name: fields.name,
            city: fields.city,
            address: Some(fields.address),
            phone: fields.phone,
            image_link: fields.image_link,
            facebook_link: fields.facebook_link,
            website: fields.website,
            seeking_talent: fields.seeking_talent,
            seeking_description: fields.seeking_description,
        }
    }

    pub fn artist(fields: ArtistFields, id: Option<i64>) -> Self {
        let (title, action, submit) = match id {
            Some(id) => ("Edit Artist", format!("/artists/{}/edit", id), "Save Artist"),
            None => ("New Artist", "/artists/create".to_string(), "Create Artist"),
        };

        Self {
            title,
            flash: None,
            noun: "artist",
            editing: id.map(|_| fields.name.clone()),
            action,
            submit,
            seeking_label: "Seeking venues",
            state_options: state_options(&fields.state),
            genre_options: genre_options(&fields.genres),
            name: fields.name,
            city: fields.city,
            address: None,
            phone: fields.phone,
            image_link: fields.image_link,
            facebook_link: fields.facebook_link,
            website: fields.website,
            seeking_talent: fields.seeking_talent,
            seeking_description: fields.seeking_description,
        }
    }

    fn with_flash(mut self, flash: IncomingFlash) -> Self {
        self.flash = flash.0;
        self
    }
}

fn render_form(form: EntityForm) -> Response {
    render(&form, form.flash.is_some())
}

pub fn new_venue_form(flash: IncomingFlash) -> Response {
    render_form(EntityForm::venue(VenueFields::default(), None).with_flash(flash))
}

pub fn edit_venue_form(flash: IncomingFlash, venue: &Venue) -> Response {
    render_form(EntityForm::venue(VenueFields::from(venue.clone()), Some(venue.id)).with_flash(flash))
}

pub fn new_artist_form(flash: IncomingFlash) -> Response {
    render_form(EntityForm::artist(ArtistFields::default(), None).with_flash(flash))
}

pub fn edit_artist_form(flash: IncomingFlash, artist: &Artist) -> Response {
    render_form(EntityForm::artist(ArtistFields::from(artist.clone()), Some(artist.id)).with_flash(flash))
}

/// Show form: choose from existing artists and venues
#[derive(Template)]
#[template(path = "show_form.html")]
pub struct ShowForm<'a> {
    pub title: &'static str,
    pub flash: Option<Flash>,
    pub venues: &'a [Venue],
    pub artists: &'a [Artist],
    pub start_time: &'a str,
}

pub fn new_show_form(flash: IncomingFlash, venues: &[Venue], artists: &[Artist], default_start: &str) -> Response {
    let page = ShowForm {
        title: "New Show",
        flash: flash.0,
        venues,
        artists,
        start_time: default_start,
    };
    render(&page, page.flash.is_some())
}
