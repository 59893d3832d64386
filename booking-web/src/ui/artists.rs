//! Artist pages

use askama::Template;
use axum::response::Response;
use booking_common::db::models::Artist;
use booking_common::query::ArtistDetail;

use crate::flash::{Flash, IncomingFlash};
use crate::ui::render;
use crate::ui::shows::{show_panels, ShowPanel};

#[derive(Template)]
#[template(path = "artists.html")]
pub struct ArtistsPage<'a> {
    pub title: &'static str,
    pub flash: Option<Flash>,
    pub search_action: &'static str,
    pub search_placeholder: &'static str,
    pub search_term: &'static str,
    pub artists: &'a [Artist],
}

pub fn artists_page(flash: IncomingFlash, artists: &[Artist]) -> Response {
    let page = ArtistsPage {
        title: "Artists",
        flash: flash.0,
        search_action: "/artists/search",
        search_placeholder: "Find an artist",
        search_term: "",
        artists,
    };
    render(&page, page.flash.is_some())
}

#[derive(Template)]
#[template(path = "artist.html")]
pub struct ArtistPage<'a> {
    pub title: &'a str,
    pub flash: Option<Flash>,
    pub artist: &'a Artist,
    pub panels: Vec<ShowPanel>,
}

pub fn artist_page(flash: IncomingFlash, detail: &ArtistDetail) -> Response {
    let page = ArtistPage {
        title: &detail.artist.name,
        flash: flash.0,
        artist: &detail.artist,
        panels: show_panels(&detail.shows, "/venues"),
    };
    render(&page, page.flash.is_some())
}
