//! HTML pages
//!
//! Pages are askama templates under `templates/`, each extending
//! `base.html` (nav bar and flash banner). askama HTML-escapes every
//! interpolated value; only server-built links are marked `|safe`.

use askama::Template;
use axum::{
    http::header,
    response::{Html, IntoResponse, Response},
};
use booking_common::query::SearchResults;
use tracing::error;

use crate::flash::{Flash, IncomingFlash, CLEAR_FLASH_COOKIE};

pub mod artists;
pub mod errors;
pub mod forms;
pub mod shows;
pub mod venues;

/// One `<option>` of a select box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub selected: bool,
}

/// Render a page; when it displayed a flash, the flash cookie is cleared on
/// the way out
pub fn render<T: Template>(page: &T, flash_shown: bool) -> Response {
    let html = match page.render() {
        Ok(html) => Html(html),
        Err(err) => {
            error!("Failed to render page: {}", err);
            return crate::error::server_error_response();
        }
    };

    if flash_shown {
        ([(header::SET_COOKIE, CLEAR_FLASH_COOKIE)], html).into_response()
    } else {
        html.into_response()
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub title: &'static str,
    pub flash: Option<Flash>,
}

/// Landing page
pub fn home(flash: IncomingFlash) -> Response {
    let page = HomePage {
        title: "Home",
        flash: flash.0,
    };
    render(&page, page.flash.is_some())
}

/// Shared search results page for venues and artists
#[derive(Template)]
#[template(path = "search_results.html")]
pub struct SearchPage<'a> {
    pub title: &'a str,
    pub flash: Option<Flash>,
    pub search_action: &'a str,
    pub search_placeholder: &'a str,
    pub search_term: &'a str,
    pub link_prefix: &'a str,
    pub results: &'a SearchResults,
}

pub fn search_results(
    flash: IncomingFlash,
    title: &str,
    action: &str,
    link_prefix: &str,
    term: &str,
    results: &SearchResults,
) -> Response {
    let page = SearchPage {
        title,
        flash: flash.0,
        search_action: action,
        search_placeholder: title,
        search_term: term,
        link_prefix,
        results,
    };
    render(&page, page.flash.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use booking_common::query::SearchMatch;

    #[test]
    fn test_layout_shows_flash_banner() {
        let page = HomePage {
            title: "Home",
            flash: Some(Flash::error("An error occurred. <script>")),
        };
        let html = page.render().unwrap();

        assert!(html.contains("flash flash-error"));
        assert!(html.contains("An error occurred. &lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("<title>Home | Booking</title>"));
    }

    #[test]
    fn test_render_clears_consumed_flash() {
        let page = HomePage {
            title: "Home",
            flash: Some(Flash::success("ok")),
        };
        let response = render(&page, true);
        assert_eq!(response.headers()[header::SET_COOKIE], CLEAR_FLASH_COOKIE);

        let response = render(&page, false);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[test]
    fn test_search_page_escapes_user_values() {
        let results: SearchResults = vec![SearchMatch {
            id: 3,
            name: "Guns & <Petals>".to_string(),
            num_upcoming_shows: 2,
        }]
        .into_iter()
        .collect();

        let page = SearchPage {
            title: "Find an artist",
            flash: None,
            search_action: "/artists/search",
            search_placeholder: "Find an artist",
            search_term: r#"<b>"Guns" & Petals"#,
            link_prefix: "/artists",
            results: &results,
        };
        let html = page.render().unwrap();

        assert!(html.contains(r#"href="/artists/3">Guns &amp; &lt;Petals&gt;</a>"#));
        assert!(html.contains("2 upcoming"));
        assert!(html.contains("&lt;b&gt;&quot;Guns&quot; &amp; Petals"));
        assert!(!html.contains("<b>"));
        assert!(html.contains(r#"action="/artists/search""#));
    }
}
