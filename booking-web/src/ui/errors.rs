//! 404 and 500 pages

use askama::Template;
use tracing::error;

use crate::flash::Flash;

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPage {
    title: &'static str,
    flash: Option<Flash>,
    code: u16,
    message: &'static str,
}

fn error_page(code: u16, title: &'static str, message: &'static str) -> String {
    let page = ErrorPage {
        title,
        flash: None,
        code,
        message,
    };

    page.render().unwrap_or_else(|err| {
        error!("Failed to render {} page: {}", code, err);
        format!("{} {}", code, title)
    })
}

pub fn not_found_page() -> String {
    error_page(404, "Not Found", "We couldn't find the page you were looking for.")
}

pub fn server_error_page() -> String {
    error_page(500, "Server Error", "Something went wrong on our side. Please try again.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_pages() {
        let html = not_found_page();
        assert!(html.contains("<h1>404</h1>"));
        assert!(html.contains("<title>Not Found | Booking</title>"));

        let html = server_error_page();
        assert!(html.contains("<h1>500</h1>"));
    }
}
