//! HTTP handlers for the booking site

pub mod artists;
pub mod health;
pub mod home;
pub mod shows;
pub mod venues;

use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Path,
    },
    Form,
};
use booking_common::Error;

use crate::error::{WebError, WebResult};
use crate::form::FormFields;

pub use health::health_routes;
pub use home::{index, not_found, serve_css};

/// Non-numeric ids are treated like missing records
fn path_id(id: Result<Path<i64>, PathRejection>) -> WebResult<i64> {
    id.map(|Path(id)| id)
        .map_err(|rejection| WebError::NotFound(rejection.body_text()))
}

/// Raw search term; venue/artist search compare against it untrimmed
fn search_term(form: &FormFields) -> String {
    form.get("search_term").unwrap_or_default().to_string()
}

/// An undecodable body (wrong content type, bad encoding) is invalid input
fn form_fields(form: Result<Form<Vec<(String, String)>>, FormRejection>) -> booking_common::Result<FormFields> {
    form.map(|Form(pairs)| FormFields::from(pairs))
        .map_err(|rejection| Error::InvalidInput(rejection.body_text()))
}

fn submitted_name(form: &booking_common::Result<FormFields>) -> String {
    form.as_ref().map(|f| f.text("name")).unwrap_or_default()
}
