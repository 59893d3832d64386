//! Venue handlers
//!
//! Reads render pages (404 when the venue is missing). Writes always end in
//! a 303 redirect carrying a flash message; their failures are logged here
//! and never surface as error pages.

use axum::{
    extract::{rejection::{FormRejection, PathRejection},
        Path, State},
    response::Response,
    Form,
};
use booking_common::db::{shows, venues};
use booking_common::{query, time, Error};
use tracing::{info, warn};

use super::{form_fields, path_id, search_term, submitted_name};
use crate::error::{WebError, WebResult};
use crate::flash::{Flash, IncomingFlash};
use crate::form::{self, FormFields};
use crate::{ui, AppState};

/// GET /venues
pub async fn list_venues(State(state): State<AppState>, flash: IncomingFlash) -> WebResult<Response> {
    let all_venues = venues::list_venues(&state.db).await?;
    let all_shows = shows::list_shows(&state.db).await?;

    let areas = query::group_venues_by_area(&all_venues, &all_shows, time::now());
    Ok(ui::venues::areas_page(flash, &areas))
}

/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    flash: IncomingFlash,
    Form(pairs): Form<Vec<(String, String)>>,
) -> WebResult<Response> {
    let term = search_term(&FormFields::from(pairs));
    let all_venues = venues::list_venues(&state.db).await?;
    let all_shows = shows::list_shows(&state.db).await?;

    let results = query::search_venues(&all_venues, &all_shows, &term, time::now());
    Ok(ui::search_results(flash, "Find a venue", "/venues/search", "/venues", &term, &results))
}

/// GET /venues/:id
pub async fn show_venue(
    State(state): State<AppState>,
    flash: IncomingFlash,
    id: Result<Path<i64>, PathRejection>,
) -> WebResult<Response> {
    let id = path_id(id)?;
    let venue = venues::get_venue(&state.db, id)
        .await?
        .ok_or_else(|| WebError::NotFound(format!("venue {}", id)))?;
    let rows = shows::list_for_venue(&state.db, id).await?;

    let detail = query::venue_detail(venue, &rows, time::now())?;
    Ok(ui::venues::venue_page(flash, &detail))
}

/// GET /venues/create
pub async fn new_venue_form(flash: IncomingFlash) -> Response {
    ui::forms::new_venue_form(flash)
}

/// POST /venues/create
pub async fn create_venue(
    State(state): State<AppState>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Response {
    let form = form_fields(form);
    let name = submitted_name(&form);

    let result = match form.and_then(|f| form::venue_fields(&f)) {
        Ok(fields) => venues::create_venue(&state.db, &fields).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(id) => {
            info!(venue_id = id, "Venue listed: {}", name);
            Flash::success(format!("Venue {} was successfully listed!", name)).redirect("/")
        }
        Err(err) => {
            warn!(kind = err.kind(), "Venue {:?} could not be listed: {}", name, err);
            Flash::error(format!("An error occurred. Venue {} could not be listed.", name))
                .redirect("/venues/create")
        }
    }
}

/// GET /venues/:id/edit
pub async fn edit_venue_form(
    State(state): State<AppState>,
    flash: IncomingFlash,
    id: Result<Path<i64>, PathRejection>,
) -> WebResult<Response> {
    let id = path_id(id)?;
    let venue = venues::get_venue(&state.db, id)
        .await?
        .ok_or_else(|| WebError::NotFound(format!("venue {}", id)))?;

    Ok(ui::forms::edit_venue_form(flash, &venue))
}

/// POST /venues/:id/edit
pub async fn update_venue(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> WebResult<Response> {
    let id = path_id(id)?;
    let form = form_fields(form);
    let name = submitted_name(&form);

    let result = match form.and_then(|f| form::venue_fields(&f)) {
        Ok(fields) => venues::update_venue(&state.db, id, &fields).await,
        Err(err) => Err(err),
    };

    Ok(match result {
        Ok(()) => {
            info!(venue_id = id, "Venue updated: {}", name);
            Flash::success(format!("Venue {} was successfully updated!", name))
                .redirect(&format!("/venues/{}", id))
        }
        Err(err) => {
            warn!(kind = err.kind(), venue_id = id, "Venue could not be updated: {}", err);
            let location = match err {
                Error::NotFound(_) => "/".to_string(),
                _ => format!("/venues/{}/edit", id),
            };
            Flash::error(format!("An error occurred. Venue {} could not be updated.", name))
                .redirect(&location)
        }
    })
}

/// DELETE /venues/:id and POST /venues/:id/delete
///
/// A malformed id is a failed delete like any other.
pub async fn delete_venue(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Response {
    let result = match id {
        Ok(Path(id)) => venues::delete_venue(&state.db, id).await.map(|()| id),
        Err(rejection) => Err(Error::InvalidInput(rejection.body_text())),
    };

    match result {
        Ok(id) => {
            info!(venue_id = id, "Venue deleted");
            Flash::success("Venue was deleted successfully").redirect("/")
        }
        Err(err) => {
            warn!(kind = err.kind(), "Venue was not deleted: {}", err);
            Flash::error("Venue was not deleted").redirect("/")
        }
    }
}
