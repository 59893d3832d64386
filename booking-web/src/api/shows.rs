//! Show handlers

use axum::{
    extract::{rejection::FormRejection, State},
    response::Response,
    Form,
};
use booking_common::db::{artists, shows, venues};
use booking_common::{query, time};
use tracing::{info, warn};

use super::form_fields;
use crate::error::WebResult;
use crate::flash::{Flash, IncomingFlash};
use crate::form;
use crate::{ui, AppState};

/// GET /shows
pub async fn list_shows(State(state): State<AppState>, flash: IncomingFlash) -> WebResult<Response> {
    let rows = shows::list_listings(&state.db).await?;
    let listings = query::resolve_listings(&rows)?;
    Ok(ui::shows::shows_page(flash, &listings))
}

/// GET /shows/create
pub async fn new_show_form(State(state): State<AppState>, flash: IncomingFlash) -> WebResult<Response> {
    let all_venues = venues::list_venues(&state.db).await?;
    let all_artists = artists::list_artists(&state.db).await?;
    let default_start = time::form_default(time::now());

    Ok(ui::forms::new_show_form(flash, &all_venues, &all_artists, &default_start))
}

/// POST /shows/create
pub async fn create_show(
    State(state): State<AppState>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Response {
    let result = match form_fields(form).and_then(|f| form::new_show(&f)) {
        Ok(show) => shows::create_show(&state.db, &show).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(id) => {
            info!(show_id = id, "Show listed");
            Flash::success("Show was successfully listed!").redirect("/")
        }
        Err(err) => {
            warn!(kind = err.kind(), "Show could not be listed: {}", err);
            Flash::error("An error occurred. Show could not be listed.").redirect("/shows/create")
        }
    }
}
