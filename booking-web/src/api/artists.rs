//! Artist handlers

use axum::{
    extract::{rejection::{FormRejection, PathRejection},
        Path, State},
    response::Response,
    Form,
};
use booking_common::db::{artists, shows};
use booking_common::{query, time, Error};
use tracing::{info, warn};

use super::{form_fields, path_id, search_term, submitted_name};
use crate::error::{WebError, WebResult};
use crate::flash::{Flash, IncomingFlash};
use crate::form::{self, FormFields};
use crate::{ui, AppState};

/// GET /artists
pub async fn list_artists(State(state): State<AppState>, flash: IncomingFlash) -> WebResult<Response> {
    let all_artists = artists::list_artists(&state.db).await?;
    Ok(ui::artists::artists_page(flash, &all_artists))
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    flash: IncomingFlash,
    Form(pairs): Form<Vec<(String, String)>>,
) -> WebResult<Response> {
    let term = search_term(&FormFields::from(pairs));
    let all_artists = artists::list_artists(&state.db).await?;
    let all_shows = shows::list_shows(&state.db).await?;

    let results = query::search_artists(&all_artists, &all_shows, &term, time::now());
    Ok(ui::search_results(flash, "Find an artist", "/artists/search", "/artists", &term, &results))
}

/// GET /artists/:id
pub async fn show_artist(
    State(state): State<AppState>,
    flash: IncomingFlash,
    id: Result<Path<i64>, PathRejection>,
) -> WebResult<Response> {
    let id = path_id(id)?;
    let artist = artists::get_artist(&state.db, id)
        .await?
        .ok_or_else(|| WebError::NotFound(format!("artist {}", id)))?;
    let rows = shows::list_for_artist(&state.db, id).await?;

    let detail = query::artist_detail(artist, &rows, time::now())?;
    Ok(ui::artists::artist_page(flash, &detail))
}

/// GET /artists/create
pub async fn new_artist_form(flash: IncomingFlash) -> Response {
    ui::forms::new_artist_form(flash)
}

/// POST /artists/create
pub async fn create_artist(
    State(state): State<AppState>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Response {
    let form = form_fields(form);
    let name = submitted_name(&form);

    let result = match form.and_then(|f| form::artist_fields(&f)) {
        Ok(fields) => artists::create_artist(&state.db, &fields).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(id) => {
            info!(artist_id = id, "Artist listed: {}", name);
            Flash::success(format!("Artist {} was successfully listed!", name)).redirect("/")
        }
        Err(err) => {
            warn!(kind = err.kind(), "Artist {:?} could not be listed: {}", name, err);
            Flash::error(format!("An error occurred. Artist {} could not be listed.", name))
                .redirect("/artists/create")
        }
    }
}

/// GET /artists/:id/edit
pub async fn edit_artist_form(
    State(state): State<AppState>,
    flash: IncomingFlash,
    id: Result<Path<i64>, PathRejection>,
) -> WebResult<Response> {
    let id = path_id(id)?;
    let artist = artists::get_artist(&state.db, id)
        .await?
        .ok_or_else(|| WebError::NotFound(format!("artist {}", id)))?;

    Ok(ui::forms::edit_artist_form(flash, &artist))
}

/// POST /artists/:id/edit
pub async fn update_artist(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> WebResult<Response> {
    let id = path_id(id)?;
    let form = form_fields(form);
    let name = submitted_name(&form);

    let result = match form.and_then(|f| form::artist_fields(&f)) {
        Ok(fields) => artists::update_artist(&state.db, id, &fields).await,
        Err(err) => Err(err),
    };

    Ok(match result {
        Ok(()) => {
            info!(artist_id = id, "Artist updated: {}", name);
            Flash::success(format!("Artist {} was successfully updated!", name))
                .redirect(&format!("/artists/{}", id))
        }
        Err(err) => {
            warn!(kind = err.kind(), artist_id = id, "Artist could not be updated: {}", err);
            let location = match err {
                Error::NotFound(_) => "/".to_string(),
                _ => format!("/artists/{}/edit", id),
            };
            Flash::error(format!("An error occurred. Artist {} could not be updated.", name))
                .redirect(&location)
        }
    })
}
