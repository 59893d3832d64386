//! Record store: SQLite schema, models and repository functions

pub mod artists;
pub mod demo;
pub mod init;
pub mod models;
pub mod shows;
pub mod venues;

pub use init::*;
pub use models::*;

use crate::Result;

/// Genres are stored as a JSON array in a TEXT column
pub(crate) fn encode_genres(genres: &[String]) -> Result<String> {
    Ok(serde_json::to_string(genres)?)
}

pub(crate) fn decode_genres(raw: &str) -> Result<Vec<String>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(raw)?)
}
