//! Name search over venues and artists
//!
//! Venue search matches the term case-sensitively; artist search lower-cases
//! both sides. The asymmetry is kept as-is and pinned by tests.

use crate::db::models::{Artist, Show, Venue};
use crate::query::shows::count_upcoming;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchMatch {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<SearchMatch>,
}

impl FromIterator<SearchMatch> for SearchResults {
    fn from_iter<I: IntoIterator<Item = SearchMatch>>(iter: I) -> Self {
        let data: Vec<SearchMatch> = iter.into_iter().collect();
        Self { count: data.len(), data }
    }
}

/// Case-sensitive substring search on venue names
pub fn search_venues(venues: &[Venue], shows: &[Show], term: &str, now: NaiveDateTime) -> SearchResults {
    venues
        .iter()
        .filter(|v| v.name.contains(term))
        .map(|v| SearchMatch {
            id: v.id,
            name: v.name.clone(),
            num_upcoming_shows: count_upcoming(shows, now, |s| s.venue_id == v.id),
        })
        .collect()
}

/// Case-insensitive substring search on artist names
pub fn search_artists(artists: &[Artist], shows: &[Show], term: &str, now: NaiveDateTime) -> SearchResults {
    let needle = term.to_lowercase();

    artists
        .iter()
        .filter(|a| a.name.to_lowercase().contains(needle.as_str()))
        .map(|a| SearchMatch {
            id: a.id,
            name: a.name.clone(),
            num_upcoming_shows: count_upcoming(shows, now, |s| s.artist_id == a.id),
        })
        .collect()
}
