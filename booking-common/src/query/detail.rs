//! Detail page assembly

use crate::db::models::{Artist, CounterpartShowRow, Venue};
use crate::query::shows::{partition_artist_shows, partition_venue_shows, ShowSplit};
use crate::Result;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueDetail {
    pub venue: Venue,
    pub shows: ShowSplit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistDetail {
    pub artist: Artist,
    pub shows: ShowSplit,
}

pub fn venue_detail(venue: Venue, rows: &[CounterpartShowRow], now: NaiveDateTime) -> Result<VenueDetail> {
    Ok(VenueDetail {
        venue,
        shows: partition_venue_shows(rows, now)?,
    })
}

pub fn artist_detail(artist: Artist, rows: &[CounterpartShowRow], now: NaiveDateTime) -> Result<ArtistDetail> {
    Ok(ArtistDetail {
        artist,
        shows: partition_artist_shows(rows, now)?,
    })
}
