//! Venue grouping by area
//!
//! Venues are visited in list order. The first venue not yet placed opens an
//! area keyed by its (city, state); every later unplaced venue in the same
//! state whose city *contains* the key city joins it. Containment rather than
//! equality means "San Jose West" lands in an earlier "San Jose" area.

use crate::db::models::{Show, Venue};
use crate::query::shows::count_upcoming;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaVenue {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<AreaVenue>,
}

fn belongs_to(key: &Venue, candidate: &Venue) -> bool {
    candidate.state == key.state && candidate.city.contains(key.city.as_str())
}

pub fn group_venues_by_area(venues: &[Venue], shows: &[Show], now: NaiveDateTime) -> Vec<Area> {
    let summarize = |venue: &Venue| AreaVenue {
        id: venue.id,
        name: venue.name.clone(),
        num_upcoming_shows: count_upcoming(shows, now, |s| s.venue_id == venue.id),
    };

    let mut placed = vec![false; venues.len()];
    let mut areas = Vec::new();

    for (i, key) in venues.iter().enumerate() {
        if placed[i] {
            continue;
        }
        placed[i] = true;

        let mut members = vec![summarize(key)];
        for (j, candidate) in venues.iter().enumerate().skip(i + 1) {
            if !placed[j] && belongs_to(key, candidate) {
                placed[j] = true;
                members.push(summarize(candidate));
            }
        }

        areas.push(Area {
            city: key.city.clone(),
            state: key.state.clone(),
            venues: members,
        });
    }

    areas
}
