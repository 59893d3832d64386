//! Past/upcoming show partitioning
//!
//! A show is upcoming when `start_time >= now`, past otherwise. The split is
//! recomputed on every request and never stored.

use crate::db::models::{CounterpartShowRow, Show, ShowListingRow};
use crate::time::format_past;
use crate::{Error, Result};
use chrono::NaiveDateTime;
use serde::Serialize;

/// One show as listed on a venue or artist page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowSummary {
    pub counterpart_id: i64,
    pub counterpart_name: String,
    pub counterpart_image_link: String,
    pub start_time: NaiveDateTime,
    /// Fixed-format string for past shows, raw timestamp for upcoming ones
    pub start_time_display: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShowSplit {
    pub past: Vec<ShowSummary>,
    pub upcoming: Vec<ShowSummary>,
    pub past_count: usize,
    pub upcoming_count: usize,
}

/// A row of the /shows page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowListingView {
    pub show_id: i64,
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: NaiveDateTime,
    pub start_time_display: String,
}

pub fn is_upcoming(start_time: NaiveDateTime, now: NaiveDateTime) -> bool {
    start_time >= now
}

/// Count upcoming shows among those accepted by `belongs`
pub fn count_upcoming<F>(shows: &[Show], now: NaiveDateTime, belongs: F) -> usize
where
    F: Fn(&Show) -> bool,
{
    shows
        .iter()
        .filter(|s| belongs(s) && is_upcoming(s.start_time, now))
        .count()
}

fn partition(rows: &[CounterpartShowRow], missing: &'static str, now: NaiveDateTime) -> Result<ShowSplit> {
    let mut split = ShowSplit::default();

    for row in rows {
        let name = row.counterpart_name.clone().ok_or(Error::MissingCounterpart {
            show_id: row.show_id,
            missing,
        })?;

        let upcoming = is_upcoming(row.start_time, now);
        let summary = ShowSummary {
            counterpart_id: row.counterpart_id,
            counterpart_name: name,
            counterpart_image_link: row.counterpart_image_link.clone().unwrap_or_default(),
            start_time: row.start_time,
            start_time_display: if upcoming {
                row.start_time.to_string()
            } else {
                format_past(row.start_time)
            },
        };

        if upcoming {
            split.upcoming_count += 1;
            split.upcoming.push(summary);
        } else {
            split.past_count += 1;
            split.past.push(summary);
        }
    }

    Ok(split)
}

/// Split a venue's shows; counterparts are artists
pub fn partition_venue_shows(rows: &[CounterpartShowRow], now: NaiveDateTime) -> Result<ShowSplit> {
    partition(rows, "artist", now)
}

/// Split an artist's shows; counterparts are venues
pub fn partition_artist_shows(rows: &[CounterpartShowRow], now: NaiveDateTime) -> Result<ShowSplit> {
    partition(rows, "venue", now)
}

/// Resolve joined show rows for the show list page
pub fn resolve_listings(rows: &[ShowListingRow]) -> Result<Vec<ShowListingView>> {
    rows.iter()
        .map(|row| {
            let venue_name = row.venue_name.clone().ok_or(Error::MissingCounterpart {
                show_id: row.show_id,
                missing: "venue",
            })?;
            let artist_name = row.artist_name.clone().ok_or(Error::MissingCounterpart {
                show_id: row.show_id,
                missing: "artist",
            })?;

            Ok(ShowListingView {
                show_id: row.show_id,
                venue_id: row.venue_id,
                venue_name,
                artist_id: row.artist_id,
                artist_name,
                artist_image_link: row.artist_image_link.clone().unwrap_or_default(),
                start_time: row.start_time,
                start_time_display: format_past(row.start_time),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    fn row(show_id: i64, start_time: NaiveDateTime) -> CounterpartShowRow {
        CounterpartShowRow {
            show_id,
            start_time,
            counterpart_id: 10 + show_id,
            counterpart_name: Some(format!("Artist {}", show_id)),
            counterpart_image_link: Some(format!("https://img/{}", show_id)),
        }
    }

    #[test]
    fn test_partition_counts_sum_to_total() {
        let rows = vec![
            row(1, now() - Duration::days(30)),
            row(2, now() + Duration::days(1)),
            row(3, now() - Duration::seconds(1)),
            row(4, now() + Duration::weeks(52)),
            row(5, now() + Duration::hours(2)),
        ];

        let split = partition_venue_shows(&rows, now()).unwrap();

        assert_eq!(split.past_count, 2);
        assert_eq!(split.upcoming_count, 3);
        assert_eq!(split.past_count + split.upcoming_count, rows.len());
        assert_eq!(split.past.len(), split.past_count);
        assert_eq!(split.upcoming.len(), split.upcoming_count);
    }

    #[test]
    fn test_show_starting_now_is_upcoming() {
        let split = partition_artist_shows(&[row(1, now())], now()).unwrap();
        assert_eq!(split.upcoming_count, 1);
        assert_eq!(split.past_count, 0);
    }

    #[test]
    fn test_display_format_differs_by_side() {
        let past_time = NaiveDate::from_ymd_opt(2019, 5, 21).unwrap().and_hms_opt(21, 30, 0).unwrap();
        let future_time = NaiveDate::from_ymd_opt(2035, 4, 1).unwrap().and_hms_opt(20, 0, 0).unwrap();

        let split = partition_venue_shows(&[row(1, past_time), row(2, future_time)], now()).unwrap();

        assert_eq!(split.past[0].start_time_display, "2019/05/21/, 21:30:00");
        assert_eq!(split.upcoming[0].start_time_display, "2035-04-01 20:00:00");
        assert_eq!(split.upcoming[0].counterpart_id, 12);
        assert_eq!(split.upcoming[0].counterpart_image_link, "https://img/2");
    }

    #[test]
    fn test_missing_counterpart_fails_explicitly() {
        let mut orphan = row(7, now());
        orphan.counterpart_name = None;

        let err = partition_artist_shows(&[row(1, now()), orphan], now()).unwrap_err();
        match err {
            Error::MissingCounterpart { show_id, missing } => {
                assert_eq!(show_id, 7);
                assert_eq!(missing, "venue");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_no_shows_yields_zero_counts() {
        let split = partition_venue_shows(&[], now()).unwrap();
        assert_eq!(split, ShowSplit::default());
    }

    #[test]
    fn test_count_upcoming_filters_owner() {
        let shows = vec![
            Show { id: 1, venue_id: 1, artist_id: 1, start_time: now() + Duration::days(1) },
            Show { id: 2, venue_id: 1, artist_id: 2, start_time: now() - Duration::days(1) },
            Show { id: 3, venue_id: 2, artist_id: 1, start_time: now() + Duration::days(3) },
        ];

        assert_eq!(count_upcoming(&shows, now(), |s| s.venue_id == 1), 1);
        assert_eq!(count_upcoming(&shows, now(), |s| s.artist_id == 1), 2);
        assert_eq!(count_upcoming(&shows, now(), |s| s.artist_id == 2), 0);
    }

    #[test]
    fn test_resolve_listings_requires_both_sides() {
        let listing = ShowListingRow {
            show_id: 4,
            start_time: now(),
            venue_id: 1,
            venue_name: Some("The Musical Hop".to_string()),
            artist_id: 2,
            artist_name: None,
            artist_image_link: None,
        };

        let err = resolve_listings(&[listing.clone()]).unwrap_err();
        assert_eq!(err.kind(), "missing_counterpart");

        let complete = ShowListingRow {
            artist_name: Some("Matt Quevado".to_string()),
            ..listing
        };
        let views = resolve_listings(&[complete]).unwrap();
        assert_eq!(views[0].artist_name, "Matt Quevado");
        assert_eq!(views[0].start_time_display, "2026/10/19/, 12:00:00");
    }
}
