//! Show database operations
//!
//! Relationship traversal (show → venue, show → artist) is an explicit
//! LEFT JOIN. Counterpart columns come back as `None` when the join misses,
//! and the query layer decides what that means.

use crate::db::models::{CounterpartShowRow, NewShow, Show, ShowListingRow};
use crate::{Error, Result};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

fn counterpart_from_row(row: &SqliteRow) -> Result<CounterpartShowRow> {
    Ok(CounterpartShowRow {
        show_id: row.try_get("show_id")?,
        start_time: row.try_get("start_time")?,
        counterpart_id: row.try_get("counterpart_id")?,
        counterpart_name: row.try_get("counterpart_name")?,
        counterpart_image_link: row.try_get("counterpart_image_link")?,
    })
}

/// Insert a show; the referenced venue and artist must exist
pub async fn create_show(pool: &SqlitePool, show: &NewShow) -> Result<i64> {
    let result = sqlx::query(
        "INSERT INTO shows (venue_id, artist_id, start_time) VALUES (?, ?, ?)",
    )
    .bind(show.venue_id)
    .bind(show.artist_id)
    .bind(show.start_time)
    .execute(pool)
    .await
    .map_err(Error::from_write)?;

    Ok(result.last_insert_rowid())
}

/// Load every show, ordered by start time
pub async fn list_shows(pool: &SqlitePool) -> Result<Vec<Show>> {
    let rows = sqlx::query(
        "SELECT id, venue_id, artist_id, start_time FROM shows ORDER BY start_time, id",
    )
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| {
            Ok(Show {
                id: row.try_get("id")?,
                venue_id: row.try_get("venue_id")?,
                artist_id: row.try_get("artist_id")?,
                start_time: row.try_get("start_time")?,
            })
        })
        .collect()
}

/// Shows held at a venue, joined to their artists
pub async fn list_for_venue(pool: &SqlitePool, venue_id: i64) -> Result<Vec<CounterpartShowRow>> {
    let rows = sqlx::query(
        r#"
        SELECT s.id AS show_id, s.start_time AS start_time,
               s.artist_id AS counterpart_id,
               a.name AS counterpart_name, a.image_link AS counterpart_image_link
        FROM shows s
        LEFT JOIN artists a ON a.id = s.artist_id
        WHERE s.venue_id = ?
        ORDER BY s.start_time, s.id
        "#,
    )
    .bind(venue_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(counterpart_from_row).collect()
}

/// Shows played by an artist, joined to their venues
pub async fn list_for_artist(pool: &SqlitePool, artist_id: i64) -> Result<Vec<CounterpartShowRow>> {
    let rows = sqlx::query(
        r#"
        SELECT s.id AS show_id, s.start_time AS start_time,
               s.venue_id AS counterpart_id,
               v.name AS counterpart_name, v.image_link AS counterpart_image_link
        FROM shows s
        LEFT JOIN venues v ON v.id = s.venue_id
        WHERE s.artist_id = ?
        ORDER BY s.start_time, s.id
        "#,
    )
    .bind(artist_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(counterpart_from_row).collect()
}

/// Every show joined to both its venue and its artist
pub async fn list_listings(pool: &SqlitePool) -> Result<Vec<ShowListingRow>> {
    let rows = sqlx::query(
        r#"
        SELECT s.id AS show_id, s.start_time AS start_time,
               s.venue_id AS venue_id, v.name AS venue_name,
               s.artist_id AS artist_id, a.name AS artist_name,
               a.image_link AS artist_image_link
        FROM shows s
        LEFT JOIN venues v ON v.id = s.venue_id
        LEFT JOIN artists a ON a.id = s.artist_id
        ORDER BY s.start_time, s.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| {
            Ok(ShowListingRow {
                show_id: row.try_get("show_id")?,
                start_time: row.try_get("start_time")?,
                venue_id: row.try_get("venue_id")?,
                venue_name: row.try_get("venue_name")?,
                artist_id: row.try_get("artist_id")?,
                artist_name: row.try_get("artist_name")?,
                artist_image_link: row.try_get("artist_image_link")?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::artists::create_artist;
    use crate::db::init::init_database;
    use crate::db::models::{ArtistFields, VenueFields};
    use crate::db::venues::{create_venue, delete_venue};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    async fn seeded() -> (TempDir, SqlitePool, i64, i64) {
        let dir = TempDir::new().unwrap();
        let pool = init_database(&dir.path().join("shows.db")).await.unwrap();

        let venue_id = create_venue(
            &pool,
            &VenueFields {
                name: "Park Square Live Music & Coffee".to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                address: "34 Whiskey Moore Ave".to_string(),
                image_link: "https://example.com/park.jpg".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let artist_id = create_artist(
            &pool,
            &ArtistFields {
                name: "Guns N Petals".to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                image_link: "https://example.com/gnp.jpg".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        (dir, pool, venue_id, artist_id)
    }

    fn at(day: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2035, 4, day).unwrap().and_hms_opt(21, 30, 0).unwrap()
    }

    #[tokio::test]
    async fn test_create_show_and_join_both_sides() {
        let (_dir, pool, venue_id, artist_id) = seeded().await;

        let show_id = create_show(&pool, &NewShow { venue_id, artist_id, start_time: at(1) })
            .await
            .unwrap();

        let at_venue = list_for_venue(&pool, venue_id).await.unwrap();
        assert_eq!(at_venue.len(), 1);
        assert_eq!(at_venue[0].show_id, show_id);
        assert_eq!(at_venue[0].counterpart_id, artist_id);
        assert_eq!(at_venue[0].counterpart_name.as_deref(), Some("Guns N Petals"));
        assert_eq!(at_venue[0].start_time, at(1));

        let by_artist = list_for_artist(&pool, artist_id).await.unwrap();
        assert_eq!(
            by_artist[0].counterpart_name.as_deref(),
            Some("Park Square Live Music & Coffee")
        );
        assert_eq!(
            by_artist[0].counterpart_image_link.as_deref(),
            Some("https://example.com/park.jpg")
        );

        let listings = list_listings(&pool).await.unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].artist_image_link.as_deref(), Some("https://example.com/gnp.jpg"));
    }

    #[tokio::test]
    async fn test_show_requires_existing_venue_and_artist() {
        let (_dir, pool, venue_id, artist_id) = seeded().await;

        let err = create_show(
            &pool,
            &NewShow { venue_id: venue_id + 100, artist_id, start_time: at(2) },
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind(), "constraint");

        let err = create_show(
            &pool,
            &NewShow { venue_id, artist_id: artist_id + 100, start_time: at(2) },
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind(), "constraint");

        assert!(list_shows(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_deleting_venue_removes_its_shows() {
        let (_dir, pool, venue_id, artist_id) = seeded().await;
        create_show(&pool, &NewShow { venue_id, artist_id, start_time: at(3) })
            .await
            .unwrap();

        delete_venue(&pool, venue_id).await.unwrap();

        assert!(list_shows(&pool).await.unwrap().is_empty());
        assert!(list_for_artist(&pool, artist_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_shows_ordered_by_start_time() {
        let (_dir, pool, venue_id, artist_id) = seeded().await;
        create_show(&pool, &NewShow { venue_id, artist_id, start_time: at(9) }).await.unwrap();
        create_show(&pool, &NewShow { venue_id, artist_id, start_time: at(4) }).await.unwrap();

        let times: Vec<_> = list_shows(&pool).await.unwrap().iter().map(|s| s.start_time).collect();
        assert_eq!(times, vec![at(4), at(9)]);
    }
}
