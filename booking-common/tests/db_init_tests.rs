//! Database initialization tests
//!
//! - Database file and parent directories are created on first run
//! - Re-opening an existing database keeps its rows
//! - Foreign keys are enforced on every pooled connection

use booking_common::db::init::init_database;
use booking_common::db::models::{NewShow, VenueFields};
use booking_common::db::{shows, venues};
use chrono::NaiveDate;
use tempfile::TempDir;

#[tokio::test]
async fn test_database_creation_when_missing() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("nested").join("dir").join("booking.db");

    assert!(!db_path.exists());
    let result = init_database(&db_path).await;

    assert!(result.is_ok(), "Database initialization failed: {:?}", result.err());
    assert!(db_path.exists(), "Database file was not created");
}

#[tokio::test]
async fn test_database_reopen_keeps_rows() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("booking.db");

    let pool = init_database(&db_path).await.unwrap();
    let id = venues::create_venue(
        &pool,
        &VenueFields {
            name: "The Dueling Pianos Bar".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            address: "335 Delancey Street".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    pool.close().await;

    let reopened = init_database(&db_path).await.expect("Failed to open existing database");
    let venue = venues::get_venue(&reopened, id).await.unwrap();
    assert_eq!(venue.map(|v| v.name).as_deref(), Some("The Dueling Pianos Bar"));
}

#[tokio::test]
async fn test_tables_exist() {
    let dir = TempDir::new().unwrap();
    let pool = init_database(&dir.path().join("booking.db")).await.unwrap();

    let tables: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert_eq!(tables, vec!["artists", "shows", "venues"]);
}

#[tokio::test]
async fn test_foreign_keys_enforced_on_all_connections() {
    let dir = TempDir::new().unwrap();
    let pool = init_database(&dir.path().join("booking.db")).await.unwrap();
    let start_time = NaiveDate::from_ymd_opt(2035, 1, 1).unwrap().and_hms_opt(20, 0, 0).unwrap();

    // Several attempts so more than one pooled connection is exercised
    for attempt in 0..5 {
        let err = shows::create_show(
            &pool,
            &NewShow { venue_id: 1000 + attempt, artist_id: 2000 + attempt, start_time },
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind(), "constraint", "attempt {attempt}");
    }
}
