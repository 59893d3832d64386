//! Demo data for a fresh database
//!
//! Three venues, three artists and five shows (two in the past, three far in
//! the future). Only inserted into an empty store.

use crate::db::artists::create_artist;
use crate::db::models::{ArtistFields, NewShow, VenueFields};
use crate::db::shows::create_show;
use crate::db::venues::create_venue;
use crate::Result;
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::SqlitePool;
use tracing::info;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn timestamp(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .unwrap_or_default()
}

pub fn demo_venues() -> Vec<VenueFields> {
    vec![
        VenueFields {
            name: "The Musical Hop".to_string(),
            genres: strings(&["Jazz", "Reggae", "Swing", "Classical", "Folk"]),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: "123-123-1234".to_string(),
            image_link: "https://images.unsplash.com/photo-1543900694-133f37abaaa5".to_string(),
            facebook_link: "https://www.facebook.com/TheMusicalHop".to_string(),
            website: "https://www.themusicalhop.com".to_string(),
            seeking_talent: true,
            seeking_description:
                "We are on the lookout for a local artist to play every two weeks. Please call us."
                    .to_string(),
        },
        VenueFields {
            name: "The Dueling Pianos Bar".to_string(),
            genres: strings(&["Classical", "R&B", "Hip-Hop"]),
            city: "New York".to_string(),
            state: "NY".to_string(),
            address: "335 Delancey Street".to_string(),
            phone: "914-003-1132".to_string(),
            image_link: "https://images.unsplash.com/photo-1497032205916-ac775f0649ae".to_string(),
            facebook_link: "https://www.facebook.com/theduelingpianos".to_string(),
            website: "https://www.theduelingpianos.com".to_string(),
            seeking_talent: false,
            seeking_description: String::new(),
        },
        VenueFields {
            name: "Park Square Live Music & Coffee".to_string(),
            genres: strings(&["Rock n Roll", "Jazz", "Classical", "Folk"]),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "34 Whiskey Moore Ave".to_string(),
            phone: "415-000-1234".to_string(),
            image_link: "https://images.unsplash.com/photo-1485686531765-ba63b07845a7".to_string(),
            facebook_link: "https://www.facebook.com/ParkSquareLiveMusicAndCoffee".to_string(),
            website: "https://www.parksquarelivemusicandcoffee.com".to_string(),
            seeking_talent: false,
            seeking_description: String::new(),
        },
    ]
}

pub fn demo_artists() -> Vec<ArtistFields> {
    vec![
        ArtistFields {
            name: "Guns N Petals".to_string(),
            genres: strings(&["Rock n Roll"]),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "326-123-5000".to_string(),
            image_link: "https://images.unsplash.com/photo-1549213783-8284d0336c4f".to_string(),
            facebook_link: "https://www.facebook.com/GunsNPetals".to_string(),
            website: "https://www.gunsnpetalsband.com".to_string(),
            seeking_talent: true,
            seeking_description:
                "Looking for shows to perform at in the San Francisco Bay Area!".to_string(),
        },
        ArtistFields {
            name: "Matt Quevado".to_string(),
            genres: strings(&["Jazz"]),
            city: "New York".to_string(),
            state: "NY".to_string(),
            phone: "300-400-5000".to_string(),
            image_link: "https://images.unsplash.com/photo-1495223153807-b916f75de8c5".to_string(),
            facebook_link: "https://www.facebook.com/mattquevedo923251523".to_string(),
            website: String::new(),
            seeking_talent: false,
            seeking_description: String::new(),
        },
        ArtistFields {
            name: "The Wild Sax Band".to_string(),
            genres: strings(&["Jazz", "Classical"]),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "432-325-5432".to_string(),
            image_link: "https://images.unsplash.com/photo-1558369981-f9ca78462e61".to_string(),
            facebook_link: String::new(),
            website: String::new(),
            seeking_talent: false,
            seeking_description: String::new(),
        },
    ]
}

/// Insert the demo records when the store is empty.
///
/// Returns `true` when data was inserted.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<bool> {
    let existing: i64 = sqlx::query_scalar(
        "SELECT (SELECT COUNT(*) FROM venues) + (SELECT COUNT(*) FROM artists)",
    )
    .fetch_one(pool)
    .await?;

    if existing > 0 {
        info!("Store already holds {} venues/artists, skipping demo data", existing);
        return Ok(false);
    }

    let mut venue_ids = Vec::new();
    for venue in demo_venues() {
        venue_ids.push(create_venue(pool, &venue).await?);
    }

    let mut artist_ids = Vec::new();
    for artist in demo_artists() {
        artist_ids.push(create_artist(pool, &artist).await?);
    }

    // (venue index, artist index, start time)
    let schedule = [
        (0, 0, timestamp(2019, 5, 21, 21, 30)),
        (2, 1, timestamp(2019, 6, 15, 23, 0)),
        (2, 2, timestamp(2035, 4, 1, 20, 0)),
        (2, 2, timestamp(2035, 4, 8, 20, 0)),
        (2, 2, timestamp(2035, 4, 15, 20, 0)),
    ];

    for (venue, artist, start_time) in schedule {
        create_show(
            pool,
            &NewShow {
                venue_id: venue_ids[venue],
                artist_id: artist_ids[artist],
                start_time,
            },
        )
        .await?;
    }

    info!(
        "Seeded demo data: {} venues, {} artists, {} shows",
        venue_ids.len(),
        artist_ids.len(),
        schedule.len()
    );
    Ok(true)
}
