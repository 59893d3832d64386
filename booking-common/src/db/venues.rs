//! Venue database operations

use crate::db::models::{Venue, VenueFields};
use crate::db::{decode_genres, encode_genres};
use crate::{Error, Result};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const SELECT_VENUE: &str = r#"
    SELECT id, name, genres, city, state, address, phone, image_link,
           facebook_link, website, seeking_talent, seeking_description
    FROM venues
"#;

fn venue_from_row(row: &SqliteRow) -> Result<Venue> {
    let genres: String = row.try_get("genres")?;

    Ok(Venue {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        genres: decode_genres(&genres)?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
        address: row.try_get("address")?,
        phone: row.try_get("phone")?,
        image_link: row.try_get("image_link")?,
        facebook_link: row.try_get("facebook_link")?,
        website: row.try_get("website")?,
        seeking_talent: row.try_get("seeking_talent")?,
        seeking_description: row.try_get("seeking_description")?,
    })
}

/// Insert a venue and return its new id
pub async fn create_venue(pool: &SqlitePool, fields: &VenueFields) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO venues (
            name, genres, city, state, address, phone, image_link,
            facebook_link, website, seeking_talent, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&fields.name)
    .bind(encode_genres(&fields.genres)?)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.address)
    .bind(&fields.phone)
    .bind(&fields.image_link)
    .bind(&fields.facebook_link)
    .bind(&fields.website)
    .bind(fields.seeking_talent)
    .bind(&fields.seeking_description)
    .execute(pool)
    .await
    .map_err(Error::from_write)?;

    Ok(result.last_insert_rowid())
}

/// Load venue by id
pub async fn get_venue(pool: &SqlitePool, id: i64) -> Result<Option<Venue>> {
    let sql = format!("{} WHERE id = ?", SELECT_VENUE);
    let row = sqlx::query(&sql).bind(id).fetch_optional(pool).await?;

    row.as_ref().map(venue_from_row).transpose()
}

/// Load every venue, ordered by id
pub async fn list_venues(pool: &SqlitePool) -> Result<Vec<Venue>> {
    let sql = format!("{} ORDER BY id", SELECT_VENUE);
    let rows = sqlx::query(&sql).fetch_all(pool).await?;

    rows.iter().map(venue_from_row).collect()
}

/// Overwrite every editable field of an existing venue
pub async fn update_venue(pool: &SqlitePool, id: i64, fields: &VenueFields) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE venues SET
            name = ?, genres = ?, city = ?, state = ?, address = ?, phone = ?,
            image_link = ?, facebook_link = ?, website = ?, seeking_talent = ?,
            seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&fields.name)
    .bind(encode_genres(&fields.genres)?)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.address)
    .bind(&fields.phone)
    .bind(&fields.image_link)
    .bind(&fields.facebook_link)
    .bind(&fields.website)
    .bind(fields.seeking_talent)
    .bind(&fields.seeking_description)
    .bind(id)
    .execute(pool)
    .await
    .map_err(Error::from_write)?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("venue {}", id)));
    }
    Ok(())
}

/// Delete a venue; its shows go with it
pub async fn delete_venue(pool: &SqlitePool, id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(Error::from_write)?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("venue {}", id)));
    }
    Ok(())
}
