//! Artist database operations

use crate::db::models::{Artist, ArtistFields};
use crate::db::{decode_genres, encode_genres};
use crate::{Error, Result};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const SELECT_ARTIST: &str = r#"
    SELECT id, name, genres, city, state, phone, image_link,
           facebook_link, website, seeking_talent, seeking_description
    FROM artists
"#;

fn artist_from_row(row: &SqliteRow) -> Result<Artist> {
    let genres: String = row.try_get("genres")?;

    Ok(Artist {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        genres: decode_genres(&genres)?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
        phone: row.try_get("phone")?,
        image_link: row.try_get("image_link")?,
        facebook_link: row.try_get("facebook_link")?,
        website: row.try_get("website")?,
        seeking_talent: row.try_get("seeking_talent")?,
        seeking_description: row.try_get("seeking_description")?,
    })
}

/// Insert an artist and return its new id
pub async fn create_artist(pool: &SqlitePool, fields: &ArtistFields) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO artists (
            name, genres, city, state, phone, image_link,
            facebook_link, website, seeking_talent, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&fields.name)
    .bind(encode_genres(&fields.genres)?)
    .bind(&fields.city)
    .bind(&fields.state)
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

/// Load artist by id
pub async fn get_artist(pool: &SqlitePool, id: i64) -> Result<Option<Artist>> {
    let sql = format!("{} WHERE id = ?", SELECT_ARTIST);
    let row = sqlx::query(&sql).bind(id).fetch_optional(pool).await?;

    row.as_ref().map(artist_from_row).transpose()
}

/// Load every artist, ordered by id
pub async fn list_artists(pool: &SqlitePool) -> Result<Vec<Artist>> {
    let sql = format!("{} ORDER BY id", SELECT_ARTIST);
    let rows = sqlx::query(&sql).fetch_all(pool).await?;

    rows.iter().map(artist_from_row).collect()
}

/// Overwrite every editable field of an existing artist
pub async fn update_artist(pool: &SqlitePool, id: i64, fields: &ArtistFields) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE artists SET
            name = ?, genres = ?, city = ?, state = ?, phone = ?, image_link = ?,
            facebook_link = ?, website = ?, seeking_talent = ?, seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&fields.name)
    .bind(encode_genres(&fields.genres)?)
    .bind(&fields.city)
    .bind(&fields.state)
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
        return Err(Error::NotFound(format!("artist {}", id)));
    }
    Ok(())
}

/// Delete an artist; its shows go with it
pub async fn delete_artist(pool: &SqlitePool, id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM artists WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(Error::from_write)?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("artist {}", id)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init::init_database;
    use tempfile::TempDir;

    fn sax_band() -> ArtistFields {
        ArtistFields {
            name: "The Wild Sax Band".to_string(),
            genres: vec!["Jazz".to_string(), "Classical".to_string()],
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "432-325-5432".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_artist_lifecycle() {
        let dir = TempDir::new().unwrap();
        let pool = init_database(&dir.path().join("artists.db")).await.unwrap();

        let id = create_artist(&pool, &sax_band()).await.expect("Failed to save artist");
        let loaded = get_artist(&pool, id).await.unwrap().expect("Artist not found");
        assert_eq!(ArtistFields::from(loaded), sax_band());

        let mut edited = sax_band();
        edited.seeking_talent = true;
        edited.seeking_description = "Looking for weekend gigs".to_string();
        edited.genres = vec!["Jazz".to_string()];
        update_artist(&pool, id, &edited).await.unwrap();

        let listed = list_artists(&pool).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].seeking_talent);
        assert_eq!(listed[0].genres, vec!["Jazz"]);

        delete_artist(&pool, id).await.unwrap();
        assert!(get_artist(&pool, id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_artist_is_not_found() {
        let dir = TempDir::new().unwrap();
        let pool = init_database(&dir.path().join("artists.db")).await.unwrap();

        let err = update_artist(&pool, 1, &sax_band()).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
