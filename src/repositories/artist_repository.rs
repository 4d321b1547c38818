// src/repositories/artist_repository.rs
//
// Artist persistence

use rusqlite::{params, Connection, Row};

use super::like_pattern;
use crate::domain::artist::{Artist, ArtistFields, ArtistId};
use crate::domain::genres::Genres;
use crate::error::{AppError, AppResult};

const ARTIST_COLUMNS: &str = "id, name, city, state, phone, genres, image_link,
     facebook_link, website_link, seeking_venue, seeking_description";

#[cfg_attr(test, mockall::automock)]
pub trait ArtistRepository: Send + Sync {
    fn insert(&self, conn: &Connection, fields: &ArtistFields) -> AppResult<ArtistId>;
    fn update(&self, conn: &Connection, artist: &Artist) -> AppResult<()>;
    fn get_by_id(&self, conn: &Connection, id: ArtistId) -> AppResult<Option<Artist>>;
    fn list_all(&self, conn: &Connection) -> AppResult<Vec<Artist>>;
    fn list_recent(&self, conn: &Connection, limit: u32) -> AppResult<Vec<Artist>>;
    fn search_by_name(&self, conn: &Connection, term: &str) -> AppResult<Vec<Artist>>;
    fn exists(&self, conn: &Connection, id: ArtistId) -> AppResult<bool>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteArtistRepository;

impl SqliteArtistRepository {
    pub fn new() -> Self {
        Self
    }

    fn row_to_artist(row: &Row) -> Result<Artist, rusqlite::Error> {
        let genres: String = row.get("genres")?;

        Ok(Artist {
            id: row.get("id")?,
            name: row.get("name")?,
            city: row.get("city")?,
            state: row.get("state")?,
            phone: row.get("phone")?,
            genres: Genres::from_column(&genres),
            image_link: row.get("image_link")?,
            facebook_link: row.get("facebook_link")?,
            website_link: row.get("website_link")?,
            seeking_venue: row.get("seeking_venue")?,
            seeking_description: row.get("seeking_description")?,
        })
    }

    fn query_artists(
        conn: &Connection,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> AppResult<Vec<Artist>> {
        let mut stmt = conn.prepare(sql)?;
        let artists = stmt
            .query_map(params, Self::row_to_artist)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(artists)
    }
}

impl ArtistRepository for SqliteArtistRepository {
    fn insert(&self, conn: &Connection, fields: &ArtistFields) -> AppResult<ArtistId> {
        let genres = Genres::from_tokens(&fields.genres).to_column()?;

        conn.execute(
            "INSERT INTO artists (
                name, city, state, phone, genres, image_link,
                facebook_link, website_link, seeking_venue, seeking_description
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                fields.name,
                fields.city,
                fields.state,
                fields.phone,
                genres,
                fields.image_link,
                fields.facebook_link,
                fields.website_link,
                fields.seeking_venue,
                fields.seeking_description,
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn update(&self, conn: &Connection, artist: &Artist) -> AppResult<()> {
        let genres = artist.genres.to_column()?;

        let rows_affected = conn.execute(
            "UPDATE artists SET
                name = ?2, city = ?3, state = ?4, phone = ?5, genres = ?6,
                image_link = ?7, facebook_link = ?8, website_link = ?9,
                seeking_venue = ?10, seeking_description = ?11
             WHERE id = ?1",
            params![
                artist.id,
                artist.name,
                artist.city,
                artist.state,
                artist.phone,
                genres,
                artist.image_link,
                artist.facebook_link,
                artist.website_link,
                artist.seeking_venue,
                artist.seeking_description,
            ],
        )?;

        if rows_affected == 0 {
            return Err(AppError::artist_not_found(artist.id));
        }

        Ok(())
    }

    fn get_by_id(&self, conn: &Connection, id: ArtistId) -> AppResult<Option<Artist>> {
        let sql = format!("SELECT {} FROM artists WHERE id = ?1", ARTIST_COLUMNS);
        let mut stmt = conn.prepare(&sql)?;

        match stmt.query_row(params![id], Self::row_to_artist) {
            Ok(artist) => Ok(Some(artist)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_all(&self, conn: &Connection) -> AppResult<Vec<Artist>> {
        let sql = format!("SELECT {} FROM artists ORDER BY id", ARTIST_COLUMNS);
        Self::query_artists(conn, &sql, [])
    }

    fn list_recent(&self, conn: &Connection, limit: u32) -> AppResult<Vec<Artist>> {
        let sql = format!(
            "SELECT {} FROM artists ORDER BY id DESC LIMIT ?1",
            ARTIST_COLUMNS
        );
        Self::query_artists(conn, &sql, params![limit])
    }

    fn search_by_name(&self, conn: &Connection, term: &str) -> AppResult<Vec<Artist>> {
        let sql = format!(
            "SELECT {} FROM artists WHERE fold(name) LIKE ?1 ESCAPE '\\' ORDER BY id",
            ARTIST_COLUMNS
        );
        Self::query_artists(conn, &sql, params![like_pattern(&term.to_lowercase())])
    }

    fn exists(&self, conn: &Connection, id: ArtistId) -> AppResult<bool> {
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM artists WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_test_connection, initialize_database};

    fn artist(name: &str) -> ArtistFields {
        ArtistFields {
            name: name.into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            phone: "326-123-5000".into(),
            genres: vec!["Rock n Roll".into()],
            image_link: "https://example.com/a.jpg".into(),
            facebook_link: Some("https://www.facebook.com/GunsNPetals".into()),
            website_link: None,
            seeking_venue: false,
            seeking_description: None,
        }
    }

    #[test]
    fn test_roundtrip_and_update() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();
        let repo = SqliteArtistRepository::new();

        let id = repo.insert(&conn, &artist("Guns N Petals")).unwrap();
        let mut stored = repo.get_by_id(&conn, id).unwrap().unwrap();
        assert_eq!(stored.to_fields(), artist("Guns N Petals"));

        let mut changed = artist("Guns N Petals");
        changed.seeking_venue = true;
        changed.seeking_description = Some("Looking for shows in the Bay Area".into());
        stored.replace_fields(changed.clone());
        repo.update(&conn, &stored).unwrap();

        let reloaded = repo.get_by_id(&conn, id).unwrap().unwrap();
        assert_eq!(reloaded.to_fields(), changed);
    }

    #[test]
    fn test_search_examples() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();
        let repo = SqliteArtistRepository::new();
        for name in ["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"] {
            repo.insert(&conn, &artist(name)).unwrap();
        }

        assert_eq!(repo.search_by_name(&conn, "A").unwrap().len(), 3);
        let band = repo.search_by_name(&conn, "band").unwrap();
        assert_eq!(band.len(), 1);
        assert_eq!(band[0].name, "The Wild Sax Band");

        repo.insert(&conn, &artist("Björk Guðmundsdóttir")).unwrap();
        assert_eq!(repo.search_by_name(&conn, "BJÖRK").unwrap().len(), 1);
        assert_eq!(repo.search_by_name(&conn, "GUÐ").unwrap().len(), 1);
    }
}
