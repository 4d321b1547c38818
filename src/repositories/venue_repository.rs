// src/repositories/venue_repository.rs
//
// Venue persistence

use rusqlite::{params, Connection, Row};

use super::like_pattern;
use crate::domain::genres::Genres;
use crate::domain::venue::{Venue, VenueFields, VenueId};
use crate::error::{AppError, AppResult};

const VENUE_COLUMNS: &str = "id, name, city, state, address, phone, genres, image_link,
     facebook_link, website_link, seeking_talent, seeking_description";

#[cfg_attr(test, mockall::automock)]
pub trait VenueRepository: Send + Sync {
    fn insert(&self, conn: &Connection, fields: &VenueFields) -> AppResult<VenueId>;
    fn update(&self, conn: &Connection, venue: &Venue) -> AppResult<()>;
    fn delete(&self, conn: &Connection, id: VenueId) -> AppResult<()>;
    fn get_by_id(&self, conn: &Connection, id: VenueId) -> AppResult<Option<Venue>>;
    fn list_all(&self, conn: &Connection) -> AppResult<Vec<Venue>>;
    fn list_recent(&self, conn: &Connection, limit: u32) -> AppResult<Vec<Venue>>;
    fn search_by_name(&self, conn: &Connection, term: &str) -> AppResult<Vec<Venue>>;
    fn exists(&self, conn: &Connection, id: VenueId) -> AppResult<bool>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteVenueRepository;

impl SqliteVenueRepository {
    pub fn new() -> Self {
        Self
    }

    /// Map database row to Venue - returns rusqlite::Error for query_map compatibility
    fn row_to_venue(row: &Row) -> Result<Venue, rusqlite::Error> {
        let genres: String = row.get("genres")?;

        Ok(Venue {
            id: row.get("id")?,
            name: row.get("name")?,
            city: row.get("city")?,
            state: row.get("state")?,
            address: row.get("address")?,
            phone: row.get("phone")?,
            genres: Genres::from_column(&genres),
            image_link: row.get("image_link")?,
            facebook_link: row.get("facebook_link")?,
            website_link: row.get("website_link")?,
            seeking_talent: row.get("seeking_talent")?,
            seeking_description: row.get("seeking_description")?,
        })
    }

    fn query_venues(
        conn: &Connection,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> AppResult<Vec<Venue>> {
        let mut stmt = conn.prepare(sql)?;
        let venues = stmt
            .query_map(params, Self::row_to_venue)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(venues)
    }
}

impl VenueRepository for SqliteVenueRepository {
    fn insert(&self, conn: &Connection, fields: &VenueFields) -> AppResult<VenueId> {
        let genres = Genres::from_tokens(&fields.genres).to_column()?;

        conn.execute(
            "INSERT INTO venues (
                name, city, state, address, phone, genres, image_link,
                facebook_link, website_link, seeking_talent, seeking_description
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                fields.name,
                fields.city,
                fields.state,
                fields.address,
                fields.phone,
                genres,
                fields.image_link,
                fields.facebook_link,
                fields.website_link,
                fields.seeking_talent,
                fields.seeking_description,
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn update(&self, conn: &Connection, venue: &Venue) -> AppResult<()> {
        let genres = venue.genres.to_column()?;

        let rows_affected = conn.execute(
            "UPDATE venues SET
                name = ?2, city = ?3, state = ?4, address = ?5, phone = ?6,
                genres = ?7, image_link = ?8, facebook_link = ?9, website_link = ?10,
                seeking_talent = ?11, seeking_description = ?12
             WHERE id = ?1",
            params![
                venue.id,
                venue.name,
                venue.city,
                venue.state,
                venue.address,
                venue.phone,
                genres,
                venue.image_link,
                venue.facebook_link,
                venue.website_link,
                venue.seeking_talent,
                venue.seeking_description,
            ],
        )?;

        if rows_affected == 0 {
            return Err(AppError::venue_not_found(venue.id));
        }

        Ok(())
    }

    fn delete(&self, conn: &Connection, id: VenueId) -> AppResult<()> {
        let rows_affected = conn.execute("DELETE FROM venues WHERE id = ?1", params![id])?;

        if rows_affected == 0 {
            return Err(AppError::venue_not_found(id));
        }

        Ok(())
    }

    fn get_by_id(&self, conn: &Connection, id: VenueId) -> AppResult<Option<Venue>> {
        let sql = format!("SELECT {} FROM venues WHERE id = ?1", VENUE_COLUMNS);
        let mut stmt = conn.prepare(&sql)?;

        match stmt.query_row(params![id], Self::row_to_venue) {
            Ok(venue) => Ok(Some(venue)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_all(&self, conn: &Connection) -> AppResult<Vec<Venue>> {
        let sql = format!("SELECT {} FROM venues ORDER BY id", VENUE_COLUMNS);
        Self::query_venues(conn, &sql, [])
    }

    fn list_recent(&self, conn: &Connection, limit: u32) -> AppResult<Vec<Venue>> {
        let sql = format!(
            "SELECT {} FROM venues ORDER BY id DESC LIMIT ?1",
            VENUE_COLUMNS
        );
        Self::query_venues(conn, &sql, params![limit])
    }

    fn search_by_name(&self, conn: &Connection, term: &str) -> AppResult<Vec<Venue>> {
        let sql = format!(
            "SELECT {} FROM venues WHERE fold(name) LIKE ?1 ESCAPE '\\' ORDER BY id",
            VENUE_COLUMNS
        );
        Self::query_venues(conn, &sql, params![like_pattern(&term.to_lowercase())])
    }

    fn exists(&self, conn: &Connection, id: VenueId) -> AppResult<bool> {
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM venues WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }
}
