// src/repositories/show_repository.rs
//
// Show persistence
//
// Shows are read back joined with their venue and artist so the pages
// can show names and pictures without a second round of lookups.
//
// Older rows may hold `YYYY-MM-DD HH:MM:SS` text instead of RFC 3339, so
// time comparisons in SQL go through julianday() rather than raw text.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};
use serde::Serialize;

use crate::domain::artist::ArtistId;
use crate::domain::show::{format_start_time, parse_start_time, NewShow, ShowId};
use crate::domain::venue::VenueId;
use crate::error::AppResult;

/// One show together with the display fields of both sides
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowListing {
    pub show_id: ShowId,
    pub start_time: DateTime<Utc>,
    pub venue_id: VenueId,
    pub venue_name: String,
    pub venue_image_link: String,
    pub artist_id: ArtistId,
    pub artist_name: String,
    pub artist_image_link: String,
}

const LISTING_SELECT: &str = "SELECT
    s.id AS show_id,
    s.start_time AS start_time,
    v.id AS venue_id,
    v.name AS venue_name,
    v.image_link AS venue_image_link,
    a.id AS artist_id,
    a.name AS artist_name,
    a.image_link AS artist_image_link
FROM shows s
JOIN venues v ON v.id = s.venue_id
JOIN artists a ON a.id = s.artist_id";

#[cfg_attr(test, mockall::automock)]
pub trait ShowRepository: Send + Sync {
    fn insert(&self, conn: &Connection, show: &NewShow) -> AppResult<ShowId>;
    /// Every show, earliest first
    fn list_all(&self, conn: &Connection) -> AppResult<Vec<ShowListing>>;
    /// Shows of one venue in insertion order
    fn list_for_venue(&self, conn: &Connection, venue_id: VenueId) -> AppResult<Vec<ShowListing>>;
    /// Shows of one artist in insertion order
    fn list_for_artist(
        &self,
        conn: &Connection,
        artist_id: ArtistId,
    ) -> AppResult<Vec<ShowListing>>;
    fn count_for_venue(&self, conn: &Connection, venue_id: VenueId) -> AppResult<i64>;
    fn upcoming_counts_by_venue(
        &self,
        conn: &Connection,
        now: DateTime<Utc>,
    ) -> AppResult<HashMap<VenueId, i64>>;
    fn upcoming_counts_by_artist(
        &self,
        conn: &Connection,
        now: DateTime<Utc>,
    ) -> AppResult<HashMap<ArtistId, i64>>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteShowRepository;

impl SqliteShowRepository {
    pub fn new() -> Self {
        Self
    }

    fn row_to_listing(row: &Row) -> Result<ShowListing, rusqlite::Error> {
        let raw_start: String = row.get("start_time")?;
        let start_time = parse_start_time(&raw_start).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                raw_start.len(),
                Type::Text,
                format!("unreadable start_time {:?}", raw_start).into(),
            )
        })?;

        Ok(ShowListing {
            show_id: row.get("show_id")?,
            start_time,
            venue_id: row.get("venue_id")?,
            venue_name: row.get("venue_name")?,
            venue_image_link: row.get("venue_image_link")?,
            artist_id: row.get("artist_id")?,
            artist_name: row.get("artist_name")?,
            artist_image_link: row.get("artist_image_link")?,
        })
    }

    fn query_listings(
        conn: &Connection,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> AppResult<Vec<ShowListing>> {
        let mut stmt = conn.prepare(sql)?;
        let listings = stmt
            .query_map(params, Self::row_to_listing)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(listings)
    }

    fn upcoming_counts(
        conn: &Connection,
        key_column: &str,
        now: DateTime<Utc>,
    ) -> AppResult<HashMap<i64, i64>> {
        let sql = format!(
            "SELECT {key}, COUNT(*) FROM shows
             WHERE julianday(start_time) >= julianday(?1)
             GROUP BY {key}",
            key = key_column
        );
        let mut stmt = conn.prepare(&sql)?;
        let counts = stmt
            .query_map(params![format_start_time(&now)], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })?
            .collect::<Result<HashMap<i64, i64>, _>>()?;
        Ok(counts)
    }
}

impl ShowRepository for SqliteShowRepository {
    fn insert(&self, conn: &Connection, show: &NewShow) -> AppResult<ShowId> {
        conn.execute(
            "INSERT INTO shows (venue_id, artist_id, start_time) VALUES (?1, ?2, ?3)",
            params![
                show.venue_id,
                show.artist_id,
                format_start_time(&show.start_time)
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn list_all(&self, conn: &Connection) -> AppResult<Vec<ShowListing>> {
        let sql = format!("{} ORDER BY julianday(s.start_time), s.id", LISTING_SELECT);
        Self::query_listings(conn, &sql, [])
    }

    fn list_for_venue(&self, conn: &Connection, venue_id: VenueId) -> AppResult<Vec<ShowListing>> {
        let sql = format!("{} WHERE s.venue_id = ?1 ORDER BY s.id", LISTING_SELECT);
        Self::query_listings(conn, &sql, params![venue_id])
    }

    fn list_for_artist(
        &self,
        conn: &Connection,
        artist_id: ArtistId,
    ) -> AppResult<Vec<ShowListing>> {
        let sql = format!("{} WHERE s.artist_id = ?1 ORDER BY s.id", LISTING_SELECT);
        Self::query_listings(conn, &sql, params![artist_id])
    }

    fn count_for_venue(&self, conn: &Connection, venue_id: VenueId) -> AppResult<i64> {
        let count = conn.query_row(
            "SELECT COUNT(*) FROM shows WHERE venue_id = ?1",
            params![venue_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    fn upcoming_counts_by_venue(
        &self,
        conn: &Connection,
        now: DateTime<Utc>,
    ) -> AppResult<HashMap<VenueId, i64>> {
        Self::upcoming_counts(conn, "venue_id", now)
    }

    fn upcoming_counts_by_artist(
        &self,
        conn: &Connection,
        now: DateTime<Utc>,
    ) -> AppResult<HashMap<ArtistId, i64>> {
        Self::upcoming_counts(conn, "artist_id", now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_test_connection, initialize_database};
    use chrono::{Duration, TimeZone};

    fn setup() -> Connection {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();
        conn.execute_batch(
            "INSERT INTO venues (name, city, state, address, phone, image_link)
                 VALUES ('The Musical Hop', 'San Francisco', 'CA', '1015 Folsom Street',
                         '123-123-1234', 'https://example.com/hop.jpg');
             INSERT INTO artists (name, city, state, phone, image_link)
                 VALUES ('Guns N Petals', 'San Francisco', 'CA', '326-123-5000',
                         'https://example.com/gnp.jpg');",
        )
        .unwrap();
        conn
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap()
    }

    fn show_at(start_time: DateTime<Utc>) -> NewShow {
        NewShow {
            artist_id: 1,
            venue_id: 1,
            start_time,
        }
    }

    #[test]
    fn test_listing_joins_both_sides() {
        let conn = setup();
        let repo = SqliteShowRepository::new();
        repo.insert(&conn, &show_at(now())).unwrap();

        let listings = repo.list_for_venue(&conn, 1).unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].artist_name, "Guns N Petals");
        assert_eq!(listings[0].venue_name, "The Musical Hop");
        assert_eq!(listings[0].start_time, now());
        assert_eq!(repo.list_for_artist(&conn, 1).unwrap(), listings);
    }

    #[test]
    fn test_list_all_is_chronological() {
        let conn = setup();
        let repo = SqliteShowRepository::new();
        repo.insert(&conn, &show_at(now() + Duration::days(2))).unwrap();
        repo.insert(&conn, &show_at(now() - Duration::days(2))).unwrap();

        let all = repo.list_all(&conn).unwrap();
        assert!(all[0].start_time < all[1].start_time);
    }

    #[test]
    fn test_upcoming_counts() {
        let conn = setup();
        let repo = SqliteShowRepository::new();
        repo.insert(&conn, &show_at(now() - Duration::hours(1))).unwrap();
        repo.insert(&conn, &show_at(now())).unwrap();
        repo.insert(&conn, &show_at(now() + Duration::days(7))).unwrap();

        assert_eq!(repo.upcoming_counts_by_venue(&conn, now()).unwrap()[&1], 2);
        assert_eq!(repo.upcoming_counts_by_artist(&conn, now()).unwrap()[&1], 2);
        assert_eq!(repo.count_for_venue(&conn, 1).unwrap(), 3);
    }

    #[test]
    fn test_legacy_start_time_text_is_read() {
        let conn = setup();
        conn.execute(
            "INSERT INTO shows (venue_id, artist_id, start_time) VALUES (1, 1, '2019-05-21 21:30:00')",
            [],
        )
        .unwrap();

        let listings = SqliteShowRepository::new().list_all(&conn).unwrap();
        assert_eq!(
            listings[0].start_time,
            Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_legacy_rows_compare_by_time() {
        let conn = setup();
        let repo = SqliteShowRepository::new();
        // same day as now(), six hours later, in the old layout
        conn.execute(
            "INSERT INTO shows (venue_id, artist_id, start_time) VALUES (1, 1, '2026-10-17 18:00:00')",
            [],
        )
        .unwrap();
        repo.insert(&conn, &show_at(now() + Duration::hours(3))).unwrap();

        assert_eq!(repo.upcoming_counts_by_venue(&conn, now()).unwrap()[&1], 2);
        assert_eq!(repo.upcoming_counts_by_artist(&conn, now()).unwrap()[&1], 2);

        let all = repo.list_all(&conn).unwrap();
        assert_eq!(all[0].start_time, now() + Duration::hours(3));
        assert_eq!(
            all[1].start_time,
            Utc.with_ymd_and_hms(2026, 10, 17, 18, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_deleting_venue_cascades() {
        let conn = setup();
        let repo = SqliteShowRepository::new();
        repo.insert(&conn, &show_at(now())).unwrap();

        conn.execute("DELETE FROM venues WHERE id = 1", []).unwrap();
        assert_eq!(repo.list_all(&conn).unwrap().len(), 0);
    }
}
