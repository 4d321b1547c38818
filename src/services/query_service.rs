// src/services/query_service.rs
//
// Read side of the directory
//
// Every method borrows one connection for the whole read so the pieces
// of a page (entity, shows, counts) come from the same snapshot.

use std::sync::Arc;

use chrono::{DateTime, SubsecRound, Utc};

use super::read_models::{
    artist_hits, group_by_area, venue_hits, AreaGroup, ArtistDetail, HomepageDigest,
    SearchResults, VenueDeletePreview, VenueDetail,
};
use crate::db::{with_connection, ConnectionPool};
use crate::domain::{partition_by_start_time, Artist, ArtistId, Venue, VenueId};
use crate::error::{AppError, AppResult};
use crate::repositories::{ArtistRepository, ShowListing, ShowRepository, VenueRepository};

pub const DEFAULT_HOMEPAGE_LIMIT: u32 = 10;

/// Stored start times have whole-second precision; the reference instant
/// must too, or SQL counts and in-memory splits disagree within a second.
fn reference_instant(now: DateTime<Utc>) -> DateTime<Utc> {
    now.trunc_subsecs(0)
}

pub struct QueryService {
    pool: Arc<ConnectionPool>,
    venue_repo: Arc<dyn VenueRepository>,
    artist_repo: Arc<dyn ArtistRepository>,
    show_repo: Arc<dyn ShowRepository>,
    homepage_limit: u32,
}

impl QueryService {
    pub fn new(
        pool: Arc<ConnectionPool>,
        venue_repo: Arc<dyn VenueRepository>,
        artist_repo: Arc<dyn ArtistRepository>,
        show_repo: Arc<dyn ShowRepository>,
    ) -> Self {
        Self {
            pool,
            venue_repo,
            artist_repo,
            show_repo,
            homepage_limit: DEFAULT_HOMEPAGE_LIMIT,
        }
    }

    pub fn with_homepage_limit(mut self, limit: u32) -> Self {
        self.homepage_limit = limit;
        self
    }

    /// Venues grouped by (city, state), each with its upcoming show count
    pub fn list_venues_grouped(&self) -> AppResult<Vec<AreaGroup>> {
        self.list_venues_grouped_at(Utc::now())
    }

    pub fn list_venues_grouped_at(&self, now: DateTime<Utc>) -> AppResult<Vec<AreaGroup>> {
        let now = reference_instant(now);
        with_connection(&self.pool, |conn| {
            let venues = self.venue_repo.list_all(conn)?;
            let upcoming = self.show_repo.upcoming_counts_by_venue(conn, now)?;
            Ok(group_by_area(venues, &upcoming))
        })
    }

    pub fn list_artists(&self) -> AppResult<Vec<Artist>> {
        with_connection(&self.pool, |conn| self.artist_repo.list_all(conn))
    }

    /// Case-insensitive substring match on venue name.
    /// A blank term matches every venue.
    pub fn search_venues(&self, term: &str) -> AppResult<SearchResults> {
        self.search_venues_at(term, Utc::now())
    }

    pub fn search_venues_at(&self, term: &str, now: DateTime<Utc>) -> AppResult<SearchResults> {
        let now = reference_instant(now);
        let term = term.trim();
        with_connection(&self.pool, |conn| {
            let venues = self.venue_repo.search_by_name(conn, term)?;
            let upcoming = self.show_repo.upcoming_counts_by_venue(conn, now)?;
            let results = venue_hits(venues, &upcoming);
            Ok(SearchResults {
                search_term: term.to_string(),
                count: results.len(),
                results,
            })
        })
    }

    pub fn search_artists(&self, term: &str) -> AppResult<SearchResults> {
        self.search_artists_at(term, Utc::now())
    }

    pub fn search_artists_at(&self, term: &str, now: DateTime<Utc>) -> AppResult<SearchResults> {
        let now = reference_instant(now);
        let term = term.trim();
        with_connection(&self.pool, |conn| {
            let artists = self.artist_repo.search_by_name(conn, term)?;
            let upcoming = self.show_repo.upcoming_counts_by_artist(conn, now)?;
            let results = artist_hits(artists, &upcoming);
            Ok(SearchResults {
                search_term: term.to_string(),
                count: results.len(),
                results,
            })
        })
    }

    pub fn get_venue_detail(&self, id: VenueId) -> AppResult<VenueDetail> {
        self.get_venue_detail_at(id, Utc::now())
    }

    /// Venue page with its shows split around `now`
    pub fn get_venue_detail_at(&self, id: VenueId, now: DateTime<Utc>) -> AppResult<VenueDetail> {
        let now = reference_instant(now);
        with_connection(&self.pool, |conn| {
            let venue = self
                .venue_repo
                .get_by_id(conn, id)?
                .ok_or_else(|| AppError::venue_not_found(id))?;
            let listings = self.show_repo.list_for_venue(conn, id)?;

            Ok(VenueDetail {
                genres: venue.genres.as_slice().to_vec(),
                shows: partition_by_start_time(listings, now, |s: &ShowListing| s.start_time),
                venue,
            })
        })
    }

    pub fn get_artist_detail(&self, id: ArtistId) -> AppResult<ArtistDetail> {
        self.get_artist_detail_at(id, Utc::now())
    }

    pub fn get_artist_detail_at(
        &self,
        id: ArtistId,
        now: DateTime<Utc>,
    ) -> AppResult<ArtistDetail> {
        let now = reference_instant(now);
        with_connection(&self.pool, |conn| {
            let artist = self
                .artist_repo
                .get_by_id(conn, id)?
                .ok_or_else(|| AppError::artist_not_found(id))?;
            let listings = self.show_repo.list_for_artist(conn, id)?;

            Ok(ArtistDetail {
                genres: artist.genres.as_slice().to_vec(),
                shows: partition_by_start_time(listings, now, |s: &ShowListing| s.start_time),
                artist,
            })
        })
    }

    /// The most recently created venues and artists
    pub fn homepage_digest(&self) -> AppResult<HomepageDigest> {
        with_connection(&self.pool, |conn| {
            Ok(HomepageDigest {
                venues: self.venue_repo.list_recent(conn, self.homepage_limit)?,
                artists: self.artist_repo.list_recent(conn, self.homepage_limit)?,
            })
        })
    }

    /// Every show, earliest first
    pub fn list_shows(&self) -> AppResult<Vec<ShowListing>> {
        with_connection(&self.pool, |conn| self.show_repo.list_all(conn))
    }

    pub fn get_venue_for_edit(&self, id: VenueId) -> AppResult<Venue> {
        with_connection(&self.pool, |conn| {
            self.venue_repo
                .get_by_id(conn, id)?
                .ok_or_else(|| AppError::venue_not_found(id))
        })
    }

    pub fn get_artist_for_edit(&self, id: ArtistId) -> AppResult<Artist> {
        with_connection(&self.pool, |conn| {
            self.artist_repo
                .get_by_id(conn, id)?
                .ok_or_else(|| AppError::artist_not_found(id))
        })
    }

    /// The venue plus the number of shows a delete would take with it
    pub fn get_venue_for_delete(&self, id: VenueId) -> AppResult<VenueDeletePreview> {
        with_connection(&self.pool, |conn| {
            let venue = self
                .venue_repo
                .get_by_id(conn, id)?
                .ok_or_else(|| AppError::venue_not_found(id))?;
            let show_count = self.show_repo.count_for_venue(conn, id)?;
            Ok(VenueDeletePreview { venue, show_count })
        })
    }
}
