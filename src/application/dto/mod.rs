// src/application/dto/mod.rs
//
// View-models
//
// CRITICAL PRINCIPLES:
// - View-models are template-friendly representations
// - They are plain serializable structs, nothing more
// - Conversion FROM service results only (never TO)

use serde::Serialize;

use crate::application::format::{format_datetime, DateFormat};
use crate::domain::validation::US_STATES;
use crate::domain::{Artist, ArtistFields, ArtistId, FieldError, Venue, VenueFields, VenueId};
use crate::repositories::ShowListing;
use crate::services::{AreaGroup, ArtistDetail, SearchHit, SearchResults, VenueDetail};

/// Genres offered by the venue and artist forms
pub const GENRE_CHOICES: [&str; 19] = [
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

// ============================================================================
// HOME
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct EntityCardDto {
    pub id: i64,
    pub name: String,
    pub image_link: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    pub venues: Vec<EntityCardDto>,
    pub artists: Vec<EntityCardDto>,
}

// ============================================================================
// LISTINGS & SEARCH
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct VenueListView {
    pub areas: Vec<AreaGroup>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtistSummaryDto {
    pub id: ArtistId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtistListView {
    pub artists: Vec<ArtistSummaryDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResultsView {
    pub search_term: String,
    pub count: usize,
    pub data: Vec<SearchHit>,
}

// ============================================================================
// DETAIL PAGES
// ============================================================================

/// A show on a venue page: who is playing
#[derive(Debug, Clone, Serialize)]
pub struct VenueShowCard {
    pub artist_id: ArtistId,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
    pub start_time_display: String,
}

/// A show on an artist page: where they play
#[derive(Debug, Clone, Serialize)]
pub struct ArtistShowCard {
    pub venue_id: VenueId,
    pub venue_name: String,
    pub venue_image_link: String,
    pub start_time: String,
    pub start_time_display: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VenueDetailView {
    pub id: VenueId,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: String,
    pub past_shows: Vec<VenueShowCard>,
    pub upcoming_shows: Vec<VenueShowCard>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetailView {
    pub id: ArtistId,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: String,
    pub past_shows: Vec<ArtistShowCard>,
    pub upcoming_shows: Vec<ArtistShowCard>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

// ============================================================================
// FORMS
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct VenueFormView {
    /// `None` on the create form
    pub venue_id: Option<VenueId>,
    pub form: VenueFields,
    pub errors: Vec<FieldError>,
    pub states: &'static [&'static str],
    pub genre_choices: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtistFormView {
    pub artist_id: Option<ArtistId>,
    pub form: ArtistFields,
    pub errors: Vec<FieldError>,
    pub states: &'static [&'static str],
    pub genre_choices: &'static [&'static str],
}

/// Show form values are echoed back as typed, so a bad id can be corrected
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShowFormView {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteVenueView {
    pub venue_id: VenueId,
    pub venue_name: String,
    /// Shows that go away with the venue
    pub show_count: i64,
}

// ============================================================================
// SHOWS
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ShowRowDto {
    pub venue_id: VenueId,
    pub venue_name: String,
    pub artist_id: ArtistId,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
    pub start_time_display: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShowListView {
    pub shows: Vec<ShowRowDto>,
}

// ============================================================================
// CONVERSION HELPERS (Service result → view-model)
// ============================================================================

impl From<&Venue> for EntityCardDto {
    fn from(venue: &Venue) -> Self {
        Self {
            id: venue.id,
            name: venue.name.clone(),
            image_link: venue.image_link.clone(),
        }
    }
}

impl From<&Artist> for EntityCardDto {
    fn from(artist: &Artist) -> Self {
        Self {
            id: artist.id,
            name: artist.name.clone(),
            image_link: artist.image_link.clone(),
        }
    }
}

impl From<Artist> for ArtistSummaryDto {
    fn from(artist: Artist) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
        }
    }
}

impl From<SearchResults> for SearchResultsView {
    fn from(results: SearchResults) -> Self {
        Self {
            search_term: results.search_term,
            count: results.count,
            data: results.results,
        }
    }
}

fn display_time(listing: &ShowListing) -> (String, String) {
    (
        listing.start_time.to_rfc3339(),
        format_datetime(&listing.start_time, DateFormat::Full),
    )
}

impl From<ShowListing> for VenueShowCard {
    fn from(listing: ShowListing) -> Self {
        let (start_time, start_time_display) = display_time(&listing);
        Self {
            artist_id: listing.artist_id,
            artist_name: listing.artist_name,
            artist_image_link: listing.artist_image_link,
            start_time,
            start_time_display,
        }
    }
}

impl From<ShowListing> for ArtistShowCard {
    fn from(listing: ShowListing) -> Self {
        let (start_time, start_time_display) = display_time(&listing);
        Self {
            venue_id: listing.venue_id,
            venue_name: listing.venue_name,
            venue_image_link: listing.venue_image_link,
            start_time,
            start_time_display,
        }
    }
}

impl From<ShowListing> for ShowRowDto {
    fn from(listing: ShowListing) -> Self {
        let (start_time, start_time_display) = display_time(&listing);
        Self {
            venue_id: listing.venue_id,
            venue_name: listing.venue_name,
            artist_id: listing.artist_id,
            artist_name: listing.artist_name,
            artist_image_link: listing.artist_image_link,
            start_time,
            start_time_display,
        }
    }
}

impl From<VenueDetail> for VenueDetailView {
    fn from(detail: VenueDetail) -> Self {
        let past_shows_count = detail.shows.past_count();
        let upcoming_shows_count = detail.shows.upcoming_count();
        let venue = detail.venue;

        Self {
            id: venue.id,
            name: venue.name,
            genres: detail.genres,
            address: venue.address,
            city: venue.city,
            state: venue.state,
            phone: venue.phone,
            website: venue.website_link,
            facebook_link: venue.facebook_link,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
            image_link: venue.image_link,
            past_shows: detail.shows.past.into_iter().map(Into::into).collect(),
            upcoming_shows: detail.shows.upcoming.into_iter().map(Into::into).collect(),
            past_shows_count,
            upcoming_shows_count,
        }
    }
}

impl From<ArtistDetail> for ArtistDetailView {
    fn from(detail: ArtistDetail) -> Self {
        let past_shows_count = detail.shows.past_count();
        let upcoming_shows_count = detail.shows.upcoming_count();
        let artist = detail.artist;

        Self {
            id: artist.id,
            name: artist.name,
            genres: detail.genres,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            website: artist.website_link,
            facebook_link: artist.facebook_link,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
            image_link: artist.image_link,
            past_shows: detail.shows.past.into_iter().map(Into::into).collect(),
            upcoming_shows: detail.shows.upcoming.into_iter().map(Into::into).collect(),
            past_shows_count,
            upcoming_shows_count,
        }
    }
}

impl VenueFormView {
    pub fn new(venue_id: Option<VenueId>, form: VenueFields, errors: Vec<FieldError>) -> Self {
        Self {
            venue_id,
            form,
            errors,
            states: &US_STATES,
            genre_choices: &GENRE_CHOICES,
        }
    }
}

impl ArtistFormView {
    pub fn new(artist_id: Option<ArtistId>, form: ArtistFields, errors: Vec<FieldError>) -> Self {
        Self {
            artist_id,
            form,
            errors,
            states: &US_STATES,
            genre_choices: &GENRE_CHOICES,
        }
    }
}
