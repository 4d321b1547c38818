// src/services/test_fixtures.rs
//
// Shared builders for service tests

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use super::{MutationService, QueryService};
use crate::db::test_support::TestDatabase;
use crate::domain::{ArtistFields, VenueFields};
use crate::repositories::{SqliteArtistRepository, SqliteShowRepository, SqliteVenueRepository};

/// Fixed reference instant so past/upcoming splits are deterministic
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap()
}

pub fn query_service(db: &TestDatabase) -> QueryService {
    QueryService::new(
        db.pool.clone(),
        Arc::new(SqliteVenueRepository::new()),
        Arc::new(SqliteArtistRepository::new()),
        Arc::new(SqliteShowRepository::new()),
    )
}

pub fn mutation_service(db: &TestDatabase) -> MutationService {
    MutationService::new(
        db.pool.clone(),
        Arc::new(SqliteVenueRepository::new()),
        Arc::new(SqliteArtistRepository::new()),
        Arc::new(SqliteShowRepository::new()),
    )
}

pub fn venue(name: &str, city: &str, state: &str) -> VenueFields {
    VenueFields {
        name: name.into(),
        city: city.into(),
        state: state.into(),
        address: "1015 Folsom Street".into(),
        phone: "123-123-1234".into(),
        genres: vec!["Jazz".into(), "Reggae".into(), "Swing".into()],
        image_link: "https://images.example.com/venue.jpg".into(),
        facebook_link: Some("https://www.facebook.com/TheMusicalHop".into()),
        website_link: Some("https://www.themusicalhop.com".into()),
        seeking_talent: true,
        seeking_description: Some("We are on the lookout for a local artist.".into()),
    }
}

pub fn artist(name: &str) -> ArtistFields {
    ArtistFields {
        name: name.into(),
        city: "San Francisco".into(),
        state: "CA".into(),
        phone: "326-123-5000".into(),
        genres: vec!["Rock n Roll".into()],
        image_link: "https://images.example.com/artist.jpg".into(),
        facebook_link: None,
        website_link: None,
        seeking_venue: false,
        seeking_description: None,
    }
}
