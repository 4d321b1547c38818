// src/lib.rs
// Fyyur - Venue and artist booking directory
//
// Architecture:
// - Domain-centric: entities, field rules and show scheduling live in domain
// - Repositories are dumb SQL mappers over a pooled SQLite store
// - Services own transactions and turn store failures into status messages
// - Application layer: form decoding, view-models, pages
// - HTTP: thin axum adapter over the application handlers

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod logging;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod http;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_artist_fields,
    validate_venue_fields,
    // Artist
    Artist,
    ArtistFields,
    ArtistId,
    DomainError,
    FieldError,
    Genres,
    // Show
    NewShow,
    ShowId,
    // Venue
    Venue,
    VenueFields,
    VenueId,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{
    create_connection_pool, initialize_database, with_connection, with_transaction,
    ConnectionPool,
};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    ArtistRepository, ShowListing, ShowRepository, SqliteArtistRepository, SqliteShowRepository,
    SqliteVenueRepository, VenueRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    AreaGroup, ArtistDetail, FlashLevel, FlashMessage, HomepageDigest, MutationOutcome,
    MutationService, QueryService, SearchResults, VenueDetail,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, FormData, JsonRenderer, Page, Renderer, Template};
pub use config::AppConfig;
pub use http::router;
