// src/services/mod.rs
//
// Services Module - Orchestration Layer
//
// Services own the transaction boundary and hand repositories the
// connection to use. Handlers only ever talk to services.

pub mod mutation_service;
pub mod outcome;
pub mod query_service;
pub mod read_models;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use mutation_service::MutationService;
pub use outcome::{FlashLevel, FlashMessage, MutationOutcome};
pub use query_service::{QueryService, DEFAULT_HOMEPAGE_LIMIT};
pub use read_models::{
    group_by_area, AreaGroup, ArtistDetail, HomepageDigest, SearchHit, SearchResults,
    VenueDeletePreview, VenueDetail, VenueSummary,
};
