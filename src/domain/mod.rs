// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod artist;
pub mod genres;
pub mod show;
pub mod validation;
pub mod venue;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Venue Domain
pub use venue::{validate_venue_fields, Venue, VenueFields, VenueId};

// Artist Domain
pub use artist::{validate_artist_fields, Artist, ArtistFields, ArtistId};

// Show Domain
pub use show::{
    parse_start_time, partition_by_start_time, NewShow, PartitionedShows, ShowId,
};

// Shared value objects
pub use genres::Genres;
pub use validation::FieldError;

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Validation failed: {}", format_field_errors(.0))]
    Validation(Vec<FieldError>),

    #[error("{entity} {id} does not exist")]
    UnknownReference { entity: &'static str, id: i64 },
}

impl DomainError {
    /// Field errors carried by this error, if it is form-related.
    ///
    /// An unknown reference is reported against the form field that named it
    /// so the show form can highlight the offending id.
    pub fn field_errors(&self) -> Vec<FieldError> {
        match self {
            DomainError::Validation(errors) => errors.clone(),
            DomainError::UnknownReference { entity, id } => vec![FieldError::new(
                match *entity {
                    "Artist" => "artist_id",
                    "Venue" => "venue_id",
                    _ => "id",
                },
                format!("{} {} does not exist", entity, id),
            )],
            DomainError::InvariantViolation(message) => {
                vec![FieldError::new("form", message.clone())]
            }
        }
    }
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
