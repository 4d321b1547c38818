//! Venue invariants:
//!
//! 1. Identity is assigned by the store and never changes
//! 2. A venue may own any number of shows, including none
//! 3. Deleting a venue removes its shows
//! 4. A missing seeking flag means "not seeking"

pub mod entity;
pub mod invariants;

pub use entity::{Venue, VenueFields, VenueId};
pub use invariants::validate_venue_fields;
