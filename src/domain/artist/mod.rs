pub mod entity;
pub mod invariants;

pub use entity::{Artist, ArtistFields, ArtistId};
pub use invariants::validate_artist_fields;
