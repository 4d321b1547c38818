// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO transaction handling (the caller hands in the connection)
// - NO cross-repository calls
// - Explicit SQL only

pub mod artist_repository;
pub mod show_repository;
pub mod venue_repository;

pub use artist_repository::{ArtistRepository, SqliteArtistRepository};
pub use show_repository::{ShowListing, ShowRepository, SqliteShowRepository};
pub use venue_repository::{SqliteVenueRepository, VenueRepository};

#[cfg(test)]
pub use artist_repository::MockArtistRepository;
#[cfg(test)]
pub use show_repository::MockShowRepository;
#[cfg(test)]
pub use venue_repository::MockVenueRepository;

/// `LIKE` pattern matching `term` anywhere, with `%`, `_` and `\` taken literally.
/// Pair with `ESCAPE '\'`.
pub(crate) fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("hop"), "%hop%");
        assert_eq!(like_pattern(""), "%%");
        assert_eq!(like_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    }
}
