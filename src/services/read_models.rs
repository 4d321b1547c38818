// src/services/read_models.rs
//
// Shapes returned by the query service, plus the pure aggregation steps
// that build them. No I/O happens here.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::domain::{Artist, ArtistId, PartitionedShows, Venue, VenueId};
use crate::repositories::ShowListing;

/// A venue as listed under its city
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueSummary {
    pub id: VenueId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// All venues sharing one (city, state) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub search_term: String,
    pub count: usize,
    pub results: Vec<SearchHit>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VenueDetail {
    pub venue: Venue,
    pub genres: Vec<String>,
    pub shows: PartitionedShows<ShowListing>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArtistDetail {
    pub artist: Artist,
    pub genres: Vec<String>,
    pub shows: PartitionedShows<ShowListing>,
}

/// Most recently created venues and artists, newest first
#[derive(Debug, Clone, PartialEq)]
pub struct HomepageDigest {
    pub venues: Vec<Venue>,
    pub artists: Vec<Artist>,
}

/// What a venue deletion is about to remove
#[derive(Debug, Clone, PartialEq)]
pub struct VenueDeletePreview {
    pub venue: Venue,
    pub show_count: i64,
}

/// Group venues by exact (city, state), in order of first appearance.
///
/// A venue id seen twice is listed once.
pub fn group_by_area(venues: Vec<Venue>, upcoming: &HashMap<VenueId, i64>) -> Vec<AreaGroup> {
    let mut groups: Vec<AreaGroup> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut seen: HashSet<VenueId> = HashSet::new();

    for venue in venues {
        if !seen.insert(venue.id) {
            continue;
        }

        let key = (venue.city.clone(), venue.state.clone());
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(AreaGroup {
                city: venue.city.clone(),
                state: venue.state.clone(),
                venues: Vec::new(),
            });
            groups.len() - 1
        });

        groups[slot].venues.push(VenueSummary {
            id: venue.id,
            num_upcoming_shows: upcoming.get(&venue.id).copied().unwrap_or(0),
            name: venue.name,
        });
    }

    groups
}

pub fn venue_hits(venues: Vec<Venue>, upcoming: &HashMap<VenueId, i64>) -> Vec<SearchHit> {
    venues
        .into_iter()
        .map(|v| SearchHit {
            id: v.id,
            num_upcoming_shows: upcoming.get(&v.id).copied().unwrap_or(0),
            name: v.name,
        })
        .collect()
}

pub fn artist_hits(artists: Vec<Artist>, upcoming: &HashMap<ArtistId, i64>) -> Vec<SearchHit> {
    artists
        .into_iter()
        .map(|a| SearchHit {
            id: a.id,
            num_upcoming_shows: upcoming.get(&a.id).copied().unwrap_or(0),
            name: a.name,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VenueFields;

    fn venue(id: VenueId, name: &str, city: &str, state: &str) -> Venue {
        Venue::from_fields(
            id,
            VenueFields {
                name: name.into(),
                city: city.into(),
                state: state.into(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let venues = vec![
            venue(1, "The Musical Hop", "San Francisco", "CA"),
            venue(2, "The Dueling Pianos Bar", "New York", "NY"),
            venue(3, "Park Square Live Music & Coffee", "San Francisco", "CA"),
        ];
        let upcoming = HashMap::from([(3, 1)]);

        let groups = group_by_area(venues, &upcoming);

        assert_eq!(groups.len(), 2);
        assert_eq!((groups[0].city.as_str(), groups[0].state.as_str()), ("San Francisco", "CA"));
        assert_eq!(
            groups[0].venues.iter().map(|v| v.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(groups[0].venues[1].num_upcoming_shows, 1);
        assert_eq!(groups[1].venues.len(), 1);
    }

    #[test]
    fn test_same_city_different_state_are_separate() {
        let venues = vec![
            venue(1, "A", "Portland", "OR"),
            venue(2, "B", "Portland", "ME"),
        ];
        assert_eq!(group_by_area(venues, &HashMap::new()).len(), 2);
    }

    #[test]
    fn test_repeated_venue_is_listed_once() {
        let venues = vec![
            venue(1, "The Musical Hop", "San Francisco", "CA"),
            venue(1, "The Musical Hop", "San Francisco", "CA"),
        ];
        let groups = group_by_area(venues, &HashMap::new());
        assert_eq!(groups[0].venues.len(), 1);
    }
}
