// src/application/forms.rs
//
// Submitted form payloads
//
// A urlencoded body is kept as the ordered list of pairs the browser sent,
// so repeated keys (the genres multi-select) survive.

use crate::domain::validation::FieldErrors;
use crate::domain::{parse_start_time, ArtistFields, DomainError, DomainResult, NewShow, VenueFields};

/// Checkbox values that mean "ticked"
const TRUTHY: [&str; 5] = ["y", "yes", "true", "on", "1"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// First value sent for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value sent for `key`, in submission order
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    fn text(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_string()
    }

    fn optional(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }

    /// Unticked checkboxes are simply absent from the body
    pub fn flag(&self, key: &str) -> bool {
        self.get(key)
            .map(|v| TRUTHY.contains(&v.trim().to_ascii_lowercase().as_str()))
            .unwrap_or(false)
    }

    pub fn venue_fields(&self) -> VenueFields {
        VenueFields {
            name: self.text("name"),
            city: self.text("city"),
            state: self.text("state"),
            address: self.text("address"),
            phone: self.text("phone"),
            genres: self.get_all("genres").into_iter().map(str::to_string).collect(),
            image_link: self.text("image_link"),
            facebook_link: self.optional("facebook_link"),
            website_link: self.optional("website_link"),
            seeking_talent: self.flag("seeking_talent"),
            seeking_description: self.optional("seeking_description"),
        }
    }

    pub fn artist_fields(&self) -> ArtistFields {
        ArtistFields {
            name: self.text("name"),
            city: self.text("city"),
            state: self.text("state"),
            phone: self.text("phone"),
            genres: self.get_all("genres").into_iter().map(str::to_string).collect(),
            image_link: self.text("image_link"),
            facebook_link: self.optional("facebook_link"),
            website_link: self.optional("website_link"),
            seeking_venue: self.flag("seeking_venue"),
            seeking_description: self.optional("seeking_description"),
        }
    }

    /// Decode the show form. Ids must be integers and the start time
    /// must be a recognizable timestamp.
    pub fn show_fields(&self) -> DomainResult<NewShow> {
        let mut errors = FieldErrors::new();

        let artist_id = self.id_field("artist_id", &mut errors);
        let venue_id = self.id_field("venue_id", &mut errors);

        let raw_start = self.get("start_time").unwrap_or_default().trim();
        let start_time = if raw_start.is_empty() {
            errors.push("start_time", "This field is required.");
            None
        } else {
            let parsed = parse_start_time(raw_start);
            if parsed.is_none() {
                errors.push("start_time", "Not a valid date and time.");
            }
            parsed
        };

        errors.finish()?;

        match (artist_id, venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) => Ok(NewShow {
                artist_id,
                venue_id,
                start_time,
            }),
            _ => Err(DomainError::InvariantViolation(
                "show form decoded without errors but with missing fields".into(),
            )),
        }
    }

    fn id_field(&self, key: &str, errors: &mut FieldErrors) -> Option<i64> {
        let raw = self.get(key).unwrap_or_default().trim();
        if !errors.require(key, raw) {
            return None;
        }
        match raw.parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => {
                errors.push(key, "Must be a whole number.");
                None
            }
        }
    }
}

impl From<Vec<(String, String)>> for FormData {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::from_pairs(pairs)
    }
}
