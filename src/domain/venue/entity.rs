use serde::{Deserialize, Serialize};

use crate::domain::genres::Genres;
use crate::domain::validation::optional_text;

/// Surrogate key assigned by the store
pub type VenueId = i64;

/// A place that hosts shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    /// Immutable once assigned
    pub id: VenueId,

    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,

    pub genres: Genres,

    pub image_link: String,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,

    /// Whether the venue is looking for artists to book
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Complete field set submitted by the venue form.
///
/// Edits are full replacements: every field is written back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueFields {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: String,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl VenueFields {
    /// Trim text fields and collapse blank optionals to `None`
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_uppercase(),
            address: self.address.trim().to_string(),
            phone: self.phone.trim().to_string(),
            genres: Genres::from_tokens(&self.genres).into_vec(),
            image_link: self.image_link.trim().to_string(),
            facebook_link: optional_text(self.facebook_link),
            website_link: optional_text(self.website_link),
            seeking_talent: self.seeking_talent,
            seeking_description: optional_text(self.seeking_description),
        }
    }
}

impl Venue {
    /// Materialize a stored venue from a submitted form
    pub fn from_fields(id: VenueId, fields: VenueFields) -> Self {
        let mut venue = Self {
            id,
            name: String::new(),
            city: String::new(),
            state: String::new(),
            address: String::new(),
            phone: String::new(),
            genres: Genres::default(),
            image_link: String::new(),
            facebook_link: None,
            website_link: None,
            seeking_talent: false,
            seeking_description: None,
        };
        venue.replace_fields(fields);
        venue
    }

    /// Overwrite every editable field. The id never changes.
    pub fn replace_fields(&mut self, fields: VenueFields) {
        self.name = fields.name;
        self.city = fields.city;
        self.state = fields.state;
        self.address = fields.address;
        self.phone = fields.phone;
        self.genres = Genres::from_tokens(fields.genres);
        self.image_link = fields.image_link;
        self.facebook_link = fields.facebook_link;
        self.website_link = fields.website_link;
        self.seeking_talent = fields.seeking_talent;
        self.seeking_description = fields.seeking_description;
    }

    /// Field set used to pre-fill the edit form
    pub fn to_fields(&self) -> VenueFields {
        VenueFields {
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            genres: self.genres.as_slice().to_vec(),
            image_link: self.image_link.clone(),
            facebook_link: self.facebook_link.clone(),
            website_link: self.website_link.clone(),
            seeking_talent: self.seeking_talent,
            seeking_description: self.seeking_description.clone(),
        }
    }
}

impl std::fmt::Display for Venue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
