use serde::{Deserialize, Serialize};

use crate::domain::genres::Genres;
use crate::domain::validation::optional_text;

/// Surrogate key assigned by the store
pub type ArtistId = i64;

/// A performer that plays shows at venues
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    /// Immutable once assigned
    pub id: ArtistId,

    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,

    pub genres: Genres,

    pub image_link: String,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,

    /// Whether the artist is looking for venues
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Complete field set submitted by the artist form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistFields {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: String,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl ArtistFields {
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_uppercase(),
            phone: self.phone.trim().to_string(),
            genres: Genres::from_tokens(&self.genres).into_vec(),
            image_link: self.image_link.trim().to_string(),
            facebook_link: optional_text(self.facebook_link),
            website_link: optional_text(self.website_link),
            seeking_venue: self.seeking_venue,
            seeking_description: optional_text(self.seeking_description),
        }
    }
}

impl Artist {
    pub fn from_fields(id: ArtistId, fields: ArtistFields) -> Self {
        Self {
            id,
            name: fields.name,
            city: fields.city,
            state: fields.state,
            phone: fields.phone,
            genres: Genres::from_tokens(fields.genres),
            image_link: fields.image_link,
            facebook_link: fields.facebook_link,
            website_link: fields.website_link,
            seeking_venue: fields.seeking_venue,
            seeking_description: fields.seeking_description,
        }
    }

    /// Full replacement of every editable field
    pub fn replace_fields(&mut self, fields: ArtistFields) {
        *self = Self::from_fields(self.id, fields);
    }

    pub fn to_fields(&self) -> ArtistFields {
        ArtistFields {
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            phone: self.phone.clone(),
            genres: self.genres.as_slice().to_vec(),
            image_link: self.image_link.clone(),
            facebook_link: self.facebook_link.clone(),
            website_link: self.website_link.clone(),
            seeking_venue: self.seeking_venue,
            seeking_description: self.seeking_description.clone(),
        }
    }
}

impl std::fmt::Display for Artist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
