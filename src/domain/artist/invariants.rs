use super::entity::ArtistFields;
use crate::domain::validation::{FieldErrors, MAX_SEEKING_DESCRIPTION_CHARS};
use crate::domain::DomainResult;

/// Validates a normalized artist form
pub fn validate_artist_fields(fields: &ArtistFields) -> DomainResult<()> {
    let mut errors = FieldErrors::new();

    errors.require("name", &fields.name);
    errors.require("city", &fields.city);
    errors.state_code("state", &fields.state);
    errors.phone("phone", &fields.phone);
    errors.non_empty_list("genres", &fields.genres);
    errors.url("image_link", &fields.image_link);
    errors.optional_url("facebook_link", fields.facebook_link.as_deref());
    errors.optional_url("website_link", fields.website_link.as_deref());
    errors.max_chars(
        "seeking_description",
        fields.seeking_description.as_deref(),
        MAX_SEEKING_DESCRIPTION_CHARS,
    );

    errors.finish()
}
