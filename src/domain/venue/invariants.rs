use super::entity::VenueFields;
use crate::domain::validation::{FieldErrors, MAX_SEEKING_DESCRIPTION_CHARS};
use crate::domain::DomainResult;

/// Validates a normalized venue form
pub fn validate_venue_fields(fields: &VenueFields) -> DomainResult<()> {
    let mut errors = FieldErrors::new();

    errors.require("name", &fields.name);
    errors.require("city", &fields.city);
    errors.state_code("state", &fields.state);
    errors.require("address", &fields.address);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    fn musical_hop() -> VenueFields {
        VenueFields {
            name: "The Musical Hop".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            address: "1015 Folsom Street".into(),
            phone: "123-123-1234".into(),
            genres: vec!["Jazz".into(), "Reggae".into()],
            image_link: "https://images.example.com/hop.jpg".into(),
            facebook_link: Some("https://www.facebook.com/TheMusicalHop".into()),
            website_link: None,
            seeking_talent: true,
            seeking_description: Some("Looking for local artists".into()),
        }
    }

    #[test]
    fn test_valid_venue() {
        assert!(validate_venue_fields(&musical_hop()).is_ok());
    }

    #[test]
    fn test_every_problem_is_reported() {
        let mut fields = musical_hop();
        fields.name = " ".into();
        fields.address = String::new();
        fields.genres.clear();

        match validate_venue_fields(&fields) {
            Err(DomainError::Validation(errors)) => {
                let names: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(names, vec!["name", "address", "genres"]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
