// src/application/handlers/mod.rs
//
// Request handlers
//
// ARCHITECTURE:
// - One handler per use case
// - Handlers parse input, call a service, build a view-model
// - Handlers NEVER contain business logic
// - Handlers are synchronous; the HTTP layer decides where they run

pub mod artist_handlers;
pub mod home_handlers;
pub mod show_handlers;
pub mod venue_handlers;

pub use artist_handlers::*;
pub use home_handlers::*;
pub use show_handlers::*;
pub use venue_handlers::*;

use self::home_handlers::landing_page;
use crate::application::page::Page;
use crate::application::state::AppState;
use crate::domain::FieldError;
use crate::error::{AppError, AppResult};
use crate::services::MutationOutcome;

/// Finish a form submission.
///
/// A settled mutation (success or failure message) lands on the home page.
/// Rejected input re-renders the form through `invalid` with status 400.
fn finish_submission<T>(
    state: &AppState,
    result: AppResult<MutationOutcome<T>>,
    invalid: impl FnOnce(Vec<FieldError>) -> AppResult<Page>,
) -> AppResult<Page> {
    match result {
        Ok(outcome) => Ok(landing_page(state)?.with_flash(outcome.flash)),
        Err(AppError::Domain(err)) => Ok(invalid(err.field_errors())?.with_status(400)),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::forms::FormData;
    use crate::application::page::Template;
    use crate::db::test_support::TestDatabase;
    use crate::services::{FlashLevel, MutationOutcome};

    fn form(pairs: &[(&str, &str)]) -> FormData {
        FormData::from_pairs(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn hop_form() -> FormData {
        form(&[
            ("name", "The Musical Hop"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("address", "1015 Folsom Street"),
            ("phone", "123-123-1234"),
            ("genres", "Jazz"),
            ("genres", "Reggae"),
            ("image_link", "https://images.example.com/hop.jpg"),
            ("seeking_talent", "y"),
        ])
    }

    #[test]
    fn test_create_venue_lands_on_home_with_message() {
        let db = TestDatabase::new();
        let state = AppState::new(db.pool.clone(), 10);

        let page = create_venue_submission(&state, &hop_form()).unwrap();

        assert_eq!(page.template, Template::Home);
        assert_eq!(page.status, 200);
        let flash = page.flash.unwrap();
        assert_eq!(flash.level, FlashLevel::Success);
        assert_eq!(flash.message, "Venue The Musical Hop was successfully listed!");
        assert_eq!(page.context["venues"][0]["name"], "The Musical Hop");
    }

    #[test]
    fn test_failure_message_survives_unreachable_store() {
        let db = TestDatabase::with_pool_size(1);
        let state = AppState::new(db.pool.clone(), 10);
        // hold the only connection so the digest read times out
        let _held = db.pool.get().unwrap();

        let outcome: MutationOutcome<i64> =
            MutationOutcome::failed("An error occurred. Venue The Musical Hop could not be listed.");
        let page = finish_submission(&state, Ok(outcome), |_| unreachable!()).unwrap();

        assert_eq!(page.template, Template::Home);
        assert_eq!(page.status, 200);
        assert_eq!(page.context["venues"], serde_json::json!([]));
        assert_eq!(page.context["artists"], serde_json::json!([]));
        let flash = page.flash.unwrap();
        assert_eq!(flash.level, FlashLevel::Error);
        assert_eq!(
            flash.message,
            "An error occurred. Venue The Musical Hop could not be listed."
        );
    }

    #[test]
    fn test_invalid_venue_rerenders_form() {
        let db = TestDatabase::new();
        let state = AppState::new(db.pool.clone(), 10);

        let page = create_venue_submission(&state, &form(&[("name", "Half a venue")])).unwrap();

        assert_eq!(page.template, Template::NewVenue);
        assert_eq!(page.status, 400);
        assert_eq!(page.context["form"]["name"], "Half a venue");
        assert!(page.context["errors"].as_array().unwrap().len() >= 4);
    }

    #[test]
    fn test_show_with_bad_ids_rerenders_form() {
        let db = TestDatabase::new();
        let state = AppState::new(db.pool.clone(), 10);

        let page = create_show_submission(
            &state,
            &form(&[
                ("artist_id", "1"),
                ("venue_id", "1"),
                ("start_time", "2035-04-01 20:00:00"),
            ]),
        )
        .unwrap();

        assert_eq!(page.template, Template::NewShow);
        assert_eq!(page.status, 400);
        assert_eq!(page.context["errors"][0]["field"], "artist_id");
        assert_eq!(page.context["start_time"], "2035-04-01 20:00:00");
    }

    #[test]
    fn test_venue_detail_and_delete_flow() {
        let db = TestDatabase::new();
        let state = AppState::new(db.pool.clone(), 10);
        create_venue_submission(&state, &hop_form()).unwrap();

        let detail = show_venue(&state, 1).unwrap();
        assert_eq!(detail.template, Template::ShowVenue);
        assert_eq!(detail.context["genres"], serde_json::json!(["Jazz", "Reggae"]));
        assert_eq!(detail.context["seeking_talent"], true);

        let confirm = delete_venue_confirm(&state, 1).unwrap();
        assert_eq!(confirm.context["show_count"], 0);

        let deleted = delete_venue_submission(&state, 1).unwrap();
        assert_eq!(
            deleted.flash.unwrap().message,
            "Venue The Musical Hop was deleted successfully!"
        );
        assert!(show_venue(&state, 1).unwrap_err().is_not_found());
    }

    #[test]
    fn test_edit_form_is_prefilled() {
        let db = TestDatabase::new();
        let state = AppState::new(db.pool.clone(), 10);
        create_venue_submission(&state, &hop_form()).unwrap();

        let page = edit_venue_form(&state, 1).unwrap();
        assert_eq!(page.template, Template::EditVenue);
        assert_eq!(page.context["venue_id"], 1);
        assert_eq!(page.context["form"]["address"], "1015 Folsom Street");
    }

    #[test]
    fn test_search_page_context() {
        let db = TestDatabase::new();
        let state = AppState::new(db.pool.clone(), 10);
        create_venue_submission(&state, &hop_form()).unwrap();

        let page = search_venues(&state, &form(&[("search_term", "hop")])).unwrap();
        assert_eq!(page.template, Template::SearchVenues);
        assert_eq!(page.context["count"], 1);
        assert_eq!(page.context["data"][0]["name"], "The Musical Hop");
    }
}
