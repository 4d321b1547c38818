// src/application/handlers/home_handlers.rs

use log::warn;

use crate::application::dto::{EntityCardDto, HomeView};
use crate::application::page::{Page, Template};
use crate::application::state::AppState;
use crate::error::AppResult;

/// GET /
pub fn index(state: &AppState) -> AppResult<Page> {
    home_page(state)
}

pub(crate) fn home_page(state: &AppState) -> AppResult<Page> {
    let digest = state.query_service.homepage_digest()?;

    Page::new(
        Template::Home,
        HomeView {
            venues: digest.venues.iter().map(EntityCardDto::from).collect(),
            artists: digest.artists.iter().map(EntityCardDto::from).collect(),
        },
    )
}

/// Home page shown after a submission.
///
/// The status message has to reach the user even when the store is out of
/// reach, so a persistence failure here yields an empty digest.
pub(crate) fn landing_page(state: &AppState) -> AppResult<Page> {
    match home_page(state) {
        Err(err) if err.is_persistence() => {
            warn!("event=home_digest_unavailable error={}", err);
            Page::new(
                Template::Home,
                HomeView {
                    venues: Vec::new(),
                    artists: Vec::new(),
                },
            )
        }
        other => other,
    }
}
