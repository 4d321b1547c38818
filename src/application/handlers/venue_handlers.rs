// src/application/handlers/venue_handlers.rs
//
// Venue Request Handlers

use super::finish_submission;
use crate::application::dto::{
    DeleteVenueView, SearchResultsView, VenueDetailView, VenueFormView, VenueListView,
};
use crate::application::forms::FormData;
use crate::application::page::{Page, Template};
use crate::application::state::AppState;
use crate::domain::{VenueFields, VenueId};
use crate::error::AppResult;

/// GET /venues
pub fn list_venues(state: &AppState) -> AppResult<Page> {
    let areas = state.query_service.list_venues_grouped()?;
    Page::new(Template::Venues, VenueListView { areas })
}

/// POST /venues/search
pub fn search_venues(state: &AppState, form: &FormData) -> AppResult<Page> {
    let term = form.get("search_term").unwrap_or_default();
    let results = state.query_service.search_venues(term)?;
    Page::new(Template::SearchVenues, SearchResultsView::from(results))
}

/// GET /venues/{id}
pub fn show_venue(state: &AppState, venue_id: VenueId) -> AppResult<Page> {
    let detail = state.query_service.get_venue_detail(venue_id)?;
    Page::new(Template::ShowVenue, VenueDetailView::from(detail))
}

/// GET /venues/create
pub fn create_venue_form() -> AppResult<Page> {
    Page::new(
        Template::NewVenue,
        VenueFormView::new(None, VenueFields::default(), Vec::new()),
    )
}

/// POST /venues/create
pub fn create_venue_submission(state: &AppState, form: &FormData) -> AppResult<Page> {
    let fields = form.venue_fields();
    let result = state.mutation_service.create_venue(fields.clone());

    finish_submission(state, result, |errors| {
        Page::new(Template::NewVenue, VenueFormView::new(None, fields, errors))
    })
}

/// GET /venues/{id}/edit
pub fn edit_venue_form(state: &AppState, venue_id: VenueId) -> AppResult<Page> {
    let venue = state.query_service.get_venue_for_edit(venue_id)?;
    Page::new(
        Template::EditVenue,
        VenueFormView::new(Some(venue.id), venue.to_fields(), Vec::new()),
    )
}

/// POST /venues/{id}/edit
pub fn edit_venue_submission(
    state: &AppState,
    venue_id: VenueId,
    form: &FormData,
) -> AppResult<Page> {
    let fields = form.venue_fields();
    let result = state.mutation_service.update_venue(venue_id, fields.clone());

    finish_submission(state, result, |errors| {
        Page::new(
            Template::EditVenue,
            VenueFormView::new(Some(venue_id), fields, errors),
        )
    })
}

/// GET /venues/{id}/delete
pub fn delete_venue_confirm(state: &AppState, venue_id: VenueId) -> AppResult<Page> {
    let preview = state.query_service.get_venue_for_delete(venue_id)?;
    Page::new(
        Template::DeleteVenue,
        DeleteVenueView {
            venue_id: preview.venue.id,
            venue_name: preview.venue.name,
            show_count: preview.show_count,
        },
    )
}

/// POST /venues/{id}/delete
pub fn delete_venue_submission(state: &AppState, venue_id: VenueId) -> AppResult<Page> {
    let result = state.mutation_service.delete_venue(venue_id);
    finish_submission(state, result, |_| Page::new(Template::DeleteVenue, ()))
}
