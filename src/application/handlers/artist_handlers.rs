// src/application/handlers/artist_handlers.rs
//
// Artist Request Handlers

use super::finish_submission;
use crate::application::dto::{
    ArtistDetailView, ArtistFormView, ArtistListView, ArtistSummaryDto, SearchResultsView,
};
use crate::application::forms::FormData;
use crate::application::page::{Page, Template};
use crate::application::state::AppState;
use crate::domain::{ArtistFields, ArtistId};
use crate::error::AppResult;

/// GET /artists
pub fn list_artists(state: &AppState) -> AppResult<Page> {
    let artists = state.query_service.list_artists()?;
    Page::new(
        Template::Artists,
        ArtistListView {
            artists: artists.into_iter().map(ArtistSummaryDto::from).collect(),
        },
    )
}

/// POST /artists/search
pub fn search_artists(state: &AppState, form: &FormData) -> AppResult<Page> {
    let term = form.get("search_term").unwrap_or_default();
    let results = state.query_service.search_artists(term)?;
    Page::new(Template::SearchArtists, SearchResultsView::from(results))
}

/// GET /artists/{id}
pub fn show_artist(state: &AppState, artist_id: ArtistId) -> AppResult<Page> {
    let detail = state.query_service.get_artist_detail(artist_id)?;
    Page::new(Template::ShowArtist, ArtistDetailView::from(detail))
}

/// GET /artists/create
pub fn create_artist_form() -> AppResult<Page> {
    Page::new(
        Template::NewArtist,
        ArtistFormView::new(None, ArtistFields::default(), Vec::new()),
    )
}

/// POST /artists/create
pub fn create_artist_submission(state: &AppState, form: &FormData) -> AppResult<Page> {
    let fields = form.artist_fields();
    let result = state.mutation_service.create_artist(fields.clone());

    finish_submission(state, result, |errors| {
        Page::new(Template::NewArtist, ArtistFormView::new(None, fields, errors))
    })
}

/// GET /artists/{id}/edit
pub fn edit_artist_form(state: &AppState, artist_id: ArtistId) -> AppResult<Page> {
    let artist = state.query_service.get_artist_for_edit(artist_id)?;
    Page::new(
        Template::EditArtist,
        ArtistFormView::new(Some(artist.id), artist.to_fields(), Vec::new()),
    )
}

/// POST /artists/{id}/edit
pub fn edit_artist_submission(
    state: &AppState,
    artist_id: ArtistId,
    form: &FormData,
) -> AppResult<Page> {
    let fields = form.artist_fields();
    let result = state.mutation_service.update_artist(artist_id, fields.clone());

    finish_submission(state, result, |errors| {
        Page::new(
            Template::EditArtist,
            ArtistFormView::new(Some(artist_id), fields, errors),
        )
    })
}
