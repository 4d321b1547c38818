// src/application/handlers/show_handlers.rs
//
// Show Request Handlers

use chrono::Utc;

use super::finish_submission;
use crate::application::dto::{ShowFormView, ShowListView, ShowRowDto};
use crate::application::forms::FormData;
use crate::application::page::{Page, Template};
use crate::application::state::AppState;
use crate::domain::FieldError;
use crate::error::AppResult;

/// Layout the show form pre-fills and documents
const FORM_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// GET /shows
pub fn list_shows(state: &AppState) -> AppResult<Page> {
    let shows = state.query_service.list_shows()?;
    Page::new(
        Template::Shows,
        ShowListView {
            shows: shows.into_iter().map(ShowRowDto::from).collect(),
        },
    )
}

/// GET /shows/create
pub fn create_show_form() -> AppResult<Page> {
    Page::new(
        Template::NewShow,
        ShowFormView {
            start_time: Utc::now().format(FORM_TIME_FORMAT).to_string(),
            ..Default::default()
        },
    )
}

/// POST /shows/create
pub fn create_show_submission(state: &AppState, form: &FormData) -> AppResult<Page> {
    let echo = |errors: Vec<FieldError>| {
        Page::new(
            Template::NewShow,
            ShowFormView {
                artist_id: form.get("artist_id").unwrap_or_default().to_string(),
                venue_id: form.get("venue_id").unwrap_or_default().to_string(),
                start_time: form.get("start_time").unwrap_or_default().to_string(),
                errors,
            },
        )
    };

    let show = match form.show_fields() {
        Ok(show) => show,
        Err(err) => return Ok(echo(err.field_errors())?.with_status(400)),
    };

    let result = state.mutation_service.create_show(show);
    finish_submission(state, result, echo)
}
