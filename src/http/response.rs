// src/http/response.rs

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use log::error;

use crate::application::page::{Page, Renderer};

/// Render a page with the configured renderer.
/// A renderer failure degrades to a bare 500.
pub fn render_page(renderer: &dyn Renderer, page: Page) -> Response {
    let status = StatusCode::from_u16(page.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    match renderer.render(&page) {
        Ok(body) => (
            status,
            [(header::CONTENT_TYPE, renderer.content_type())],
            body,
        )
            .into_response(),
        Err(err) => {
            error!(
                "event=render status=error template={} error={}",
                page.template.path(),
                err
            );
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
