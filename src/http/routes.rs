// src/http/routes.rs
//
// Route table
//
// RULES:
// - Every request runs its handler on the blocking pool, start to finish
// - Ids in paths are integers; anything else is a 404
// - Unknown paths render the 404 page

use std::sync::Arc;

use axum::extract::{FromRequestParts, Path, State};
use axum::http::request::Parts;
use axum::http::Uri;
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Form, Router};
use log::error;

use super::response::render_page;
use crate::application::error_handling::{ErrorResponse, ToErrorPage};
use crate::application::forms::FormData;
use crate::application::handlers;
use crate::application::page::Page;
use crate::application::state::AppState;
use crate::error::{AppError, AppResult};

pub type SharedState = Arc<AppState>;

type FormPairs = Form<Vec<(String, String)>>;

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(index))
        // venues
        .route("/venues", get(list_venues))
        .route("/venues/search", post(search_venues))
        .route(
            "/venues/create",
            get(create_venue_form).post(create_venue_submission),
        )
        .route("/venues/{id}", get(show_venue))
        .route(
            "/venues/{id}/edit",
            get(edit_venue_form).post(edit_venue_submission),
        )
        .route(
            "/venues/{id}/delete",
            get(delete_venue_confirm).post(delete_venue_submission),
        )
        // artists
        .route("/artists", get(list_artists))
        .route("/artists/search", post(search_artists))
        .route(
            "/artists/create",
            get(create_artist_form).post(create_artist_submission),
        )
        .route("/artists/{id}", get(show_artist))
        .route(
            "/artists/{id}/edit",
            get(edit_artist_form).post(edit_artist_submission),
        )
        // shows
        .route("/shows", get(list_shows))
        .route(
            "/shows/create",
            get(create_show_form).post(create_show_submission),
        )
        .fallback(not_found)
        .with_state(state)
}

/// Run a synchronous handler on the blocking pool and render its page.
async fn run<F>(state: SharedState, handler: F) -> Response
where
    F: FnOnce(&AppState) -> AppResult<Page> + Send + 'static,
{
    let renderer = state.renderer.clone();

    let page = match tokio::task::spawn_blocking(move || handler(&state).or_error_page()).await {
        Ok(page) => page,
        Err(join_err) => {
            error!("event=request status=aborted error={}", join_err);
            ErrorResponse::from_app_error(&AppError::Other(join_err.to_string())).into_page()
        }
    };

    render_page(renderer.as_ref(), page)
}

/// Integer id taken from the `{id}` path segment
pub struct EntityId(pub i64);

impl FromRequestParts<SharedState> for EntityId {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let raw = Path::<String>::from_request_parts(parts, state)
            .await
            .map(|Path(raw)| raw)
            .unwrap_or_default();

        raw.parse::<i64>().map(EntityId).map_err(|_| {
            render_page(
                state.renderer.as_ref(),
                ErrorResponse::not_found(parts.uri.path()).into_page(),
            )
        })
    }
}

async fn not_found(State(state): State<SharedState>, uri: Uri) -> Response {
    render_page(
        state.renderer.as_ref(),
        ErrorResponse::not_found(uri.path()).into_page(),
    )
}

// ============================================================================
// HOME
// ============================================================================

async fn index(State(state): State<SharedState>) -> Response {
    run(state, handlers::index).await
}

// ============================================================================
// VENUES
// ============================================================================

async fn list_venues(State(state): State<SharedState>) -> Response {
    run(state, handlers::list_venues).await
}

async fn search_venues(State(state): State<SharedState>, Form(pairs): FormPairs) -> Response {
    let form = FormData::from(pairs);
    run(state, move |s| handlers::search_venues(s, &form)).await
}

async fn show_venue(State(state): State<SharedState>, EntityId(id): EntityId) -> Response {
    run(state, move |s| handlers::show_venue(s, id)).await
}

async fn create_venue_form(State(state): State<SharedState>) -> Response {
    run(state, |_| handlers::create_venue_form()).await
}

async fn create_venue_submission(
    State(state): State<SharedState>,
    Form(pairs): FormPairs,
) -> Response {
    let form = FormData::from(pairs);
    run(state, move |s| handlers::create_venue_submission(s, &form)).await
}

async fn edit_venue_form(State(state): State<SharedState>, EntityId(id): EntityId) -> Response {
    run(state, move |s| handlers::edit_venue_form(s, id)).await
}

async fn edit_venue_submission(
    State(state): State<SharedState>,
    EntityId(id): EntityId,
    Form(pairs): FormPairs,
) -> Response {
    let form = FormData::from(pairs);
    run(state, move |s| handlers::edit_venue_submission(s, id, &form)).await
}

async fn delete_venue_confirm(
    State(state): State<SharedState>,
    EntityId(id): EntityId,
) -> Response {
    run(state, move |s| handlers::delete_venue_confirm(s, id)).await
}

async fn delete_venue_submission(
    State(state): State<SharedState>,
    EntityId(id): EntityId,
) -> Response {
    run(state, move |s| handlers::delete_venue_submission(s, id)).await
}

// ============================================================================
// ARTISTS
// ============================================================================

async fn list_artists(State(state): State<SharedState>) -> Response {
    run(state, handlers::list_artists).await
}

async fn search_artists(State(state): State<SharedState>, Form(pairs): FormPairs) -> Response {
    let form = FormData::from(pairs);
    run(state, move |s| handlers::search_artists(s, &form)).await
}

async fn show_artist(State(state): State<SharedState>, EntityId(id): EntityId) -> Response {
    run(state, move |s| handlers::show_artist(s, id)).await
}

async fn create_artist_form(State(state): State<SharedState>) -> Response {
    run(state, |_| handlers::create_artist_form()).await
}

async fn create_artist_submission(
    State(state): State<SharedState>,
    Form(pairs): FormPairs,
) -> Response {
    let form = FormData::from(pairs);
    run(state, move |s| handlers::create_artist_submission(s, &form)).await
}

async fn edit_artist_form(State(state): State<SharedState>, EntityId(id): EntityId) -> Response {
    run(state, move |s| handlers::edit_artist_form(s, id)).await
}

async fn edit_artist_submission(
    State(state): State<SharedState>,
    EntityId(id): EntityId,
    Form(pairs): FormPairs,
) -> Response {
    let form = FormData::from(pairs);
    run(state, move |s| handlers::edit_artist_submission(s, id, &form)).await
}

// ============================================================================
// SHOWS
// ============================================================================

async fn list_shows(State(state): State<SharedState>) -> Response {
    run(state, handlers::list_shows).await
}

async fn create_show_form(State(state): State<SharedState>) -> Response {
    run(state, |_| handlers::create_show_form()).await
}

async fn create_show_submission(
    State(state): State<SharedState>,
    Form(pairs): FormPairs,
) -> Response {
    let form = FormData::from(pairs);
    run(state, move |s| handlers::create_show_submission(s, &form)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::db::test_support::TestDatabase;

    fn app(db: &TestDatabase) -> Router {
        router(Arc::new(AppState::new(db.pool.clone(), 10)))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    const HOP: &str = "name=The+Musical+Hop&city=San+Francisco&state=CA\
        &address=1015+Folsom+Street&phone=123-123-1234&genres=Jazz&genres=Reggae\
        &image_link=https%3A%2F%2Fimages.example.com%2Fhop.jpg&seeking_talent=y";

    #[tokio::test]
    async fn test_home_page() {
        let db = TestDatabase::new();
        let (status, body) = send(app(&db), get_req("/")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["template"], "pages/home.html");
        assert_eq!(body["context"]["venues"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_unknown_path_is_404_page() {
        let db = TestDatabase::new();
        let (status, body) = send(app(&db), get_req("/nowhere")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["template"], "errors/404.html");
    }

    #[tokio::test]
    async fn test_non_integer_and_missing_ids_are_404() {
        let db = TestDatabase::new();

        let (status, body) = send(app(&db), get_req("/venues/abc")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["template"], "errors/404.html");

        let (status, _) = send(app(&db), get_req("/artists/7")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(app(&db), get_req("/venues/7/delete")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_route_is_not_taken_for_an_id() {
        let db = TestDatabase::new();
        let (status, body) = send(app(&db), get_req("/venues/create")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["template"], "forms/new_venue.html");
        assert_eq!(body["context"]["states"].as_array().unwrap().len(), 51);
    }

    #[tokio::test]
    async fn test_venue_lifecycle_over_http() {
        let db = TestDatabase::new();

        let (status, body) = send(app(&db), post_form("/venues/create", HOP)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["template"], "pages/home.html");
        assert_eq!(
            body["flash"]["message"],
            "Venue The Musical Hop was successfully listed!"
        );

        let (status, body) = send(app(&db), get_req("/venues/1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["context"]["genres"], serde_json::json!(["Jazz", "Reggae"]));

        let (_, body) = send(app(&db), post_form("/venues/search", "search_term=HOP")).await;
        assert_eq!(body["template"], "pages/search_venues.html");
        assert_eq!(body["context"]["count"], 1);

        let (_, body) = send(app(&db), get_req("/venues")).await;
        assert_eq!(body["context"]["areas"][0]["city"], "San Francisco");

        let (status, body) = send(app(&db), post_form("/venues/1/delete", "")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["flash"]["message"],
            "Venue The Musical Hop was deleted successfully!"
        );
    }

    #[tokio::test]
    async fn test_invalid_artist_form_is_400() {
        let db = TestDatabase::new();
        let (status, body) = send(
            app(&db),
            post_form("/artists/create", "name=Guns+N+Petals&state=XX"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["template"], "forms/new_artist.html");
        assert_eq!(body["context"]["form"]["name"], "Guns N Petals");
    }

    #[tokio::test]
    async fn test_shows_page() {
        let db = TestDatabase::new();
        send(app(&db), post_form("/venues/create", HOP)).await;
        send(
            app(&db),
            post_form(
                "/artists/create",
                "name=Guns+N+Petals&city=San+Francisco&state=CA&phone=326-123-5000\
                 &genres=Rock+n+Roll&image_link=https%3A%2F%2Fimages.example.com%2Fgnp.jpg",
            ),
        )
        .await;

        let (status, body) = send(
            app(&db),
            post_form(
                "/shows/create",
                "artist_id=1&venue_id=1&start_time=2019-05-21+21%3A30%3A00",
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["flash"]["message"], "Show was successfully listed!");

        let (_, body) = send(app(&db), get_req("/shows")).await;
        let show = &body["context"]["shows"][0];
        assert_eq!(show["artist_name"], "Guns N Petals");
        assert_eq!(show["start_time_display"], "Tuesday May, 21, 2019 at 9:30PM");
    }
}
