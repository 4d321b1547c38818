// src/application/state.rs

use std::sync::Arc;

use crate::application::page::{JsonRenderer, Renderer};
use crate::db::ConnectionPool;
use crate::repositories::{SqliteArtistRepository, SqliteShowRepository, SqliteVenueRepository};
use crate::services::{MutationService, QueryService};

/// Application state shared by every request.
/// All fields are Arc-wrapped for thread-safe sharing across handlers.
/// Built once in main.rs; dropping the last clone closes the pool.
pub struct AppState {
    pub pool: Arc<ConnectionPool>,
    pub query_service: Arc<QueryService>,
    pub mutation_service: Arc<MutationService>,
    pub renderer: Arc<dyn Renderer>,
}

impl AppState {
    /// Wire the SQLite repositories into both services
    pub fn new(pool: Arc<ConnectionPool>, homepage_limit: u32) -> Self {
        let venue_repo = Arc::new(SqliteVenueRepository::new());
        let artist_repo = Arc::new(SqliteArtistRepository::new());
        let show_repo = Arc::new(SqliteShowRepository::new());

        let query_service = QueryService::new(
            pool.clone(),
            venue_repo.clone(),
            artist_repo.clone(),
            show_repo.clone(),
        )
        .with_homepage_limit(homepage_limit);

        let mutation_service =
            MutationService::new(pool.clone(), venue_repo, artist_repo, show_repo);

        Self {
            pool,
            query_service: Arc::new(query_service),
            mutation_service: Arc::new(mutation_service),
            renderer: Arc::new(JsonRenderer),
        }
    }

    pub fn with_renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.renderer = renderer;
        self
    }
}
