// src/http/mod.rs
//
// HTTP surface
//
// Thin axum adapter over the application handlers. Nothing here knows
// about venues or artists beyond which handler a path goes to.

pub mod response;
pub mod routes;

pub use response::render_page;
pub use routes::{router, SharedState};
