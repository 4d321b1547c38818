// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Sits between the HTTP surface and the services
// - Translates form payloads into domain field sets
// - Translates service results into view-models and pages
// - Owns error-to-page translation

pub mod dto;
pub mod error_handling;
pub mod format;
pub mod forms;
pub mod handlers;
pub mod page;
pub mod state;

pub use error_handling::{ErrorResponse, ErrorType, ToErrorPage};
pub use forms::FormData;
pub use page::{JsonRenderer, Page, Renderer, Template};
pub use state::AppState;
