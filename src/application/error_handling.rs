// src/application/error_handling.rs
//
// Error pages
//
// ARCHITECTURE:
// - Maps internal errors → status code + error view
// - Never exposes internal implementation details
// - Logs server-side faults for debugging

use log::{error, warn};
use serde::{Deserialize, Serialize};

use crate::application::page::{Page, Template};
use crate::error::{AppError, AppResult};

/// Context of the 404 and 500 pages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Resource not found (404)
    NotFound,

    /// Invalid input that no form could show (400)
    Validation,

    /// Database/persistence error (500)
    Database,

    /// Other/unknown error (500)
    Internal,
}

impl ErrorType {
    pub fn status(self) -> u16 {
        match self {
            ErrorType::NotFound => 404,
            ErrorType::Validation => 400,
            ErrorType::Database | ErrorType::Internal => 500,
        }
    }

    pub fn template(self) -> Template {
        match self {
            ErrorType::NotFound => Template::NotFound,
            _ => Template::ServerError,
        }
    }
}

impl ErrorResponse {
    pub fn from_app_error(error: &AppError) -> Self {
        match error {
            AppError::NotFound { .. } => Self {
                success: false,
                error_type: ErrorType::NotFound,
                message: error.to_string(),
                details: None,
            },

            AppError::Domain(domain_error) => Self {
                success: false,
                error_type: ErrorType::Validation,
                message: "The submitted data is invalid".to_string(),
                details: Some(domain_error.to_string()),
            },

            AppError::Database(_) | AppError::Pool(_) => {
                error!("event=request status=error kind=database error={}", error);

                Self {
                    success: false,
                    error_type: ErrorType::Database,
                    message: "Database operation failed".to_string(),
                    details: None,
                }
            }

            other => {
                error!("event=request status=error kind=internal error={}", other);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: "Something went wrong".to_string(),
                    details: None,
                }
            }
        }
    }

    pub fn not_found(path: &str) -> Self {
        Self {
            success: false,
            error_type: ErrorType::NotFound,
            message: format!("{} not found", path),
            details: None,
        }
    }

    pub fn into_page(self) -> Page {
        let error_type = self.error_type;
        let page = Page::new(error_type.template(), &self).unwrap_or_else(|err| {
            warn!("event=error_page status=degraded error={}", err);
            Page {
                template: error_type.template(),
                status: 200,
                flash: None,
                context: serde_json::Value::Null,
            }
        });
        page.with_status(error_type.status())
    }
}

/// Turns a handler result into the page to send, whatever happened
pub trait ToErrorPage {
    fn or_error_page(self) -> Page;
}

impl ToErrorPage for AppResult<Page> {
    fn or_error_page(self) -> Page {
        self.unwrap_or_else(|e| ErrorResponse::from_app_error(&e).into_page())
    }
}
