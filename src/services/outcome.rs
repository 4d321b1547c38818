// src/services/outcome.rs
//
// Result of a write operation as seen by the user

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashLevel {
    Success,
    Error,
}

/// One-shot status line shown on the next page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub message: String,
}

impl FlashMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }
}

/// Every mutation finishes with a status message.
///
/// A persistence failure is not an `Err`: the transaction was rolled back,
/// `value` is `None` and `flash` carries the failure text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome<T> {
    pub value: Option<T>,
    pub flash: FlashMessage,
}

impl<T> MutationOutcome<T> {
    pub fn succeeded(value: T, message: impl Into<String>) -> Self {
        Self {
            value: Some(value),
            flash: FlashMessage::success(message),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            value: None,
            flash: FlashMessage::error(message),
        }
    }

    pub fn is_success(&self) -> bool {
        self.flash.level == FlashLevel::Success
    }
}
