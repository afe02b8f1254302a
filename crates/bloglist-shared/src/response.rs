//! Error body returned by every failing endpoint.

use serde::{Deserialize, Serialize};

/// JSON error body: `{ "error": "<message>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    // Common error constructors
    pub fn unknown_endpoint() -> Self {
        Self::new("unknown endpoint")
    }

    pub fn invalid_data() -> Self {
        Self::new("invalid data")
    }

    pub fn internal_error() -> Self {
        Self::new("internal server error")
    }
}
