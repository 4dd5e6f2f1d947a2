//! HTTP DTOs for the family endpoints.
//!
//! Create and update bodies deserialize straight into
//! [`PersonCreate`](crate::model::PersonCreate) and
//! [`PersonUpdate`](crate::model::PersonUpdate); only the search body and the error
//! body live here.

use serde::{Deserialize, Serialize};

/// Body of the `/family/search/*` endpoints. A missing `text` is an empty term.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub text: String,
}

/// JSON body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error kind.
    pub error: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
