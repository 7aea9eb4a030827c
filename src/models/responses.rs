//! Response DTOs for the item service API
//!
//! Defines the structure of outgoing HTTP response bodies that are not
//! plain `Item` values.

use serde::Serialize;

/// Body of a successful update (PUT /items?id=N), encoded as a JSON string
pub const ITEM_UPDATED: &str = "Item updated successfully";

/// Body of a successful delete (DELETE /items?id=N), encoded as a JSON string
pub const ITEM_DELETED: &str = "Item deleted successfully";

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
