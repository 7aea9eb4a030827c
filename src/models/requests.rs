//! Request DTOs for the item service API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

use crate::error::{ItemError, Result};

/// Request body for create (POST /items) and update (PUT /items?id=N)
///
/// Any `id` field in the body is ignored; the id of an update always comes
/// from the query string. A missing `title` decodes as the empty string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemRequest {
    #[serde(default)]
    pub title: String,
}

impl ItemRequest {
    /// Decodes a request body, mapping malformed JSON to `BadRequest`.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| ItemError::BadRequest(e.to_string()))
    }
}

/// Query string accepted by /items
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemQuery {
    #[serde(default)]
    pub id: Option<String>,
}

impl ItemQuery {
    /// Parses the `id` parameter.
    ///
    /// Returns `Ok(None)` when the parameter is absent or empty, and
    /// `InvalidId` when it is present but not an integer.
    pub fn id(&self) -> Result<Option<i64>> {
        match self.id.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse::<i64>()
                .map(Some)
                .map_err(|_| ItemError::InvalidId(format!("'{}' is not an integer", raw))),
        }
    }

    /// Like [`ItemQuery::id`], but a missing id is an error.
    pub fn require_id(&self) -> Result<i64> {
        self.id()?
            .ok_or_else(|| ItemError::InvalidId("missing id query parameter".to_string()))
    }
}
