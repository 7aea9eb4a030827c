//! Request and Response models for the item service API
//!
//! This module defines the `Item` entity and the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

pub mod item;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use item::Item;
pub use requests::{ItemQuery, ItemRequest};
pub use responses::{ErrorResponse, ITEM_DELETED, ITEM_UPDATED};
