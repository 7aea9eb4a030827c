//! API Module
//!
//! HTTP handlers and routing for the item service REST API.
//!
//! # Endpoints
//! - `POST /items` - Create an item
//! - `GET /items` - List every item (bypasses the cache)
//! - `GET /items?id=N` - Read one item (cache first)
//! - `PUT /items?id=N` - Update an item's title
//! - `DELETE /items?id=N` - Delete an item

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
