//! Item Cache - a small CRUD item service
//!
//! Serves create/read/update/delete on a single `Item` entity stored in
//! SQLite, with an in-process read cache in front of single-item reads.

pub mod api;
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::ItemCache;
pub use config::Config;
pub use db::ItemStore;
pub use error::{ItemError, Result};
pub use models::Item;
