//! API Handlers
//!
//! Request handlers for /items. Each handler orchestrates one store call and
//! the matching cache update; the cache lock is never held across the store
//! call, so concurrent writers to the same id settle on whichever cache write
//! lands last.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, info};

use crate::cache::ItemCache;
use crate::config::Config;
use crate::db::ItemStore;
use crate::error::{ItemError, Result};
use crate::models::{Item, ItemQuery, ItemRequest, ITEM_DELETED, ITEM_UPDATED};

/// Query extractor whose rejection surfaces as an `ItemError`.
type QueryParams = std::result::Result<Query<ItemQuery>, QueryRejection>;

/// Application state shared across all handlers.
///
/// The store and cache are injected here rather than living in globals.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Backing store
    pub store: ItemStore,
    /// Shared read cache
    pub cache: Arc<ItemCache>,
    /// Answer 404 for updates and deletes that match no row
    pub strict_writes: bool,
}

impl AppState {
    /// Creates a new AppState over `store` with an empty cache.
    pub fn new(store: ItemStore) -> Self {
        Self {
            store,
            cache: Arc::new(ItemCache::new()),
            strict_writes: false,
        }
    }

    /// Enables or disables strict write handling.
    pub fn with_strict_writes(mut self, strict_writes: bool) -> Self {
        self.strict_writes = strict_writes;
        self
    }

    /// Creates a new AppState from configuration, opening the database.
    pub fn from_config(config: &Config) -> Result<Self> {
        let store = ItemStore::open(&config.database_path)?;
        Ok(Self::new(store).with_strict_writes(config.strict_writes))
    }
}

/// Handler for POST /items
pub async fn create_item(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Item>)> {
    let req = ItemRequest::from_slice(&body)?;

    let id = state.store.insert(req.title.clone()).await?;
    let item = Item::new(id, req.title);
    state.cache.put(item.clone()).await;

    info!(id, "item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// Handler for GET /items
///
/// Dispatches on the `id` parameter: present reads one item, absent or
/// empty lists every item.
pub async fn get_items(
    State(state): State<AppState>,
    query: QueryParams,
) -> Result<Response> {
    let Query(query) = query?;
    match query.id()? {
        Some(id) => Ok(Json(read_item(&state, id).await?).into_response()),
        None => Ok(Json(read_all_items(&state).await?).into_response()),
    }
}

/// Reads one item, serving from the cache when possible.
///
/// A cache hit never touches the store, so it can return a value the store
/// no longer holds. A store miss leaves the cache unchanged.
pub async fn read_item(state: &AppState, id: i64) -> Result<Item> {
    if let Some(item) = state.cache.get(id).await {
        debug!(id, "cache hit");
        return Ok(item);
    }

    debug!(id, "cache miss");
    let item = state.store.get_by_id(id).await?;
    state.cache.put(item.clone()).await;
    Ok(item)
}

/// Lists every stored item, always straight from the store.
pub async fn read_all_items(state: &AppState) -> Result<Vec<Item>> {
    state.store.get_all().await
}

/// Handler for PUT /items?id=N
///
/// Unless strict writes are enabled, the cache entry is overwritten even when
/// no row matched, which leaves a phantom entry for an id the store lacks.
pub async fn update_item(
    State(state): State<AppState>,
    query: QueryParams,
    body: Bytes,
) -> Result<Json<&'static str>> {
    let Query(query) = query?;
    let id = query.require_id()?;
    let req = ItemRequest::from_slice(&body)?;

    let affected = state.store.update_by_id(id, req.title.clone()).await?;
    if affected == 0 && state.strict_writes {
        return Err(ItemError::NotFound(id));
    }

    state.cache.put(Item::new(id, req.title)).await;

    info!(id, affected, "item updated");
    Ok(Json(ITEM_UPDATED))
}

/// Handler for DELETE /items?id=N
pub async fn delete_item(
    State(state): State<AppState>,
    query: QueryParams,
) -> Result<Json<&'static str>> {
    let Query(query) = query?;
    let id = query.require_id()?;

    let affected = state.store.delete_by_id(id).await?;
    state.cache.delete(id).await;

    if affected == 0 && state.strict_writes {
        return Err(ItemError::NotFound(id));
    }

    info!(id, affected, "item deleted");
    Ok(Json(ITEM_DELETED))
}

/// Fallback for any method /items does not serve.
pub async fn method_not_allowed() -> ItemError {
    ItemError::MethodNotAllowed
}
