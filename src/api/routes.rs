//! API Routes
//!
//! Configures the Axum router for the item service.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_item, delete_item, get_items, method_not_allowed, update_item, AppState,
};

/// Creates the main router.
///
/// # Dispatch on /items
/// | Method | id present | Handler |
/// |---|---|---|
/// | POST | - | create |
/// | GET | no | read all |
/// | GET | yes | read one |
/// | PUT | - | update |
/// | DELETE | - | delete |
/// | other (HEAD, OPTIONS, ...) | - | 405 |
///
/// `get` would also answer HEAD, so HEAD is routed to the 405 handler
/// explicitly.
///
/// # Middleware
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/items",
            get(get_items)
                .head(method_not_allowed)
                .post(create_item)
                .put(update_item)
                .delete(delete_item)
                .fallback(method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
