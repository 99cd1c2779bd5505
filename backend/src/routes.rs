use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{health, items};
use crate::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    // CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health::health))
        .nest("/api/items", item_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn item_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(items::create_item).get(items::list_items))
        .route(
            "/:id",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
}
