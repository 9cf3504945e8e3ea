//! HTTP route handlers.

pub mod health;
pub mod reconstruct;

use std::sync::Arc;

use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

static INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Build the main axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .nest("/api", api_routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(health::routes())
        .merge(reconstruct::routes())
}

/// GET / — the bundled single-page frontend.
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
