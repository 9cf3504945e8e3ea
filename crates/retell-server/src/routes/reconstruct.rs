//! Text reconstruction route.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::error;

use retell_core::Error;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/reconstruct", post(reconstruct))
}

/// Request body for POST /api/reconstruct.
#[derive(Debug, Deserialize)]
struct ReconstructRequest {
    text: Option<String>,
}

/// POST /api/reconstruct — run the full pipeline on one fragment.
///
/// A missing `text` field is rejected before the pipeline runs;
/// everything else is the pipeline's error mapping.
async fn reconstruct(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReconstructRequest>,
) -> impl IntoResponse {
    let text = match req.text {
        Some(text) => text,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "success": false,
                    "error": "No text provided",
                })),
            );
        }
    };

    match state.pipeline.process(&text).await {
        Ok(result) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "original_text": result.original_text,
                "reconstructed_text": result.reconstructed_text,
                "sources": result.sources,
            })),
        ),
        Err(err) => {
            let status = match err {
                Error::Validation(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            error!("Reconstruction pipeline failed: {}", err);
            (
                status,
                Json(serde_json::json!({
                    "success": false,
                    "error": err.to_string(),
                })),
            )
        }
    }
}
