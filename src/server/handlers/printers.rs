//! Printer listing.

use axum::{Json, extract::State};
use std::sync::Arc;

use super::super::state::AppState;

/// Handle GET /printers - names of configured printers, sorted.
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(
        state
            .config
            .printers
            .names()
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}
