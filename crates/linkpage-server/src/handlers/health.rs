//! Health check endpoint

use super::error::ApiResult;
use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};

pub async fn health(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let counts = state.storage.entity_counts().await?;

    Ok(Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "payments": state.payments.is_enabled(),
        "counts": counts,
    })))
}
