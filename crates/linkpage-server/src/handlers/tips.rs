//! Tip listing

use super::error::ApiResult;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use linkpage_core::Tip;

pub async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<Tip>>> {
    let tips = state.storage.get_tips(&user_id).await?;
    Ok(Json(tips))
}
