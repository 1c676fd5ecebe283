//! Social link handlers

use super::error::ApiResult;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use linkpage_core::validation::{validate_new_social_link, validate_social_link_patch};
use linkpage_core::{LinkpageError, NewSocialLink, SocialLink, SocialLinkPatch};
use serde_json::{json, Value};

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewSocialLink>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SocialLink>)> {
    let Json(new_link) = payload?;
    validate_new_social_link(&new_link)?;

    let link = state.storage.create_social_link(new_link).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<SocialLinkPatch>, JsonRejection>,
) -> ApiResult<Json<SocialLink>> {
    let Json(patch) = payload?;
    validate_social_link_patch(&patch)?;

    state
        .storage
        .update_social_link(&id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| LinkpageError::NotFound("Social link".to_string()).into())
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    if !state.storage.delete_social_link(&id).await? {
        return Err(LinkpageError::NotFound("Social link".to_string()).into());
    }
    Ok(Json(json!({ "message": "Social link deleted" })))
}
