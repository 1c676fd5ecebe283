//! User and profile handlers

use super::error::ApiResult;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use linkpage_core::validation::{validate_new_user, validate_user_patch};
use linkpage_core::{LinkpageError, NewUser, SocialLink, User, UserPatch, DEFAULT_USER_ID};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    user: User,
    social_links: Vec<SocialLink>,
}

async fn profile_of(state: &AppState, user: User) -> ApiResult<Json<ProfileResponse>> {
    let social_links = state.storage.get_social_links(&user.id).await?;
    Ok(Json(ProfileResponse { user, social_links }))
}

pub async fn get_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<ProfileResponse>> {
    let user = state
        .storage
        .get_user_by_username(&username)
        .await?
        .ok_or_else(|| LinkpageError::NotFound("User".to_string()))?;

    profile_of(&state, user).await
}

/// The demo profile
pub async fn profile(State(state): State<AppState>) -> ApiResult<Json<ProfileResponse>> {
    let user = state
        .storage
        .get_user(DEFAULT_USER_ID)
        .await?
        .ok_or_else(|| LinkpageError::NotFound("Profile".to_string()))?;

    profile_of(&state, user).await
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let Json(new_user) = payload?;
    validate_new_user(&new_user)?;

    let user = state.storage.create_user(new_user).await?;
    info!("User registered via API: {}", user.username);

    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UserPatch>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let Json(patch) = payload?;
    validate_user_patch(&patch)?;

    state
        .storage
        .update_user(&id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| LinkpageError::NotFound("User".to_string()).into())
}
