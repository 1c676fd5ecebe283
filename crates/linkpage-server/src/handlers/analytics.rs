//! Analytics tracking and raw event listing

use super::error::ApiResult;
use crate::extractors::ClientInfo;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use linkpage_core::{AnalyticsEvent, EventType, NewAnalyticsEvent, DEFAULT_USER_ID};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRequest {
    event_type: EventType,
    #[serde(default)]
    link_id: Option<String>,
    #[serde(default)]
    metadata: Option<Value>,
}

/// Events are always attributed to the demo profile
pub async fn track(
    State(state): State<AppState>,
    client: ClientInfo,
    payload: Result<Json<TrackRequest>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(req) = payload?;

    let event = NewAnalyticsEvent {
        user_id: DEFAULT_USER_ID.to_string(),
        link_id: req.link_id.filter(|id| !id.is_empty()),
        event_type: req.event_type,
        metadata: req.metadata.filter(|m| !m.is_null()),
        ip_address: client.ip_address,
        user_agent: client.user_agent,
    };
    state.storage.create_analytics(event).await?;

    Ok(Json(json!({ "success": true })))
}

pub async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<AnalyticsEvent>>> {
    let events = state.storage.get_analytics(&user_id).await?;
    Ok(Json(events))
}
