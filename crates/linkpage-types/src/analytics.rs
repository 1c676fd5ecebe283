//! Analytics event types

use crate::nullable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    View,
    Click,
    Tip,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventType::View => write!(f, "view"),
            EventType::Click => write!(f, "click"),
            EventType::Tip => write!(f, "tip"),
        }
    }
}

/// A raw view/click/tip event. Stored as-is, never aggregated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
    pub id: String,
    pub user_id: String,
    pub link_id: Option<String>,
    pub event_type: EventType,
    pub metadata: Option<serde_json::Value>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAnalyticsEvent {
    pub user_id: String,
    #[serde(default)]
    pub link_id: Option<String>,
    pub event_type: EventType,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl NewAnalyticsEvent {
    pub fn new(user_id: impl Into<String>, event_type: EventType) -> Self {
        Self {
            user_id: user_id.into(),
            link_id: None,
            event_type,
            metadata: None,
            ip_address: None,
            user_agent: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEventPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub link_id: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Option<serde_json::Value>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<Option<String>>,
}

impl AnalyticsEvent {
    pub fn create(id: String, new: NewAnalyticsEvent) -> Self {
        Self {
            id,
            user_id: new.user_id,
            link_id: new.link_id,
            event_type: new.event_type,
            metadata: new.metadata,
            ip_address: new.ip_address,
            user_agent: new.user_agent,
            created_at: Utc::now(),
        }
    }

    pub fn apply(&mut self, patch: AnalyticsEventPatch) {
        if let Some(v) = patch.user_id {
            self.user_id = v;
        }
        if let Some(v) = patch.link_id {
            self.link_id = v;
        }
        if let Some(v) = patch.event_type {
            self.event_type = v;
        }
        if let Some(v) = patch.metadata {
            self.metadata = v;
        }
        if let Some(v) = patch.ip_address {
            self.ip_address = v;
        }
        if let Some(v) = patch.user_agent {
            self.user_agent = v;
        }
    }
}
