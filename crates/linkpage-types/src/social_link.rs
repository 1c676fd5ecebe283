//! Social link types

use crate::{nullable, Platform};
use serde::{Deserialize, Serialize};

/// Default value of [`SocialLink::is_active`]
pub const ACTIVE_FLAG: &str = "true";

/// A link shown on a user's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub id: String,
    pub user_id: String,
    pub platform: Platform,
    pub handle: String,
    pub url: String,
    /// `"true"`, `"false"` or null
    pub is_active: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSocialLink {
    pub user_id: String,
    pub platform: Platform,
    pub handle: String,
    pub url: String,
    #[serde(default)]
    pub is_active: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinkPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub is_active: Option<Option<String>>,
}

impl SocialLink {
    pub fn create(id: String, new: NewSocialLink) -> Self {
        Self {
            id,
            user_id: new.user_id,
            platform: new.platform,
            handle: new.handle,
            url: new.url,
            is_active: Some(new.is_active.unwrap_or_else(|| ACTIVE_FLAG.to_string())),
        }
    }

    pub fn apply(&mut self, patch: SocialLinkPatch) {
        if let Some(v) = patch.user_id {
            self.user_id = v;
        }
        if let Some(v) = patch.platform {
            self.platform = v;
        }
        if let Some(v) = patch.handle {
            self.handle = v;
        }
        if let Some(v) = patch.url {
            self.url = v;
        }
        if let Some(v) = patch.is_active {
            self.is_active = v;
        }
    }

    pub fn is_active(&self) -> bool {
        self.is_active.as_deref() == Some(ACTIVE_FLAG)
    }
}
