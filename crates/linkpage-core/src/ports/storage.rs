//! Storage trait for the profile entities
//!
//! Lookups return `Ok(None)` for a missing record, never an error.

use crate::Result;
use async_trait::async_trait;
use linkpage_types::{
    AnalyticsEvent, AnalyticsEventPatch, NewAnalyticsEvent, NewSocialLink, NewTip, NewUser,
    SocialLink, SocialLinkPatch, Tip, TipPatch, User, UserPatch,
};
use serde::Serialize;

/// Number of stored records per entity type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityCounts {
    pub users: usize,
    pub social_links: usize,
    pub tips: usize,
    pub analytics: usize,
}

#[async_trait]
pub trait Storage: Send + Sync {
    // Users
    async fn get_user(&self, id: &str) -> Result<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    async fn get_all_users(&self) -> Result<Vec<User>>;
    async fn create_user(&self, user: NewUser) -> Result<User>;
    async fn update_user(&self, id: &str, patch: UserPatch) -> Result<Option<User>>;

    // Social links
    async fn get_social_link(&self, id: &str) -> Result<Option<SocialLink>>;
    async fn get_social_links(&self, user_id: &str) -> Result<Vec<SocialLink>>;
    async fn create_social_link(&self, link: NewSocialLink) -> Result<SocialLink>;
    async fn update_social_link(
        &self,
        id: &str,
        patch: SocialLinkPatch,
    ) -> Result<Option<SocialLink>>;
    async fn delete_social_link(&self, id: &str) -> Result<bool>;

    // Tips
    async fn get_tip(&self, id: &str) -> Result<Option<Tip>>;
    async fn get_tips(&self, user_id: &str) -> Result<Vec<Tip>>;
    async fn create_tip(&self, tip: NewTip) -> Result<Tip>;
    async fn update_tip(&self, id: &str, patch: TipPatch) -> Result<Option<Tip>>;

    // Analytics
    async fn get_analytics_event(&self, id: &str) -> Result<Option<AnalyticsEvent>>;
    async fn get_analytics(&self, user_id: &str) -> Result<Vec<AnalyticsEvent>>;
    async fn create_analytics(&self, event: NewAnalyticsEvent) -> Result<AnalyticsEvent>;
    async fn update_analytics_event(
        &self,
        id: &str,
        patch: AnalyticsEventPatch,
    ) -> Result<Option<AnalyticsEvent>>;

    async fn entity_counts(&self) -> Result<EntityCounts>;
}
