//! In-memory implementation of the `Storage` port

use super::entity_store::EntityStore;
use super::seed;
use async_trait::async_trait;
use linkpage_core::{
    AnalyticsEvent, AnalyticsEventPatch, EntityCounts, NewAnalyticsEvent, NewSocialLink, NewTip,
    NewUser, Result, SocialLink, SocialLinkPatch, Storage, Tip, TipPatch, User, UserPatch,
};
use tracing::{debug, info, warn};

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Typed CRUD facade over an [`EntityStore`]. State is lost on restart.
pub struct MemStorage {
    store: EntityStore,
}

impl MemStorage {
    /// Store pre-populated with the demo profile and its six links
    pub fn new() -> Self {
        let storage = Self::empty();
        storage.seed();
        storage
    }

    /// Store with no records at all
    pub fn empty() -> Self {
        Self {
            store: EntityStore::new(),
        }
    }

    fn seed(&self) {
        let user = seed::default_user();
        let user_id = user.id.clone();
        self.store.users.put(user_id.clone(), user);

        for link in seed::default_social_links() {
            let link = SocialLink::create(new_id(), link);
            self.store.social_links.put(link.id.clone(), link);
        }

        info!(
            "Seeded demo profile {} with {} social links",
            user_id,
            self.store.social_links.len()
        );
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_user(&self, id: &str) -> Result<Option<User>> {
        Ok(self.store.users.get(id))
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self
            .store
            .users
            .list(|user| user.username == username)
            .next())
    }

    async fn get_all_users(&self) -> Result<Vec<User>> {
        Ok(self.store.users.list(|_| true).collect())
    }

    async fn create_user(&self, new: NewUser) -> Result<User> {
        // Uniqueness is assumed, not enforced
        if self
            .store
            .users
            .list(|user| user.username == new.username)
            .next()
            .is_some()
        {
            warn!("Creating user with duplicate username: {}", new.username);
        }

        let user = User::create(new_id(), new);
        self.store.users.put(user.id.clone(), user.clone());
        info!("Created user: id={}, username={}", user.id, user.username);

        Ok(user)
    }

    async fn update_user(&self, id: &str, patch: UserPatch) -> Result<Option<User>> {
        let Some(mut user) = self.store.users.get(id) else {
            return Ok(None);
        };

        debug!("Updating user {}", id);
        user.apply(patch);
        self.store.users.put(id.to_string(), user.clone());

        Ok(Some(user))
    }

    async fn get_social_link(&self, id: &str) -> Result<Option<SocialLink>> {
        Ok(self.store.social_links.get(id))
    }

    async fn get_social_links(&self, user_id: &str) -> Result<Vec<SocialLink>> {
        Ok(self
            .store
            .social_links
            .list(|link| link.user_id == user_id)
            .collect())
    }

    async fn create_social_link(&self, new: NewSocialLink) -> Result<SocialLink> {
        let link = SocialLink::create(new_id(), new);
        self.store.social_links.put(link.id.clone(), link.clone());
        info!(
            "Created social link: id={}, user={}, platform={}",
            link.id, link.user_id, link.platform
        );

        Ok(link)
    }

    async fn update_social_link(
        &self,
        id: &str,
        patch: SocialLinkPatch,
    ) -> Result<Option<SocialLink>> {
        let Some(mut link) = self.store.social_links.get(id) else {
            return Ok(None);
        };

        debug!("Updating social link {}", id);
        link.apply(patch);
        self.store.social_links.put(id.to_string(), link.clone());

        Ok(Some(link))
    }

    async fn delete_social_link(&self, id: &str) -> Result<bool> {
        let removed = self.store.social_links.delete(id);
        if removed {
            info!("Deleted social link: {}", id);
        }
        Ok(removed)
    }

    async fn get_tip(&self, id: &str) -> Result<Option<Tip>> {
        Ok(self.store.tips.get(id))
    }

    async fn get_tips(&self, user_id: &str) -> Result<Vec<Tip>> {
        Ok(self.store.tips.list(|tip| tip.user_id == user_id).collect())
    }

    async fn create_tip(&self, new: NewTip) -> Result<Tip> {
        let tip = Tip::create(new_id(), new);
        self.store.tips.put(tip.id.clone(), tip.clone());
        info!(
            "Recorded tip: id={}, user={}, amount={} {}",
            tip.id, tip.user_id, tip.amount, tip.currency
        );

        Ok(tip)
    }

    async fn update_tip(&self, id: &str, patch: TipPatch) -> Result<Option<Tip>> {
        let Some(mut tip) = self.store.tips.get(id) else {
            return Ok(None);
        };

        debug!("Updating tip {}", id);
        tip.apply(patch);
        self.store.tips.put(id.to_string(), tip.clone());

        Ok(Some(tip))
    }

    async fn get_analytics_event(&self, id: &str) -> Result<Option<AnalyticsEvent>> {
        Ok(self.store.analytics.get(id))
    }

    async fn get_analytics(&self, user_id: &str) -> Result<Vec<AnalyticsEvent>> {
        Ok(self
            .store
            .analytics
            .list(|event| event.user_id == user_id)
            .collect())
    }

    async fn create_analytics(&self, new: NewAnalyticsEvent) -> Result<AnalyticsEvent> {
        let event = AnalyticsEvent::create(new_id(), new);
        self.store.analytics.put(event.id.clone(), event.clone());
        debug!("Tracked {} event for user {}", event.event_type, event.user_id);

        Ok(event)
    }

    async fn update_analytics_event(
        &self,
        id: &str,
        patch: AnalyticsEventPatch,
    ) -> Result<Option<AnalyticsEvent>> {
        let Some(mut event) = self.store.analytics.get(id) else {
            return Ok(None);
        };

        event.apply(patch);
        self.store.analytics.put(id.to_string(), event.clone());

        Ok(Some(event))
    }

    async fn entity_counts(&self) -> Result<EntityCounts> {
        Ok(EntityCounts {
            users: self.store.users.len(),
            social_links: self.store.social_links.len(),
            tips: self.store.tips.len(),
            analytics: self.store.analytics.len(),
        })
    }
}
