//! User types

use crate::nullable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub title: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub profile_picture: Option<String>,
    pub website: Option<String>,
    pub followers: i64,
    pub following: i64,
    pub posts: i64,
    pub stripe_customer_id: Option<String>,
    pub premium_plan: Option<String>,
    pub premium_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// User creation payload (everything but `id` and `createdAt`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub display_name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub followers: Option<i64>,
    #[serde(default)]
    pub following: Option<i64>,
    #[serde(default)]
    pub posts: Option<i64>,
    #[serde(default)]
    pub stripe_customer_id: Option<String>,
    #[serde(default)]
    pub premium_plan: Option<String>,
    #[serde(default)]
    pub premium_expires_at: Option<DateTime<Utc>>,
}

impl NewUser {
    pub fn new(username: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            display_name: display_name.into(),
            ..Default::default()
        }
    }
}

/// Partial user update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub location: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub bio: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub website: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub following: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts: Option<i64>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub stripe_customer_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub premium_plan: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub premium_expires_at: Option<Option<DateTime<Utc>>>,
}

impl User {
    /// Build a stored user from a creation payload, filling defaults
    pub fn create(id: String, new: NewUser) -> Self {
        Self {
            id,
            username: new.username,
            display_name: new.display_name,
            title: new.title,
            location: new.location,
            bio: new.bio,
            profile_picture: new.profile_picture,
            website: new.website,
            followers: new.followers.unwrap_or(0),
            following: new.following.unwrap_or(0),
            posts: new.posts.unwrap_or(0),
            stripe_customer_id: new.stripe_customer_id,
            premium_plan: new.premium_plan,
            premium_expires_at: new.premium_expires_at,
            created_at: Utc::now(),
        }
    }

    /// Merge a patch into this record. `id` and `created_at` never change.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(v) = patch.username {
            self.username = v;
        }
        if let Some(v) = patch.display_name {
            self.display_name = v;
        }
        if let Some(v) = patch.title {
            self.title = v;
        }
        if let Some(v) = patch.location {
            self.location = v;
        }
        if let Some(v) = patch.bio {
            self.bio = v;
        }
        if let Some(v) = patch.profile_picture {
            self.profile_picture = v;
        }
        if let Some(v) = patch.website {
            self.website = v;
        }
        if let Some(v) = patch.followers {
            self.followers = v;
        }
        if let Some(v) = patch.following {
            self.following = v;
        }
        if let Some(v) = patch.posts {
            self.posts = v;
        }
        if let Some(v) = patch.stripe_customer_id {
            self.stripe_customer_id = v;
        }
        if let Some(v) = patch.premium_plan {
            self.premium_plan = v;
        }
        if let Some(v) = patch.premium_expires_at {
            self.premium_expires_at = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_fills_defaults() {
        let user = User::create("u1".to_string(), NewUser::new("jdoe", "J Doe"));

        assert_eq!(user.id, "u1");
        assert_eq!(user.followers, 0);
        assert_eq!(user.following, 0);
        assert_eq!(user.posts, 0);
        assert!(user.title.is_none());
        assert!(user.bio.is_none());
        assert!(user.website.is_none());
        assert!(user.premium_plan.is_none());
    }

    #[test]
    fn test_patch_distinguishes_null_from_missing() {
        let patch: UserPatch =
            serde_json::from_str(r#"{"title": null, "bio": "hello", "followers": 3}"#).unwrap();

        assert_eq!(patch.title, Some(None));
        assert_eq!(patch.bio, Some(Some("hello".to_string())));
        assert!(patch.location.is_none());

        let mut user = User::create("u1".to_string(), NewUser::new("jdoe", "J Doe"));
        user.title = Some("Designer".to_string());
        user.location = Some("Berlin".to_string());
        user.apply(patch);

        assert!(user.title.is_none());
        assert_eq!(user.bio.as_deref(), Some("hello"));
        assert_eq!(user.location.as_deref(), Some("Berlin"));
        assert_eq!(user.followers, 3);
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let user = User::create("u1".to_string(), NewUser::new("jdoe", "J Doe"));
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["displayName"], "J Doe");
        assert!(json["profilePicture"].is_null());
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_new_user_requires_display_name() {
        assert!(serde_json::from_str::<NewUser>(r#"{"username": "jdoe"}"#).is_err());
    }
}
