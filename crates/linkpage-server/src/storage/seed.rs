//! Demo profile loaded into a fresh store

use chrono::Utc;
use linkpage_core::{NewSocialLink, Platform, User, ACTIVE_FLAG, DEFAULT_USER_ID};

pub const PROFILE_PICTURE_URL: &str = "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=400&h=400";

pub fn default_user() -> User {
    User {
        id: DEFAULT_USER_ID.to_string(),
        username: "alexjohnson".to_string(),
        display_name: "Alex Johnson".to_string(),
        title: Some("Digital Creator & Designer".to_string()),
        location: Some("San Francisco, CA".to_string()),
        bio: Some(
            "Passionate about creating beautiful digital experiences. Follow me for design tips, tech insights, and creative inspiration! ✨"
                .to_string(),
        ),
        profile_picture: Some(PROFILE_PICTURE_URL.to_string()),
        website: Some("alexjohnson.design".to_string()),
        followers: 12500,
        following: 2100,
        posts: 458,
        stripe_customer_id: None,
        premium_plan: None,
        premium_expires_at: None,
        created_at: Utc::now(),
    }
}

/// One link per supported platform, all owned by the default user
pub fn default_social_links() -> Vec<NewSocialLink> {
    Platform::ALL
        .iter()
        .map(|&platform| {
            let (handle, url) = match platform {
                Platform::Instagram => ("@alexjohnson", "https://instagram.com/alexjohnson"),
                Platform::Twitter => ("@alexj_design", "https://twitter.com/alexj_design"),
                Platform::Linkedin => ("Alex Johnson", "https://linkedin.com/in/alexjohnson"),
                Platform::Youtube => (
                    "Alex Johnson Design",
                    "https://youtube.com/@alexjohnsondesign",
                ),
                Platform::Github => ("alexjohnson", "https://github.com/alexjohnson"),
                Platform::Website => ("alexjohnson.design", "https://alexjohnson.design"),
            };
            NewSocialLink {
                user_id: DEFAULT_USER_ID.to_string(),
                platform,
                handle: handle.to_string(),
                url: url.to_string(),
                is_active: Some(ACTIVE_FLAG.to_string()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_picture_keeps_full_query() {
        let user = default_user();
        let url = user.profile_picture.unwrap();

        assert_eq!(url, PROFILE_PICTURE_URL);
        assert!(url.contains("&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&"));
        assert!(url.ends_with("&w=400&h=400"));
    }

    #[test]
    fn test_one_link_per_platform() {
        let links = default_social_links();
        assert_eq!(links.len(), Platform::ALL.len());
        assert!(links.iter().all(|l| l.user_id == DEFAULT_USER_ID));
    }
}
