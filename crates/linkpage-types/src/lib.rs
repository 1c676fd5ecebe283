//! Linkpage Types - Pure type definitions
//!
//! Entities, insert records and patches for the link-in-bio profile service.
//! This crate has no async runtime dependencies.

pub mod analytics;
pub mod plan;
pub mod social_link;
pub mod tip;
pub mod user;

pub use analytics::*;
pub use plan::*;
pub use social_link::*;
pub use tip::*;
pub use user::*;

use serde::{Deserialize, Deserializer, Serialize};

/// Id of the demo profile served by `/api/profile`
pub const DEFAULT_USER_ID: &str = "default-user";

/// Social platforms a link can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Twitter,
    Linkedin,
    Youtube,
    Github,
    Website,
}

impl Platform {
    /// Every supported platform, in display order
    pub const ALL: [Platform; 6] = [
        Platform::Instagram,
        Platform::Twitter,
        Platform::Linkedin,
        Platform::Youtube,
        Platform::Github,
        Platform::Website,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
            Platform::Youtube => "youtube",
            Platform::Github => "github",
            Platform::Website => "website",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deserializes a patch field that may be explicitly set to null.
///
/// Use with `#[serde(default, deserialize_with = "nullable")]` on an
/// `Option<Option<T>>`: a missing key stays `None`, `null` becomes
/// `Some(None)` and a value becomes `Some(Some(v))`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
