//! HTTP handlers

pub mod analytics;
pub mod error;
pub mod health;
pub mod payments;
pub mod social_links;
pub mod tips;
pub mod users;

pub use error::{ApiError, ApiResult};
pub use health::health;
