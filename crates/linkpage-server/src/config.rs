//! Server configuration
//!
//! Read from `LINKPAGE_*` environment variables on top of built-in defaults.
//! `STRIPE_SECRET_KEY` is accepted when `LINKPAGE_STRIPE_SECRET_KEY` is unset.

use crate::services::stripe::DEFAULT_STRIPE_API_BASE;
use config::{Config, ConfigError, Environment};
use linkpage_core::{LinkpageError, Result};
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    /// Pre-built frontend to serve for non-API routes
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
    pub seed_demo_data: bool,
    #[serde(default)]
    pub stripe_secret_key: Option<String>,
    pub stripe_api_base: String,
}

impl ServerConfig {
    pub fn load() -> Result<Self> {
        let mut config = Self::from_env(Environment::with_prefix("LINKPAGE"))?;

        if config.stripe_secret_key.is_none() {
            config.stripe_secret_key = std::env::var("STRIPE_SECRET_KEY").ok();
        }
        config.stripe_secret_key = config.stripe_secret_key.filter(|k| !k.trim().is_empty());

        Ok(config)
    }

    fn from_env(env: Environment) -> Result<Self> {
        Self::build(env).map_err(|e| LinkpageError::Config(e.to_string()))
    }

    fn build(env: Environment) -> std::result::Result<Self, ConfigError> {
        Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("seed_demo_data", true)?
            .set_default("stripe_api_base", DEFAULT_STRIPE_API_BASE)?
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
