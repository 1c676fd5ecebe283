//! Stripe-backed payment provider

use async_trait::async_trait;
use linkpage_core::{ClientSecret, LinkpageError, PaymentProvider, Result};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, error};

pub const DEFAULT_STRIPE_API_BASE: &str = "https://api.stripe.com";

pub struct StripeClient {
    http: reqwest::Client,
    api_base: String,
    secret_key: String,
}

#[derive(Debug, Deserialize)]
struct IntentResponse {
    id: String,
    client_secret: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

impl StripeClient {
    pub fn new(secret_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: DEFAULT_STRIPE_API_BASE.to_string(),
            secret_key,
        }
    }

    pub fn with_api_base(mut self, api_base: String) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    async fn create_intent(&self, path: &str, form: Vec<(String, String)>) -> Result<ClientSecret> {
        let url = format!("{}{}", self.api_base, path);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await
            .map_err(|e| LinkpageError::Payment(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LinkpageError::Payment(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .and_then(|e| e.error.message)
                .unwrap_or_else(|| format!("HTTP {}", status));
            error!("Stripe request to {} failed: {}", path, message);
            return Err(LinkpageError::Payment(message));
        }

        let intent: IntentResponse = serde_json::from_str(&body)?;
        let client_secret = intent
            .client_secret
            .ok_or_else(|| LinkpageError::Payment("response has no client_secret".to_string()))?;

        Ok(ClientSecret {
            intent_id: intent.id,
            client_secret,
        })
    }
}

/// Flatten metadata into Stripe's `metadata[key]=value` form encoding
fn metadata_form(metadata: HashMap<String, String>) -> Vec<(String, String)> {
    let mut fields: Vec<(String, String)> = metadata
        .into_iter()
        .map(|(k, v)| (format!("metadata[{}]", k), v))
        .collect();
    fields.sort();
    fields
}

fn payment_intent_form(
    amount_minor: i64,
    currency: &str,
    metadata: HashMap<String, String>,
) -> Vec<(String, String)> {
    let mut form = vec![
        ("amount".to_string(), amount_minor.to_string()),
        ("currency".to_string(), currency.to_lowercase()),
    ];
    form.extend(metadata_form(metadata));
    form
}

#[async_trait]
impl PaymentProvider for StripeClient {
    async fn create_payment_intent(
        &self,
        amount_minor: i64,
        currency: &str,
        metadata: HashMap<String, String>,
    ) -> Result<ClientSecret> {
        let form = payment_intent_form(amount_minor, currency, metadata);
        self.create_intent("/v1/payment_intents", form).await
    }

    async fn create_setup_intent(
        &self,
        metadata: HashMap<String, String>,
    ) -> Result<ClientSecret> {
        let mut form = vec![("usage".to_string(), "off_session".to_string())];
        form.extend(metadata_form(metadata));
        self.create_intent("/v1/setup_intents", form).await
    }
}
