//! Payment provider port

use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Secret handed to the browser to finish a payment or card setup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSecret {
    /// Provider-side object id (payment intent or setup intent)
    #[serde(skip_serializing)]
    pub intent_id: String,
    pub client_secret: String,
}

/// External payment processor. Settlement is entirely the provider's concern.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create a one-off payment for `amount_minor` units of `currency`
    async fn create_payment_intent(
        &self,
        amount_minor: i64,
        currency: &str,
        metadata: HashMap<String, String>,
    ) -> Result<ClientSecret>;

    /// Create an off-session setup intent used to start a subscription
    async fn create_setup_intent(&self, metadata: HashMap<String, String>)
        -> Result<ClientSecret>;
}
