//! Tip jar and subscription flows
//!
//! The provider does all the money handling. This service only converts
//! amounts, picks metadata and records a pending tip for each payment
//! intent it opens.

use linkpage_core::validation::{to_minor_units, validate_plan, validate_tip_amount};
use linkpage_core::{
    ClientSecret, LinkpageError, NewTip, PaymentProvider, Result, Storage, Tip, DEFAULT_CURRENCY,
};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Optional details the tipper can attach
#[derive(Debug, Clone, Default)]
pub struct TipDetails {
    pub tipper_name: Option<String>,
    pub message: Option<String>,
}

pub struct PaymentService {
    storage: Arc<dyn Storage>,
    provider: Option<Arc<dyn PaymentProvider>>,
}

impl PaymentService {
    pub fn new(storage: Arc<dyn Storage>, provider: Option<Arc<dyn PaymentProvider>>) -> Self {
        Self { storage, provider }
    }

    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    fn provider(&self) -> Result<&Arc<dyn PaymentProvider>> {
        self.provider
            .as_ref()
            .ok_or(LinkpageError::PaymentUnavailable)
    }

    pub async fn create_tip_intent(
        &self,
        user_id: &str,
        amount: Decimal,
        details: TipDetails,
    ) -> Result<(ClientSecret, Tip)> {
        validate_tip_amount(amount)?;
        let provider = self.provider()?;
        let amount_minor = to_minor_units(amount)?;

        info!("Creating tip payment intent: user={}, amount={}", user_id, amount);

        let metadata = HashMap::from([
            ("type".to_string(), "tip".to_string()),
            ("userId".to_string(), user_id.to_string()),
        ]);
        let secret = provider
            .create_payment_intent(amount_minor, DEFAULT_CURRENCY, metadata)
            .await?;

        let mut new_tip = NewTip::new(user_id, amount);
        new_tip.payment_intent_id = Some(secret.intent_id.clone());
        new_tip.tipper_name = details.tipper_name;
        new_tip.message = details.message;
        let tip = self.storage.create_tip(new_tip).await?;

        Ok((secret, tip))
    }

    /// Start a premium subscription. The catalog price is authoritative;
    /// a mismatching client price is logged and ignored.
    pub async fn create_subscription(
        &self,
        user_id: &str,
        plan_id: &str,
        client_price: Option<Decimal>,
    ) -> Result<ClientSecret> {
        let plan = validate_plan(plan_id)?;
        let provider = self.provider()?;

        if let Some(price) = client_price {
            if price != plan.price {
                warn!(
                    "Client sent price {} for plan {}, using catalog price {}",
                    price, plan.id, plan.price
                );
            }
        }

        info!("Creating subscription setup intent: user={}, plan={}", user_id, plan.id);

        let metadata = HashMap::from([
            ("planId".to_string(), plan.id.clone()),
            ("price".to_string(), plan.price.to_string()),
            ("userId".to_string(), user_id.to_string()),
        ]);
        provider.create_setup_intent(metadata).await
    }
}
