//! Tip jar and premium subscription endpoints

use super::error::{ApiError, ApiResult};
use crate::services::TipDetails;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use linkpage_core::{premium_plans, LinkpageError, PremiumPlan, DEFAULT_USER_ID};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentRequest {
    amount: Decimal,
    #[serde(default)]
    tipper_name: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    client_secret: String,
    tip_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRequest {
    plan_id: String,
    #[serde(default)]
    price: Option<Decimal>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionResponse {
    client_secret: String,
}

/// Provider failures carry the provider's reason, prefixed per endpoint
fn provider_error(prefix: &str, e: LinkpageError) -> ApiError {
    match e {
        LinkpageError::Payment(reason) => {
            tracing::error!("{}: {}", prefix, reason);
            ApiError::internal(format!("{}: {}", prefix, reason))
        }
        other => other.into(),
    }
}

pub async fn create_payment_intent(
    State(state): State<AppState>,
    payload: Result<Json<PaymentIntentRequest>, JsonRejection>,
) -> ApiResult<Json<PaymentIntentResponse>> {
    let Json(req) = payload?;
    let details = TipDetails {
        tipper_name: req.tipper_name,
        message: req.message,
    };

    let (secret, tip) = state
        .payments
        .create_tip_intent(DEFAULT_USER_ID, req.amount, details)
        .await
        .map_err(|e| provider_error("Error creating payment intent", e))?;

    Ok(Json(PaymentIntentResponse {
        client_secret: secret.client_secret,
        tip_id: tip.id,
    }))
}

pub async fn create_subscription(
    State(state): State<AppState>,
    payload: Result<Json<SubscriptionRequest>, JsonRejection>,
) -> ApiResult<Json<SubscriptionResponse>> {
    let Json(req) = payload?;

    let secret = state
        .payments
        .create_subscription(DEFAULT_USER_ID, &req.plan_id, req.price)
        .await
        .map_err(|e| provider_error("Error creating subscription", e))?;

    Ok(Json(SubscriptionResponse {
        client_secret: secret.client_secret,
    }))
}

pub async fn plans() -> Json<Vec<PremiumPlan>> {
    Json(premium_plans())
}
