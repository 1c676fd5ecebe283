//! Tip jar types

use crate::nullable;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY: &str = "USD";

/// Payment state of a tip
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

impl std::fmt::Display for TipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TipStatus::Pending => write!(f, "pending"),
            TipStatus::Completed => write!(f, "completed"),
            TipStatus::Failed => write!(f, "failed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tip {
    pub id: String,
    pub user_id: String,
    pub amount: Decimal,
    pub currency: String,
    pub payment_intent_id: Option<String>,
    pub status: TipStatus,
    pub tipper_name: Option<String>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTip {
    pub user_id: String,
    pub amount: Decimal,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub payment_intent_id: Option<String>,
    #[serde(default)]
    pub status: Option<TipStatus>,
    #[serde(default)]
    pub tipper_name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl NewTip {
    pub fn new(user_id: impl Into<String>, amount: Decimal) -> Self {
        Self {
            user_id: user_id.into(),
            amount,
            currency: None,
            payment_intent_id: None,
            status: None,
            tipper_name: None,
            message: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub payment_intent_id: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TipStatus>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub tipper_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub message: Option<Option<String>>,
}

impl Tip {
    pub fn create(id: String, new: NewTip) -> Self {
        Self {
            id,
            user_id: new.user_id,
            amount: new.amount,
            currency: new
                .currency
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            payment_intent_id: new.payment_intent_id,
            status: new.status.unwrap_or_default(),
            tipper_name: new.tipper_name,
            message: new.message,
            created_at: Utc::now(),
        }
    }

    pub fn apply(&mut self, patch: TipPatch) {
        if let Some(v) = patch.user_id {
            self.user_id = v;
        }
        if let Some(v) = patch.amount {
            self.amount = v;
        }
        if let Some(v) = patch.currency {
            self.currency = v;
        }
        if let Some(v) = patch.payment_intent_id {
            self.payment_intent_id = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = patch.tipper_name {
            self.tipper_name = v;
        }
        if let Some(v) = patch.message {
            self.message = v;
        }
    }
}
