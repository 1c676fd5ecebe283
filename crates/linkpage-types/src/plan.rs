//! Premium subscription plans

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanInterval {
    Month,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumPlan {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub interval: PlanInterval,
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
}

impl PremiumPlan {
    fn monthly(id: &str, name: &str, cents: i64, features: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price: Decimal::new(cents, 2),
            interval: PlanInterval::Month,
            features: features.iter().map(|f| f.to_string()).collect(),
            popular: false,
        }
    }
}

/// The fixed plan catalog offered on the profile page
pub fn premium_plans() -> Vec<PremiumPlan> {
    let basic = PremiumPlan::monthly(
        "basic",
        "Basic",
        499,
        &[
            "Remove LinkHub branding",
            "Custom themes & colors",
            "Basic analytics",
            "Priority support",
        ],
    );
    let mut pro = PremiumPlan::monthly(
        "pro",
        "Pro",
        999,
        &[
            "Everything in Basic",
            "Advanced analytics",
            "Custom domains",
            "A/B testing",
            "Scheduled posts",
            "Email integration",
        ],
    );
    pro.popular = true;
    let business = PremiumPlan::monthly(
        "business",
        "Business",
        1999,
        &[
            "Everything in Pro",
            "Team collaboration",
            "API access",
            "White-label solution",
            "Custom integrations",
            "Dedicated support",
        ],
    );

    vec![basic, pro, business]
}

pub fn find_plan(id: &str) -> Option<PremiumPlan> {
    premium_plans().into_iter().find(|p| p.id == id)
}
