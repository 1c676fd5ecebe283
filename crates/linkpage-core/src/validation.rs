//! Input shape checks applied before anything reaches storage.
//!
//! serde already rejects missing required fields and unknown enum values;
//! these functions cover what the type system can't express.

use crate::error::{LinkpageError, Result};
use linkpage_types::{
    find_plan, NewSocialLink, NewTip, NewUser, PremiumPlan, SocialLinkPatch, UserPatch,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Smallest tip the tip jar accepts, in major currency units
pub const MIN_TIP_AMOUNT: Decimal = Decimal::ONE;

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LinkpageError::invalid(format!("{field} must not be empty")));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: Option<i64>) -> Result<()> {
    match value {
        Some(v) if v < 0 => Err(LinkpageError::invalid(format!(
            "{field} must not be negative"
        ))),
        _ => Ok(()),
    }
}

pub fn validate_new_user(user: &NewUser) -> Result<()> {
    require_non_empty("username", &user.username)?;
    require_non_empty("displayName", &user.display_name)?;
    require_non_negative("followers", user.followers)?;
    require_non_negative("following", user.following)?;
    require_non_negative("posts", user.posts)?;
    Ok(())
}

pub fn validate_user_patch(patch: &UserPatch) -> Result<()> {
    if let Some(ref username) = patch.username {
        require_non_empty("username", username)?;
    }
    if let Some(ref display_name) = patch.display_name {
        require_non_empty("displayName", display_name)?;
    }
    require_non_negative("followers", patch.followers)?;
    require_non_negative("following", patch.following)?;
    require_non_negative("posts", patch.posts)?;
    Ok(())
}

pub fn validate_new_social_link(link: &NewSocialLink) -> Result<()> {
    require_non_empty("userId", &link.user_id)?;
    require_non_empty("handle", &link.handle)?;
    require_non_empty("url", &link.url)?;
    Ok(())
}

pub fn validate_social_link_patch(patch: &SocialLinkPatch) -> Result<()> {
    if let Some(ref user_id) = patch.user_id {
        require_non_empty("userId", user_id)?;
    }
    if let Some(ref handle) = patch.handle {
        require_non_empty("handle", handle)?;
    }
    if let Some(ref url) = patch.url {
        require_non_empty("url", url)?;
    }
    Ok(())
}

pub fn validate_tip_amount(amount: Decimal) -> Result<()> {
    if amount < MIN_TIP_AMOUNT {
        return Err(LinkpageError::invalid(format!(
            "Minimum tip amount is {MIN_TIP_AMOUNT}"
        )));
    }
    Ok(())
}

pub fn validate_new_tip(tip: &NewTip) -> Result<()> {
    require_non_empty("userId", &tip.user_id)?;
    validate_tip_amount(tip.amount)
}

/// Convert a major-unit amount (dollars) to minor units (cents), rounding
/// half away from zero.
pub fn to_minor_units(amount: Decimal) -> Result<i64> {
    let out_of_range = || LinkpageError::invalid(format!("amount {amount} out of range"));

    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or_else(out_of_range)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(out_of_range)
}

pub fn validate_plan(plan_id: &str) -> Result<PremiumPlan> {
    find_plan(plan_id).ok_or_else(|| LinkpageError::invalid(format!("unknown plan: {plan_id}")))
}
