//! Subscription plan definitions.

use serde::{Deserialize, Serialize};

/// Subscription plan of a user profile.
///
/// Determines whether generation is metered against the free quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionPlan {
    /// Free plan - generation draws down a finite allowance.
    Free,

    /// Premium plan - unlimited generation, quota counter ignored.
    Premium,
}

impl SubscriptionPlan {
    /// Returns true for the premium plan.
    pub fn is_premium(&self) -> bool {
        matches!(self, SubscriptionPlan::Premium)
    }

    /// Returns the display name for this plan.
    pub fn display_name(&self) -> &'static str {
        match self {
            SubscriptionPlan::Free => "free",
            SubscriptionPlan::Premium => "premium",
        }
    }
}

impl std::fmt::Display for SubscriptionPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
