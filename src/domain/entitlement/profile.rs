//! User profile aggregate: plan and generation counters.
//!
//! State machine per user:
//!
//! ```text
//! NoProfile -> Free(remaining=10) -> Free(9) -> ... -> Free(0)
//!                  |
//!                  +--> Premium (absorbing, from any Free state)
//! ```
//!
//! `Free(0)` blocks generation but not saving, listing, or deleting
//! proposals. There is no downgrade transition.

use serde::{Deserialize, Serialize};

use super::{EntitlementError, SubscriptionPlan};

/// Per-user subscription plan and quota counters.
///
/// `remaining_free_generations` is meaningful only under the Free plan.
/// Under Premium it is ignored for gating but keeps its stored value.
/// `total_generations` is a monotonic lifetime counter across both plans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub plan: SubscriptionPlan,
    pub remaining_free_generations: u64,
    pub total_generations: u64,
}

impl UserProfile {
    /// Free-generation allowance granted to a fresh profile.
    pub const DEFAULT_FREE_GENERATIONS: u64 = 10;

    /// Creates a fresh Free profile with the given allowance.
    pub fn new_free(allowance: u64) -> Self {
        Self {
            plan: SubscriptionPlan::Free,
            remaining_free_generations: allowance,
            total_generations: 0,
        }
    }

    /// Whether a generation is currently permitted.
    ///
    /// Premium always generates; Free requires remaining allowance.
    pub fn can_generate(&self) -> bool {
        self.plan.is_premium() || self.remaining_free_generations > 0
    }

    /// Records one generation against this profile.
    ///
    /// Premium: increments the lifetime counter only. Free with remaining
    /// allowance: decrements the allowance and increments the counter.
    /// Free with nothing left: `QuotaExhausted`.
    ///
    /// Callers that need atomicity must invoke this inside the store's
    /// single-writer section; the method itself is the full
    /// read-check-write.
    pub fn record_generation(&mut self) -> Result<(), EntitlementError> {
        match self.plan {
            SubscriptionPlan::Premium => {
                self.total_generations += 1;
                Ok(())
            }
            SubscriptionPlan::Free if self.remaining_free_generations > 0 => {
                self.remaining_free_generations -= 1;
                self.total_generations += 1;
                Ok(())
            }
            SubscriptionPlan::Free => Err(EntitlementError::QuotaExhausted),
        }
    }

    /// Flips the plan to Premium.
    ///
    /// Fails with `AlreadyPremium` when the plan is already Premium; the
    /// condition is reported rather than silently ignored so callers can
    /// surface it. The stored quota counter is left untouched.
    pub fn upgrade(&mut self) -> Result<(), EntitlementError> {
        if self.plan.is_premium() {
            return Err(EntitlementError::AlreadyPremium);
        }
        self.plan = SubscriptionPlan::Premium;
        Ok(())
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new_free(Self::DEFAULT_FREE_GENERATIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_profile_is_free_with_default_allowance() {
        let profile = UserProfile::default();
        assert_eq!(profile.plan, SubscriptionPlan::Free);
        assert_eq!(profile.remaining_free_generations, 10);
        assert_eq!(profile.total_generations, 0);
    }

    #[test]
    fn free_profile_with_allowance_can_generate() {
        assert!(UserProfile::new_free(1).can_generate());
    }

    #[test]
    fn free_profile_without_allowance_cannot_generate() {
        assert!(!UserProfile::new_free(0).can_generate());
    }

    #[test]
    fn premium_profile_ignores_allowance_for_gating() {
        let mut profile = UserProfile::new_free(0);
        profile.upgrade().unwrap();
        assert!(profile.can_generate());
    }

    #[test]
    fn record_generation_decrements_free_allowance() {
        let mut profile = UserProfile::default();
        profile.record_generation().unwrap();
        assert_eq!(profile.remaining_free_generations, 9);
        assert_eq!(profile.total_generations, 1);
    }

    #[test]
    fn record_generation_fails_when_exhausted() {
        let mut profile = UserProfile::new_free(0);
        let result = profile.record_generation();
        assert_eq!(result, Err(EntitlementError::QuotaExhausted));
        assert_eq!(profile.total_generations, 0);
    }

    #[test]
    fn record_generation_on_premium_keeps_stored_allowance() {
        let mut profile = UserProfile::default();
        profile.record_generation().unwrap();
        profile.upgrade().unwrap();
        profile.record_generation().unwrap();
        profile.record_generation().unwrap();

        assert_eq!(profile.remaining_free_generations, 9);
        assert_eq!(profile.total_generations, 3);
    }

    #[test]
    fn allowance_is_non_increasing_across_generations() {
        let mut profile = UserProfile::default();
        let mut previous = profile.remaining_free_generations;
        while profile.record_generation().is_ok() {
            assert_eq!(profile.remaining_free_generations, previous - 1);
            previous = profile.remaining_free_generations;
        }
        assert_eq!(profile.remaining_free_generations, 0);
        assert_eq!(profile.total_generations, 10);
    }

    #[test]
    fn upgrade_from_free_succeeds() {
        let mut profile = UserProfile::default();
        profile.upgrade().unwrap();
        assert_eq!(profile.plan, SubscriptionPlan::Premium);
    }

    #[test]
    fn upgrade_twice_is_reported_not_ignored() {
        let mut profile = UserProfile::default();
        profile.upgrade().unwrap();
        assert_eq!(profile.upgrade(), Err(EntitlementError::AlreadyPremium));
        assert_eq!(profile.plan, SubscriptionPlan::Premium);
    }
}
