//! Entitlement domain: subscription plan and generation quota.
//!
//! The per-user [`UserProfile`] is the authority for whether proposal
//! generation is permitted. Quota governs generation only; saved-proposal
//! storage has an independent lifecycle.

mod errors;
mod plan;
mod profile;

pub use errors::EntitlementError;
pub use plan::SubscriptionPlan;
pub use profile::UserProfile;
