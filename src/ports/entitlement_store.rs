//! EntitlementStore port - the authority over per-user quota state.

use async_trait::async_trait;

use crate::domain::entitlement::{EntitlementError, UserProfile};
use crate::domain::foundation::UserId;

/// Keyed store of user profiles with atomic read-modify-write per key.
///
/// Implementations must serialize mutations to a given user's profile:
/// `consume` is the single place the quota check and decrement happen, and
/// two racing calls at one remaining generation must not both succeed.
#[async_trait]
pub trait EntitlementStore: Send + Sync {
    /// Returns the profile, or None before first save/ensure.
    async fn get(&self, user_id: &UserId) -> Result<Option<UserProfile>, EntitlementError>;

    /// Returns the existing profile, creating the default Free profile if
    /// absent. Idempotent: never resets an existing profile.
    async fn ensure(&self, user_id: &UserId) -> Result<UserProfile, EntitlementError>;

    /// Creates or overwrites the profile with the supplied value.
    async fn save(&self, user_id: &UserId, profile: UserProfile) -> Result<(), EntitlementError>;

    /// Atomically records one generation and returns the updated profile.
    ///
    /// Fails with `QuotaExhausted` for a Free profile with nothing left,
    /// `ProfileNotFound` when no profile exists.
    async fn consume(&self, user_id: &UserId) -> Result<UserProfile, EntitlementError>;

    /// Flips the profile to Premium, creating a default profile first if
    /// absent. Fails with `AlreadyPremium` when already Premium.
    async fn upgrade(&self, user_id: &UserId) -> Result<UserProfile, EntitlementError>;
}
