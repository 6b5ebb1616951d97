//! In-memory entitlement store adapter.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entitlement::{EntitlementError, UserProfile};
use crate::domain::foundation::UserId;
use crate::ports::EntitlementStore;

/// Single-authority profile store backed by a hash map.
///
/// All mutations take the write lock for their full read-check-write, so
/// quota consumption is atomic per user.
#[derive(Debug, Clone)]
pub struct InMemoryEntitlementStore {
    profiles: Arc<RwLock<HashMap<UserId, UserProfile>>>,
    free_allowance: u64,
}

impl InMemoryEntitlementStore {
    /// Creates a store granting the default allowance to fresh profiles.
    pub fn new() -> Self {
        Self::with_allowance(UserProfile::DEFAULT_FREE_GENERATIONS)
    }

    /// Creates a store granting a configured allowance to fresh profiles.
    pub fn with_allowance(free_allowance: u64) -> Self {
        Self {
            profiles: Arc::new(RwLock::new(HashMap::new())),
            free_allowance,
        }
    }

    /// Number of stored profiles (useful for tests).
    pub async fn profile_count(&self) -> usize {
        self.profiles.read().await.len()
    }
}

impl Default for InMemoryEntitlementStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntitlementStore for InMemoryEntitlementStore {
    async fn get(&self, user_id: &UserId) -> Result<Option<UserProfile>, EntitlementError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(user_id).cloned())
    }

    async fn ensure(&self, user_id: &UserId) -> Result<UserProfile, EntitlementError> {
        let mut profiles = self.profiles.write().await;
        let profile = profiles
            .entry(user_id.clone())
            .or_insert_with(|| UserProfile::new_free(self.free_allowance));
        Ok(profile.clone())
    }

    async fn save(
        &self,
        user_id: &UserId,
        profile: UserProfile,
    ) -> Result<(), EntitlementError> {
        let mut profiles = self.profiles.write().await;
        profiles.insert(user_id.clone(), profile);
        Ok(())
    }

    async fn consume(&self, user_id: &UserId) -> Result<UserProfile, EntitlementError> {
        let mut profiles = self.profiles.write().await;
        let profile = profiles
            .get_mut(user_id)
            .ok_or_else(|| EntitlementError::profile_not_found(user_id.clone()))?;

        profile.record_generation()?;
        Ok(profile.clone())
    }

    async fn upgrade(&self, user_id: &UserId) -> Result<UserProfile, EntitlementError> {
        let mut profiles = self.profiles.write().await;
        let profile = profiles
            .entry(user_id.clone())
            .or_insert_with(|| UserProfile::new_free(self.free_allowance));

        profile.upgrade()?;
        Ok(profile.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entitlement::SubscriptionPlan;

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    #[tokio::test]
    async fn get_returns_none_before_first_ensure() {
        let store = InMemoryEntitlementStore::new();
        assert_eq!(store.get(&user()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn ensure_creates_default_free_profile() {
        let store = InMemoryEntitlementStore::new();
        let profile = store.ensure(&user()).await.unwrap();

        assert_eq!(profile.plan, SubscriptionPlan::Free);
        assert_eq!(profile.remaining_free_generations, 10);
        assert_eq!(profile.total_generations, 0);
    }

    #[tokio::test]
    async fn ensure_is_idempotent_and_preserves_decrements() {
        let store = InMemoryEntitlementStore::new();
        store.ensure(&user()).await.unwrap();
        store.consume(&user()).await.unwrap();

        let profile = store.ensure(&user()).await.unwrap();
        assert_eq!(profile.remaining_free_generations, 9);
        assert_eq!(store.profile_count().await, 1);
    }

    #[tokio::test]
    async fn ensure_respects_configured_allowance() {
        let store = InMemoryEntitlementStore::with_allowance(3);
        let profile = store.ensure(&user()).await.unwrap();
        assert_eq!(profile.remaining_free_generations, 3);
    }

    #[tokio::test]
    async fn save_overwrites_existing_profile() {
        let store = InMemoryEntitlementStore::new();
        store.ensure(&user()).await.unwrap();

        let mut replacement = UserProfile::new_free(2);
        replacement.total_generations = 5;
        store.save(&user(), replacement.clone()).await.unwrap();

        assert_eq!(store.get(&user()).await.unwrap(), Some(replacement));
    }

    #[tokio::test]
    async fn consume_without_profile_fails() {
        let store = InMemoryEntitlementStore::new();
        let result = store.consume(&user()).await;
        assert!(matches!(result, Err(EntitlementError::ProfileNotFound(_))));
    }

    #[tokio::test]
    async fn consume_decrements_until_exhausted() {
        let store = InMemoryEntitlementStore::with_allowance(2);
        store.ensure(&user()).await.unwrap();

        assert_eq!(store.consume(&user()).await.unwrap().remaining_free_generations, 1);
        assert_eq!(store.consume(&user()).await.unwrap().remaining_free_generations, 0);
        assert_eq!(
            store.consume(&user()).await,
            Err(EntitlementError::QuotaExhausted)
        );
    }

    #[tokio::test]
    async fn premium_consume_bypasses_allowance() {
        let store = InMemoryEntitlementStore::with_allowance(0);
        store.upgrade(&user()).await.unwrap();

        for expected_total in 1..=5 {
            let profile = store.consume(&user()).await.unwrap();
            assert_eq!(profile.total_generations, expected_total);
            assert_eq!(profile.remaining_free_generations, 0);
        }
    }

    #[tokio::test]
    async fn upgrade_creates_profile_when_absent() {
        let store = InMemoryEntitlementStore::new();
        let profile = store.upgrade(&user()).await.unwrap();
        assert_eq!(profile.plan, SubscriptionPlan::Premium);
    }

    #[tokio::test]
    async fn upgrade_twice_reports_already_premium() {
        let store = InMemoryEntitlementStore::new();
        store.upgrade(&user()).await.unwrap();
        assert_eq!(
            store.upgrade(&user()).await,
            Err(EntitlementError::AlreadyPremium)
        );
    }

    #[tokio::test]
    async fn concurrent_consumes_never_double_spend_last_generation() {
        let store = InMemoryEntitlementStore::with_allowance(1);
        store.ensure(&user()).await.unwrap();

        let store1 = store.clone();
        let store2 = store.clone();
        let u1 = user();
        let u2 = user();

        let (first, second) = tokio::join!(
            tokio::spawn(async move { store1.consume(&u1).await }),
            tokio::spawn(async move { store2.consume(&u2).await }),
        );

        let results = [first.unwrap(), second.unwrap()];
        let successes = results.iter().filter(|r| r.is_ok()).count();
        let exhausted = results
            .iter()
            .filter(|r| matches!(r, Err(EntitlementError::QuotaExhausted)))
            .count();

        assert_eq!(successes, 1);
        assert_eq!(exhausted, 1);

        let profile = store.get(&user()).await.unwrap().unwrap();
        assert_eq!(profile.remaining_free_generations, 0);
        assert_eq!(profile.total_generations, 1);
    }
}
