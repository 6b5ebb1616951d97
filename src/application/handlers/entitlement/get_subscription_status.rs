//! SubscriptionStatusHandler - normalized entitlements view for the caller.

use std::sync::Arc;

use crate::domain::entitlement::{EntitlementError, UserProfile};
use crate::domain::foundation::UserId;
use crate::ports::EntitlementStore;

/// Query for the caller's subscription status.
#[derive(Debug, Clone)]
pub struct SubscriptionStatusQuery {
    pub user_id: UserId,
}

/// Always answers: a fresh caller gets the default Free profile created on
/// the spot, so the response is never null.
pub struct SubscriptionStatusHandler {
    entitlements: Arc<dyn EntitlementStore>,
}

impl SubscriptionStatusHandler {
    pub fn new(entitlements: Arc<dyn EntitlementStore>) -> Self {
        Self { entitlements }
    }

    pub async fn handle(
        &self,
        query: SubscriptionStatusQuery,
    ) -> Result<UserProfile, EntitlementError> {
        self.entitlements.ensure(&query.user_id).await
    }
}
