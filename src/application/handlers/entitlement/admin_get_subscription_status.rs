//! AdminSubscriptionStatusHandler - admin-only view of any user's status.

use std::sync::Arc;

use crate::application::{AppError, RoleGuard};
use crate::domain::access::UserRole;
use crate::domain::entitlement::UserProfile;
use crate::domain::foundation::UserId;
use crate::ports::EntitlementStore;

/// Query for another user's subscription status.
#[derive(Debug, Clone)]
pub struct AdminSubscriptionStatusQuery {
    pub caller: UserId,
    pub target: UserId,
}

/// The one operation that bypasses self-only scoping, so it requires the
/// Admin role. Returns None when the target has no profile yet.
pub struct AdminSubscriptionStatusHandler {
    guard: RoleGuard,
    entitlements: Arc<dyn EntitlementStore>,
}

impl AdminSubscriptionStatusHandler {
    pub fn new(guard: RoleGuard, entitlements: Arc<dyn EntitlementStore>) -> Self {
        Self { guard, entitlements }
    }

    pub async fn handle(
        &self,
        query: AdminSubscriptionStatusQuery,
    ) -> Result<Option<UserProfile>, AppError> {
        self.guard.require(&query.caller, UserRole::Admin).await?;
        let profile = self.entitlements.get(&query.target).await?;
        Ok(profile)
    }
}
