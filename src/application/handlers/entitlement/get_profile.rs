//! GetCallerProfileHandler - query for the caller's own profile.

use std::sync::Arc;

use crate::domain::entitlement::{EntitlementError, UserProfile};
use crate::domain::foundation::UserId;
use crate::ports::EntitlementStore;

/// Query for the caller's profile.
#[derive(Debug, Clone)]
pub struct GetCallerProfileQuery {
    pub user_id: UserId,
}

/// Returns the profile as stored, or None before first setup.
///
/// Deliberately does NOT ensure: the client uses the None case to drive
/// its first-run profile setup flow.
pub struct GetCallerProfileHandler {
    entitlements: Arc<dyn EntitlementStore>,
}

impl GetCallerProfileHandler {
    pub fn new(entitlements: Arc<dyn EntitlementStore>) -> Self {
        Self { entitlements }
    }

    pub async fn handle(
        &self,
        query: GetCallerProfileQuery,
    ) -> Result<Option<UserProfile>, EntitlementError> {
        self.entitlements.get(&query.user_id).await
    }
}
