//! UpgradeToPremiumHandler - flip the caller's plan to Premium.

use std::sync::Arc;

use crate::domain::entitlement::{EntitlementError, UserProfile};
use crate::domain::foundation::UserId;
use crate::ports::EntitlementStore;

/// Command to upgrade the caller to Premium.
#[derive(Debug, Clone)]
pub struct UpgradeToPremiumCommand {
    pub user_id: UserId,
}

/// Premium is absorbing: there is no downgrade, and a second upgrade is
/// reported as `AlreadyPremium` for the caller to surface.
pub struct UpgradeToPremiumHandler {
    entitlements: Arc<dyn EntitlementStore>,
}

impl UpgradeToPremiumHandler {
    pub fn new(entitlements: Arc<dyn EntitlementStore>) -> Self {
        Self { entitlements }
    }

    pub async fn handle(
        &self,
        cmd: UpgradeToPremiumCommand,
    ) -> Result<UserProfile, EntitlementError> {
        let profile = self.entitlements.upgrade(&cmd.user_id).await?;
        tracing::info!(user = %cmd.user_id, "upgraded to premium");
        Ok(profile)
    }
}
