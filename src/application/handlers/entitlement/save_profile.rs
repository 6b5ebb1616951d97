//! SaveCallerProfileHandler - create or overwrite the caller's profile.

use std::sync::Arc;

use crate::domain::entitlement::{EntitlementError, UserProfile};
use crate::domain::foundation::UserId;
use crate::ports::EntitlementStore;

/// Command carrying the full profile value to store.
#[derive(Debug, Clone)]
pub struct SaveCallerProfileCommand {
    pub user_id: UserId,
    pub profile: UserProfile,
}

/// Stores the supplied profile for the caller, overwriting any existing
/// one. The client's first-run setup saves the default Free profile this
/// way.
pub struct SaveCallerProfileHandler {
    entitlements: Arc<dyn EntitlementStore>,
}

impl SaveCallerProfileHandler {
    pub fn new(entitlements: Arc<dyn EntitlementStore>) -> Self {
        Self { entitlements }
    }

    pub async fn handle(&self, cmd: SaveCallerProfileCommand) -> Result<(), EntitlementError> {
        self.entitlements.save(&cmd.user_id, cmd.profile.clone()).await?;
        tracing::info!(
            user = %cmd.user_id,
            plan = %cmd.profile.plan,
            remaining = cmd.profile.remaining_free_generations,
            "profile saved"
        );
        Ok(())
    }
}
