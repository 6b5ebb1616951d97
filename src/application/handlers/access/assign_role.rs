//! AssignRoleHandler - privileged role assignment.

use std::sync::Arc;

use crate::application::RoleGuard;
use crate::domain::access::{AccessError, UserRole};
use crate::domain::foundation::UserId;
use crate::ports::RoleStore;

/// Command to assign a role to a user.
#[derive(Debug, Clone)]
pub struct AssignRoleCommand {
    pub caller: UserId,
    pub target: UserId,
    pub role: UserRole,
}

/// Admin-only role assignment.
pub struct AssignRoleHandler {
    guard: RoleGuard,
    roles: Arc<dyn RoleStore>,
}

impl AssignRoleHandler {
    pub fn new(guard: RoleGuard, roles: Arc<dyn RoleStore>) -> Self {
        Self { guard, roles }
    }

    pub async fn handle(&self, cmd: AssignRoleCommand) -> Result<(), AccessError> {
        self.guard.require(&cmd.caller, UserRole::Admin).await?;
        self.roles.assign(&cmd.target, cmd.role).await?;
        tracing::info!(
            caller = %cmd.caller,
            target = %cmd.target,
            role = %cmd.role,
            "role assigned"
        );
        Ok(())
    }
}
