//! Role guard: the single capability check evaluated before privileged
//! operations, instead of role conditionals scattered across handlers.

use std::sync::Arc;

use crate::domain::access::{AccessError, UserRole};
use crate::domain::foundation::UserId;
use crate::ports::RoleStore;

/// Resolves caller roles and enforces role requirements.
#[derive(Clone)]
pub struct RoleGuard {
    roles: Arc<dyn RoleStore>,
}

impl RoleGuard {
    pub fn new(roles: Arc<dyn RoleStore>) -> Self {
        Self { roles }
    }

    /// Resolves the role of a possibly-absent caller.
    ///
    /// Absent identity is the Guest role, not an error: role introspection
    /// is the one operation open to unauthenticated callers.
    pub async fn resolve(&self, user_id: Option<&UserId>) -> Result<UserRole, AccessError> {
        match user_id {
            Some(id) => self.roles.role_of(id).await,
            None => Ok(UserRole::Guest),
        }
    }

    /// Fails with `Forbidden` unless the caller's role satisfies the
    /// required one. Returns the resolved role on success.
    pub async fn require(
        &self,
        user_id: &UserId,
        required: UserRole,
    ) -> Result<UserRole, AccessError> {
        let role = self.roles.role_of(user_id).await?;
        if role.satisfies(required) {
            Ok(role)
        } else {
            tracing::warn!(user = %user_id, %role, %required, "role requirement not met");
            Err(AccessError::forbidden(required))
        }
    }
}
