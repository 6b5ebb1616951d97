//! RoleStore port - per-user role assignments.

use async_trait::async_trait;

use crate::domain::access::{AccessError, UserRole};
use crate::domain::foundation::UserId;

/// Storage for explicit role assignments.
///
/// Authenticated callers without an assignment resolve to `User`; the
/// `Guest` role is never stored, it stands for the absence of identity.
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// Resolves the role of an authenticated caller.
    async fn role_of(&self, user_id: &UserId) -> Result<UserRole, AccessError>;

    /// Records an explicit role assignment.
    async fn assign(&self, user_id: &UserId, role: UserRole) -> Result<(), AccessError>;
}
