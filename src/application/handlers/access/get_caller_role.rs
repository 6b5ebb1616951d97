//! GetCallerRoleHandler - role introspection for any caller.

use crate::application::RoleGuard;
use crate::domain::access::{AccessError, UserRole};
use crate::domain::foundation::UserId;

/// Query for the caller's own role.
///
/// The only operation open to unauthenticated callers: absent identity
/// resolves to Guest rather than failing.
#[derive(Debug, Clone)]
pub struct GetCallerRoleQuery {
    pub user_id: Option<UserId>,
}

/// Handler for role introspection.
pub struct GetCallerRoleHandler {
    guard: RoleGuard,
}

impl GetCallerRoleHandler {
    pub fn new(guard: RoleGuard) -> Self {
        Self { guard }
    }

    pub async fn handle(&self, query: GetCallerRoleQuery) -> Result<UserRole, AccessError> {
        self.guard.resolve(query.user_id.as_ref()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRoleStore;
    use std::sync::Arc;

    fn handler() -> GetCallerRoleHandler {
        let store = InMemoryRoleStore::with_admins([UserId::new("root").unwrap()]);
        GetCallerRoleHandler::new(RoleGuard::new(Arc::new(store)))
    }

    #[tokio::test]
    async fn anonymous_caller_is_guest() {
        let role = handler()
            .handle(GetCallerRoleQuery { user_id: None })
            .await
            .unwrap();
        assert_eq!(role, UserRole::Guest);
    }

    #[tokio::test]
    async fn authenticated_caller_defaults_to_user() {
        let role = handler()
            .handle(GetCallerRoleQuery {
                user_id: Some(UserId::new("someone").unwrap()),
            })
            .await
            .unwrap();
        assert_eq!(role, UserRole::User);
    }

    #[tokio::test]
    async fn seeded_admin_is_admin() {
        let role = handler()
            .handle(GetCallerRoleQuery {
                user_id: Some(UserId::new("root").unwrap()),
            })
            .await
            .unwrap();
        assert_eq!(role, UserRole::Admin);
    }
}
