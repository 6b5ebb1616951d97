//! In-memory role store adapter.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::access::{AccessError, UserRole};
use crate::domain::foundation::UserId;
use crate::ports::RoleStore;

/// Role assignments backed by a hash map.
///
/// Callers without an assignment resolve to `User`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoleStore {
    roles: Arc<RwLock<HashMap<UserId, UserRole>>>,
}

impl InMemoryRoleStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with admin principals.
    ///
    /// Used at startup to break the bootstrap cycle: assigning roles
    /// requires an existing admin.
    pub fn with_admins(admins: impl IntoIterator<Item = UserId>) -> Self {
        let roles = admins
            .into_iter()
            .map(|id| (id, UserRole::Admin))
            .collect();
        Self {
            roles: Arc::new(RwLock::new(roles)),
        }
    }
}

#[async_trait]
impl RoleStore for InMemoryRoleStore {
    async fn role_of(&self, user_id: &UserId) -> Result<UserRole, AccessError> {
        let roles = self.roles.read().await;
        Ok(roles.get(user_id).copied().unwrap_or(UserRole::User))
    }

    async fn assign(&self, user_id: &UserId, role: UserRole) -> Result<(), AccessError> {
        let mut roles = self.roles.write().await;
        roles.insert(user_id.clone(), role);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    #[tokio::test]
    async fn unassigned_caller_resolves_to_user() {
        let store = InMemoryRoleStore::new();
        assert_eq!(store.role_of(&user("anyone")).await.unwrap(), UserRole::User);
    }

    #[tokio::test]
    async fn seeded_admin_resolves_to_admin() {
        let store = InMemoryRoleStore::with_admins([user("root")]);
        assert_eq!(store.role_of(&user("root")).await.unwrap(), UserRole::Admin);
        assert_eq!(store.role_of(&user("other")).await.unwrap(), UserRole::User);
    }

    #[tokio::test]
    async fn assign_overwrites_previous_role() {
        let store = InMemoryRoleStore::new();
        store.assign(&user("u"), UserRole::Admin).await.unwrap();
        assert_eq!(store.role_of(&user("u")).await.unwrap(), UserRole::Admin);

        store.assign(&user("u"), UserRole::User).await.unwrap();
        assert_eq!(store.role_of(&user("u")).await.unwrap(), UserRole::User);
    }
}
