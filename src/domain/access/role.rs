//! Caller role definitions.
//!
//! A role is a derived attribute of an identity, resolved per call. It is
//! never stored on the user profile.

use serde::{Deserialize, Serialize};

/// Role of the caller principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full access, including other users' subscription status.
    Admin,

    /// Authenticated caller with self-scoped access.
    User,

    /// No identity present. May only introspect its own (absent) role.
    Guest,
}

impl UserRole {
    /// Returns true for the admin role.
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Returns the display name for this role.
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
            UserRole::Guest => "guest",
        }
    }

    /// Returns the numeric rank of this role for comparison.
    ///
    /// Higher rank = more privilege.
    pub fn rank(&self) -> u8 {
        match self {
            UserRole::Guest => 0,
            UserRole::User => 1,
            UserRole::Admin => 2,
        }
    }

    /// Single guard predicate for role checks: does this role meet the
    /// required one?
    pub fn satisfies(&self, required: UserRole) -> bool {
        self.rank() >= required.rank()
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
