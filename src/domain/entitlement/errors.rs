//! Entitlement-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | QuotaExhausted | 402 |
//! | AlreadyPremium | 409 |
//! | ProfileNotFound | 404 |
//! | Infrastructure | 500 |

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, UserId};

/// Errors raised by entitlement operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntitlementError {
    /// Free plan with zero remaining generations.
    #[error("No free generations remaining; upgrade to premium to continue")]
    QuotaExhausted,

    /// Upgrade requested for a profile that is already Premium.
    #[error("Profile is already on the premium plan")]
    AlreadyPremium,

    /// No profile exists for this user.
    #[error("No profile found for user: {0}")]
    ProfileNotFound(UserId),

    /// Profile storage failed.
    #[error("Entitlement storage error: {0}")]
    Infrastructure(String),
}

impl EntitlementError {
    /// Creates a profile-not-found error.
    pub fn profile_not_found(user_id: UserId) -> Self {
        EntitlementError::ProfileNotFound(user_id)
    }

    /// Creates an infrastructure error with a message.
    pub fn infrastructure(message: impl Into<String>) -> Self {
        EntitlementError::Infrastructure(message.into())
    }

    /// Returns the wire-stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EntitlementError::QuotaExhausted => ErrorCode::QuotaExhausted,
            EntitlementError::AlreadyPremium => ErrorCode::AlreadyPremium,
            EntitlementError::ProfileNotFound(_) => ErrorCode::ProfileNotFound,
            EntitlementError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_exhausted_maps_to_code() {
        assert_eq!(
            EntitlementError::QuotaExhausted.code(),
            ErrorCode::QuotaExhausted
        );
    }

    #[test]
    fn already_premium_maps_to_code() {
        assert_eq!(
            EntitlementError::AlreadyPremium.code(),
            ErrorCode::AlreadyPremium
        );
    }

    #[test]
    fn profile_not_found_displays_user() {
        let err = EntitlementError::profile_not_found(UserId::new("u-1").unwrap());
        assert_eq!(format!("{}", err), "No profile found for user: u-1");
    }
}
