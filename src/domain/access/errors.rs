//! Access control errors.
//!
//! These are domain-centric: they describe what went wrong from the
//! application's perspective, not the identity provider's. All of them are
//! recoverable conditions for the caller, never process-terminating.

use thiserror::Error;

use super::UserRole;
use crate::domain::foundation::ErrorCode;

/// Errors raised while gating an operation on the caller's identity or role.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// No caller identity was supplied by the transport.
    #[error("Authentication is required")]
    Unauthenticated,

    /// Caller is authenticated but lacks the required role.
    #[error("This operation requires the '{required}' role")]
    Forbidden { required: UserRole },

    /// Role storage failed.
    #[error("Role storage error: {0}")]
    Infrastructure(String),
}

impl AccessError {
    /// Creates a forbidden error for a missing required role.
    pub fn forbidden(required: UserRole) -> Self {
        AccessError::Forbidden { required }
    }

    /// Creates an infrastructure error with a message.
    pub fn infrastructure(message: impl Into<String>) -> Self {
        AccessError::Infrastructure(message.into())
    }

    /// Returns the wire-stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AccessError::Unauthenticated => ErrorCode::Unauthenticated,
            AccessError::Forbidden { .. } => ErrorCode::Forbidden,
            AccessError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
}
