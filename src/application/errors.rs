//! Shared application error for handlers that cross module boundaries.

use thiserror::Error;

use crate::domain::access::AccessError;
use crate::domain::entitlement::EntitlementError;
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::proposal::ProposalError;

/// Union of the domain error families.
///
/// Handlers that touch a single module return that module's error; the
/// ones that mix concerns (generation, admin queries) return this. Every
/// variant keeps its distinguishable wire code so UI callers can branch
/// (upgrade prompt on quota exhaustion, login on missing identity).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Entitlement(#[from] EntitlementError),

    #[error(transparent)]
    Proposal(#[from] ProposalError),

    /// A caller-supplied value failed validation, e.g. the proposal
    /// output shape check.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}

impl AppError {
    /// Returns the wire-stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Access(err) => err.code(),
            AppError::Entitlement(err) => err.code(),
            AppError::Proposal(err) => err.code(),
            AppError::Validation(ValidationError::EmptyField { .. }) => ErrorCode::EmptyField,
            AppError::Validation(_) => ErrorCode::ValidationFailed,
        }
    }
}
