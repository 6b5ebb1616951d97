//! Proposal storage errors.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ProposalId};

/// Errors raised by saved-proposal operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProposalError {
    /// Record is absent or owned by a different user.
    ///
    /// One variant for both cases so callers cannot distinguish "not
    /// found" from "not yours".
    #[error("Proposal not found: {0}")]
    NotFound(ProposalId),

    /// Proposal storage failed.
    #[error("Proposal storage error: {0}")]
    Infrastructure(String),
}

impl ProposalError {
    /// Creates a not-found error.
    pub fn not_found(id: ProposalId) -> Self {
        ProposalError::NotFound(id)
    }

    /// Creates an infrastructure error with a message.
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ProposalError::Infrastructure(message.into())
    }

    /// Returns the wire-stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ProposalError::NotFound(_) => ErrorCode::ProposalNotFound,
            ProposalError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
}
