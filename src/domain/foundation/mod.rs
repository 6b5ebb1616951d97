//! Foundation types shared across the domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{ProposalId, UserId};
pub use timestamp::Timestamp;
