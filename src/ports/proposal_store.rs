//! ProposalStore port - per-user keyed collection of saved proposals.

use async_trait::async_trait;

use crate::domain::foundation::{ProposalId, UserId};
use crate::domain::proposal::{ProposalError, ProposalInput, ProposalOutput, SavedProposal};

/// Storage for saved generation results.
///
/// Every read and delete is scoped to the owning user: a record owned by a
/// different user behaves exactly like an absent one, so existence never
/// leaks across users. Saving is independent of the generation quota.
#[async_trait]
pub trait ProposalStore: Send + Sync {
    /// Stores a record under the next monotonic id and returns the id.
    async fn save(
        &self,
        user_id: &UserId,
        input: ProposalInput,
        output: ProposalOutput,
    ) -> Result<ProposalId, ProposalError>;

    /// Returns the record, or None when absent or owned by someone else.
    async fn get(
        &self,
        user_id: &UserId,
        id: ProposalId,
    ) -> Result<Option<SavedProposal>, ProposalError>;

    /// Returns all records owned by the user, in insertion order.
    async fn list(&self, user_id: &UserId) -> Result<Vec<SavedProposal>, ProposalError>;

    /// Deletes the record. `NotFound` when absent or owned by someone
    /// else, indistinguishably.
    async fn delete(&self, user_id: &UserId, id: ProposalId) -> Result<(), ProposalError>;
}
