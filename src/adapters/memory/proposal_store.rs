//! In-memory proposal store adapter.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{ProposalId, UserId};
use crate::domain::proposal::{ProposalError, ProposalInput, ProposalOutput, SavedProposal};
use crate::ports::ProposalStore;

/// Records plus the id sequence, guarded together by one lock so ids stay
/// unique under concurrent saves.
#[derive(Debug, Default)]
struct Shelf {
    next_id: u64,
    records: Vec<SavedProposal>,
}

/// Single-authority saved-proposal store.
///
/// Records live in insertion order; ids are assigned from a monotonic
/// sequence starting at 1 and are never reused after deletion.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProposalStore {
    shelf: Arc<RwLock<Shelf>>,
}

impl InMemoryProposalStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored records across all users (useful for tests).
    pub async fn record_count(&self) -> usize {
        self.shelf.read().await.records.len()
    }
}

#[async_trait]
impl ProposalStore for InMemoryProposalStore {
    async fn save(
        &self,
        user_id: &UserId,
        input: ProposalInput,
        output: ProposalOutput,
    ) -> Result<ProposalId, ProposalError> {
        let mut shelf = self.shelf.write().await;
        shelf.next_id += 1;
        let id = ProposalId::new(shelf.next_id);
        shelf
            .records
            .push(SavedProposal::new(id, user_id.clone(), input, output));
        Ok(id)
    }

    async fn get(
        &self,
        user_id: &UserId,
        id: ProposalId,
    ) -> Result<Option<SavedProposal>, ProposalError> {
        let shelf = self.shelf.read().await;
        Ok(shelf
            .records
            .iter()
            .find(|record| record.id == id && record.is_owned_by(user_id))
            .cloned())
    }

    async fn list(&self, user_id: &UserId) -> Result<Vec<SavedProposal>, ProposalError> {
        let shelf = self.shelf.read().await;
        Ok(shelf
            .records
            .iter()
            .filter(|record| record.is_owned_by(user_id))
            .cloned()
            .collect())
    }

    async fn delete(&self, user_id: &UserId, id: ProposalId) -> Result<(), ProposalError> {
        let mut shelf = self.shelf.write().await;
        let position = shelf
            .records
            .iter()
            .position(|record| record.id == id && record.is_owned_by(user_id))
            .ok_or(ProposalError::NotFound(id))?;
        shelf.records.remove(position);
        Ok(())
    }
}
