//! DeleteProposalHandler - remove one saved proposal.

use std::sync::Arc;

use crate::domain::foundation::{ProposalId, UserId};
use crate::domain::proposal::ProposalError;
use crate::ports::ProposalStore;

/// Command to delete a caller-owned proposal.
#[derive(Debug, Clone)]
pub struct DeleteProposalCommand {
    pub user_id: UserId,
    pub id: ProposalId,
}

/// Handler for deleting proposals.
///
/// Foreign-owned records fail with the same `NotFound` as missing ones.
pub struct DeleteProposalHandler {
    proposals: Arc<dyn ProposalStore>,
}

impl DeleteProposalHandler {
    pub fn new(proposals: Arc<dyn ProposalStore>) -> Self {
        Self { proposals }
    }

    pub async fn handle(&self, cmd: DeleteProposalCommand) -> Result<(), ProposalError> {
        self.proposals.delete(&cmd.user_id, cmd.id).await?;
        tracing::info!(user = %cmd.user_id, proposal = %cmd.id, "proposal deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProposalStore;
    use crate::domain::proposal::{ProposalInput, ProposalOutput};
    use crate::ports::ProposalStore;

    #[tokio::test]
    async fn owner_can_delete_stranger_cannot() {
        let store = Arc::new(InMemoryProposalStore::new());
        let owner = UserId::new("owner").unwrap();
        let id = store
            .save(&owner, ProposalInput::default(), ProposalOutput::default())
            .await
            .unwrap();

        let handler = DeleteProposalHandler::new(store.clone());

        let foreign = handler
            .handle(DeleteProposalCommand {
                user_id: UserId::new("stranger").unwrap(),
                id,
            })
            .await;
        assert_eq!(foreign, Err(ProposalError::NotFound(id)));

        handler
            .handle(DeleteProposalCommand { user_id: owner.clone(), id })
            .await
            .unwrap();
        assert!(store.get(&owner, id).await.unwrap().is_none());
    }
}
