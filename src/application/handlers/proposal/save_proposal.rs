//! SaveProposalHandler - persist a generation result.

use std::sync::Arc;

use crate::domain::foundation::{ProposalId, UserId};
use crate::domain::proposal::{ProposalError, ProposalInput, ProposalOutput};
use crate::ports::ProposalStore;

/// Command to save an input/output pair.
///
/// Saving is independent of the generation quota: an exhausted Free user
/// can still save output generated earlier. The output may carry
/// client-side edits, so no shape check is applied here.
#[derive(Debug, Clone)]
pub struct SaveProposalCommand {
    pub user_id: UserId,
    pub input: ProposalInput,
    pub output: ProposalOutput,
}

/// Handler for saving proposals.
pub struct SaveProposalHandler {
    proposals: Arc<dyn ProposalStore>,
}

impl SaveProposalHandler {
    pub fn new(proposals: Arc<dyn ProposalStore>) -> Self {
        Self { proposals }
    }

    pub async fn handle(&self, cmd: SaveProposalCommand) -> Result<ProposalId, ProposalError> {
        let id = self
            .proposals
            .save(&cmd.user_id, cmd.input, cmd.output)
            .await?;
        tracing::info!(user = %cmd.user_id, proposal = %id, "proposal saved");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProposalStore;
    use crate::ports::ProposalStore;

    #[tokio::test]
    async fn save_returns_fresh_id_each_time() {
        let store = Arc::new(InMemoryProposalStore::new());
        let handler = SaveProposalHandler::new(store.clone());
        let user = UserId::new("saver").unwrap();

        let cmd = SaveProposalCommand {
            user_id: user.clone(),
            input: ProposalInput::default(),
            output: ProposalOutput::default(),
        };

        let first = handler.handle(cmd.clone()).await.unwrap();
        let second = handler.handle(cmd).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(store.list(&user).await.unwrap().len(), 2);
    }
}
