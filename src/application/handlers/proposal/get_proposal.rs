//! GetProposalHandler - fetch one saved proposal by id.

use std::sync::Arc;

use crate::domain::foundation::{ProposalId, UserId};
use crate::domain::proposal::{ProposalError, SavedProposal};
use crate::ports::ProposalStore;

/// Query for a single caller-owned proposal.
#[derive(Debug, Clone)]
pub struct GetProposalQuery {
    pub user_id: UserId,
    pub id: ProposalId,
}

/// Returns None for absent and foreign-owned records alike.
pub struct GetProposalHandler {
    proposals: Arc<dyn ProposalStore>,
}

impl GetProposalHandler {
    pub fn new(proposals: Arc<dyn ProposalStore>) -> Self {
        Self { proposals }
    }

    pub async fn handle(
        &self,
        query: GetProposalQuery,
    ) -> Result<Option<SavedProposal>, ProposalError> {
        self.proposals.get(&query.user_id, query.id).await
    }
}
