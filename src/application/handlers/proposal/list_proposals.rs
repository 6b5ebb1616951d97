//! ListProposalsHandler - list the caller's saved proposals.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::proposal::{ProposalError, SavedProposal};
use crate::ports::ProposalStore;

/// Query for all of the caller's saved proposals.
#[derive(Debug, Clone)]
pub struct ListProposalsQuery {
    pub user_id: UserId,
}

/// Handler for listing proposals, caller-owned only.
pub struct ListProposalsHandler {
    proposals: Arc<dyn ProposalStore>,
}

impl ListProposalsHandler {
    pub fn new(proposals: Arc<dyn ProposalStore>) -> Self {
        Self { proposals }
    }

    pub async fn handle(
        &self,
        query: ListProposalsQuery,
    ) -> Result<Vec<SavedProposal>, ProposalError> {
        self.proposals.list(&query.user_id).await
    }
}
