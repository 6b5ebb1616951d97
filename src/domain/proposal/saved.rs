//! Saved proposal record.

use serde::{Deserialize, Serialize};

use super::{ProposalInput, ProposalOutput};
use crate::domain::foundation::{ProposalId, Timestamp, UserId};

/// A persisted generation result, owned exclusively by one user.
///
/// Records are immutable: there is no update operation, revision is
/// delete + recreate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedProposal {
    pub id: ProposalId,
    pub user_id: UserId,
    pub timestamp: Timestamp,
    pub input: ProposalInput,
    pub output: ProposalOutput,
}

impl SavedProposal {
    /// Creates a record stamped with the current instant.
    pub fn new(
        id: ProposalId,
        user_id: UserId,
        input: ProposalInput,
        output: ProposalOutput,
    ) -> Self {
        Self {
            id,
            user_id,
            timestamp: Timestamp::now(),
            input,
            output,
        }
    }

    /// Whether this record belongs to the given user.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_owned_by_creator() {
        let owner = UserId::new("owner").unwrap();
        let record = SavedProposal::new(
            ProposalId::new(1),
            owner.clone(),
            ProposalInput::default(),
            ProposalOutput::default(),
        );

        assert!(record.is_owned_by(&owner));
        assert!(!record.is_owned_by(&UserId::new("stranger").unwrap()));
    }
}
