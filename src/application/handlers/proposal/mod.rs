//! Saved-proposal command and query handlers.

mod delete_proposal;
mod get_proposal;
mod list_proposals;
mod save_proposal;

pub use delete_proposal::{DeleteProposalCommand, DeleteProposalHandler};
pub use get_proposal::{GetProposalHandler, GetProposalQuery};
pub use list_proposals::{ListProposalsHandler, ListProposalsQuery};
pub use save_proposal::{SaveProposalCommand, SaveProposalHandler};
