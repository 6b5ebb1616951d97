//! Generation orchestration.

mod generate_proposal;

pub use generate_proposal::{GenerateProposalCommand, GenerateProposalHandler};
