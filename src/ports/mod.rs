//! Ports: interfaces the application layer depends on.
//!
//! Adapters (in-memory today, a database tomorrow) implement these traits.

mod entitlement_store;
mod proposal_store;
mod role_store;

pub use entitlement_store::EntitlementStore;
pub use proposal_store::ProposalStore;
pub use role_store::RoleStore;
