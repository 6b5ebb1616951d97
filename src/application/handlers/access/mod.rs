//! Role resolution and assignment handlers.

mod assign_role;
mod get_caller_role;

pub use assign_role::{AssignRoleCommand, AssignRoleHandler};
pub use get_caller_role::{GetCallerRoleHandler, GetCallerRoleQuery};
