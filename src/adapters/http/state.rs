//! Shared application state for the HTTP layer.

use std::sync::Arc;

use crate::application::handlers::access::{AssignRoleHandler, GetCallerRoleHandler};
use crate::application::handlers::entitlement::{
    AdminSubscriptionStatusHandler, GetCallerProfileHandler, SaveCallerProfileHandler,
    SubscriptionStatusHandler, UpgradeToPremiumHandler,
};
use crate::application::handlers::generation::GenerateProposalHandler;
use crate::application::handlers::proposal::{
    DeleteProposalHandler, GetProposalHandler, ListProposalsHandler, SaveProposalHandler,
};
use crate::application::RoleGuard;
use crate::ports::{EntitlementStore, ProposalStore, RoleStore};

/// Arc-wrapped port implementations, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub entitlements: Arc<dyn EntitlementStore>,
    pub proposals: Arc<dyn ProposalStore>,
    pub roles: Arc<dyn RoleStore>,
}

impl AppState {
    pub fn new(
        entitlements: Arc<dyn EntitlementStore>,
        proposals: Arc<dyn ProposalStore>,
        roles: Arc<dyn RoleStore>,
    ) -> Self {
        Self {
            entitlements,
            proposals,
            roles,
        }
    }

    fn role_guard(&self) -> RoleGuard {
        RoleGuard::new(self.roles.clone())
    }

    // Handlers are created on demand from the shared state.

    pub fn generate_proposal_handler(&self) -> GenerateProposalHandler {
        GenerateProposalHandler::new(self.entitlements.clone())
    }

    pub fn get_profile_handler(&self) -> GetCallerProfileHandler {
        GetCallerProfileHandler::new(self.entitlements.clone())
    }

    pub fn save_profile_handler(&self) -> SaveCallerProfileHandler {
        SaveCallerProfileHandler::new(self.entitlements.clone())
    }

    pub fn subscription_status_handler(&self) -> SubscriptionStatusHandler {
        SubscriptionStatusHandler::new(self.entitlements.clone())
    }

    pub fn admin_subscription_status_handler(&self) -> AdminSubscriptionStatusHandler {
        AdminSubscriptionStatusHandler::new(self.role_guard(), self.entitlements.clone())
    }

    pub fn upgrade_handler(&self) -> UpgradeToPremiumHandler {
        UpgradeToPremiumHandler::new(self.entitlements.clone())
    }

    pub fn save_proposal_handler(&self) -> SaveProposalHandler {
        SaveProposalHandler::new(self.proposals.clone())
    }

    pub fn get_proposal_handler(&self) -> GetProposalHandler {
        GetProposalHandler::new(self.proposals.clone())
    }

    pub fn list_proposals_handler(&self) -> ListProposalsHandler {
        ListProposalsHandler::new(self.proposals.clone())
    }

    pub fn delete_proposal_handler(&self) -> DeleteProposalHandler {
        DeleteProposalHandler::new(self.proposals.clone())
    }

    pub fn get_caller_role_handler(&self) -> GetCallerRoleHandler {
        GetCallerRoleHandler::new(self.role_guard())
    }

    pub fn assign_role_handler(&self) -> AssignRoleHandler {
        AssignRoleHandler::new(self.role_guard(), self.roles.clone())
    }
}
