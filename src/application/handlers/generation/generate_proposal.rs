//! GenerateProposalHandler - the metered generation orchestration.

use std::sync::Arc;

use crate::application::AppError;
use crate::domain::entitlement::EntitlementError;
use crate::domain::foundation::UserId;
use crate::domain::proposal::{ProposalInput, ProposalOutput};
use crate::domain::template;
use crate::ports::EntitlementStore;

/// Command to run one metered generation.
///
/// `output` carries the caller's locally-computed artifacts when present;
/// the service then meters quota against it without re-deriving the text.
/// When absent, the server renders the same deterministic templates.
#[derive(Debug, Clone)]
pub struct GenerateProposalCommand {
    pub user_id: UserId,
    pub input: ProposalInput,
    pub output: Option<ProposalOutput>,
}

/// Handler for metered proposal generation.
pub struct GenerateProposalHandler {
    entitlements: Arc<dyn EntitlementStore>,
}

impl GenerateProposalHandler {
    pub fn new(entitlements: Arc<dyn EntitlementStore>) -> Self {
        Self { entitlements }
    }

    pub async fn handle(
        &self,
        cmd: GenerateProposalCommand,
    ) -> Result<ProposalOutput, AppError> {
        // 1. Resolve the profile, creating the default Free one if absent.
        let profile = self.entitlements.ensure(&cmd.user_id).await?;

        // 2. Friendly early rejection. `consume` below remains the
        //    atomicity authority; a racer that slips past this check still
        //    fails there.
        if !profile.can_generate() {
            tracing::warn!(user = %cmd.user_id, "generation denied: quota exhausted");
            return Err(EntitlementError::QuotaExhausted.into());
        }

        // 3. Caller-supplied output is authoritative after a shape check;
        //    otherwise render server-side.
        let output = match cmd.output {
            Some(output) => {
                output.validate()?;
                output
            }
            None => template::render(&cmd.input),
        };

        // 4. Meter the generation.
        let updated = self.entitlements.consume(&cmd.user_id).await?;
        tracing::info!(
            user = %cmd.user_id,
            plan = %updated.plan,
            remaining = updated.remaining_free_generations,
            total = updated.total_generations,
            "generation consumed"
        );

        Ok(output)
    }
}
