//! HTTP DTOs (Data Transfer Objects).
//!
//! The JSON field names are camelCase for compatibility with the existing
//! client; domain types stay snake_case internally.

use serde::{Deserialize, Serialize};

use crate::domain::access::UserRole;
use crate::domain::entitlement::{SubscriptionPlan, UserProfile};
use crate::domain::proposal::{ProposalInput, ProposalOutput, SavedProposal};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Full profile value for create/overwrite.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProfileRequest {
    pub plan: SubscriptionPlan,
    pub remaining_free_generations: u64,
    pub total_generations: u64,
}

impl From<SaveProfileRequest> for UserProfile {
    fn from(request: SaveProfileRequest) -> Self {
        UserProfile {
            plan: request.plan,
            remaining_free_generations: request.remaining_free_generations,
            total_generations: request.total_generations,
        }
    }
}

/// The generation form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalInputDto {
    pub client_job_description: String,
    pub skills: String,
    pub experience_level: String,
    /// Empty string means no portfolio.
    #[serde(default)]
    pub portfolio_link: String,
}

impl From<ProposalInputDto> for ProposalInput {
    fn from(dto: ProposalInputDto) -> Self {
        ProposalInput {
            client_job_description: dto.client_job_description,
            skills: dto.skills,
            experience_level: dto.experience_level,
            portfolio_link: dto.portfolio_link,
        }
    }
}

/// The four artifacts, as a request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalOutputDto {
    pub upwork_free_proposal: String,
    pub cold_email_pitch: String,
    pub short_dm_pitch: String,
    pub pricing_breakdown: String,
}

impl From<ProposalOutputDto> for ProposalOutput {
    fn from(dto: ProposalOutputDto) -> Self {
        ProposalOutput {
            upwork_free_proposal: dto.upwork_free_proposal,
            cold_email_pitch: dto.cold_email_pitch,
            short_dm_pitch: dto.short_dm_pitch,
            pricing_breakdown: dto.pricing_breakdown,
        }
    }
}

/// Request to run one metered generation.
///
/// `output` is the client's locally-computed text; omitting it asks the
/// server to render instead.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateProposalRequest {
    pub input: ProposalInputDto,
    #[serde(default)]
    pub output: Option<ProposalOutputDto>,
}

/// Request to persist an input/output pair.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProposalRequest {
    pub input: ProposalInputDto,
    pub output: ProposalOutputDto,
}

/// Request to assign a role.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRoleRequest {
    /// Target user principal.
    pub user: String,
    pub role: UserRole,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Profile and normalized subscription status response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionStatusResponse {
    pub plan: SubscriptionPlan,
    pub remaining_free_generations: u64,
    pub total_generations: u64,
}

impl From<UserProfile> for SubscriptionStatusResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            plan: profile.plan,
            remaining_free_generations: profile.remaining_free_generations,
            total_generations: profile.total_generations,
        }
    }
}

/// Generated artifacts response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalOutputResponse {
    pub upwork_free_proposal: String,
    pub cold_email_pitch: String,
    pub short_dm_pitch: String,
    pub pricing_breakdown: String,
}

impl From<ProposalOutput> for ProposalOutputResponse {
    fn from(output: ProposalOutput) -> Self {
        Self {
            upwork_free_proposal: output.upwork_free_proposal,
            cold_email_pitch: output.cold_email_pitch,
            short_dm_pitch: output.short_dm_pitch,
            pricing_breakdown: output.pricing_breakdown,
        }
    }
}

/// Echo of the saved input in responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalInputResponse {
    pub client_job_description: String,
    pub skills: String,
    pub experience_level: String,
    pub portfolio_link: String,
}

impl From<ProposalInput> for ProposalInputResponse {
    fn from(input: ProposalInput) -> Self {
        Self {
            client_job_description: input.client_job_description,
            skills: input.skills,
            experience_level: input.experience_level,
            portfolio_link: input.portfolio_link,
        }
    }
}

/// One saved proposal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedProposalResponse {
    pub id: u64,
    pub user_id: String,
    /// Creation instant, ISO 8601.
    pub timestamp: String,
    pub input: ProposalInputResponse,
    pub output: ProposalOutputResponse,
}

impl From<SavedProposal> for SavedProposalResponse {
    fn from(record: SavedProposal) -> Self {
        Self {
            id: record.id.value(),
            user_id: record.user_id.to_string(),
            timestamp: record.timestamp.to_rfc3339(),
            input: record.input.into(),
            output: record.output.into(),
        }
    }
}

/// Id of a freshly saved proposal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProposalResponse {
    pub id: u64,
}

/// Caller role response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleResponse {
    pub role: UserRole,
}

/// Admin-check convenience response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCheckResponse {
    pub is_admin: bool,
}
