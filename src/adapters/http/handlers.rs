//! HTTP handlers connecting routes to the application layer.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::dto::{
    AdminCheckResponse, AssignRoleRequest, GenerateProposalRequest, ProposalOutputResponse,
    RoleResponse, SaveProfileRequest, SaveProposalRequest, SaveProposalResponse,
    SavedProposalResponse, SubscriptionStatusResponse,
};
use super::extract::{Caller, MaybeCaller};
use super::{ApiError, AppState};
use crate::application::handlers::access::{AssignRoleCommand, GetCallerRoleQuery};
use crate::application::handlers::entitlement::{
    AdminSubscriptionStatusQuery, GetCallerProfileQuery, SaveCallerProfileCommand,
    SubscriptionStatusQuery, UpgradeToPremiumCommand,
};
use crate::application::handlers::generation::GenerateProposalCommand;
use crate::application::handlers::proposal::{
    DeleteProposalCommand, GetProposalQuery, ListProposalsQuery, SaveProposalCommand,
};
use crate::domain::foundation::{ProposalId, UserId};

// ════════════════════════════════════════════════════════════════════════════════
// Profile & entitlements
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/profile - the caller's profile, null before first setup.
pub async fn get_profile(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.get_profile_handler();
    let profile = handler
        .handle(GetCallerProfileQuery {
            user_id: caller.user_id,
        })
        .await?;

    Ok(Json(profile.map(SubscriptionStatusResponse::from)))
}

/// PUT /api/profile - create or overwrite the caller's profile.
pub async fn save_profile(
    State(state): State<AppState>,
    caller: Caller,
    Json(request): Json<SaveProfileRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.save_profile_handler();
    handler
        .handle(SaveCallerProfileCommand {
            user_id: caller.user_id,
            profile: request.into(),
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/entitlements - normalized subscription status, never null.
pub async fn get_subscription_status(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.subscription_status_handler();
    let profile = handler
        .handle(SubscriptionStatusQuery {
            user_id: caller.user_id,
        })
        .await?;

    Ok(Json(SubscriptionStatusResponse::from(profile)))
}

/// GET /api/admin/entitlements/:user - any user's status, admin only.
pub async fn admin_get_subscription_status(
    State(state): State<AppState>,
    caller: Caller,
    Path(user): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let target = UserId::new(user)?;
    let handler = state.admin_subscription_status_handler();
    let profile = handler
        .handle(AdminSubscriptionStatusQuery {
            caller: caller.user_id,
            target,
        })
        .await?;

    Ok(Json(profile.map(SubscriptionStatusResponse::from)))
}

/// POST /api/entitlements/upgrade - flip the caller's plan to Premium.
pub async fn upgrade_to_premium(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.upgrade_handler();
    let profile = handler
        .handle(UpgradeToPremiumCommand {
            user_id: caller.user_id,
        })
        .await?;

    Ok(Json(SubscriptionStatusResponse::from(profile)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Generation & saved proposals
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/proposals/generate - metered generation.
pub async fn generate_proposal(
    State(state): State<AppState>,
    caller: Caller,
    Json(request): Json<GenerateProposalRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.generate_proposal_handler();
    let output = handler
        .handle(GenerateProposalCommand {
            user_id: caller.user_id,
            input: request.input.into(),
            output: request.output.map(Into::into),
        })
        .await?;

    Ok(Json(ProposalOutputResponse::from(output)))
}

/// POST /api/proposals - persist an input/output pair.
pub async fn save_proposal(
    State(state): State<AppState>,
    caller: Caller,
    Json(request): Json<SaveProposalRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.save_proposal_handler();
    let id = handler
        .handle(SaveProposalCommand {
            user_id: caller.user_id,
            input: request.input.into(),
            output: request.output.into(),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SaveProposalResponse { id: id.value() }),
    ))
}

/// GET /api/proposals - the caller's saved proposals.
pub async fn list_proposals(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.list_proposals_handler();
    let records = handler
        .handle(ListProposalsQuery {
            user_id: caller.user_id,
        })
        .await?;

    let response: Vec<SavedProposalResponse> =
        records.into_iter().map(SavedProposalResponse::from).collect();
    Ok(Json(response))
}

/// GET /api/proposals/:id - one saved proposal, null when absent or foreign.
pub async fn get_proposal(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.get_proposal_handler();
    let record = handler
        .handle(GetProposalQuery {
            user_id: caller.user_id,
            id: ProposalId::new(id),
        })
        .await?;

    Ok(Json(record.map(SavedProposalResponse::from)))
}

/// DELETE /api/proposals/:id - delete a caller-owned proposal.
pub async fn delete_proposal(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.delete_proposal_handler();
    handler
        .handle(DeleteProposalCommand {
            user_id: caller.user_id,
            id: ProposalId::new(id),
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ════════════════════════════════════════════════════════════════════════════════
// Roles
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/role - the caller's role; Guest when unauthenticated.
pub async fn get_caller_role(
    State(state): State<AppState>,
    MaybeCaller(user_id): MaybeCaller,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.get_caller_role_handler();
    let role = handler.handle(GetCallerRoleQuery { user_id }).await?;

    Ok(Json(RoleResponse { role }))
}

/// GET /api/role/admin - whether the caller is an admin.
pub async fn is_caller_admin(
    State(state): State<AppState>,
    MaybeCaller(user_id): MaybeCaller,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.get_caller_role_handler();
    let role = handler.handle(GetCallerRoleQuery { user_id }).await?;

    Ok(Json(AdminCheckResponse {
        is_admin: role.is_admin(),
    }))
}

/// POST /api/admin/roles - assign a role, admin only.
pub async fn assign_role(
    State(state): State<AppState>,
    caller: Caller,
    Json(request): Json<AssignRoleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let target = UserId::new(request.user)?;
    let handler = state.assign_role_handler();
    handler
        .handle(AssignRoleCommand {
            caller: caller.user_id,
            target,
            role: request.role,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
