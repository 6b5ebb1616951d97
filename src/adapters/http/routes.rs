//! Axum router configuration.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    admin_get_subscription_status, assign_role, delete_proposal, generate_proposal,
    get_caller_role, get_profile, get_proposal, get_subscription_status, is_caller_admin,
    list_proposals, save_profile, save_proposal, upgrade_to_premium,
};
use super::AppState;

/// Create the complete API router.
///
/// # Routes
///
/// ## Caller-scoped (require the `X-User-Id` principal)
/// - `GET /api/profile` - caller's profile, null before first setup
/// - `PUT /api/profile` - create/overwrite caller's profile
/// - `GET /api/entitlements` - normalized subscription status
/// - `POST /api/entitlements/upgrade` - flip plan to premium
/// - `POST /api/proposals/generate` - metered generation
/// - `POST /api/proposals` - save a proposal
/// - `GET /api/proposals` - list caller's proposals
/// - `GET /api/proposals/:id` - fetch one proposal
/// - `DELETE /api/proposals/:id` - delete one proposal
/// - `POST /api/admin/roles` - assign a role (admin)
/// - `GET /api/admin/entitlements/:user` - any user's status (admin)
///
/// ## Open to anonymous callers
/// - `GET /api/role` - caller's role, Guest when unauthenticated
/// - `GET /api/role/admin` - admin check
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/profile", get(get_profile).put(save_profile))
        .route("/api/entitlements", get(get_subscription_status))
        .route("/api/entitlements/upgrade", post(upgrade_to_premium))
        .route(
            "/api/proposals",
            get(list_proposals).post(save_proposal),
        )
        .route("/api/proposals/generate", post(generate_proposal))
        .route(
            "/api/proposals/:id",
            get(get_proposal).delete(delete_proposal),
        )
        .route("/api/role", get(get_caller_role))
        .route("/api/role/admin", get(is_caller_admin))
        .route("/api/admin/roles", post(assign_role))
        .route(
            "/api/admin/entitlements/:user",
            get(admin_get_subscription_status),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::http::extract::CALLER_HEADER;
    use crate::adapters::memory::{
        InMemoryEntitlementStore, InMemoryProposalStore, InMemoryRoleStore,
    };

    fn test_app() -> Router {
        let state = AppState::new(
            Arc::new(InMemoryEntitlementStore::new()),
            Arc::new(InMemoryProposalStore::new()),
            Arc::new(InMemoryRoleStore::new()),
        );
        api_router().with_state(state)
    }

    #[tokio::test]
    async fn entitlements_require_identity() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/entitlements")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn entitlements_answer_for_identified_caller() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/entitlements")
                    .header(CALLER_HEADER, "user-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn role_endpoint_tolerates_anonymous_caller() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/role")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/nonsense")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
