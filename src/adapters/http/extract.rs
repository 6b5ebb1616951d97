//! Caller identity extraction.
//!
//! The core never sees credentials: it trusts the transport's
//! authenticated-caller assertion. In production a token-validating
//! middleware injects the principal; for development and tests an
//! `X-User-Id` header carries it directly.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::ApiError;
use crate::domain::access::AccessError;
use crate::domain::foundation::UserId;

/// Header carrying the asserted caller principal.
pub const CALLER_HEADER: &str = "X-User-Id";

/// An authenticated caller. Rejects the request with 401 when absent.
#[derive(Debug, Clone)]
pub struct Caller {
    pub user_id: UserId,
}

/// A possibly-absent caller, for the role-introspection endpoints that
/// answer Guest instead of rejecting.
#[derive(Debug, Clone)]
pub struct MaybeCaller(pub Option<UserId>);

fn caller_from_parts(parts: &Parts) -> Option<UserId> {
    parts
        .headers
        .get(CALLER_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| UserId::new(value).ok())
}

#[async_trait]
impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match caller_from_parts(parts) {
            Some(user_id) => Ok(Caller { user_id }),
            None => Err(ApiError::from(AccessError::Unauthenticated)),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for MaybeCaller
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeCaller(caller_from_parts(parts)))
    }
}
