//! HTTP adapter: axum routes, DTOs, and error mapping.

mod dto;
mod error;
mod extract;
mod handlers;
mod routes;
mod state;

pub use error::{ApiError, ErrorResponse};
pub use extract::{Caller, MaybeCaller, CALLER_HEADER};
pub use routes::api_router;
pub use state::AppState;
