//! Pitchcraft server binary.

use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use pitchcraft::adapters::http::{api_router, AppState};
use pitchcraft::adapters::memory::{
    InMemoryEntitlementStore, InMemoryProposalStore, InMemoryRoleStore,
};
use pitchcraft::config::AppConfig;

#[tokio::main]
async fn main() {
    let config = AppConfig::load().expect("Failed to load configuration");
    config.validate().expect("Invalid configuration");

    init_tracing(&config);

    let entitlements =
        InMemoryEntitlementStore::with_allowance(config.quota.free_generation_allowance);
    let roles = InMemoryRoleStore::with_admins(config.access.admin_ids());

    let state = AppState::new(
        Arc::new(entitlements),
        Arc::new(InMemoryProposalStore::new()),
        Arc::new(roles),
    );

    let app = api_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "pitchcraft listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app)
        .await
        .expect("Server error");
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if config.server.is_production() {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
