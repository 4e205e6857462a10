//! HTTP API for the registration service.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::{handle_panic, logging_middleware};
pub use types::*;

use crate::config::Config;
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use mailchannels_client::MailChannelsClient;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration
    pub config: Arc<Config>,
    /// MailChannels client, absent when email delivery is disabled
    pub mailer: Option<Arc<MailChannelsClient>>,
}

impl AppState {
    /// Create new application state.
    pub fn new(config: Config, mailer: Option<MailChannelsClient>) -> Self {
        Self {
            config: Arc::new(config),
            mailer: mailer.map(Arc::new),
        }
    }
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/register", post(handlers::register))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}
