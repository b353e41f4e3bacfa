//! Route definitions for the soccer-stats API
//!
//! Organizes all API routes and applies middleware. Route shapes follow
//! the service's public surface: login plus protected match, player and
//! team operations.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod auth;
mod health;
mod matches;
mod players;
mod teams;

#[cfg(test)]
mod auth_tests;

pub use auth::auth_routes;
pub use matches::match_routes;
pub use players::player_routes;
pub use teams::team_routes;

/// Plain message body used by mutation endpoints
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .merge(auth::auth_routes())
        .merge(matches::match_routes())
        .merge(players::player_routes())
        .merge(teams::team_routes())
        // Apply middleware layers
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
