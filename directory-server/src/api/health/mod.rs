//! Health API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Health router (public, no auth)
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/health", get(handler::health))
}
