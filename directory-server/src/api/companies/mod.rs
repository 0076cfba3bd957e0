//! Company API Module

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_admin;
use crate::core::ServerState;

/// Company router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/companies", routes())
}

fn routes() -> Router<ServerState> {
    // Read routes: any authenticated role
    let read_routes = Router::new().route("/", get(handler::list));

    // Manage routes: admin only
    let manage_routes = Router::new()
        .route("/", axum::routing::post(handler::create))
        .route("/{id}", axum::routing::delete(handler::delete))
        .layer(middleware::from_fn(require_admin));

    read_routes.merge(manage_routes)
}
