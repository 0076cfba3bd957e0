//! Authentication Handlers
//!
//! Handles registration, login, and current-identity lookup. Both register
//! and login issue a token immediately, so a fresh registration is already
//! signed in.

use axum::{Extension, Json, extract::State};

use shared::client::{AuthResponse, LoginRequest, RegisterRequest, UserInfo};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::UserRepository;
use crate::utils::AppError;
use crate::{audit_log, security_log};

/// Register handler
///
/// Creates a user with role `user` and returns a token for it.
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let repo = UserRepository::new(state.store());
    let user = repo.register(&req.username, &req.password)?;

    let token = state
        .jwt_service()
        .generate_token(&user.id, &user.username, user.role)?;

    audit_log!(&user.id, "register", &user.username);
    tracing::info!(user_id = %user.id, username = %user.username, "User registered");

    Ok(Json(AuthResponse {
        token,
        user: UserInfo {
            id: user.id,
            username: user.username,
            role: user.role,
        },
    }))
}

/// Login handler
///
/// Authenticates user credentials and returns a JWT token. The token embeds
/// the identity as of now; later role or account changes do not affect it
/// until it expires.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let repo = UserRepository::new(state.store());

    let user = match repo.authenticate(&req.username, &req.password) {
        Ok(user) => user,
        Err(e) => {
            security_log!(WARN, "login_failed", username = %req.username);
            return Err(e.into());
        }
    };

    let token = state
        .jwt_service()
        .generate_token(&user.id, &user.username, user.role)?;

    audit_log!(&user.id, "login", &user.username);
    tracing::info!(user_id = %user.id, username = %user.username, role = %user.role, "User logged in");

    Ok(Json(AuthResponse {
        token,
        user: UserInfo {
            id: user.id,
            username: user.username,
            role: user.role,
        },
    }))
}

/// Get current user info
///
/// Echoes the identity embedded in the presented token (the snapshot taken
/// at issuance, not the live user record).
pub async fn me(Extension(user): Extension<CurrentUser>) -> Result<Json<UserInfo>, AppError> {
    Ok(Json(UserInfo {
        id: user.id,
        username: user.username,
        role: user.role,
    }))
}
