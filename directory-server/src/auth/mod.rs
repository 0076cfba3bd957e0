//! Authentication and authorization
//!
//! - [`JwtService`] - signed bearer token issuance and verification
//! - [`CurrentUser`] - identity attached to authenticated requests
//! - [`require_auth`] - authentication middleware
//! - [`require_admin`] - admin-role middleware

pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_admin, require_auth};
