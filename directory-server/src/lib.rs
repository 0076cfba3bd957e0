//! Directory Server - internal employee directory
//!
//! # Architecture overview
//!
//! - **Authentication** (`auth`): JWT + Argon2; every request passes the
//!   auth gate before reaching a handler, mutations additionally require the
//!   admin role
//! - **Storage** (`db`): single-file JSON snapshot store with cascade/orphan
//!   referential rules
//! - **HTTP API** (`api`): RESTful routes per resource
//! - **Export** (`services`): styled XLSX projection of the employee set
//!
//! # Module structure
//!
//! ```text
//! directory-server/src/
//! ├── core/          # configuration, state, server
//! ├── auth/          # JWT authentication, admin gate
//! ├── db/            # snapshot store and repositories
//! ├── api/           # HTTP routes and handlers
//! ├── services/      # spreadsheet export
//! └── utils/         # errors, logging, validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    ____  _                __
   / __ \(_)_______  _____/ /_____  _______  __
  / / / / / ___/ _ \/ ___/ __/ __ \/ ___/ / / /
 / /_/ / / /  /  __/ /__/ /_/ /_/ / /  / /_/ /
/_____/_/_/   \___/\___/\__/\____/_/   \__, /
                                      /____/
    "#
    );
}
