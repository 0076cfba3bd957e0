//! Server state

use std::sync::Arc;

use crate::auth::JwtService;
use crate::core::{Config, Result};
use crate::db::DirectoryStore;
use crate::db::repository::UserRepository;

/// Server state - shared handles to all services
///
/// Cloned per request; everything shared sits behind an `Arc`.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | Config | configuration (immutable) |
/// | store | Arc<DirectoryStore> | snapshot store |
/// | jwt_service | Arc<JwtService> | token issuance/verification |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub store: Arc<DirectoryStore>,
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// Create server state (manual construction)
    ///
    /// Usually [`ServerState::initialize`] is used instead.
    pub fn new(config: Config, store: Arc<DirectoryStore>, jwt_service: Arc<JwtService>) -> Self {
        Self {
            config,
            store,
            jwt_service,
        }
    }

    /// Initialize the server state
    ///
    /// 1. Ensure the work directory structure exists
    /// 2. Open the snapshot store
    /// 3. Build the JWT service from the configured secret
    /// 4. Seed the admin account when no admin exists yet
    pub fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir_structure()?;

        let store = Arc::new(DirectoryStore::new(config.store_path()));
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        let state = Self::new(config.clone(), store, jwt_service);

        UserRepository::new(state.store())
            .ensure_admin(&config.admin_username, &config.admin_password)?;

        Ok(state)
    }

    /// Get the snapshot store
    pub fn store(&self) -> Arc<DirectoryStore> {
        self.store.clone()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
