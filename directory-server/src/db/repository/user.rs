//! User Repository

use std::sync::Arc;

use shared::models::UserRole;
use uuid::Uuid;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::DirectoryStore;
use crate::db::models::User;
use crate::utils::validation::MIN_PASSWORD_LEN;

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(store: Arc<DirectoryStore>) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// Register a new user with role `user`
    ///
    /// Username uniqueness is case-insensitive: any case variation of a
    /// taken username is rejected.
    pub fn register(&self, username: &str, password: &str) -> RepoResult<User> {
        if username.trim().is_empty() {
            return Err(RepoError::Validation(
                "Username and password are required".to_string(),
            ));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(RepoError::Validation(format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LEN
            )));
        }

        let username = username.trim().to_string();
        let password_hash =
            User::hash_password(password).map_err(|e| RepoError::Internal(e.to_string()))?;

        self.base.store().mutate(|snap| {
            let lowered = username.to_lowercase();
            if snap
                .users
                .iter()
                .any(|u| u.username.to_lowercase() == lowered)
            {
                return Err(RepoError::Duplicate(format!(
                    "Username '{}' already exists",
                    username
                )));
            }

            let user = User {
                id: Uuid::new_v4().to_string(),
                username,
                password_hash,
                role: UserRole::User,
            };
            snap.users.push(user.clone());
            Ok(user)
        })
    }

    /// Check a username/password pair
    ///
    /// Unknown usernames and wrong passwords yield the same
    /// [`RepoError::InvalidCredentials`], so the response cannot be used to
    /// probe which usernames exist.
    pub fn authenticate(&self, username: &str, password: &str) -> RepoResult<User> {
        let snap = self.base.store().load()?;

        let user = snap
            .users
            .iter()
            .find(|u| u.username == username)
            .ok_or(RepoError::InvalidCredentials)?;

        let valid = user
            .verify_password(password)
            .map_err(|e| RepoError::Internal(e.to_string()))?;
        if !valid {
            return Err(RepoError::InvalidCredentials);
        }

        Ok(user.clone())
    }

    /// Seed the admin account on first boot
    ///
    /// Does nothing once any admin exists.
    pub fn ensure_admin(&self, username: &str, password: &str) -> RepoResult<()> {
        let snap = self.base.store().load()?;
        if snap.users.iter().any(|u| u.role == UserRole::Admin) {
            return Ok(());
        }

        let password_hash =
            User::hash_password(password).map_err(|e| RepoError::Internal(e.to_string()))?;
        let username = username.to_string();

        self.base.store().mutate(|snap| {
            // Re-check under the write lock
            if snap.users.iter().any(|u| u.role == UserRole::Admin) {
                return Ok(());
            }

            tracing::warn!(username = %username, "No admin account found, seeding one");
            snap.users.push(User {
                id: Uuid::new_v4().to_string(),
                username,
                password_hash,
                role: UserRole::Admin,
            });
            Ok(())
        })
    }
}
