//! # HashedCredentialTable
//!
//! In-memory table of usernames to argon2 PHC hashes, built from settings at
//! startup and never mutated afterwards.

use std::collections::HashMap;

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use domains::CredentialVerifier;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("stored hash for user {username:?} is not a valid PHC string: {source}")]
    InvalidHash {
        username: String,
        #[source]
        source: argon2::password_hash::Error,
    },

    #[error("failed to hash password: {0}")]
    Hashing(#[from] argon2::password_hash::Error),
}

#[derive(Debug, Default, Clone)]
pub struct HashedCredentialTable {
    users: HashMap<String, String>,
}

impl HashedCredentialTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user. The hash is parsed up front so a typo in configuration
    /// fails at boot instead of rejecting every login.
    pub fn with_user(
        mut self,
        username: impl Into<String>,
        phc_hash: impl Into<String>,
    ) -> Result<Self, AuthError> {
        let username = username.into();
        let phc_hash = phc_hash.into();
        if let Err(source) = PasswordHash::new(&phc_hash) {
            return Err(AuthError::InvalidHash { username, source });
        }
        self.users.insert(username, phc_hash);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl CredentialVerifier for HashedCredentialTable {
    fn verify(&self, username: &str, password: &str) -> bool {
        let Some(stored) = self.users.get(username) else {
            debug!(username, "unknown user");
            return false;
        };
        let Ok(parsed) = PasswordHash::new(stored) else {
            return false;
        };
        // verification reads algorithm and cost parameters from the PHC string
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

/// Hashes `password` with the default argon2id parameters and a random salt.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    hash_password_with(&Argon2::default(), password)
}

pub fn hash_password_with(argon2: &Argon2<'_>, password: &str) -> Result<String, AuthError> {
    let salt = SaltString::encode_b64(Uuid::new_v4().as_bytes())?;
    Ok(argon2.hash_password(password.as_bytes(), &salt)?.to_string())
}
