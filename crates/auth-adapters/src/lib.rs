//! # auth-adapters
//!
//! Argon2-based implementation of `CredentialVerifier` plus the basic-auth
//! header codec used by the admin gate.

pub mod basic;
pub mod credentials;

pub use basic::BasicCredentials;
pub use credentials::{hash_password, hash_password_with, AuthError, HashedCredentialTable};

// Lets callers pick argon2 cost parameters without a direct dependency.
pub use argon2;
