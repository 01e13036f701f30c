//! # Ports
//!
//! Any adapter must implement these traits to be wired into the server.

use async_trait::async_trait;

use crate::models::{Board, BoardChanges, BoardId, NewBoard};

/// Data persistence contract for boards.
///
/// Every method only sees rows with `deleted_at IS NULL`; soft-deleted rows
/// stay in storage but are invisible through this trait.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Live boards ordered by id, newest first.
    async fn list(&self, limit: i64, offset: i64) -> anyhow::Result<Vec<Board>>;

    async fn find(&self, id: BoardId) -> anyhow::Result<Option<Board>>;

    /// Inserts with `created_at = now` and returns the generated id.
    async fn insert(&self, board: &NewBoard) -> anyhow::Result<BoardId>;

    /// Rewrites title/content and stamps `updated_at`. Returns `false` when no
    /// live row matched.
    async fn update(&self, id: BoardId, changes: &BoardChanges) -> anyhow::Result<bool>;

    /// Stamps `deleted_at`. Returns `false` when no live row matched.
    async fn soft_delete(&self, id: BoardId) -> anyhow::Result<bool>;
}

/// Verifies admin credentials presented through basic authentication.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}
