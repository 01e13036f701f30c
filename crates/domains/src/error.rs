//! # DomainError
//!
//! Centralized error handling for the message board.
//! Every failure a service can report collapses into one of three kinds,
//! which the web layer maps onto 404 / 400 / 500.

use thiserror::Error;

/// The primary error type for all domain and service operations.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Resource not found, or soft-deleted (which is indistinguishable to callers)
    #[error("{resource} not found with ID {id}")]
    NotFound { resource: &'static str, id: i64 },

    /// Invalid or missing request parameter (e.g. id=0, blank title)
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Infrastructure failure (e.g. DB down, transaction aborted)
    #[error("internal service error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

impl DomainError {
    pub fn bad_request(reason: impl Into<String>) -> Self {
        Self::BadRequest(reason.into())
    }
}

/// A specialized Result type for message board logic.
pub type Result<T> = std::result::Result<T, DomainError>;
