//! message-board/crates/domains/src/lib.rs
//!
//! The central domain types and port definitions for the message board.

pub mod error;
pub mod models;
pub mod ports;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use ports::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_id_rejects_zero_and_negatives() {
        assert!(matches!(BoardId::new(0), Err(DomainError::BadRequest(_))));
        assert!(matches!(BoardId::new(-3), Err(DomainError::BadRequest(_))));
        assert_eq!(BoardId::new(42).unwrap().get(), 42);
    }

    #[test]
    fn test_new_board_title_rules() {
        assert!(NewBoard::new("hello", "").is_ok());
        assert!(matches!(NewBoard::new("   ", "body"), Err(DomainError::BadRequest(_))));

        let at_limit = "가".repeat(TITLE_MAX_CHARS);
        assert!(NewBoard::new(at_limit, "multibyte counts as one").is_ok());

        let too_long = "x".repeat(TITLE_MAX_CHARS + 1);
        assert!(matches!(BoardChanges::new(too_long, "c"), Err(DomainError::BadRequest(_))));
    }

    #[test]
    fn test_page_request_offsets() {
        assert!(PageRequest::new(0).is_err());
        assert_eq!(PageRequest::first().offset(), 0);

        let second = PageRequest::new(2).unwrap();
        assert_eq!(second.limit(), 10);
        assert_eq!(second.offset(), 10);
    }

    #[test]
    fn test_internal_error_keeps_context_chain() {
        let err: DomainError = anyhow::anyhow!("connection refused")
            .context("failed to load board 7")
            .into();
        let message = err.to_string();
        assert!(message.contains("failed to load board 7"));
        assert!(message.contains("connection refused"));
    }
}
