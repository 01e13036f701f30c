//! # services
//!
//! Application services sitting between the web adapters and the ports.

pub mod board_service;

pub use board_service::BoardService;
