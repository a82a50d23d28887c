//! Shared types for the point-of-sale backend
//!
//! Common types used by the server and its clients: entity models,
//! request/response DTOs, and the unified error system.

pub mod client;
pub mod error;
pub mod models;

pub use error::{AppError, AppResult, ErrorCode};
