//! Data models
//!
//! Shared between pos-server and the web frontend (via API).
//! All IDs are `i64`, assigned by the server.

pub mod dashboard;
pub mod product;
pub mod sale;
pub mod user;

// Re-exports
pub use dashboard::*;
pub use product::*;
pub use sale::*;
pub use user::*;
