//! Error handling shared by the server and its clients
//!
//! - [`ErrorCode`]: numeric code sent on the wire
//! - [`ErrorCategory`]: code range, decides whether text reaches the client
//! - [`AppError`]: code, message and optional details
//! - [`ErrorBody`]: JSON rendering of an [`AppError`]
//!
//! ```
//! use shared::error::{AppError, ErrorBody, ErrorCode};
//!
//! let err = AppError::validation("price must not be negative").with_detail("field", "price");
//! let body = ErrorBody::from_error(&err);
//! assert_eq!(body.code, ErrorCode::ValidationFailed);
//! assert_eq!(body.code.code(), 2);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
