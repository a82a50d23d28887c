//! Numeric error codes carried in every error body
//!
//! Ranges:
//! - 0xxx: request validation
//! - 1xxx: login
//! - 6xxx: catalog
//! - 9xxx: storage

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code sent to clients as a bare number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx ====================
    /// Malformed or out-of-range request field
    ValidationFailed = 2,

    // ==================== 1xxx ====================
    /// Activation key matches no active user
    InvalidCredentials = 1002,

    // ==================== 6xxx ====================
    ProductNotFound = 6001,
    /// Negative price on create/update
    ProductInvalidPrice = 6002,
    /// Negative stock on create/update
    ProductInvalidStock = 6003,

    // ==================== 9xxx ====================
    /// Collection write failed
    StorageError = 9002,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default English message, used when no custom message is given
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidCredentials => "Invalid or expired activation key",
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductInvalidPrice => "Product has invalid price",
            ErrorCode::ProductInvalidStock => "Product has invalid stock level",
            ErrorCode::StorageError => "Storage error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// A number that names no [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Ok(match value {
            2 => ErrorCode::ValidationFailed,
            1002 => ErrorCode::InvalidCredentials,
            6001 => ErrorCode::ProductNotFound,
            6002 => ErrorCode::ProductInvalidPrice,
            6003 => ErrorCode::ProductInvalidStock,
            9002 => ErrorCode::StorageError,
            _ => return Err(InvalidErrorCode(value)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values() {
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::ProductNotFound.code(), 6001);
        assert_eq!(ErrorCode::StorageError.code(), 9002);
    }

    #[test]
    fn test_try_from_known_and_unknown() {
        assert_eq!(ErrorCode::try_from(1002), Ok(ErrorCode::InvalidCredentials));
        assert_eq!(ErrorCode::try_from(0), Err(InvalidErrorCode(0)));
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::ProductNotFound).unwrap();
        assert_eq!(json, "6001");

        let code: ErrorCode = serde_json::from_str("9002").unwrap();
        assert_eq!(code, ErrorCode::StorageError);

        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }
}
