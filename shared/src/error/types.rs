//! `AppError` and the JSON body it renders to

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Request-level failure returned by services and handlers
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    /// Field-level context, e.g. the product id that was not found
    pub details: Option<HashMap<String, Value>>,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn new(code: ErrorCode) -> Self {
        Self::with_message(code, code.message())
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    pub fn product_not_found(id: i64) -> Self {
        Self::new(ErrorCode::ProductNotFound).with_detail("product_id", id)
    }

    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials)
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StorageError, msg)
    }
}

/// Error body: `{"code": 6001, "message": "...", "details": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl ErrorBody {
    /// Body for a client; storage errors keep only their generic message
    pub fn from_error(err: &AppError) -> Self {
        if err.code.category() == ErrorCategory::System {
            return Self {
                code: err.code,
                message: err.code.message().to_string(),
                details: None,
            };
        }
        Self {
            code: err.code,
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.code.category() == ErrorCategory::System {
            tracing::error!(code = %self.code, message = %self.message, "System error occurred");
        }
        (self.http_status(), Json(ErrorBody::from_error(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_message() {
        let err = AppError::new(ErrorCode::ProductNotFound);
        assert_eq!(err.message, "Product not found");
        assert!(err.details.is_none());
        assert_eq!(err.to_string(), "Product not found");
    }

    #[test]
    fn test_details_accumulate() {
        let err = AppError::validation("quantity must not be negative")
            .with_detail("quantity", -3)
            .with_detail("product_id", 4);

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details["quantity"], -3);
        assert_eq!(details["product_id"], 4);
    }

    #[test]
    fn test_constructor_statuses() {
        let err = AppError::product_not_found(42);
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(err.details.unwrap()["product_id"], 42);

        assert_eq!(
            AppError::invalid_credentials().http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::storage("disk full").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_body_keeps_client_error_details() {
        let body = ErrorBody::from_error(&AppError::product_not_found(3));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["code"], 6001);
        assert_eq!(json["message"], "Product not found");
        assert_eq!(json["details"]["product_id"], 3);
    }

    #[test]
    fn test_body_hides_storage_error_text() {
        let err = AppError::storage("/data/sales.json: permission denied")
            .with_detail("path", "/data/sales.json");
        let json = serde_json::to_value(ErrorBody::from_error(&err)).unwrap();
        assert_eq!(json["code"], 9002);
        assert_eq!(json["message"], "Storage error");
        assert!(json.get("details").is_none());

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
