//! HTTP status for each error code

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::ProductNotFound => StatusCode::NOT_FOUND,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::StorageError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ValidationFailed | Self::ProductInvalidPrice | Self::ProductInvalidStock => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_per_code() {
        assert_eq!(ErrorCode::ProductNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::InvalidCredentials.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ErrorCode::StorageError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_codes_are_bad_request() {
        for code in [
            ErrorCode::ValidationFailed,
            ErrorCode::ProductInvalidPrice,
            ErrorCode::ProductInvalidStock,
        ] {
            assert_eq!(code.http_status(), StatusCode::BAD_REQUEST);
        }
    }
}
