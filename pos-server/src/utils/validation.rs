//! Input validation helpers
//!
//! Data-model rules checked before a product is written.

use rust_decimal::Decimal;

use crate::utils::{AppError, ErrorCode};

/// Product names and categories
pub const MAX_NAME_LEN: usize = 200;

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

pub fn validate_price(price: Decimal) -> Result<(), AppError> {
    if price < Decimal::ZERO {
        return Err(
            AppError::with_message(ErrorCode::ProductInvalidPrice, "price must not be negative")
                .with_detail("price", price.to_string()),
        );
    }
    Ok(())
}

pub fn validate_stock(stock: i64) -> Result<(), AppError> {
    if stock < 0 {
        return Err(
            AppError::with_message(ErrorCode::ProductInvalidStock, "stock must not be negative")
                .with_detail("stock", stock),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Coffee", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(201), "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_price_and_stock() {
        assert!(validate_price(Decimal::ZERO).is_ok());
        assert!(validate_price(Decimal::new(129, 1)).is_ok());

        let err = validate_price(Decimal::new(-1, 2)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductInvalidPrice);

        assert!(validate_stock(0).is_ok());
        let err = validate_stock(-1).unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductInvalidStock);
    }
}
