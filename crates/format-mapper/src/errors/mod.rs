//! Error types for the format mapper crate.
//!
//! Resolving a property bag never fails: every combination of fields has a
//! defined normalization. Errors only arise while building inputs, such as
//! parsing a currency code or loading a bag or currency table from JSON.

use thiserror::Error;

/// Type alias for Result using [`MapperError`].
pub type Result<T> = std::result::Result<T, MapperError>;

/// Errors that can occur while constructing mapper inputs.
#[derive(Error, Debug)]
pub enum MapperError {
    /// A currency code was not three ASCII letters.
    #[error("Invalid currency code: '{0}'")]
    InvalidCurrencyCode(String),

    /// A custom currency table is missing required entries.
    #[error("Invalid currency data: {message}")]
    InvalidCurrencyData {
        /// Description of the inconsistency
        message: String,
    },

    /// A bag, symbol set or currency table could not be parsed.
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A decimal string could not be parsed.
    #[error("Failed to parse decimal number: {0}")]
    Decimal(#[from] rust_decimal::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MapperError::InvalidCurrencyCode("US".to_string());
        assert_eq!(err.to_string(), "Invalid currency code: 'US'");

        let err = MapperError::InvalidCurrencyData {
            message: "missing DEFAULT entry".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid currency data: missing DEFAULT entry");
    }

    #[test]
    fn test_json_error_conversion() {
        let parse: std::result::Result<u32, serde_json::Error> = serde_json::from_str("nope");
        let err: MapperError = parse.unwrap_err().into();
        assert!(matches!(err, MapperError::Json(_)));
    }
}
