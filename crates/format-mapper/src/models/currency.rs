use serde::{Deserialize, Serialize};

use super::types::CurrencyCode;
use crate::errors::{MapperError, Result};

/// Rounding profile of a currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CurrencyUsage {
    /// Digits and increment used for accounting amounts.
    #[default]
    Standard,
    /// Digits and increment used for physical cash (e.g. CHF rounds to 0.05).
    Cash,
}

/// Normalizes a currency code to upper case, rejecting anything that is not
/// three ASCII letters.
pub fn parse_currency_code(code: &str) -> Result<CurrencyCode> {
    let trimmed = code.trim();
    if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(MapperError::InvalidCurrencyCode(code.to_string()));
    }
    Ok(CurrencyCode::Owned(trimmed.to_ascii_uppercase()))
}

/// A resolved currency, optionally carrying display overrides taken from
/// the symbol set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyUnit {
    /// Upper-case ISO 4217 code.
    pub code: CurrencyCode,
    /// Overridden currency symbol (e.g. "US$").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Overridden international symbol (e.g. "USD ").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso_symbol: Option<String>,
}

impl CurrencyUnit {
    /// Create a currency without display overrides.
    pub fn new(code: &str) -> Result<Self> {
        Ok(Self::from_code(parse_currency_code(code)?))
    }

    pub(crate) fn from_code(code: CurrencyCode) -> Self {
        Self {
            code,
            symbol: None,
            iso_symbol: None,
        }
    }

    /// Whether display overrides are attached.
    pub fn has_custom_symbols(&self) -> bool {
        self.symbol.is_some() || self.iso_symbol.is_some()
    }

    /// Case-insensitive comparison against a bare code.
    pub fn is(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code)
    }
}
