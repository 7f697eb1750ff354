//! JSON-driven currency digit data.
//!
//! Loads `currencies.json` at compile time via `include_str!` and parses it
//! once via `lazy_static`. Callers with their own locale data can supply a
//! [`CurrencyTable`] parsed from JSON or any other [`CurrencyDataProvider`].

use std::collections::HashMap;

use lazy_static::lazy_static;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::{MapperError, Result};
use crate::models::{CurrencyCode, CurrencyUsage};

/// Key of the entry used for currencies missing from the table.
pub const DEFAULT_ENTRY: &str = "DEFAULT";

/// Largest fraction digit count a `Decimal` increment can carry.
pub const MAX_CURRENCY_DIGITS: u32 = 28;

/// Source of per-currency digit counts and rounding increments.
pub trait CurrencyDataProvider: Send + Sync {
    /// Natural number of fraction digits for the currency and usage.
    fn fraction_digits(&self, currency: &str, usage: CurrencyUsage) -> u32;

    /// Rounding increment for the currency and usage, `None` when the
    /// currency rounds to its fraction digits only.
    fn rounding_increment(&self, currency: &str, usage: CurrencyUsage) -> Option<Decimal>;

    /// Default currency of a region (e.g. "CH" -> "CHF").
    fn currency_for_region(&self, region: &str) -> Option<CurrencyCode>;
}

// ── JSON schema ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurrencyEntry {
    digits: u32,
    #[serde(default)]
    rounding: u32,
    #[serde(default)]
    cash_digits: Option<u32>,
    #[serde(default)]
    cash_rounding: Option<u32>,
}

impl CurrencyEntry {
    fn digits(&self, usage: CurrencyUsage) -> u32 {
        match usage {
            CurrencyUsage::Standard => self.digits,
            CurrencyUsage::Cash => self.cash_digits.unwrap_or(self.digits),
        }
    }

    fn check_digits(&self, code: &str) -> Result<()> {
        let digits = self.digits.max(self.cash_digits.unwrap_or(0));
        if digits > MAX_CURRENCY_DIGITS {
            return Err(MapperError::InvalidCurrencyData {
                message: format!(
                    "{code}: {digits} fraction digits exceeds {MAX_CURRENCY_DIGITS}"
                ),
            });
        }
        Ok(())
    }

    fn increment(&self, usage: CurrencyUsage) -> Option<Decimal> {
        let rounding = match usage {
            CurrencyUsage::Standard => self.rounding,
            CurrencyUsage::Cash => self.cash_rounding.unwrap_or(self.rounding),
        };
        if rounding == 0 {
            return None;
        }
        // Rounding is expressed in units of the last fraction digit.
        Some(Decimal::new(i64::from(rounding), self.digits(usage)).normalize())
    }
}

#[derive(Debug, Deserialize)]
struct CurrencyCatalog {
    currencies: HashMap<String, CurrencyEntry>,
    #[serde(default)]
    regions: HashMap<String, String>,
}

/// Currency digit table keyed by upper-case ISO 4217 code.
#[derive(Debug, Clone)]
pub struct CurrencyTable {
    currencies: HashMap<String, CurrencyEntry>,
    regions: HashMap<String, String>,
    fallback: CurrencyEntry,
}

impl CurrencyTable {
    /// Parse a table in the `currencies.json` format. The table must contain
    /// a `DEFAULT` entry, and no entry may use more than
    /// [`MAX_CURRENCY_DIGITS`] fraction digits.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: CurrencyCatalog = serde_json::from_str(json)?;
        for (code, entry) in &catalog.currencies {
            entry.check_digits(code)?;
        }

        let currencies: HashMap<String, CurrencyEntry> = catalog
            .currencies
            .into_iter()
            .map(|(code, entry)| (code.to_ascii_uppercase(), entry))
            .collect();
        let regions = catalog
            .regions
            .into_iter()
            .map(|(region, code)| (region.to_ascii_uppercase(), code.to_ascii_uppercase()))
            .collect();

        let fallback = *currencies
            .get(DEFAULT_ENTRY)
            .ok_or_else(|| MapperError::InvalidCurrencyData {
                message: format!("missing {DEFAULT_ENTRY} entry"),
            })?;

        Ok(Self {
            currencies,
            regions,
            fallback,
        })
    }

    fn entry(&self, currency: &str) -> &CurrencyEntry {
        self.currencies
            .get(&currency.to_ascii_uppercase())
            .unwrap_or(&self.fallback)
    }
}

impl CurrencyDataProvider for CurrencyTable {
    fn fraction_digits(&self, currency: &str, usage: CurrencyUsage) -> u32 {
        self.entry(currency).digits(usage)
    }

    fn rounding_increment(&self, currency: &str, usage: CurrencyUsage) -> Option<Decimal> {
        self.entry(currency).increment(usage)
    }

    fn currency_for_region(&self, region: &str) -> Option<CurrencyCode> {
        self.regions
            .get(&region.to_ascii_uppercase())
            .map(|code| CurrencyCode::Owned(code.clone()))
    }
}

lazy_static! {
    static ref BUILTIN: CurrencyTable =
        CurrencyTable::from_json(include_str!("currencies.json"))
            .expect("currencies.json must be valid");
}

/// The built-in table shipped with the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCurrencyData;

impl CurrencyDataProvider for BuiltinCurrencyData {
    fn fraction_digits(&self, currency: &str, usage: CurrencyUsage) -> u32 {
        BUILTIN.fraction_digits(currency, usage)
    }

    fn rounding_increment(&self, currency: &str, usage: CurrencyUsage) -> Option<Decimal> {
        BUILTIN.rounding_increment(currency, usage)
    }

    fn currency_for_region(&self, region: &str) -> Option<CurrencyCode> {
        BUILTIN.currency_for_region(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_builtin_standard_digits() {
        let data = BuiltinCurrencyData;
        assert_eq!(data.fraction_digits("USD", CurrencyUsage::Standard), 2);
        assert_eq!(data.fraction_digits("JPY", CurrencyUsage::Standard), 0);
        assert_eq!(data.fraction_digits("kwd", CurrencyUsage::Standard), 3);
    }

    #[test]
    fn test_unknown_currency_uses_default_entry() {
        let data = BuiltinCurrencyData;
        assert_eq!(data.fraction_digits("XXX", CurrencyUsage::Standard), 2);
        assert_eq!(data.rounding_increment("XXX", CurrencyUsage::Cash), None);
    }

    #[test]
    fn test_cash_usage() {
        let data = BuiltinCurrencyData;
        assert_eq!(data.fraction_digits("HUF", CurrencyUsage::Standard), 2);
        assert_eq!(data.fraction_digits("HUF", CurrencyUsage::Cash), 0);
        assert_eq!(data.rounding_increment("CHF", CurrencyUsage::Standard), None);
        assert_eq!(
            data.rounding_increment("CHF", CurrencyUsage::Cash),
            Some(dec!(0.05))
        );
        // Trailing zeros are dropped, as for a binary increment of 0.5.
        let dkk = data.rounding_increment("DKK", CurrencyUsage::Cash).unwrap();
        assert_eq!(dkk, dec!(0.5));
        assert_eq!(dkk.scale(), 1);
    }

    #[test]
    fn test_region_lookup() {
        let data = BuiltinCurrencyData;
        assert_eq!(data.currency_for_region("us").as_deref(), Some("USD"));
        assert_eq!(data.currency_for_region("CH").as_deref(), Some("CHF"));
        assert_eq!(data.currency_for_region("AQ"), None);
    }

    #[test]
    fn test_custom_table_requires_default() {
        let result = CurrencyTable::from_json(r#"{"currencies":{"USD":{"digits":2}}}"#);
        assert!(matches!(
            result,
            Err(MapperError::InvalidCurrencyData { .. })
        ));
    }

    #[test]
    fn test_custom_table_rejects_unrepresentable_digits() {
        let result = CurrencyTable::from_json(
            r#"{"currencies":{"DEFAULT":{"digits":2},"ABC":{"digits":29,"rounding":5}}}"#,
        );
        match result {
            Err(MapperError::InvalidCurrencyData { message }) => {
                assert!(message.contains("ABC"), "unexpected message: {message}");
            }
            other => panic!("Expected invalid currency data, got {other:?}"),
        }

        let result = CurrencyTable::from_json(
            r#"{"currencies":{"DEFAULT":{"digits":2,"cashDigits":40}}}"#,
        );
        assert!(matches!(
            result,
            Err(MapperError::InvalidCurrencyData { .. })
        ));

        let table = CurrencyTable::from_json(
            r#"{"currencies":{"DEFAULT":{"digits":2},"ABC":{"digits":28,"rounding":5}}}"#,
        )
        .unwrap();
        let increment = table
            .rounding_increment("ABC", CurrencyUsage::Standard)
            .unwrap();
        assert_eq!(increment.scale(), 28);
    }

    #[test]
    fn test_custom_table() {
        let table = CurrencyTable::from_json(
            r#"{
                "currencies": {
                    "DEFAULT": {"digits": 3},
                    "abc": {"digits": 1, "cashRounding": 5}
                },
                "regions": {"zz": "abc"}
            }"#,
        )
        .unwrap();
        assert_eq!(table.fraction_digits("ABC", CurrencyUsage::Standard), 1);
        assert_eq!(
            table.rounding_increment("ABC", CurrencyUsage::Cash),
            Some(dec!(0.5))
        );
        assert_eq!(table.fraction_digits("QQQ", CurrencyUsage::Cash), 3);
        assert_eq!(table.currency_for_region("ZZ").as_deref(), Some("ABC"));
    }
}
