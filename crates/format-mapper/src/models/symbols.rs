use serde::{Deserialize, Serialize};

use super::types::CurrencyCode;
use crate::errors::Result;

/// Locale-bound display glyphs and currency overrides.
///
/// Symbols are read-only during resolution and passed through to the
/// resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Symbols {
    /// BCP 47 or ICU style locale identifier (e.g. "en-US", "de_CH").
    pub locale: String,
    /// Currency of the symbol table, usually the locale's currency.
    pub currency: Option<CurrencyCode>,
    /// Overridden currency symbol for `currency`.
    pub currency_symbol: Option<String>,
    /// Overridden international currency symbol for `currency`.
    pub international_currency_symbol: Option<String>,
    pub decimal_separator: String,
    pub grouping_separator: String,
    pub minus_sign: String,
    pub plus_sign: String,
    pub percent: String,
    pub per_mill: String,
    pub exponent_separator: String,
    pub infinity: String,
    pub nan: String,
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            currency: None,
            currency_symbol: None,
            international_currency_symbol: None,
            decimal_separator: ".".to_string(),
            grouping_separator: ",".to_string(),
            minus_sign: "-".to_string(),
            plus_sign: "+".to_string(),
            percent: "%".to_string(),
            per_mill: "‰".to_string(),
            exponent_separator: "E".to_string(),
            infinity: "∞".to_string(),
            nan: "NaN".to_string(),
        }
    }
}

impl Symbols {
    /// Default glyphs for a locale, without currency overrides.
    pub fn for_locale(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Region subtag of the locale, upper-cased (e.g. "US" for "en-US").
    ///
    /// Accepts both `-` and `_` separators and skips script subtags.
    pub fn region(&self) -> Option<String> {
        self.locale
            .split(['-', '_'])
            .skip(1)
            .find(|tag| {
                (tag.len() == 2 && tag.chars().all(|c| c.is_ascii_alphabetic()))
                    || (tag.len() == 3 && tag.chars().all(|c| c.is_ascii_digit()))
            })
            .map(|tag| tag.to_ascii_uppercase())
    }
}
