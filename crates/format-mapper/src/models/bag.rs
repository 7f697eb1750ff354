use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currency::CurrencyUsage;
use super::layout::PadPosition;
use super::notation::{CompactData, CompactStyle};
use super::rounding::{MathContext, RoundingMode};
use super::types::CurrencyCode;
use crate::errors::Result;

/// CLDR plural category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    #[default]
    Other,
}

/// Affix patterns of one plural form of a currency pattern.
///
/// Patterns are already tokenized by the pattern parser; quoted text is
/// literal and an unquoted `¤` stands for the currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AffixPatterns {
    #[serde(default)]
    pub positive_prefix: String,
    #[serde(default)]
    pub positive_suffix: String,
    #[serde(default)]
    pub negative_prefix: Option<String>,
    #[serde(default)]
    pub negative_suffix: Option<String>,
}

/// Currency affix patterns keyed by plural category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct CurrencyPluralInfo {
    pub patterns: BTreeMap<PluralCategory, AffixPatterns>,
}

impl CurrencyPluralInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: PluralCategory, patterns: AffixPatterns) {
        self.patterns.insert(category, patterns);
    }

    /// Patterns for a category, falling back to `other`.
    pub fn get(&self, category: PluralCategory) -> Option<&AffixPatterns> {
        self.patterns
            .get(&category)
            .or_else(|| self.patterns.get(&PluralCategory::Other))
    }
}

/// Sparse legacy formatting settings.
///
/// Every field may be unset independently; `None` is never the same as zero.
/// Several fields interact, and [`PropertyMapper`](crate::PropertyMapper)
/// resolves them into one consistent configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyBag {
    // Digit counts
    pub minimum_integer_digits: Option<i32>,
    pub maximum_integer_digits: Option<i32>,
    pub minimum_fraction_digits: Option<i32>,
    pub maximum_fraction_digits: Option<i32>,
    pub minimum_significant_digits: Option<i32>,
    pub maximum_significant_digits: Option<i32>,

    // Rounding
    pub rounding_increment: Option<Decimal>,
    pub rounding_mode: Option<RoundingMode>,
    pub math_context: Option<MathContext>,

    // Currency
    pub currency: Option<CurrencyCode>,
    pub currency_usage: Option<CurrencyUsage>,
    pub currency_plural_info: Option<CurrencyPluralInfo>,

    // Affixes
    pub positive_prefix: Option<String>,
    pub positive_suffix: Option<String>,
    pub negative_prefix: Option<String>,
    pub negative_suffix: Option<String>,
    pub positive_prefix_pattern: Option<String>,
    pub positive_suffix_pattern: Option<String>,
    pub negative_prefix_pattern: Option<String>,
    pub negative_suffix_pattern: Option<String>,

    // Grouping
    pub grouping_size: Option<i32>,
    pub secondary_grouping_size: Option<i32>,
    pub minimum_grouping_digits: Option<i32>,

    // Padding
    pub format_width: Option<u32>,
    pub pad_string: Option<String>,
    pub pad_position: Option<PadPosition>,

    // Notation
    pub compact_style: Option<CompactStyle>,
    pub compact_custom_data: Option<CompactData>,
    pub minimum_exponent_digits: Option<u32>,
    pub exponent_sign_always_shown: bool,

    // Multipliers
    pub magnitude_multiplier: Option<i32>,
    pub multiplier: Option<Decimal>,

    // Display flags
    pub sign_always_shown: bool,
    pub decimal_separator_always_shown: bool,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a bag from camelCase JSON. Missing keys stay unset.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Set the rounding increment from decimal text, keeping its scale
    /// ("0.50" rounds to two fraction digits).
    pub fn with_rounding_increment(mut self, increment: &str) -> Result<Self> {
        self.rounding_increment = Some(increment.trim().parse::<Decimal>()?);
        Ok(self)
    }

    /// Set the arbitrary multiplier from decimal text.
    pub fn with_multiplier(mut self, multiplier: &str) -> Result<Self> {
        self.multiplier = Some(multiplier.trim().parse::<Decimal>()?);
        Ok(self)
    }

    /// Whether either fraction digit bound was given.
    pub fn has_explicit_fraction_digits(&self) -> bool {
        self.minimum_fraction_digits.is_some() || self.maximum_fraction_digits.is_some()
    }

    /// Whether either significant digit bound was given.
    pub fn has_explicit_significant_digits(&self) -> bool {
        self.minimum_significant_digits.is_some() || self.maximum_significant_digits.is_some()
    }

    /// The rounding increment, ignoring a zero increment.
    pub fn effective_rounding_increment(&self) -> Option<Decimal> {
        self.rounding_increment.filter(|increment| !increment.is_zero())
    }

    /// The configured math context, or an unlimited one carrying the
    /// configured rounding mode (half-even when none).
    pub fn math_context_or_unlimited(&self) -> MathContext {
        self.math_context.unwrap_or_else(|| {
            MathContext::unlimited(self.rounding_mode.unwrap_or_default())
        })
    }
}
