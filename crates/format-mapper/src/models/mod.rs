//! Format mapper models
//!
//! This module contains the data types that flow through resolution:
//! - `types` - Type aliases and shared digit bounds
//! - `bag` - The legacy property bag (PropertyBag) and currency plural tables
//! - `symbols` - Locale glyphs and currency overrides (Symbols)
//! - `currency` - Currency units and usages
//! - `affix` - Affix providers
//! - `rounding` - Rounding strategies, modes and math contexts
//! - `notation` - Simple, scientific and compact notation
//! - `layout` - Integer width, grouping, padding, display flags, multipliers
//! - `resolved` - The resolved configuration (ResolvedConfig)

mod affix;
mod bag;
mod currency;
mod layout;
mod notation;
mod resolved;
mod rounding;
mod symbols;
mod types;

pub use affix::{
    escape_affix, has_currency_symbols, AffixField, AffixProvider, CurrencyPluralAffixProvider,
    PropertiesAffixProvider,
};
pub use bag::{AffixPatterns, CurrencyPluralInfo, PluralCategory, PropertyBag};
pub use currency::{parse_currency_code, CurrencyUnit, CurrencyUsage};
pub use layout::{
    DecimalSeparatorDisplay, Grouper, IntegerWidth, Multiplier, PadPosition, Padder,
    SignDisplay, DEFAULT_PAD_STRING,
};
pub use notation::{CompactData, CompactNotation, CompactStyle, Notation, ScientificNotation};
pub use resolved::ResolvedConfig;
pub use rounding::{MathContext, Rounder, RoundingMode, RoundingStrategy};
pub use symbols::Symbols;
pub use types::{CurrencyCode, MAX_INT_FRAC_SIG, UNBOUNDED_EXPORT, UNKNOWN_CURRENCY};
