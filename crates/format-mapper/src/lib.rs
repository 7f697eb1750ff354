//! Format Mapper Crate
//!
//! This crate resolves legacy decimal-format property bags into a single,
//! internally consistent number formatter configuration.
//!
//! # Overview
//!
//! A property bag is a sparse set of formatting settings where any field may
//! be unset and several fields interact. The mapper supports:
//! - Currency detection from explicit fields and affix patterns
//! - Currency digit back-fill and cash rounding from CLDR-style data
//! - Digit count normalization with the legacy bounds
//! - A strict rounding priority chain
//! - Scientific and compact notation
//! - Exporting the effective settings back into a bag
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |   PropertyBag    |     |     Symbols      |  (caller-owned, read-only)
//! +------------------+     +------------------+
//!           \                      /
//!            v                    v
//!          +------------------------+     +----------------------+
//!          |    PropertyMapper      | <-- | CurrencyDataProvider |
//!          +------------------------+     +----------------------+
//!            |                    |
//!            v                    v
//! +--------------------+  +--------------------+
//! | ResolvedConfig<'a> |  | exported bag (opt) |
//! +--------------------+  +--------------------+
//! ```
//!
//! # Core Types
//!
//! - [`PropertyBag`] - Legacy formatting settings, every field optional
//! - [`Symbols`] - Locale glyphs and currency overrides
//! - [`ResolvedConfig`] - The resolved configuration, borrowing its inputs
//! - [`RoundingStrategy`] - Exactly one rounding strategy per resolution
//! - [`Notation`] - Simple, scientific or compact
//! - [`PropertyMapper`] - Runs the resolution pipeline
//!
//! # Type Aliases
//!
//! - [`CurrencyCode`] - Currency code (ISO 4217)
//! - [`CompactData`] - Custom compact pattern table

pub mod errors;
pub mod models;
pub mod registry;
pub mod resolver;

// Re-export all public types from models
pub use models::{
    AffixField, AffixPatterns, AffixProvider, CompactData, CompactNotation, CompactStyle,
    CurrencyCode, CurrencyPluralInfo, CurrencyUnit, CurrencyUsage, DecimalSeparatorDisplay,
    Grouper, IntegerWidth, MathContext, Multiplier, Notation, PadPosition, Padder,
    PluralCategory, PropertyBag, ResolvedConfig, Rounder, RoundingMode, RoundingStrategy,
    ScientificNotation, SignDisplay, Symbols, MAX_INT_FRAC_SIG, UNBOUNDED_EXPORT,
    UNKNOWN_CURRENCY,
};

// Re-export resolver types
pub use resolver::{map_properties, PropertyMapper, RoundingRule, ROUNDING_RULES};

// Re-export currency data types
pub use registry::{BuiltinCurrencyData, CurrencyDataProvider, CurrencyTable};

// Re-export error types
pub use errors::{MapperError, Result};
