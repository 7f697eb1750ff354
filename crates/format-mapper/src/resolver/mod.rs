//! Property bag resolution.
//!
//! This module turns a sparse legacy property bag into one consistent
//! formatter configuration. Each step reads the bag and the results of the
//! steps before it; no step calls back into another.
//!
//! # Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      PropertyMapper                          │
//! │                                                              │
//! │  1. Affix source      plural table or bag affix fields       │
//! │                           │                                  │
//! │                           ▼                                  │
//! │  2. Currency          mode, unit, usage                      │
//! │                           │                                  │
//! │                           ▼                                  │
//! │  3. Digits            back-fill, decimal-point policy        │
//! │                           │                                  │
//! │                           ▼                                  │
//! │  4. Rounding          first matching rule wins               │
//! │                           │                                  │
//! │                           ▼                                  │
//! │  5. Layout            grouping, padding, sign, decimal       │
//! │                           │                                  │
//! │                           ▼                                  │
//! │  6. Notation          scientific, then compact               │
//! │                           │    (may rewrite rounding and     │
//! │                           │     drop the affix source)       │
//! │                           ▼                                  │
//! │  7. Multiplier                                               │
//! │                           │                                  │
//! │                           ▼                                  │
//! │  8. Export            optional, effective values to a bag    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use format_mapper::{map_properties, PropertyBag, Symbols};
//!
//! let bag = PropertyBag::from_json(r#"{"minimumExponentDigits":1,"maximumFractionDigits":2,"minimumIntegerDigits":0}"#)?;
//! let symbols = Symbols::for_locale("en-US");
//!
//! let config = map_properties(&bag, &symbols);
//! // config.notation = Scientific, config.rounder = Significant { min: 1, max: 3 }
//! ```

pub mod affixes;
pub mod currency;
pub mod digits;
pub mod export;
pub mod layout;
pub mod mapper;
pub mod notation;
pub mod rounding;

pub use affixes::select_affix_provider;
pub use currency::{resolve_currency, resolve_unit, CurrencyResolution};
pub use digits::{clamp_significant, normalize_digits, DigitBounds};
pub use export::{concretize, write_exported, ExportInputs};
pub use layout::{
    resolve_decimal_display, resolve_grouper, resolve_multiplier, resolve_padder,
    resolve_sign_display,
};
pub use mapper::{map_properties, PropertyMapper};
pub use notation::{apply_scientific, compact_notation, scientific_rounding};
pub use rounding::{
    resolve_rounder, select_strategy, RoundingInputs, RoundingRule, ROUNDING_RULES,
};
