use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::layout::SignDisplay;

/// Compact notation length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompactStyle {
    /// "1.2K"
    #[default]
    Short,
    /// "1.2 thousand"
    Long,
}

/// Custom compact patterns: magnitude key (e.g. "1000") to plural keyword to
/// pattern (e.g. "0K").
pub type CompactData = BTreeMap<String, BTreeMap<String, String>>;

/// Parameters of scientific notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScientificNotation {
    /// Exponent step; `None` when the integer digits are unbounded.
    pub engineering_interval: Option<u32>,
    /// Whether the mantissa must keep the minimum integer digits
    /// (patterns like "000.00E0").
    pub require_min_int: bool,
    pub min_exponent_digits: u32,
    pub exponent_sign_display: SignDisplay,
}

/// Compact notation source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompactNotation<'a> {
    Short,
    Long,
    Custom(&'a CompactData),
}

/// How the magnitude of a value is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation<'a> {
    #[default]
    Simple,
    Scientific(ScientificNotation),
    Compact(CompactNotation<'a>),
}

impl Notation<'_> {
    pub fn is_scientific(&self) -> bool {
        matches!(self, Self::Scientific(_))
    }

    pub fn is_compact(&self) -> bool {
        matches!(self, Self::Compact(_))
    }
}
