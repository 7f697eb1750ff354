//! Simple layout settings: integer width, grouping, padding, display flags
//! and multipliers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// When the sign is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SignDisplay {
    /// Only for negative values.
    #[default]
    Auto,
    Always,
}

/// When the decimal separator is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DecimalSeparatorDisplay {
    /// Only when fraction digits follow.
    #[default]
    Auto,
    Always,
}

/// Minimum and maximum integer digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerWidth {
    /// Pad with zeros up to this many integer digits.
    pub min_int: u32,
    /// Truncate to this many integer digits; `None` never truncates.
    pub max_int: Option<u32>,
}

impl IntegerWidth {
    pub fn zero_fill_to(min_int: u32) -> Self {
        Self {
            min_int,
            max_int: None,
        }
    }

    pub fn truncate_at(self, max_int: Option<u32>) -> Self {
        Self { max_int, ..self }
    }
}

/// Grouping sizes after fallback.
///
/// A size of `-1` means the bag carried no size; `-2` forwards no grouping
/// information at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grouper {
    pub primary: i32,
    pub secondary: i32,
    /// Only group when at least two digits would precede the first separator.
    pub min2: bool,
}

impl Grouper {
    pub fn new(primary: i32, secondary: i32, min2: bool) -> Self {
        Self {
            primary,
            secondary,
            min2,
        }
    }

    /// Whether separators will be inserted at all.
    pub fn is_grouping(&self) -> bool {
        self.primary > 0
    }
}

/// Where padding characters are inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PadPosition {
    #[default]
    BeforePrefix,
    AfterPrefix,
    BeforeSuffix,
    AfterSuffix,
}

/// Padding text used when the bag gives none.
pub const DEFAULT_PAD_STRING: &str = " ";

/// Pads formatted output to a fixed width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Padder {
    pub pad_string: String,
    pub target_width: u32,
    pub position: PadPosition,
}

impl Padder {
    pub fn new(pad_string: Option<&str>, target_width: u32, position: Option<PadPosition>) -> Self {
        Self {
            pad_string: pad_string.unwrap_or(DEFAULT_PAD_STRING).to_string(),
            target_width,
            position: position.unwrap_or_default(),
        }
    }
}

/// Scales the value before formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiplier {
    /// Multiply by ten to this power.
    Magnitude(i32),
    /// Multiply by an arbitrary factor.
    Arbitrary(Decimal),
}
