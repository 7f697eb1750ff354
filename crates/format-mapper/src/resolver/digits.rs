//! Digit count normalization.
//!
//! The legacy rules below are kept exactly, including the asymmetry of the
//! shared bound: integer and fraction counts above [`MAX_INT_FRAC_SIG`]
//! become unbounded, significant counts above it become the bound.

use crate::models::{PropertyBag, MAX_INT_FRAC_SIG, UNBOUNDED_EXPORT};

/// Integer and fraction digit bounds after normalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DigitBounds {
    pub min_int: u32,
    /// `None` is unbounded.
    pub max_int: Option<u32>,
    pub min_frac: u32,
    /// `None` is unlimited.
    pub max_frac: Option<u32>,
}

/// Normalize the bag's integer and fraction bounds.
///
/// `currency_digits` is the currency's natural fraction digit count for the
/// resolved usage, given only in currency mode.
pub fn normalize_digits(bag: &PropertyBag, currency_digits: Option<u32>) -> DigitBounds {
    let bound = MAX_INT_FRAC_SIG as i32;
    let (min_frac, max_frac) = backfill_currency_fraction(
        bag.minimum_fraction_digits,
        bag.maximum_fraction_digits,
        currency_digits,
    );
    let min_int = bag.minimum_integer_digits;
    let max_int = bag.maximum_integer_digits;

    if min_int == Some(0) && max_frac != Some(0) {
        // Force a digit after the decimal point.
        let min_frac = match min_frac {
            Some(v) if v > 0 => v as u32,
            _ => 1,
        };
        DigitBounds {
            min_int: 0,
            max_int: match max_int {
                Some(v) if (0..=bound).contains(&v) => Some(v as u32),
                _ => None,
            },
            min_frac,
            max_frac: widen_max_frac(max_frac, min_frac),
        }
    } else {
        // Force a digit before the decimal point.
        let min_frac = match min_frac {
            Some(v) if v >= 0 => v as u32,
            _ => 0,
        };
        let min_int = match min_int {
            Some(v) if (1..=bound).contains(&v) => v as u32,
            _ => 1,
        };
        let max_int = match max_int {
            Some(v) if v < 0 => None,
            Some(v) if (v as u32) < min_int => Some(min_int),
            Some(v) if v > bound => None,
            Some(v) => Some(v as u32),
            None => None,
        };
        DigitBounds {
            min_int,
            max_int,
            min_frac,
            max_frac: widen_max_frac(max_frac, min_frac),
        }
    }
}

/// Fill unset fraction bounds from the currency's digit count. Both bounds
/// set by the caller are left alone.
fn backfill_currency_fraction(
    min_frac: Option<i32>,
    max_frac: Option<i32>,
    currency_digits: Option<u32>,
) -> (Option<i32>, Option<i32>) {
    let Some(digits) = currency_digits else {
        return (min_frac, max_frac);
    };
    let digits = i32::try_from(digits).unwrap_or(i32::MAX);
    match (min_frac, max_frac) {
        (None, None) => (Some(digits), Some(digits)),
        (None, Some(max)) => (Some(max.min(digits)), Some(max)),
        (Some(min), None) => (Some(min), Some(min.max(digits))),
        (min, max) => (min, max),
    }
}

/// A negative maximum keeps every digit, as does the exported unbounded
/// sentinel; otherwise the minimum wins when the two conflict.
fn widen_max_frac(max_frac: Option<i32>, min_frac: u32) -> Option<u32> {
    match max_frac {
        Some(UNBOUNDED_EXPORT) => None,
        Some(v) if v >= 0 => Some((v as u32).max(min_frac)),
        _ => None,
    }
}

/// Clamp significant digit bounds: the minimum to `[1, bound]`, the maximum
/// to `[min, bound]` (the bound itself when unset or negative).
pub fn clamp_significant(min_sig: Option<i32>, max_sig: Option<i32>) -> (u32, u32) {
    let min = match min_sig {
        Some(v) if v >= 1 => (v as u32).min(MAX_INT_FRAC_SIG),
        _ => 1,
    };
    let max = match max_sig {
        Some(v) if v >= 0 => (v as u32).clamp(min, MAX_INT_FRAC_SIG),
        _ => MAX_INT_FRAC_SIG,
    };
    (min, max)
}
