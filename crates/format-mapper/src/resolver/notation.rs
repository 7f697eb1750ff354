//! Scientific and compact notation.
//!
//! The scientific mapping is not derivable from the pattern grammar alone;
//! the integer digit corrections below reproduce long-standing behavior that
//! existing formatted output depends on.

use log::debug;

use super::digits::{clamp_significant, DigitBounds};
use crate::models::{
    CompactNotation, CompactStyle, MathContext, PropertyBag, Rounder, RoundingStrategy,
    ScientificNotation, SignDisplay,
};

/// Integer digit count above which the maximum collapses to the minimum.
const SCIENTIFIC_MAX_INT_LIMIT: u32 = 8;

/// Build scientific notation when the bag sets a minimum exponent digit
/// count, correcting `digits` and rewriting a fraction rounder in place.
pub fn apply_scientific(
    bag: &PropertyBag,
    digits: &mut DigitBounds,
    rounder: &mut Option<Rounder>,
    math_context: MathContext,
) -> Option<ScientificNotation> {
    let min_exponent_digits = bag.minimum_exponent_digits?;

    match digits.max_int {
        Some(max_int) if max_int > SCIENTIFIC_MAX_INT_LIMIT => {
            // The limit of 8 has no known source; even a minimum above 8 wins.
            debug!(
                "Scientific: max integer digits {} above {}, using minimum {}",
                max_int, SCIENTIFIC_MAX_INT_LIMIT, digits.min_int
            );
            digits.max_int = Some(digits.min_int);
        }
        Some(max_int) if max_int > digits.min_int && digits.min_int > 1 => {
            debug!(
                "Scientific: max integer digits {} above minimum {}, using minimum 1",
                max_int, digits.min_int
            );
            digits.min_int = 1;
        }
        _ => {}
    }

    let engineering_interval = digits.max_int;
    let notation = ScientificNotation {
        engineering_interval,
        require_min_int: engineering_interval == Some(digits.min_int),
        min_exponent_digits,
        exponent_sign_display: if bag.exponent_sign_always_shown {
            SignDisplay::Always
        } else {
            SignDisplay::Auto
        },
    };

    if let Some(current) = rounder.as_mut() {
        if current.strategy.is_fraction() {
            let strategy = scientific_rounding(bag);
            debug!(
                "Scientific: fraction rounding replaced by {} strategy",
                strategy.kind()
            );
            *current = Rounder::new(strategy, math_context);
        }
    }

    Some(notation)
}

/// Rounding for scientific notation, derived from the bag's original integer
/// and fraction fields rather than the normalized display bounds.
///
/// Unset fields read as `-1`.
pub fn scientific_rounding(bag: &PropertyBag) -> RoundingStrategy {
    let min_int = bag.minimum_integer_digits.unwrap_or(-1);
    let min_frac = bag.minimum_fraction_digits.unwrap_or(-1);
    let max_frac = bag.maximum_fraction_digits.unwrap_or(-1);

    if min_int == 0 && max_frac == 0 {
        // "#E0", "##E0": no rounding
        return RoundingStrategy::Unlimited;
    }
    let (min, max) = if min_int == 0 && min_frac == 0 {
        // "#.##E0": round to max fraction digits plus one
        clamp_significant(Some(1), Some(max_frac.saturating_add(1)))
    } else {
        clamp_significant(
            Some(min_int.saturating_add(min_frac)),
            Some(min_int.saturating_add(max_frac)),
        )
    };
    RoundingStrategy::Significant { min, max }
}

/// Compact notation when the bag sets custom compact data or a compact style.
/// Custom data wins over the style.
pub fn compact_notation(bag: &PropertyBag) -> Option<CompactNotation<'_>> {
    if let Some(data) = &bag.compact_custom_data {
        return Some(CompactNotation::Custom(data));
    }
    bag.compact_style.map(|style| match style {
        CompactStyle::Short => CompactNotation::Short,
        CompactStyle::Long => CompactNotation::Long,
    })
}
