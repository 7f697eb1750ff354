//! Grouping, padding, display flags and multipliers.

use crate::models::{
    DecimalSeparatorDisplay, Grouper, Multiplier, Padder, PropertyBag, SignDisplay,
};

/// Grouping size meaning "no grouping information is forwarded".
const NO_GROUPING_INFO: i32 = -2;
/// Grouping size read for an unset field.
const UNSET_GROUPING: i32 = -1;

/// Resolve grouping sizes. Each size falls back to the other when it is not
/// positive.
pub fn resolve_grouper(bag: &PropertyBag) -> Grouper {
    let primary = bag.grouping_size.unwrap_or(UNSET_GROUPING);
    let secondary = bag.secondary_grouping_size.unwrap_or(UNSET_GROUPING);
    debug_assert!(
        primary >= NO_GROUPING_INFO,
        "grouping size {primary} is below {NO_GROUPING_INFO}"
    );

    let primary = if primary > 0 {
        primary
    } else if secondary > 0 {
        secondary
    } else {
        primary
    };
    let secondary = if secondary > 0 { secondary } else { primary };

    Grouper::new(primary, secondary, bag.minimum_grouping_digits == Some(2))
}

/// Padding, only when a format width is set.
pub fn resolve_padder(bag: &PropertyBag) -> Option<Padder> {
    bag.format_width
        .map(|width| Padder::new(bag.pad_string.as_deref(), width, bag.pad_position))
}

pub fn resolve_sign_display(bag: &PropertyBag) -> SignDisplay {
    if bag.sign_always_shown {
        SignDisplay::Always
    } else {
        SignDisplay::Auto
    }
}

pub fn resolve_decimal_display(bag: &PropertyBag) -> DecimalSeparatorDisplay {
    if bag.decimal_separator_always_shown {
        DecimalSeparatorDisplay::Always
    } else {
        DecimalSeparatorDisplay::Auto
    }
}

/// A non-zero power-of-ten multiplier wins over an arbitrary one.
pub fn resolve_multiplier(bag: &PropertyBag) -> Option<Multiplier> {
    match bag.magnitude_multiplier {
        Some(magnitude) if magnitude != 0 => Some(Multiplier::Magnitude(magnitude)),
        _ => bag.multiplier.map(Multiplier::Arbitrary),
    }
}
