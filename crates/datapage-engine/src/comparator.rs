//! Display ordering for dimension option codes.
//!
//! Codes fall into three buckets, compared in this order:
//! 1. non-negative integers, ascending by value
//! 2. everything else (including `"2nd Option"`), lexicographic
//! 3. negative integers, closest to zero first
//!
//! Negative codes mark "does not apply" style categories and always trail
//! the list.

use datapage_types::DimensionOption;
use std::cmp::{Ordering, Reverse};

/// Composite ordering key for a single option code.
///
/// Variant order is the bucket priority, so the derived `Ord` is the
/// display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OptionSortKey<'a> {
    NonNegative(i64),
    Text(&'a str),
    Negative(Reverse<i64>),
}

/// Classify a code. Anything that is not a clean `i64` lands in `Text`.
pub fn sort_key(code: &str) -> OptionSortKey<'_> {
    match code.parse::<i64>() {
        Ok(value) if value >= 0 => OptionSortKey::NonNegative(value),
        Ok(value) => OptionSortKey::Negative(Reverse(value)),
        Err(_) => OptionSortKey::Text(code),
    }
}

pub fn compare_codes(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

/// Stable sort: options with equal keys keep their input order.
pub fn sort_options(options: &mut [DimensionOption]) {
    options.sort_by(|a, b| compare_codes(&a.code, &b.code));
}
