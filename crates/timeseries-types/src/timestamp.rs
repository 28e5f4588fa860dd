// Instants and optional window bounds
//
// An absent bound means the window is unbounded in that direction. Start and
// end bounds order absence differently, so every helper here states which
// side it works on instead of comparing against sentinel instants.

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset};

/// A point in time carrying the offset it was observed with.
///
/// Equality, ordering and hashing compare the underlying instant, so
/// `2024-01-01T00:00:00+01:00` equals `2023-12-31T23:00:00Z`.
pub type Timestamp = DateTime<FixedOffset>;

/// Orders two start bounds. An absent start extends into the past and sorts
/// before every present one.
pub(crate) fn cmp_start(a: Option<&Timestamp>, b: Option<&Timestamp>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Orders two end bounds. An absent end extends into the future and sorts
/// after every present one.
pub(crate) fn cmp_end(a: Option<&Timestamp>, b: Option<&Timestamp>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

/// The later of two start bounds, where an absent start does not constrain.
pub(crate) fn later_start(a: Option<Timestamp>, b: Option<Timestamp>) -> Option<Timestamp> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (None, other) | (other, None) => other,
    }
}

/// The earlier of two end bounds, where an absent end does not constrain.
pub(crate) fn earlier_end(a: Option<Timestamp>, b: Option<Timestamp>) -> Option<Timestamp> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (None, other) | (other, None) => other,
    }
}

/// `a < b`, treating an absent side as "no constraint".
pub(crate) fn precedes(a: Option<&Timestamp>, b: Option<&Timestamp>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a < b,
        _ => true,
    }
}
