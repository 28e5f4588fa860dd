//! Property-based tests for time windows
//!
//! Windows are generated with bounds on an hourly grid, mixed offsets and
//! randomly absent edges, then checked against the relational invariants.

use std::cmp::Ordering;

use chrono::{FixedOffset, TimeZone};
use proptest::option;
use proptest::prelude::*;
use timeseries_types::{TimeWindow, Timestamp};

/// Seconds since the epoch of 2024-01-01T00:00:00Z
const BASE: i64 = 1_704_067_200;

/// Hours covered by generated bounds and probe instants
const SPAN: i64 = 48;

fn instant(hour: i64, offset_hours: i32) -> Timestamp {
    FixedOffset::east_opt(offset_hours * 3600)
        .unwrap()
        .timestamp_opt(BASE + hour * 3600, 0)
        .unwrap()
}

/// Strategy for generating an instant on the grid with an arbitrary offset
fn instant_strategy() -> impl Strategy<Value = Timestamp> {
    (0..SPAN, -12..=12i32).prop_map(|(hour, offset)| instant(hour, offset))
}

/// Strategy for generating valid windows, including unbounded ones
fn window_strategy() -> impl Strategy<Value = TimeWindow> {
    (option::of(instant_strategy()), option::of(instant_strategy()))
        .prop_filter_map("end must be after start", |(start, end)| {
            TimeWindow::new(start, end).ok()
        })
}

/// Probe instants covering the generated grid and one step beyond it
fn probes() -> impl Iterator<Item = Timestamp> {
    (-1..=SPAN).map(|hour| instant(hour, 0))
}

fn ordering_to_i8(ordering: Ordering) -> i8 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

proptest! {
    #[test]
    fn construction_validates_present_bounds(start in instant_strategy(), end in instant_strategy()) {
        let result = TimeWindow::bounded(start, end);
        if end > start {
            let window = result.unwrap();
            prop_assert_eq!(window.start(), Some(start));
            prop_assert_eq!(window.end(), Some(end));
        } else {
            prop_assert!(result.is_err());
        }
    }

    #[test]
    fn is_equal_is_reflexive_and_symmetric(a in window_strategy(), b in window_strategy()) {
        prop_assert!(a.is_equal(&a));
        prop_assert_eq!(a.is_equal(&b), b.is_equal(&a));
    }

    #[test]
    fn ordering_is_total_and_consistent_with_equality(
        a in window_strategy(),
        b in window_strategy(),
        c in window_strategy(),
    ) {
        let ab = ordering_to_i8(a.cmp(&b));
        let ba = ordering_to_i8(b.cmp(&a));
        prop_assert_eq!(ab, -ba);
        prop_assert_eq!(ab == 0, a.is_equal(&b));

        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
    }

    #[test]
    fn overlapping_is_symmetric(a in window_strategy(), b in window_strategy()) {
        prop_assert_eq!(a.is_overlapping(&b), b.is_overlapping(&a));
    }

    #[test]
    fn overlapping_matches_intersection(a in window_strategy(), b in window_strategy()) {
        let overlap = a.overlap(&b);
        prop_assert_eq!(a.is_overlapping(&b), overlap.is_some());
        prop_assert_eq!(overlap, b.overlap(&a));

        for probe in probes() {
            let in_both = a.contains(&probe) && b.contains(&probe);
            prop_assert_eq!(overlap.is_some_and(|w| w.contains(&probe)), in_both);
        }
    }

    #[test]
    fn before_and_after_exclude_overlap(a in window_strategy(), b in window_strategy()) {
        if a.is_before(&b) || a.is_after(&b) {
            prop_assert!(!a.is_overlapping(&b));
        }
        prop_assert_eq!(a.is_before(&b), b.is_after(&a));
    }

    #[test]
    fn split_partitions_the_union(a in window_strategy(), b in window_strategy()) {
        let pieces = a.split_by_overlap(&b);
        let overlap = a.overlap(&b);

        if overlap.is_none() {
            prop_assert_eq!(&pieces, &vec![a, b]);
        } else {
            for (i, first) in pieces.iter().enumerate() {
                for second in &pieces[i + 1..] {
                    prop_assert!(!first.is_overlapping(second));
                }
                prop_assert!(overlap.iter().all(|o| !o.is_overlapping(first)));
            }
        }

        for probe in probes() {
            let in_union = a.contains(&probe) || b.contains(&probe);
            let covered = pieces.iter().chain(overlap.iter()).any(|w| w.contains(&probe));
            prop_assert_eq!(covered, in_union, "probe {:?}", probe);
        }
    }
}
