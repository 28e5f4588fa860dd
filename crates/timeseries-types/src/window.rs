// Half-open time windows
//
// A window covers `[start, end)`. Either bound may be absent, meaning the
// window extends without limit into the past (no start) or the future (no end).

use std::cmp::Ordering;
use std::ops::{Bound, Range, RangeBounds, RangeFrom, RangeFull, RangeTo};

use timeseries_error::{bail, WindowError, WindowResult};
use tracing::{debug, trace};

use crate::timestamp::{cmp_end, cmp_start, earlier_end, later_start, precedes, Timestamp};

/// A temporal window with an inclusive start and an exclusive end.
///
/// - no `start`: open-ended in the past
/// - no `end`: open-ended in the future
/// - neither: covers all time
///
/// When both bounds are present the end is strictly after the start, so a
/// bounded window is never empty. Windows are immutable values.
///
/// # Examples
///
/// ```rust
/// use chrono::DateTime;
/// use timeseries_types::TimeWindow;
///
/// let first = TimeWindow::bounded(
///     DateTime::parse_from_rfc3339("2024-01-01T00:00:00+01:00")?,
///     DateTime::parse_from_rfc3339("2025-01-01T00:00:00+01:00")?,
/// )?;
/// let second = TimeWindow::starting_at(DateTime::parse_from_rfc3339("2024-06-01T00:00:00+01:00")?);
///
/// assert!(first.is_overlapping(&second));
/// assert_eq!(first.overlap(&second).and_then(|w| w.end()), first.end());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTimeWindow"))]
pub struct TimeWindow {
    start: Option<Timestamp>,
    end: Option<Timestamp>,
}

impl TimeWindow {
    /// The window covering all time.
    pub const UNBOUNDED: Self = Self {
        start: None,
        end: None,
    };

    /// Creates a window from optional bounds.
    ///
    /// Fails with [`WindowError::ConstructionError`] when both bounds are
    /// present and `end` is not strictly after `start`. Bounds are kept as
    /// given, including their offsets.
    pub fn new(start: Option<Timestamp>, end: Option<Timestamp>) -> WindowResult<Self> {
        if !precedes(start.as_ref(), end.as_ref()) {
            debug!(?start, ?end, "rejected time window with non-increasing bounds");
            bail!(WindowError::construction_error(format!(
                "start has to be before end, got start {start:?} and end {end:?}"
            )));
        }

        Ok(Self { start, end })
    }

    /// Creates a window with both bounds present.
    pub fn bounded(start: Timestamp, end: Timestamp) -> WindowResult<Self> {
        Self::new(Some(start), Some(end))
    }

    /// Creates a window from `start` into the unbounded future.
    pub fn starting_at(start: Timestamp) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// Creates a window from the unbounded past up to (excluding) `end`.
    pub fn ending_at(end: Timestamp) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    /// Inclusive start, `None` if unbounded in the past.
    #[inline]
    pub fn start(&self) -> Option<Timestamp> {
        self.start
    }

    /// Exclusive end, `None` if unbounded in the future.
    #[inline]
    pub fn end(&self) -> Option<Timestamp> {
        self.end
    }

    /// True if the window has neither a start nor an end.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// True if both bounds are present.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Does the window contain `instant`?
    #[inline]
    pub fn contains(&self, instant: &Timestamp) -> bool {
        RangeBounds::contains(self, instant)
    }

    /// Only true if this start is present, `other`'s end is present, and this
    /// start is at or after `other`'s end.
    pub fn is_after(&self, other: &TimeWindow) -> bool {
        matches!((&self.start, &other.end), (Some(start), Some(end)) if start >= end)
    }

    /// Only true if this end is present, `other`'s start is present, and this
    /// end is at or before `other`'s start.
    pub fn is_before(&self, other: &TimeWindow) -> bool {
        matches!((&self.end, &other.start), (Some(end), Some(start)) if end <= start)
    }

    /// Only true if both windows have the same bounds, compared as instants.
    pub fn is_equal(&self, other: &TimeWindow) -> bool {
        self == other
    }

    /// Only true if the two windows share at least one instant.
    ///
    /// An absent bound never separates two windows, and a window covering all
    /// time overlaps everything, itself included. Windows that merely touch
    /// (`[a, b)` and `[b, c)`) do not overlap.
    pub fn is_overlapping(&self, other: &TimeWindow) -> bool {
        if self.is_unbounded() || other.is_unbounded() {
            return true;
        }

        precedes(self.start.as_ref(), other.end.as_ref())
            && precedes(other.start.as_ref(), self.end.as_ref())
    }

    /// The intersection of both windows, or `None` if they share no instant.
    ///
    /// Touching windows yield `None`, so `overlap` is `Some` exactly when
    /// [`TimeWindow::is_overlapping`] is true.
    pub fn overlap(&self, other: &TimeWindow) -> Option<TimeWindow> {
        let start = later_start(self.start, other.start);
        let end = earlier_end(self.end, other.end);

        if !precedes(start.as_ref(), end.as_ref()) {
            trace!(window = ?self, ?other, "windows do not overlap");
            return None;
        }

        Some(Self { start, end })
    }

    /// Splits both windows into the pieces lying outside their intersection.
    ///
    /// Without an overlap both windows are returned unchanged as
    /// `[self, other]`. Otherwise the result holds, in this order and only
    /// when non-empty: the part of `self` before the overlap, the part of
    /// `self` after it, then the same two parts of `other`. Remainders of an
    /// unbounded window are unbounded on the same side. The overlap itself is
    /// not part of the result, see [`TimeWindow::overlap`].
    pub fn split_by_overlap(&self, other: &TimeWindow) -> Vec<TimeWindow> {
        let Some(overlap) = self.overlap(other) else {
            return vec![*self, *other];
        };

        let mut pieces = Vec::with_capacity(4);
        for window in [self, other] {
            if cmp_start(window.start.as_ref(), overlap.start.as_ref()) == Ordering::Less {
                pieces.push(Self {
                    start: window.start,
                    end: overlap.start,
                });
            }
            if cmp_end(window.end.as_ref(), overlap.end.as_ref()) == Ordering::Greater {
                pieces.push(Self {
                    start: overlap.end,
                    end: window.end,
                });
            }
        }

        debug_assert!(pieces
            .iter()
            .all(|piece| precedes(piece.start.as_ref(), piece.end.as_ref())));
        trace!(window = ?self, ?other, ?overlap, pieces = pieces.len(), "split windows by overlap");
        pieces
    }
}

/// Start dominates, end breaks ties. An absent start sorts first, an absent
/// end sorts last.
impl Ord for TimeWindow {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_start(self.start.as_ref(), other.start.as_ref())
            .then_with(|| cmp_end(self.end.as_ref(), other.end.as_ref()))
    }
}

impl PartialOrd for TimeWindow {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl RangeBounds<Timestamp> for TimeWindow {
    fn start_bound(&self) -> Bound<&Timestamp> {
        self.start.as_ref().map_or(Bound::Unbounded, Bound::Included)
    }

    fn end_bound(&self) -> Bound<&Timestamp> {
        self.end.as_ref().map_or(Bound::Unbounded, Bound::Excluded)
    }
}

impl TryFrom<Range<Timestamp>> for TimeWindow {
    type Error = WindowError;

    fn try_from(range: Range<Timestamp>) -> WindowResult<Self> {
        Self::bounded(range.start, range.end)
    }
}

impl From<RangeFrom<Timestamp>> for TimeWindow {
    fn from(range: RangeFrom<Timestamp>) -> Self {
        Self::starting_at(range.start)
    }
}

impl From<RangeTo<Timestamp>> for TimeWindow {
    fn from(range: RangeTo<Timestamp>) -> Self {
        Self::ending_at(range.end)
    }
}

impl From<RangeFull> for TimeWindow {
    fn from(_: RangeFull) -> Self {
        Self::UNBOUNDED
    }
}

/// Only inclusive starts and exclusive ends describe a half-open window.
impl TryFrom<(Bound<Timestamp>, Bound<Timestamp>)> for TimeWindow {
    type Error = WindowError;

    fn try_from((start, end): (Bound<Timestamp>, Bound<Timestamp>)) -> WindowResult<Self> {
        let start = match start {
            Bound::Included(start) => Some(start),
            Bound::Unbounded => None,
            Bound::Excluded(start) => bail!(WindowError::invalid_argument(format!(
                "start bound {start} must be inclusive"
            ))),
        };
        let end = match end {
            Bound::Excluded(end) => Some(end),
            Bound::Unbounded => None,
            Bound::Included(end) => bail!(WindowError::invalid_argument(format!(
                "end bound {end} must be exclusive"
            ))),
        };

        Self::new(start, end)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTimeWindow {
    start: Option<Timestamp>,
    end: Option<Timestamp>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTimeWindow> for TimeWindow {
    type Error = WindowError;

    fn try_from(raw: RawTimeWindow) -> WindowResult<Self> {
        Self::new(raw.start, raw.end)
    }
}
