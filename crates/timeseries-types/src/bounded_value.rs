// Values tied to a time window

use crate::window::TimeWindow;

/// Arbitrary precision base-10 number.
pub type Decimal = dashu::float::DBig;

/// A decimal value that holds for the duration of a [`TimeWindow`].
///
/// A plain pair consumed by aggregation code; it adds no behavior of its own.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeBoundedValue {
    time_window: TimeWindow,
    value: Decimal,
}

impl TimeBoundedValue {
    pub fn new(time_window: TimeWindow, value: Decimal) -> Self {
        Self { time_window, value }
    }

    pub fn time_window(&self) -> &TimeWindow {
        &self.time_window
    }

    pub fn value(&self) -> &Decimal {
        &self.value
    }

    pub fn into_parts(self) -> (TimeWindow, Decimal) {
        (self.time_window, self.value)
    }
}

impl From<(TimeWindow, Decimal)> for TimeBoundedValue {
    fn from((time_window, value): (TimeWindow, Decimal)) -> Self {
        Self::new(time_window, value)
    }
}
