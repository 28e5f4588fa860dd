// Core value types for time series
//
// `TimeWindow` is an immutable half-open interval `[start, end)` whose bounds
// may be absent (unbounded toward the past or the future). `TimeBoundedValue`
// pairs such a window with a decimal value.

pub mod bounded_value;
pub mod timestamp;
pub mod window;

pub use bounded_value::{Decimal, TimeBoundedValue};
pub use timestamp::Timestamp;
pub use window::TimeWindow;

pub use timeseries_error::{WindowError, WindowResult};
