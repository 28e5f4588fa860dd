// Time Series Error Handling
// Central location for error types, traits, and handling utilities

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;

// Re-export the derive crate so dependents can define compatible errors
pub use thiserror;

mod macros;
mod window;

pub use window::{codes, WindowError, WindowResult};

/// Error domains representing the value types that can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorDomain {
    Window,
    Value,
}

impl fmt::Display for ErrorDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorDomain::Window => write!(f, "window"),
            ErrorDomain::Value => write!(f, "value"),
        }
    }
}

/// Error code structure for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ErrorCode(pub u32);

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// Base trait for all errors raised by the time series types.
pub trait TimeSeriesError: StdError + fmt::Debug + fmt::Display + Send + Sync + Any + 'static {
    /// Numeric code of this error.
    fn code(&self) -> ErrorCode;

    /// Domain the error originates from.
    fn domain(&self) -> ErrorDomain;

    /// Returns a unique static string code for this error type.
    fn error_code(&self) -> &'static str;

    /// Converts the error into a boxed trait object.
    fn into_boxed(self) -> BoxError
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns this error as a `&dyn Any` to allow downcasting.
    fn as_any(&self) -> &dyn Any;
}

/// Shorthand for a boxed TimeSeriesError
pub type BoxError = Box<dyn TimeSeriesError>;

/// Standard Result type using BoxError
pub type Result<T> = std::result::Result<T, BoxError>;
