// Window-specific error types
// These errors are raised when building or combining time windows

use std::any::Any;

use thiserror::Error;

use crate::{BoxError, ErrorCode, ErrorDomain, TimeSeriesError};

/// Window-specific error codes
pub mod codes {
    use crate::ErrorCode;

    // Window error codes start with 3000
    pub const CONSTRUCTION_ERROR: ErrorCode = ErrorCode(3001);
    pub const INVALID_ARGUMENT: ErrorCode = ErrorCode(3002);
}

/// Window-specific error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// Both bounds are present but the end is not strictly after the start
    #[error("Construction error: {0}")]
    ConstructionError(String),

    /// An argument cannot be expressed as a time window
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl TimeSeriesError for WindowError {
    fn code(&self) -> ErrorCode {
        use codes::*;
        match self {
            WindowError::ConstructionError(_) => CONSTRUCTION_ERROR,
            WindowError::InvalidArgument(_) => INVALID_ARGUMENT,
        }
    }

    fn domain(&self) -> ErrorDomain {
        ErrorDomain::Window
    }

    fn error_code(&self) -> &'static str {
        match self {
            WindowError::ConstructionError(_) => "WINDOW_CONSTRUCTION_ERROR",
            WindowError::InvalidArgument(_) => "WINDOW_INVALID_ARGUMENT",
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Convenient Result type for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// Convert from window error to boxed error
impl From<WindowError> for BoxError {
    fn from(err: WindowError) -> Self {
        Box::new(err)
    }
}

// Helper methods for creating window errors
impl WindowError {
    /// Create a new construction error
    pub fn construction_error(message: impl Into<String>) -> Self {
        WindowError::ConstructionError(message.into())
    }

    /// Create a new invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        WindowError::InvalidArgument(message.into())
    }
}
