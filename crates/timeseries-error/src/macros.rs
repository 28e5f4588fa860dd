// Error handling macros
// Early-return helpers shared by the time series crates

/// Return early with an error if a condition is not satisfied
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error:expr) => {
        if !($cond) {
            return Err(::core::convert::From::from($error));
        }
    };
}

/// Bail early with an error
#[macro_export]
macro_rules! bail {
    ($error:expr) => {
        return Err(::core::convert::From::from($error))
    };
}
