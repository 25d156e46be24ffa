use context_error::{BoxedError, Context, CreateError};

use crate::error::MzError;

/// Create an [`MzError::InvalidArgument`] error without any additional context.
pub(crate) fn invalid_argument(short: &'static str, long: String) -> BoxedError<'static, MzError> {
    BoxedError::new(MzError::InvalidArgument, short, long, Context::none())
}

/// Create an [`MzError::OutOfBounds`] error without any additional context.
pub(crate) fn out_of_bounds(short: &'static str, long: String) -> BoxedError<'static, MzError> {
    BoxedError::new(MzError::OutOfBounds, short, long, Context::none())
}

/// Check that the given value is a usable (finite) number.
pub(crate) fn require_finite(
    value: f64,
    what: &'static str,
) -> Result<f64, BoxedError<'static, MzError>> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid_argument(
            "Invalid number",
            format!("The {what} has to be a finite number, but '{value}' was given"),
        ))
    }
}
