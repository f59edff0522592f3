use grin_core::errors::{ErrorInfo, GrinError};

/// Checks that `k` is a positive integer.
pub fn validate_k(k: usize) -> Result<usize, GrinError> {
    if k == 0 {
        return Err(GrinError::InvalidArgument(
            ErrorInfo::new("invalid-k", "k must be a positive integer").with_context("k", k),
        ));
    }
    Ok(k)
}

/// Converts an integer valued float into a validated `k`.
pub fn k_from_f64(k: f64) -> Result<usize, GrinError> {
    let value = integer_from_f64(k).map_err(|err| err.with_context("parameter", "k"))?;
    if value < 1 {
        return Err(GrinError::InvalidArgument(
            ErrorInfo::new("invalid-k", "k must be a positive integer").with_context("k", value),
        ));
    }
    validate_k(value as usize)
}

/// Converts an integer valued float, rejecting fractional and non-finite values.
pub fn integer_from_f64(value: f64) -> Result<i64, GrinError> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > i64::MAX as f64 {
        return Err(GrinError::InvalidArgument(
            ErrorInfo::new("non-integral", "expected an integer valued number")
                .with_context("value", value),
        ));
    }
    Ok(value as i64)
}
