//! Numeric checks shared by the cue validators.
//!
//! Each check returns a plain message on failure; the caller attaches the
//! error code and JSON path.

use std::fmt;

/// Failure of a single numeric check.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonValidationError {
    /// Human-readable error message.
    pub message: String,
}

impl CommonValidationError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CommonValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CommonValidationError {}

fn require_finite(name: &str, value: f64) -> Result<(), CommonValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CommonValidationError::new(format!(
            "{} must be finite, got {}",
            name, value
        )))
    }
}

/// Checks that a value is finite and greater than zero.
///
/// ```
/// use chiptone_spec::validation::common::validate_positive;
///
/// assert!(validate_positive("tempo_bpm", 120.0).is_ok());
/// assert!(validate_positive("tempo_bpm", 0.0).is_err());
/// ```
pub fn validate_positive(name: &str, value: f64) -> Result<(), CommonValidationError> {
    require_finite(name, value)?;
    if value <= 0.0 {
        return Err(CommonValidationError::new(format!(
            "{} must be positive, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Checks that a value is finite and at least zero.
pub fn validate_non_negative(name: &str, value: f64) -> Result<(), CommonValidationError> {
    require_finite(name, value)?;
    if value < 0.0 {
        return Err(CommonValidationError::new(format!(
            "{} must be non-negative, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Checks that a value lies in [0, 1].
pub fn validate_unit_interval(name: &str, value: f64) -> Result<(), CommonValidationError> {
    require_finite(name, value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(CommonValidationError::new(format!(
            "{} must be in [0, 1], got {}",
            name, value
        )));
    }
    Ok(())
}

/// Checks that a volume lies in (0, 1].
///
/// ```
/// use chiptone_spec::validation::common::validate_volume;
///
/// assert!(validate_volume("volume", 0.25).is_ok());
/// assert!(validate_volume("volume", 0.0).is_err());
/// assert!(validate_volume("volume", 1.5).is_err());
/// ```
pub fn validate_volume(name: &str, value: f64) -> Result<(), CommonValidationError> {
    validate_positive(name, value)?;
    if value > 1.0 {
        return Err(CommonValidationError::new(format!(
            "{} must be in (0, 1], got {}",
            name, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_is_rejected_everywhere() {
        assert!(validate_positive("x", f64::NAN).is_err());
        assert!(validate_non_negative("x", f64::NAN).is_err());
        assert!(validate_unit_interval("x", f64::NAN).is_err());
        assert!(validate_volume("x", f64::INFINITY).is_err());
    }

    #[test]
    fn test_messages_name_the_field() {
        let err = validate_non_negative("offset_seconds", -0.5).unwrap_err();
        assert_eq!(err.to_string(), "offset_seconds must be non-negative, got -0.5");
    }

    #[test]
    fn test_unit_interval_bounds_inclusive() {
        assert!(validate_unit_interval("sustain", 0.0).is_ok());
        assert!(validate_unit_interval("sustain", 1.0).is_ok());
        assert!(validate_unit_interval("sustain", 1.01).is_err());
    }
}
