//! Error types shared by the calculation engines and their surfaces

use thiserror::Error;

/// Errors produced by the calculators.
///
/// The engines themselves only ever return [`CalcError::InvalidInput`]: they
/// either build a complete ledger or decline. The remaining variants belong
/// to parsing and export.
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("Invalid input: {field} - {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CalcError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// True for the engine's single failure mode
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CalcError::InvalidInput { .. })
    }
}

pub type CalcResult<T> = Result<T, CalcError>;

/// Reject amounts that must be strictly positive and finite
pub(crate) fn require_positive(field: &'static str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid(field, format!("must be a finite number, got {}", value)));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid(field, format!("must be greater than zero, got {}", value)));
    }
    Ok(())
}

/// Reject rates or amounts that must be zero or above and finite
pub(crate) fn require_non_negative(field: &'static str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid(field, format!("must be a finite number, got {}", value)));
    }
    if value < 0.0 {
        return Err(CalcError::invalid(field, format!("must not be negative, got {}", value)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_checks() {
        assert!(require_positive("principal", 1.0).is_ok());
        assert!(require_positive("principal", 0.0).is_err());
        assert!(require_positive("principal", -5.0).is_err());
        assert!(require_positive("principal", f64::NAN).is_err());
        assert!(require_positive("principal", f64::INFINITY).is_err());
    }

    #[test]
    fn test_non_negative_checks() {
        assert!(require_non_negative("annual_rate_percent", 0.0).is_ok());
        assert!(require_non_negative("annual_rate_percent", 7.5).is_ok());
        assert!(require_non_negative("annual_rate_percent", -0.01).is_err());
    }

    #[test]
    fn test_invalid_input_message_names_field() {
        let err = require_positive("months", 0.0).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("months"));
    }
}
