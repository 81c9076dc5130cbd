//! Loan parameters

use serde::{Deserialize, Serialize};

use crate::error::{require_non_negative, require_positive, CalcError, CalcResult};
use crate::period::YearMonth;

/// Flat parameter record for one loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    /// Amount borrowed, in currency units
    pub principal: f64,

    /// Nominal annual rate in percent (8.5 means 8.5% p.a.)
    pub annual_rate_percent: f64,

    /// Requested tenure in months; the EMI is sized to this
    pub months: u32,

    /// Constant prepayment added to every installment
    #[serde(default)]
    pub extra_monthly_payment: f64,

    /// Month of the first installment. `None` means the current month.
    #[serde(default)]
    pub start_period: Option<YearMonth>,
}

impl LoanInput {
    pub fn new(principal: f64, annual_rate_percent: f64, months: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            months,
            extra_monthly_payment: 0.0,
            start_period: None,
        }
    }

    /// Tenure given in years, rounded to whole months
    pub fn from_years(principal: f64, annual_rate_percent: f64, years: f64) -> Self {
        // `as` saturates: negative or NaN tenures become 0 and fail validation
        let months = (years * 12.0).round() as u32;
        Self::new(principal, annual_rate_percent, months)
    }

    pub fn with_extra_payment(mut self, extra_monthly_payment: f64) -> Self {
        self.extra_monthly_payment = extra_monthly_payment;
        self
    }

    pub fn starting(mut self, start_period: YearMonth) -> Self {
        self.start_period = Some(start_period);
        self
    }

    /// Periodic rate as a decimal: annual percent / 12 / 100
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 12.0 / 100.0
    }

    pub(crate) fn validate(&self) -> CalcResult<()> {
        require_positive("principal", self.principal)?;
        if self.months == 0 {
            return Err(CalcError::invalid("months", "tenure must be at least one month"));
        }
        require_non_negative("annual_rate_percent", self.annual_rate_percent)?;
        require_non_negative("extra_monthly_payment", self.extra_monthly_payment)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_years_rounds_to_months() {
        assert_eq!(LoanInput::from_years(1000.0, 10.0, 20.0).months, 240);
        assert_eq!(LoanInput::from_years(1000.0, 10.0, 2.5).months, 30);
        assert_eq!(LoanInput::from_years(1000.0, 10.0, 1.0 / 30.0).months, 0);
        assert_eq!(LoanInput::from_years(1000.0, 10.0, -3.0).months, 0);
    }

    #[test]
    fn test_validation() {
        assert!(LoanInput::new(100_000.0, 10.0, 12).validate().is_ok());
        assert!(LoanInput::new(100_000.0, 0.0, 12).validate().is_ok());
        assert!(LoanInput::new(0.0, 10.0, 12).validate().is_err());
        assert!(LoanInput::new(100_000.0, -1.0, 12).validate().is_err());
        assert!(LoanInput::new(100_000.0, 10.0, 0).validate().is_err());
        assert!(LoanInput::new(100_000.0, 10.0, 12)
            .with_extra_payment(-50.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let input: LoanInput = serde_json::from_str(
            r#"{"principal": 500000, "annual_rate_percent": 12.0, "months": 36}"#,
        )
        .unwrap();
        assert_eq!(input.extra_monthly_payment, 0.0);
        assert!(input.start_period.is_none());

        let input: LoanInput = serde_json::from_str(
            r#"{"principal": 500000, "annual_rate_percent": 12.0, "months": 36,
                "extra_monthly_payment": 1000, "start_period": "2025-01"}"#,
        )
        .unwrap();
        assert_eq!(input.extra_monthly_payment, 1000.0);
        assert_eq!(input.start_period, YearMonth::new(2025, 1));
    }
}
