//! Running state of an amortization simulation

use crate::error::{CalcError, CalcResult};
use crate::period::YearMonth;

/// Outstanding position of a loan between installments
#[derive(Debug, Clone)]
pub struct AmortizationState {
    /// Index of the current period (1-indexed, 0 before the first installment)
    pub period_index: u32,

    /// Calendar month of the current period
    pub period: YearMonth,

    /// Outstanding principal after the last applied installment
    pub balance: f64,
}

impl AmortizationState {
    pub fn new(principal: f64, start: YearMonth) -> Self {
        Self {
            period_index: 0,
            period: start,
            balance: principal,
        }
    }

    /// Move to the next installment period.
    /// The first call keeps the start month; later calls step one calendar month.
    pub fn advance_period(&mut self) -> CalcResult<()> {
        if self.period_index > 0 {
            self.period = self.period.succ().ok_or_else(|| {
                CalcError::invalid(
                    "start_period",
                    "schedule runs past the supported calendar range",
                )
            })?;
        }
        self.period_index += 1;
        Ok(())
    }
}
