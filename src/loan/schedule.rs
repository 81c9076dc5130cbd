//! Amortization schedule output structures

use serde::{Deserialize, Serialize};

use crate::period::YearMonth;

/// One installment of an amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRow {
    /// 1-indexed installment number
    pub period_index: u32,
    pub period: YearMonth,

    pub beginning_balance: f64,
    /// Always `principal_component + interest_component`
    pub payment: f64,
    pub principal_component: f64,
    pub interest_component: f64,
    /// Always `beginning_balance - principal_component`, never negative
    pub ending_balance: f64,
}

/// Principal/interest split of a single installment, for bar charts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodSplit {
    pub period_index: u32,
    pub principal: f64,
    pub interest: f64,
}

/// Complete loan calculation: installment sizing plus the simulated payoff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    /// Level installment that amortizes the loan over the requested tenure
    pub emi: f64,

    /// Installment actually applied each month (EMI + extra payment)
    pub monthly_payment: f64,

    pub total_interest: f64,
    pub total_principal: f64,
    pub total_paid: f64,

    /// Rows actually produced; below the requested tenure when prepaying
    pub actual_months: u32,

    /// Installments in chronological order
    pub schedule: Vec<LedgerRow>,
}

impl LoanResult {
    pub fn new(emi: f64, monthly_payment: f64) -> Self {
        Self {
            emi,
            monthly_payment,
            total_interest: 0.0,
            total_principal: 0.0,
            total_paid: 0.0,
            actual_months: 0,
            schedule: Vec::new(),
        }
    }

    /// Append an installment and roll it into the totals
    pub fn add_row(&mut self, row: LedgerRow) {
        self.total_interest += row.interest_component;
        self.total_principal += row.principal_component;
        self.total_paid = self.total_interest + self.total_principal;
        self.schedule.push(row);
        self.actual_months = self.schedule.len() as u32;
    }

    /// Balance left after the last installment
    pub fn final_balance(&self) -> f64 {
        self.schedule.last().map(|r| r.ending_balance).unwrap_or(0.0)
    }

    /// Month of the last installment
    pub fn payoff_period(&self) -> Option<YearMonth> {
        self.schedule.last().map(|r| r.period)
    }

    /// (total principal, total interest), the pie breakdown
    pub fn principal_interest_split(&self) -> (f64, f64) {
        (self.total_principal, self.total_interest)
    }

    /// Per-installment splits for the first `cap` rows
    pub fn bar_series(&self, cap: usize) -> Vec<PeriodSplit> {
        self.schedule
            .iter()
            .take(cap)
            .map(|r| PeriodSplit {
                period_index: r.period_index,
                principal: r.principal_component,
                interest: r.interest_component,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(index: u32, beginning: f64, principal: f64, interest: f64) -> LedgerRow {
        LedgerRow {
            period_index: index,
            period: YearMonth::new(2025, index).unwrap(),
            beginning_balance: beginning,
            payment: principal + interest,
            principal_component: principal,
            interest_component: interest,
            ending_balance: beginning - principal,
        }
    }

    #[test]
    fn test_add_row_accumulates_totals() {
        let mut result = LoanResult::new(510.0, 510.0);
        result.add_row(row(1, 1000.0, 500.0, 10.0));
        result.add_row(row(2, 500.0, 500.0, 5.0));

        assert_eq!(result.actual_months, 2);
        assert_eq!(result.total_principal, 1000.0);
        assert_eq!(result.total_interest, 15.0);
        assert_eq!(result.total_paid, 1015.0);
        assert_eq!(result.final_balance(), 0.0);
        assert_eq!(result.payoff_period(), YearMonth::new(2025, 2));
    }

    #[test]
    fn test_bar_series_is_capped() {
        let mut result = LoanResult::new(510.0, 510.0);
        result.add_row(row(1, 1000.0, 500.0, 10.0));
        result.add_row(row(2, 500.0, 500.0, 5.0));

        let bars = result.bar_series(1);
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].principal, 500.0);
        assert_eq!(bars[0].interest, 10.0);
        assert_eq!(result.bar_series(60).len(), 2);
    }

    #[test]
    fn test_empty_result() {
        let result = LoanResult::new(0.0, 0.0);
        assert_eq!(result.final_balance(), 0.0);
        assert!(result.payoff_period().is_none());
        assert_eq!(result.principal_interest_split(), (0.0, 0.0));
    }
}
