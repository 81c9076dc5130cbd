//! Side-by-side loan comparisons built on the amortization engine

use serde::{Deserialize, Serialize};

use super::engine::compute_loan_schedule;
use super::input::LoanInput;
use super::schedule::LoanResult;
use crate::error::CalcResult;

/// Two loans and their differences, always reported as A − B
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanComparison {
    pub loan_a: LoanResult,
    pub loan_b: LoanResult,
    pub emi_difference: f64,
    pub interest_difference: f64,
    pub total_paid_difference: f64,
}

/// Run both loans through the engine; fails if either input is invalid
pub fn compare_loans(a: &LoanInput, b: &LoanInput) -> CalcResult<LoanComparison> {
    let loan_a = compute_loan_schedule(a)?;
    let loan_b = compute_loan_schedule(b)?;

    Ok(LoanComparison {
        emi_difference: loan_a.emi - loan_b.emi,
        interest_difference: loan_a.total_interest - loan_b.total_interest,
        total_paid_difference: loan_a.total_paid - loan_b.total_paid,
        loan_a,
        loan_b,
    })
}

/// Effect of a constant prepayment on tenure and interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepaymentSavings {
    pub with_extra: LoanResult,
    pub without_extra: LoanResult,
    pub months_saved: u32,
    pub interest_saved: f64,
}

/// Run `input` as given and again with its extra payment removed
pub fn prepayment_savings(input: &LoanInput) -> CalcResult<PrepaymentSavings> {
    let with_extra = compute_loan_schedule(input)?;
    let baseline = LoanInput {
        extra_monthly_payment: 0.0,
        ..input.clone()
    };
    let without_extra = compute_loan_schedule(&baseline)?;

    Ok(PrepaymentSavings {
        months_saved: without_extra.actual_months.saturating_sub(with_extra.actual_months),
        interest_saved: without_extra.total_interest - with_extra.total_interest,
        with_extra,
        without_extra,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::YearMonth;

    fn input(principal: f64, rate: f64, months: u32) -> LoanInput {
        LoanInput::new(principal, rate, months).starting(YearMonth::new(2025, 4).unwrap())
    }

    #[test]
    fn test_higher_rate_costs_more() {
        let a = input(5_000_000.0, 8.5, 240);
        let b = input(5_000_000.0, 9.0, 240);

        let cmp = compare_loans(&a, &b).unwrap();
        assert!(cmp.emi_difference < 0.0);
        assert!(cmp.interest_difference < 0.0);
        assert_eq!(cmp.emi_difference, cmp.loan_a.emi - cmp.loan_b.emi);
    }

    #[test]
    fn test_compare_rejects_invalid_side() {
        let a = input(5_000_000.0, 8.5, 240);
        let b = input(0.0, 9.0, 240);
        assert!(compare_loans(&a, &b).is_err());
        assert!(compare_loans(&b, &a).is_err());
    }

    #[test]
    fn test_prepayment_savings() {
        let loan = input(1_000_000.0, 9.0, 120).with_extra_payment(2_000.0);
        let savings = prepayment_savings(&loan).unwrap();

        assert_eq!(savings.without_extra.actual_months, 120);
        assert!(savings.months_saved > 0);
        assert!(savings.interest_saved > 0.0);
        assert_eq!(savings.with_extra.emi, savings.without_extra.emi);
    }

    #[test]
    fn test_no_prepayment_saves_nothing() {
        let loan = input(1_000_000.0, 9.0, 120);
        let savings = prepayment_savings(&loan).unwrap();

        assert_eq!(savings.months_saved, 0);
        assert_eq!(savings.interest_saved, 0.0);
    }
}
