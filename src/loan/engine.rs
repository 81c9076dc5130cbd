//! Amortization engine: EMI sizing and month-by-month payoff simulation

use log::{debug, warn};

use super::input::LoanInput;
use super::schedule::{LedgerRow, LoanResult};
use super::state::AmortizationState;
use crate::error::{CalcError, CalcResult};
use crate::period::YearMonth;

/// Hard cap on simulated installments (100 years)
pub const MAX_PERIODS: u32 = 1200;

/// A balance at or below this many currency units counts as repaid
pub const SETTLED_BALANCE: f64 = 0.005;

/// Level installment that repays `principal` over `months` at `monthly_rate`.
///
/// Zero rate degrades to straight division; otherwise the annuity formula
/// `P·r·(1+r)^N / ((1+r)^N − 1)`, evaluated through `ln_1p`/`exp_m1` so
/// rates too small to move `1 + r` still give a finite installment.
pub fn level_installment(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    let log_growth = months as f64 * monthly_rate.ln_1p();
    let denominator = log_growth.exp_m1();
    if monthly_rate == 0.0 || denominator == 0.0 {
        return principal / months as f64;
    }
    principal * monthly_rate * log_growth.exp() / denominator
}

/// Compute the EMI and simulate the payoff schedule for a loan.
///
/// Every month the interest on the outstanding balance is charged first and
/// the rest of the installment retires principal. The principal part of the
/// final installment is clamped to what is still owed, so balances never go
/// negative. The simulation stops once the balance is settled or after
/// [`MAX_PERIODS`] installments, whichever comes first.
pub fn compute_loan_schedule(input: &LoanInput) -> CalcResult<LoanResult> {
    if let Err(e) = input.validate() {
        debug!("Rejecting loan input: {}", e);
        return Err(e);
    }

    let monthly_rate = input.monthly_rate();
    let emi = level_installment(input.principal, monthly_rate, input.months);
    if !emi.is_finite() {
        let reason = format!(
            "installment for {} months at {}% is not representable",
            input.months, input.annual_rate_percent
        );
        return Err(CalcError::invalid("months", reason));
    }
    let monthly_payment = emi + input.extra_monthly_payment;

    let start = input.start_period.unwrap_or_else(YearMonth::current);
    let mut state = AmortizationState::new(input.principal, start);
    let mut result = LoanResult::new(emi, monthly_payment);

    while state.balance > SETTLED_BALANCE && state.period_index < MAX_PERIODS {
        state.advance_period()?;
        let row = apply_installment(&mut state, monthly_rate, monthly_payment);
        result.add_row(row);
    }

    if state.balance > SETTLED_BALANCE {
        warn!(
            "Loan schedule truncated at {} periods with {:.2} still outstanding",
            MAX_PERIODS, state.balance
        );
    }

    debug!(
        "Loan of {:.2} at {}% over {} months: EMI {:.2}, paid off in {} months",
        input.principal, input.annual_rate_percent, input.months, emi, result.actual_months
    );

    Ok(result)
}

/// Apply one installment to the state and describe it as a ledger row
fn apply_installment(
    state: &mut AmortizationState,
    monthly_rate: f64,
    monthly_payment: f64,
) -> LedgerRow {
    let beginning_balance = state.balance;
    let interest = beginning_balance * monthly_rate;

    // Final installment only needs to clear what is left
    let principal = (monthly_payment - interest).min(beginning_balance);
    let ending_balance = beginning_balance - principal;

    state.balance = ending_balance;

    LedgerRow {
        period_index: state.period_index,
        period: state.period,
        beginning_balance,
        payment: principal + interest,
        principal_component: principal,
        interest_component: interest,
        ending_balance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn start() -> YearMonth {
        YearMonth::new(2025, 1).unwrap()
    }

    #[test]
    fn test_zero_rate_loan() {
        let input = LoanInput::new(120_000.0, 0.0, 12).starting(start());
        let result = compute_loan_schedule(&input).unwrap();

        assert_eq!(result.emi, 10_000.0);
        assert_eq!(result.schedule.len(), 12);
        assert_eq!(result.actual_months, 12);
        assert_eq!(result.final_balance(), 0.0);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_invalid_inputs() {
        let zero_principal = LoanInput::new(0.0, 10.0, 12);
        assert!(compute_loan_schedule(&zero_principal).unwrap_err().is_invalid_input());

        let negative_rate = LoanInput::new(100_000.0, -1.0, 12);
        assert!(compute_loan_schedule(&negative_rate).unwrap_err().is_invalid_input());

        let no_tenure = LoanInput::new(100_000.0, 10.0, 0);
        assert!(compute_loan_schedule(&no_tenure).is_err());
    }

    #[test]
    fn test_known_emi() {
        // 1 lakh at 10% over a year
        let emi = level_installment(100_000.0, 10.0 / 12.0 / 100.0, 12);
        assert_abs_diff_eq!(emi, 8791.59, epsilon = 0.01);
    }

    #[test]
    fn test_near_zero_rate_behaves_like_zero_rate() {
        let input = LoanInput::new(100_000.0, 1e-15, 12).starting(start());
        let result = compute_loan_schedule(&input).unwrap();

        assert!(result.emi.is_finite());
        assert_abs_diff_eq!(result.emi, 100_000.0 / 12.0, epsilon = 1e-6);
        assert_eq!(result.actual_months, 12);
        assert!(result.final_balance() <= SETTLED_BALANCE);
    }

    #[test]
    fn test_row_identities_hold() {
        let input = LoanInput::new(5_000_000.0, 8.5, 240).starting(start());
        let result = compute_loan_schedule(&input).unwrap();

        assert_eq!(result.actual_months, 240);

        let mut previous_ending = input.principal;
        for row in &result.schedule {
            assert_eq!(row.beginning_balance, previous_ending);
            assert_eq!(row.payment, row.principal_component + row.interest_component);
            assert_eq!(row.ending_balance, row.beginning_balance - row.principal_component);
            assert!(row.ending_balance >= 0.0);
            previous_ending = row.ending_balance;
        }

        let principal_repaid: f64 = result.schedule.iter().map(|r| r.principal_component).sum();
        assert_abs_diff_eq!(principal_repaid, input.principal, epsilon = 0.01);
        assert_abs_diff_eq!(
            result.total_paid,
            result.total_principal + result.total_interest,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_extra_payment_shortens_loan() {
        let base = LoanInput::new(1_000_000.0, 9.0, 60).starting(start());
        let prepaid = base.clone().with_extra_payment(5_000.0);

        let plain = compute_loan_schedule(&base).unwrap();
        let accelerated = compute_loan_schedule(&prepaid).unwrap();

        assert_eq!(accelerated.emi, plain.emi);
        assert_eq!(accelerated.monthly_payment, plain.emi + 5_000.0);
        assert!(accelerated.actual_months < plain.actual_months);
        assert!(accelerated.total_interest < plain.total_interest);

        // The last installment is clamped rather than overpaying
        let last = accelerated.schedule.last().unwrap();
        assert!(last.payment <= accelerated.monthly_payment);
        assert!(last.ending_balance <= SETTLED_BALANCE);
    }

    #[test]
    fn test_schedule_capped_at_max_periods() {
        // 500-year tenure: the installment barely exceeds the interest
        let input = LoanInput::new(1_000_000.0, 12.0, 6000).starting(start());
        let result = compute_loan_schedule(&input).unwrap();

        assert_eq!(result.schedule.len(), MAX_PERIODS as usize);
        assert_eq!(result.actual_months, MAX_PERIODS);
        assert!(result.final_balance() > SETTLED_BALANCE);
    }

    #[test]
    fn test_periods_roll_over_year_end() {
        let input = LoanInput::new(3_000.0, 12.0, 3).starting(YearMonth::new(2024, 11).unwrap());
        let result = compute_loan_schedule(&input).unwrap();

        let labels: Vec<String> = result.schedule.iter().map(|r| r.period.to_string()).collect();
        assert_eq!(labels, vec!["2024-11", "2024-12", "2025-01"]);
        assert_eq!(result.schedule[0].period_index, 1);
        assert_eq!(result.schedule[2].period_index, 3);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let input = LoanInput::new(750_000.0, 10.25, 84)
            .with_extra_payment(1_500.0)
            .starting(start());

        let first = compute_loan_schedule(&input).unwrap();
        let second = compute_loan_schedule(&input).unwrap();
        assert_eq!(first, second);
    }
}
