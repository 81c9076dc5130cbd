//! Fixed deposit maturity and monthly growth trace

use log::debug;
use serde::{Deserialize, Serialize};

use super::compounding::Compounding;
use super::tenure_months;
use crate::error::{require_non_negative, require_positive, CalcResult};

/// Parameters of a lump-sum deposit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FdInput {
    pub principal: f64,
    pub annual_rate_percent: f64,
    /// Tenure in years; fractional years are allowed
    pub years: f64,
    #[serde(default, alias = "compounding_periods_per_year")]
    pub compounding: Compounding,
}

impl FdInput {
    pub fn new(principal: f64, annual_rate_percent: f64, years: f64) -> Self {
        Self {
            principal,
            annual_rate_percent,
            years,
            compounding: Compounding::default(),
        }
    }

    pub fn compounded(mut self, compounding: Compounding) -> Self {
        self.compounding = compounding;
        self
    }

    fn validate(&self) -> CalcResult<()> {
        require_positive("principal", self.principal)?;
        require_positive("years", self.years)?;
        require_non_negative("annual_rate_percent", self.annual_rate_percent)?;
        Ok(())
    }
}

/// One month of the approximate growth trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FdLedgerRow {
    pub month: u32,
    /// Balance with interest folded in only at compounding boundaries
    pub balance: f64,
    /// Cumulative interest accrued so far
    pub interest_accrued: f64,
}

/// Fixed deposit outcome.
///
/// `maturity` and `total_interest` come from the closed-form compound
/// interest formula. `schedule` is a separate monthly approximation for
/// charting: it accrues `balance × r/12` each month but only folds that
/// single month's accrual into the balance at compounding boundaries, so its
/// final balance does not match `maturity`. The two are intentionally not
/// reconciled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FdResult {
    pub principal: f64,
    pub maturity: f64,
    pub total_interest: f64,
    pub years: f64,
    pub compounding: Compounding,
    pub total_months: u32,
    pub schedule: Vec<FdLedgerRow>,
}

impl FdResult {
    pub fn compounding_periods_per_year(&self) -> u32 {
        self.compounding.periods_per_year()
    }
}

/// `P · (1 + r/n)^(n·t)` with `r` as a decimal annual rate
pub fn compound_maturity(
    principal: f64,
    annual_rate: f64,
    periods_per_year: u32,
    years: f64,
) -> f64 {
    let n = periods_per_year as f64;
    principal * (1.0 + annual_rate / n).powf(n * years)
}

/// Compute a fixed deposit's maturity value and its monthly growth trace
pub fn compute_fd(input: &FdInput) -> CalcResult<FdResult> {
    if let Err(e) = input.validate() {
        debug!("Rejecting FD input: {}", e);
        return Err(e);
    }

    let total_months = tenure_months(input.years);
    let annual_rate = input.annual_rate_percent / 100.0;
    let maturity = compound_maturity(
        input.principal,
        annual_rate,
        input.compounding.periods_per_year(),
        input.years,
    );

    let schedule = growth_trace(input.principal, annual_rate, input.compounding, total_months);

    Ok(FdResult {
        principal: input.principal,
        maturity,
        total_interest: maturity - input.principal,
        years: input.years,
        compounding: input.compounding,
        total_months,
        schedule,
    })
}

fn growth_trace(
    principal: f64,
    annual_rate: f64,
    compounding: Compounding,
    total_months: u32,
) -> Vec<FdLedgerRow> {
    let monthly_rate = annual_rate / 12.0;
    let months_per_period = compounding.months_per_period();

    let mut balance = principal;
    let mut interest_accrued = 0.0;
    let mut schedule = Vec::with_capacity(total_months as usize);

    for month in 1..=total_months {
        let interest = balance * monthly_rate;
        interest_accrued += interest;
        if month % months_per_period == 0 {
            balance += interest;
        }
        schedule.push(FdLedgerRow {
            month,
            balance,
            interest_accrued,
        });
    }

    schedule
}
