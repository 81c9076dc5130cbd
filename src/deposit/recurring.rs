//! Recurring deposit simulation

use log::debug;
use serde::{Deserialize, Serialize};

use super::tenure_months;
use crate::error::{require_non_negative, require_positive, CalcError, CalcResult};

/// Parameters of a monthly savings plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RdInput {
    pub monthly_deposit: f64,
    pub annual_rate_percent: f64,
    /// Tenure in years, rounded to whole months
    pub years: f64,
}

impl RdInput {
    pub fn new(monthly_deposit: f64, annual_rate_percent: f64, years: f64) -> Self {
        Self {
            monthly_deposit,
            annual_rate_percent,
            years,
        }
    }
}

/// One month of the deposit ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RdLedgerRow {
    pub month: u32,
    pub deposit: f64,
    /// Interest earned this month on the balance carried in
    pub interest: f64,
    /// Balance after this month's interest and deposit
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RdResult {
    pub monthly_deposit: f64,
    pub total_months: u32,
    pub years: f64,
    pub maturity: f64,
    /// `monthly_deposit × total_months`
    pub total_principal: f64,
    pub total_interest: f64,
    pub schedule: Vec<RdLedgerRow>,
}

/// Simulate a recurring deposit month by month.
///
/// Each month interest is earned on the balance carried in, then the new
/// deposit is posted. A deposit therefore starts earning the month after it
/// is made.
pub fn compute_rd(input: &RdInput) -> CalcResult<RdResult> {
    let total_months = match validate(input) {
        Ok(months) => months,
        Err(e) => {
            debug!("Rejecting RD input: {}", e);
            return Err(e);
        }
    };

    let monthly_rate = input.annual_rate_percent / 100.0 / 12.0;
    let mut balance = 0.0;
    let mut schedule = Vec::with_capacity(total_months as usize);

    for month in 1..=total_months {
        let interest = balance * monthly_rate;
        balance = if monthly_rate == 0.0 {
            // Zero rate: exactly the deposits made so far
            input.monthly_deposit * month as f64
        } else {
            balance + interest + input.monthly_deposit
        };
        schedule.push(RdLedgerRow {
            month,
            deposit: input.monthly_deposit,
            interest,
            balance,
        });
    }

    let total_principal = input.monthly_deposit * total_months as f64;

    Ok(RdResult {
        monthly_deposit: input.monthly_deposit,
        total_months,
        years: total_months as f64 / 12.0,
        maturity: balance,
        total_principal,
        total_interest: balance - total_principal,
        schedule,
    })
}

/// Check the input and derive the tenure in months
fn validate(input: &RdInput) -> CalcResult<u32> {
    require_positive("monthly_deposit", input.monthly_deposit)?;
    require_non_negative("annual_rate_percent", input.annual_rate_percent)?;
    if !input.years.is_finite() {
        let reason = format!("must be a finite number, got {}", input.years);
        return Err(CalcError::invalid("years", reason));
    }

    let total_months = tenure_months(input.years);
    if total_months == 0 {
        return Err(CalcError::invalid("years", "tenure rounds to zero months"));
    }
    Ok(total_months)
}
