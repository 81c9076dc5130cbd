//! JSON calculation requests and batch runs
//!
//! A request file holds one request object or an array of them, each tagged
//! with its `kind`:
//!
//! ```json
//! [
//!   { "kind": "loan", "principal": 5000000, "annual_rate_percent": 8.5, "months": 240 },
//!   { "kind": "fd", "principal": 100000, "annual_rate_percent": 6.5, "years": 5,
//!     "compounding": 4 },
//!   { "kind": "rd", "monthly_deposit": 2000, "annual_rate_percent": 6.5, "years": 5 },
//!   { "kind": "preset", "preset": "Car", "extra_monthly_payment": 2000 }
//! ]
//! ```

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::deposit::{compute_fd, compute_rd, FdInput, FdResult, RdInput, RdResult};
use crate::error::CalcResult;
use crate::loan::{
    compare_loans, compute_loan_schedule, LoanComparison, LoanInput, LoanPreset, LoanResult,
};
use crate::period::YearMonth;

/// A single calculation to run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CalculationRequest {
    Loan(LoanInput),
    Fd(FdInput),
    Rd(RdInput),
    Compare {
        loan_a: LoanInput,
        loan_b: LoanInput,
    },
    /// A loan built from a category preset
    Preset {
        preset: LoanPreset,
        #[serde(default)]
        extra_monthly_payment: f64,
        #[serde(default)]
        start_period: Option<YearMonth>,
    },
}

/// Result of one request, tagged like the request that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CalculationOutcome {
    Loan(LoanResult),
    Fd(FdResult),
    Rd(RdResult),
    Compare(LoanComparison),
}

impl CalculationRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            CalculationRequest::Loan(_) => "loan",
            CalculationRequest::Fd(_) => "fd",
            CalculationRequest::Rd(_) => "rd",
            CalculationRequest::Compare { .. } => "compare",
            CalculationRequest::Preset { .. } => "preset",
        }
    }

    pub fn run(&self) -> CalcResult<CalculationOutcome> {
        match self {
            CalculationRequest::Loan(input) => {
                compute_loan_schedule(input).map(CalculationOutcome::Loan)
            }
            CalculationRequest::Fd(input) => compute_fd(input).map(CalculationOutcome::Fd),
            CalculationRequest::Rd(input) => compute_rd(input).map(CalculationOutcome::Rd),
            CalculationRequest::Compare { loan_a, loan_b } => {
                compare_loans(loan_a, loan_b).map(CalculationOutcome::Compare)
            }
            CalculationRequest::Preset {
                preset,
                extra_monthly_payment,
                start_period,
            } => {
                let input = LoanInput {
                    extra_monthly_payment: *extra_monthly_payment,
                    start_period: *start_period,
                    ..preset.input()
                };
                compute_loan_schedule(&input).map(CalculationOutcome::Loan)
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<CalculationRequest>),
    One(CalculationRequest),
}

/// Parse a request document holding one request or an array of them
pub fn parse_requests(json: &str) -> CalcResult<Vec<CalculationRequest>> {
    let parsed: OneOrMany = serde_json::from_str(json)?;
    Ok(match parsed {
        OneOrMany::Many(requests) => requests,
        OneOrMany::One(request) => vec![request],
    })
}

/// Load requests from a JSON file
pub fn load_requests<P: AsRef<Path>>(path: P) -> CalcResult<Vec<CalculationRequest>> {
    let json = std::fs::read_to_string(path)?;
    parse_requests(&json)
}

/// Outcome of one entry of a batch; failures are reported, not fatal
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub index: usize,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<CalculationOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchEntry {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Run every request in order; each is independent of the others
pub fn run_batch(requests: &[CalculationRequest]) -> Vec<BatchEntry> {
    info!("Running batch of {} requests", requests.len());

    let entries: Vec<BatchEntry> = requests
        .iter()
        .enumerate()
        .map(|(index, request)| match request.run() {
            Ok(outcome) => BatchEntry {
                index,
                kind: request.kind(),
                outcome: Some(outcome),
                error: None,
            },
            Err(e) => {
                warn!("Request {} ({}) failed: {}", index, request.kind(), e);
                BatchEntry {
                    index,
                    kind: request.kind(),
                    outcome: None,
                    error: Some(e.to_string()),
                }
            }
        })
        .collect();

    let failed = entries.iter().filter(|e| !e.is_ok()).count();
    info!("Batch complete: {} succeeded, {} failed", entries.len() - failed, failed);

    entries
}
