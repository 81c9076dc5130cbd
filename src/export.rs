//! CSV export of ledgers
//!
//! Amounts are rounded to whole currency units; the engines themselves
//! always return unrounded values.

use csv::Writer;
use serde::Serialize;
use std::io::Write;

use crate::deposit::{FdResult, RdResult};
use crate::error::{CalcError, CalcResult};
use crate::loan::LoanResult;

#[derive(Debug, Serialize)]
struct LoanCsvRow {
    #[serde(rename = "MonthNumber")]
    month_number: u32,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "BeginningBalance")]
    beginning_balance: i64,
    #[serde(rename = "Payment")]
    payment: i64,
    #[serde(rename = "PrincipalPaid")]
    principal_paid: i64,
    #[serde(rename = "InterestPaid")]
    interest_paid: i64,
    #[serde(rename = "EndingBalance")]
    ending_balance: i64,
}

#[derive(Debug, Serialize)]
struct RdCsvRow {
    #[serde(rename = "Month")]
    month: u32,
    #[serde(rename = "Deposit")]
    deposit: i64,
    #[serde(rename = "Interest")]
    interest: i64,
    #[serde(rename = "Balance")]
    balance: i64,
}

#[derive(Debug, Serialize)]
struct FdCsvRow {
    #[serde(rename = "Month")]
    month: u32,
    #[serde(rename = "Balance")]
    balance: i64,
    #[serde(rename = "InterestAccrued")]
    interest_accrued: i64,
}

/// Round half away from zero to whole currency units
fn whole(amount: f64) -> i64 {
    amount.round() as i64
}

/// Write an amortization schedule, one row per installment
pub fn write_loan_schedule<W: Write>(writer: W, result: &LoanResult) -> CalcResult<()> {
    let mut wtr = Writer::from_writer(writer);

    for row in &result.schedule {
        wtr.serialize(LoanCsvRow {
            month_number: row.period_index,
            date: row.period.first_day().to_string(),
            beginning_balance: whole(row.beginning_balance),
            payment: whole(row.payment),
            principal_paid: whole(row.principal_component),
            interest_paid: whole(row.interest_component),
            ending_balance: whole(row.ending_balance),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write a recurring deposit ledger
pub fn write_rd_ledger<W: Write>(writer: W, result: &RdResult) -> CalcResult<()> {
    let mut wtr = Writer::from_writer(writer);

    for row in &result.schedule {
        wtr.serialize(RdCsvRow {
            month: row.month,
            deposit: whole(row.deposit),
            interest: whole(row.interest),
            balance: whole(row.balance),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the approximate monthly trace of a fixed deposit
pub fn write_fd_trace<W: Write>(writer: W, result: &FdResult) -> CalcResult<()> {
    let mut wtr = Writer::from_writer(writer);

    for row in &result.schedule {
        wtr.serialize(FdCsvRow {
            month: row.month,
            balance: whole(row.balance),
            interest_accrued: whole(row.interest_accrued),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

fn into_string(buf: Vec<u8>) -> CalcResult<String> {
    String::from_utf8(buf).map_err(|e| CalcError::Parse(format!("CSV output is not UTF-8: {}", e)))
}

pub fn loan_schedule_csv(result: &LoanResult) -> CalcResult<String> {
    let mut buf = Vec::new();
    write_loan_schedule(&mut buf, result)?;
    into_string(buf)
}

pub fn rd_ledger_csv(result: &RdResult) -> CalcResult<String> {
    let mut buf = Vec::new();
    write_rd_ledger(&mut buf, result)?;
    into_string(buf)
}

pub fn fd_trace_csv(result: &FdResult) -> CalcResult<String> {
    let mut buf = Vec::new();
    write_fd_trace(&mut buf, result)?;
    into_string(buf)
}
