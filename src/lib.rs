//! EMI Calculator - loan amortization and deposit growth ledgers
//!
//! This library provides:
//! - EMI sizing and month-by-month loan payoff schedules with prepayments
//! - Fixed deposit maturity under annual, semi-annual, quarterly or monthly compounding
//! - Recurring deposit simulation with a monthly ledger
//! - Loan comparisons, presets and CSV export of every ledger
//!
//! All three engines are pure functions: the same input always produces the
//! same result and nothing is kept between calls.

pub mod error;
pub mod period;
pub mod loan;
pub mod deposit;
pub mod export;
pub mod request;

// Re-export commonly used types
pub use error::{CalcError, CalcResult};
pub use period::YearMonth;
pub use loan::{compute_loan_schedule, LedgerRow, LoanInput, LoanPreset, LoanResult};
pub use deposit::{compute_fd, compute_rd, Compounding, FdInput, FdResult, RdInput, RdResult};
pub use request::{CalculationOutcome, CalculationRequest};
