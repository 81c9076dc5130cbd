//! Loan amortization: EMI sizing, payoff schedules and comparisons

mod input;
mod state;
mod engine;
mod schedule;
mod compare;
pub mod presets;

pub use input::LoanInput;
pub use state::AmortizationState;
pub use engine::{compute_loan_schedule, level_installment, MAX_PERIODS, SETTLED_BALANCE};
pub use schedule::{LedgerRow, LoanResult, PeriodSplit};
pub use compare::{compare_loans, prepayment_savings, LoanComparison, PrepaymentSavings};
pub use presets::LoanPreset;
