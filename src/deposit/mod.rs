//! Deposit growth: fixed (lump-sum) and recurring (monthly) deposits

mod compounding;
mod fixed;
mod recurring;

pub use compounding::Compounding;
pub use fixed::{compound_maturity, compute_fd, FdInput, FdLedgerRow, FdResult};
pub use recurring::{compute_rd, RdInput, RdLedgerRow, RdResult};

/// Tenure in whole months, `round(years × 12)`; negative or NaN gives 0
pub(crate) fn tenure_months(years: f64) -> u32 {
    (years * 12.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenure_months() {
        assert_eq!(tenure_months(5.0), 60);
        assert_eq!(tenure_months(0.5), 6);
        assert_eq!(tenure_months(0.25), 3);
        assert_eq!(tenure_months(-2.0), 0);
        assert_eq!(tenure_months(f64::NAN), 0);
    }
}
