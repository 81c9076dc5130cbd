//! Run every loan preset and its default comparison loan
//!
//! Usage: cargo run --bin preset_summary [output.csv]

use anyhow::{Context, Result};
use emi_calculator::loan::{compare_loans, LoanPreset};
use std::fs::File;
use std::io::Write;

fn main() -> Result<()> {
    env_logger::init();

    let output_path = std::env::args().nth(1).unwrap_or_else(|| "preset_summary.csv".to_string());
    let mut file = File::create(&output_path)
        .with_context(|| format!("Failed to create {}", output_path))?;

    writeln!(
        file,
        "Preset,Principal,Rate,Months,EMI,TotalInterest,TotalPaid,\
         RateB,EMI_B,TotalInterest_B,EMIDiff,InterestDiff"
    )?;

    for preset in LoanPreset::ALL {
        let a = preset.input();
        let b = preset.comparison_input();
        let cmp = compare_loans(&a, &b).with_context(|| format!("Preset {} failed", preset))?;

        writeln!(
            file,
            "{},{:.2},{:.2},{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            preset,
            a.principal,
            a.annual_rate_percent,
            a.months,
            cmp.loan_a.emi,
            cmp.loan_a.total_interest,
            cmp.loan_a.total_paid,
            b.annual_rate_percent,
            cmp.loan_b.emi,
            cmp.loan_b.total_interest,
            cmp.emi_difference,
            cmp.interest_difference,
        )?;

        println!(
            "{:<9} EMI {:>12.2}  interest {:>14.2}  (+{}% costs {:.2} more)",
            preset.name(),
            cmp.loan_a.emi,
            cmp.loan_a.total_interest,
            b.annual_rate_percent - a.annual_rate_percent,
            -cmp.interest_difference,
        );
    }

    println!("\nSummary written to: {}", output_path);
    Ok(())
}
