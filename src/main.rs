//! EMI Calculator CLI
//!
//! Command-line interface for loan schedules and FD/RD maturity ledgers

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use emi_calculator::{
    deposit::{compute_fd, compute_rd, Compounding, FdInput, FdResult, RdInput, RdResult},
    export,
    loan::{
        compare_loans, compute_loan_schedule, prepayment_savings, presets::COMPARISON_RATE_SPREAD,
        LoanComparison, LoanInput, LoanPreset, LoanResult, PrepaymentSavings, SETTLED_BALANCE,
    },
    request::{load_requests, run_batch, BatchEntry, CalculationOutcome},
    YearMonth,
};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

const LEDGER_ONLY: &str =
    "CSV output is only available for single ledgers; use --format table or json";

#[derive(Parser)]
#[command(
    name = "emi_calculator",
    version,
    about = "Loan EMI schedules and fixed/recurring deposit ledgers"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, value_enum, default_value = "table", global = true)]
    format: OutputFormat,

    /// Ledger rows to print in table format (0 prints all)
    #[arg(long, default_value_t = 24, global = true)]
    rows: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute EMI and the amortization schedule of a loan
    Loan(LoanArgs),
    /// Fixed deposit maturity and growth trace
    Fd(FdArgs),
    /// Recurring deposit maturity and monthly ledger
    Rd(RdArgs),
    /// Compare two loans (B defaults to A at a 0.5% higher rate)
    Compare(CompareArgs),
    /// Tenure and interest saved by a monthly prepayment
    Savings(LoanTerms),
    /// Run every request in a JSON file
    Batch {
        /// Path to a JSON request or array of requests
        file: PathBuf,
    },
}

#[derive(Args)]
struct LoanTerms {
    /// Start from a category preset: home, car or personal (default home)
    #[arg(long)]
    preset: Option<LoanPreset>,

    /// Amount borrowed
    #[arg(long)]
    principal: Option<f64>,

    /// Annual interest rate in percent
    #[arg(long)]
    rate: Option<f64>,

    /// Tenure in months
    #[arg(long, conflicts_with = "years")]
    months: Option<u32>,

    /// Tenure in years (rounded to months)
    #[arg(long)]
    years: Option<f64>,

    /// Extra payment added to every installment
    #[arg(long, default_value_t = 0.0)]
    extra: f64,

    /// First installment month, YYYY-MM (default: this month)
    #[arg(long)]
    start: Option<YearMonth>,
}

impl LoanTerms {
    fn to_input(&self) -> LoanInput {
        let base = self.preset.unwrap_or_default().input();
        let principal = self.principal.unwrap_or(base.principal);
        let rate = self.rate.unwrap_or(base.annual_rate_percent);

        let mut input = match (self.months, self.years) {
            (Some(months), _) => LoanInput::new(principal, rate, months),
            (None, Some(years)) => LoanInput::from_years(principal, rate, years),
            (None, None) => LoanInput::new(principal, rate, base.months),
        };
        input.extra_monthly_payment = self.extra;
        input.start_period = self.start;
        input
    }
}

#[derive(Args)]
struct LoanArgs {
    #[command(flatten)]
    terms: LoanTerms,

    /// Also write the full schedule to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(Args)]
struct CompareArgs {
    #[command(flatten)]
    terms: LoanTerms,

    /// Principal of loan B (default: same as A)
    #[arg(long)]
    principal_b: Option<f64>,

    /// Annual rate of loan B in percent (default: A + 0.5)
    #[arg(long)]
    rate_b: Option<f64>,

    /// Tenure of loan B in months (default: same as A)
    #[arg(long)]
    months_b: Option<u32>,
}

#[derive(Args)]
struct FdArgs {
    #[arg(long, default_value_t = 100_000.0)]
    principal: f64,

    #[arg(long, default_value_t = 6.5)]
    rate: f64,

    #[arg(long, default_value_t = 5.0)]
    years: f64,

    /// 1, 2, 4, 12 or annually/semi-annually/quarterly/monthly
    #[arg(long, default_value = "1")]
    compounding: Compounding,

    /// Also write the growth trace to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(Args)]
struct RdArgs {
    #[arg(long, default_value_t = 2_000.0)]
    deposit: f64,

    #[arg(long, default_value_t = 6.5)]
    rate: f64,

    #[arg(long, default_value_t = 5.0)]
    years: f64,

    /// Also write the ledger to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let rows = if cli.rows == 0 { usize::MAX } else { cli.rows };

    match cli.command {
        Commands::Loan(args) => {
            let input = args.terms.to_input();
            let result = compute_loan_schedule(&input).context("Loan calculation failed")?;

            if let Some(path) = &args.csv {
                let file = create_file(path)?;
                export::write_loan_schedule(file, &result)?;
                eprintln!("Schedule written to: {}", path.display());
            }

            match cli.format {
                OutputFormat::Table => print_loan(&input, &result, rows),
                OutputFormat::Json => print_json(&result)?,
                OutputFormat::Csv => export::write_loan_schedule(io::stdout().lock(), &result)?,
            }
        }
        Commands::Fd(args) => {
            let input =
                FdInput::new(args.principal, args.rate, args.years).compounded(args.compounding);
            let result = compute_fd(&input).context("FD calculation failed")?;

            if let Some(path) = &args.csv {
                let file = create_file(path)?;
                export::write_fd_trace(file, &result)?;
                eprintln!("Growth trace written to: {}", path.display());
            }

            match cli.format {
                OutputFormat::Table => print_fd(&input, &result, rows),
                OutputFormat::Json => print_json(&result)?,
                OutputFormat::Csv => export::write_fd_trace(io::stdout().lock(), &result)?,
            }
        }
        Commands::Rd(args) => {
            let input = RdInput::new(args.deposit, args.rate, args.years);
            let result = compute_rd(&input).context("RD calculation failed")?;

            if let Some(path) = &args.csv {
                let file = create_file(path)?;
                export::write_rd_ledger(file, &result)?;
                eprintln!("Ledger written to: {}", path.display());
            }

            match cli.format {
                OutputFormat::Table => print_rd(&input, &result, rows),
                OutputFormat::Json => print_json(&result)?,
                OutputFormat::Csv => export::write_rd_ledger(io::stdout().lock(), &result)?,
            }
        }
        Commands::Compare(args) => {
            let loan_a = args.terms.to_input();
            let loan_b = LoanInput {
                principal: args.principal_b.unwrap_or(loan_a.principal),
                annual_rate_percent: args
                    .rate_b
                    .unwrap_or(loan_a.annual_rate_percent + COMPARISON_RATE_SPREAD),
                months: args.months_b.unwrap_or(loan_a.months),
                extra_monthly_payment: 0.0,
                start_period: loan_a.start_period,
            };
            let comparison = compare_loans(&loan_a, &loan_b).context("Loan comparison failed")?;

            match cli.format {
                OutputFormat::Table => print_comparison(&comparison),
                OutputFormat::Json => print_json(&comparison)?,
                OutputFormat::Csv => bail!(LEDGER_ONLY),
            }
        }
        Commands::Savings(terms) => {
            let input = terms.to_input();
            let savings = prepayment_savings(&input).context("Prepayment calculation failed")?;

            match cli.format {
                OutputFormat::Table => print_savings(&input, &savings),
                OutputFormat::Json => print_json(&savings)?,
                OutputFormat::Csv => bail!(LEDGER_ONLY),
            }
        }
        Commands::Batch { file } => {
            let requests = load_requests(&file)
                .with_context(|| format!("Unable to load requests from {}", file.display()))?;
            let entries = run_batch(&requests);

            match cli.format {
                OutputFormat::Table => print_batch(&entries),
                OutputFormat::Json => print_json(&entries)?,
                OutputFormat::Csv => bail!(LEDGER_ONLY),
            }
        }
    }

    Ok(())
}

fn create_file(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("Unable to create {}", path.display()))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_more(total: usize, shown: usize) {
    if total > shown {
        println!("... ({} more months)", total - shown);
    }
}

fn print_loan(input: &LoanInput, result: &LoanResult, rows: usize) {
    println!("Loan Summary");
    println!("============\n");
    println!("  Principal:            {:.2}", input.principal);
    println!("  Annual Rate:          {}%", input.annual_rate_percent);
    println!("  Tenure:               {} months", input.months);
    println!("  EMI:                  {:.2}", result.emi);
    println!("  Monthly Payment:      {:.2}", result.monthly_payment);
    println!("  Months (actual):      {}", result.actual_months);
    println!("  Total Interest:       {:.2}", result.total_interest);
    println!("  Total Payment:        {:.2}", result.total_paid);
    if let Some(period) = result.payoff_period() {
        println!("  Payoff Month:         {}", period);
    }
    if result.final_balance() > SETTLED_BALANCE {
        println!(
            "  Outstanding after {} months: {:.2}",
            result.actual_months,
            result.final_balance()
        );
    }
    println!();

    println!(
        "{:>5} {:>8} {:>14} {:>12} {:>12} {:>12} {:>14}",
        "Month", "Date", "Beginning", "Payment", "Principal", "Interest", "Ending"
    );
    println!("{}", "-".repeat(83));

    for row in result.schedule.iter().take(rows) {
        println!(
            "{:>5} {:>8} {:>14.2} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
            row.period_index,
            row.period.to_string(),
            row.beginning_balance,
            row.payment,
            row.principal_component,
            row.interest_component,
            row.ending_balance,
        );
    }
    print_more(result.schedule.len(), rows);
}

fn print_fd(input: &FdInput, result: &FdResult, rows: usize) {
    println!("Fixed Deposit Summary");
    println!("=====================\n");
    println!("  Principal:            {:.2}", input.principal);
    println!("  Annual Rate:          {}%", input.annual_rate_percent);
    println!("  Tenure:               {} years ({} months)", result.years, result.total_months);
    println!("  Compounding:          {}", result.compounding);
    println!("  Maturity Value:       {:.2}", result.maturity);
    println!("  Total Interest:       {:.2}", result.total_interest);
    println!();

    println!("Growth trace (approximate, for charting)");
    println!("{:>5} {:>14} {:>16}", "Month", "Balance", "Interest Accrued");
    println!("{}", "-".repeat(37));
    for row in result.schedule.iter().take(rows) {
        println!("{:>5} {:>14.2} {:>16.2}", row.month, row.balance, row.interest_accrued);
    }
    print_more(result.schedule.len(), rows);
}

fn print_rd(input: &RdInput, result: &RdResult, rows: usize) {
    println!("Recurring Deposit Summary");
    println!("=========================\n");
    println!("  Monthly Deposit:      {:.2}", input.monthly_deposit);
    println!("  Annual Rate:          {}%", input.annual_rate_percent);
    println!("  Tenure:               {} months", result.total_months);
    println!("  Total Deposited:      {:.2}", result.total_principal);
    println!("  Maturity Value:       {:.2}", result.maturity);
    println!("  Total Interest:       {:.2}", result.total_interest);
    println!();

    println!("{:>5} {:>12} {:>12} {:>14}", "Month", "Deposit", "Interest", "Balance");
    println!("{}", "-".repeat(46));
    for row in result.schedule.iter().take(rows) {
        println!(
            "{:>5} {:>12.2} {:>12.2} {:>14.2}",
            row.month, row.deposit, row.interest, row.balance
        );
    }
    print_more(result.schedule.len(), rows);
}

fn print_loan_brief(label: &str, result: &LoanResult) {
    println!("{}", label);
    println!("  EMI:                  {:.2}", result.emi);
    println!("  Total Interest:       {:.2}", result.total_interest);
    println!("  Total Payment:        {:.2}", result.total_paid);
}

fn signed(amount: f64) -> String {
    if amount > 0.0 {
        format!("+{:.2}", amount)
    } else {
        format!("{:.2}", amount)
    }
}

fn print_comparison(comparison: &LoanComparison) {
    print_loan_brief("Loan A", &comparison.loan_a);
    print_loan_brief("Loan B", &comparison.loan_b);
    println!("Difference (A - B)");
    println!("  EMI:                  {}", signed(comparison.emi_difference));
    println!("  Total Interest:       {}", signed(comparison.interest_difference));
    println!("  Total Payment:        {}", signed(comparison.total_paid_difference));
}

fn print_savings(input: &LoanInput, savings: &PrepaymentSavings) {
    println!("Prepayment of {:.2} per month", input.extra_monthly_payment);
    println!("  Months without prepayment: {}", savings.without_extra.actual_months);
    println!("  Months with prepayment:    {}", savings.with_extra.actual_months);
    println!("  Months saved:              {}", savings.months_saved);
    println!("  Interest saved:            {:.2}", savings.interest_saved);
}

fn print_batch(entries: &[BatchEntry]) {
    println!("{:>5} {:>8}  {}", "#", "Kind", "Result");
    println!("{}", "-".repeat(60));
    for entry in entries {
        let summary = match (&entry.outcome, &entry.error) {
            (Some(CalculationOutcome::Loan(r)), _) => {
                format!(
                    "EMI {:.2}, {} months, interest {:.2}",
                    r.emi, r.actual_months, r.total_interest
                )
            }
            (Some(CalculationOutcome::Fd(r)), _) => {
                format!("maturity {:.2}, interest {:.2}", r.maturity, r.total_interest)
            }
            (Some(CalculationOutcome::Rd(r)), _) => {
                format!("maturity {:.2}, deposited {:.2}", r.maturity, r.total_principal)
            }
            (Some(CalculationOutcome::Compare(c)), _) => {
                format!(
                    "EMI diff {}, interest diff {}",
                    signed(c.emi_difference),
                    signed(c.interest_difference)
                )
            }
            (None, Some(error)) => format!("error: {}", error),
            (None, None) => String::new(),
        };
        println!("{:>5} {:>8}  {}", entry.index, entry.kind, summary);
    }
}
