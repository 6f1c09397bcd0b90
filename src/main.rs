//! FinCalc CLI
//!
//! Runs both calculators with the web forms' default parameters (override
//! via flags), prints the opening months of each schedule, and writes the
//! full schedules to CSV.

use anyhow::Context;
use clap::Parser;
use fincalc_engine::format::{group_digits, to_words};
use fincalc_engine::{
    expense_chart, investment_chart, lump_sum_maturity, project_expenses, project_investment,
    ExpenseInput, InvestmentInput,
};
use std::fs::File;
use std::io::Write;

#[derive(Parser, Debug)]
#[command(name = "fincalc", about = "SIP maturity and expense drawdown projections")]
struct Args {
    /// Starting corpus for the drawdown projection
    #[arg(long, default_value_t = 10_000_000.0)]
    initial_amount: f64,

    /// Monthly withdrawal for the drawdown projection
    #[arg(long, default_value_t = 50_000.0)]
    monthly_expense: f64,

    /// Yearly withdrawal escalation in percent
    #[arg(long, default_value_t = 10.0)]
    expense_increment: f64,

    /// Drawdown horizon in years
    #[arg(long, default_value_t = 30)]
    expense_years: u32,

    /// Annual CAGR on the drawdown corpus in percent
    #[arg(long, default_value_t = 12.0)]
    cagr: f64,

    /// Upfront lump sum for the SIP projection
    #[arg(long, default_value_t = 0.0)]
    lump_sum: f64,

    /// Monthly SIP contribution
    #[arg(long, default_value_t = 10_000.0)]
    monthly_investment: f64,

    /// Yearly contribution step-up in percent
    #[arg(long, default_value_t = 0.0)]
    yearly_increment: f64,

    /// Annual interest rate for the SIP projection in percent
    #[arg(long, default_value_t = 12.0)]
    interest_rate: f64,

    /// SIP horizon in years
    #[arg(long, default_value_t = 10)]
    investment_years: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    println!("FinCalc Engine v0.1.0");
    println!("=====================\n");

    // ---- Expense drawdown ----
    let expense_input = ExpenseInput {
        initial_amount: args.initial_amount,
        monthly_expense: args.monthly_expense,
        expense_increment_pct: args.expense_increment,
        total_years: args.expense_years,
        annual_growth_pct: args.cagr,
    };

    println!("Expense Drawdown:");
    println!("  Initial Amount: {}", group_digits(expense_input.initial_amount));
    println!("  Monthly Expense: {}", group_digits(expense_input.monthly_expense));
    println!("  Expense Increment: {}%/yr", expense_input.expense_increment_pct);
    println!("  Horizon: {} years at {}% CAGR", expense_input.total_years, expense_input.annual_growth_pct);
    println!();

    let expense = project_expenses(&expense_input).context("expense projection failed")?;

    println!("Drawdown Schedule ({} months):", expense.rows.len());
    println!("{:>5} {:>14} {:>14} {:>16}", "Month", "Growth", "Withdrawn", "Remaining");
    println!("{}", "-".repeat(52));
    for row in expense.rows.iter().take(24) {
        println!(
            "{:>5} {:>14.2} {:>14.2} {:>16.2}",
            row.month, row.growth, row.withdrawal, row.balance
        );
    }
    if expense.rows.len() > 24 {
        println!("... ({} more months)", expense.rows.len() - 24);
    }

    let csv_path = "expense_schedule.csv";
    let mut file = File::create(csv_path).context("unable to create expense CSV")?;
    writeln!(file, "Month,Growth,Withdrawn,Remaining")?;
    for row in &expense.rows {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2}",
            row.month, row.growth, row.withdrawal, row.balance
        )?;
    }
    println!("\nFull drawdown schedule written to: {}", csv_path);

    let (years, months) = expense.depletion_split();
    println!("\nDrawdown Summary:");
    if expense.depleted() {
        println!("  Amount Exhausted In: {} years and {} months", years, months);
    } else {
        println!("  Remaining After {} Years: {}", expense_input.total_years, group_digits(expense.final_balance));
    }
    let chart = expense_chart(&expense);
    println!("  Chart Points: {}", chart.labels.len());

    // ---- SIP accumulation ----
    let investment_input = InvestmentInput {
        initial_lump_sum: args.lump_sum,
        monthly_contribution: args.monthly_investment,
        yearly_increment_pct: args.yearly_increment,
        annual_interest_pct: args.interest_rate,
        time_years: args.investment_years,
    };

    println!("\nSIP Accumulation:");
    println!("  Lump Sum: {}", group_digits(investment_input.initial_lump_sum));
    println!("  Monthly Contribution: {}", group_digits(investment_input.monthly_contribution));
    println!("  Step-Up: {}%/yr", investment_input.yearly_increment_pct);
    println!("  Horizon: {} years at {}% interest", investment_input.time_years, investment_input.annual_interest_pct);
    println!();

    let investment = project_investment(&investment_input);

    println!("Accumulation Schedule ({} months):", investment.rows.len());
    println!("{:>5} {:>14} {:>14} {:>16}", "Month", "Invested", "Returns", "Total");
    println!("{}", "-".repeat(52));
    for row in investment.rows.iter().take(24) {
        println!(
            "{:>5} {:>14.0} {:>14.0} {:>16.0}",
            row.month, row.invested, row.returns, row.total
        );
    }
    if investment.rows.len() > 24 {
        println!("... ({} more months)", investment.rows.len() - 24);
    }

    let csv_path = "investment_schedule.csv";
    let mut file = File::create(csv_path).context("unable to create investment CSV")?;
    writeln!(file, "Month,Invested,Returns,Total")?;
    for row in &investment.rows {
        writeln!(
            file,
            "{},{:.0},{:.0},{:.0}",
            row.month, row.invested, row.returns, row.total
        )?;
    }
    println!("\nFull accumulation schedule written to: {}", csv_path);

    println!("\nSIP Summary:");
    println!("  Total Invested: {}", group_digits(investment.total_invested));
    println!("  Total Returns:  {}", group_digits(investment.total_return));
    println!("  Total Amount:   {}", group_digits(investment.total_amount));
    println!(
        "  In Words: {}",
        to_words(investment.total_amount.max(0.0) as u64)
    );
    let chart = investment_chart(&investment, investment_input.time_years);
    println!("  Chart Points: {}", chart.labels.len());

    // Lump-sum-only comparison for the same principal and horizon
    if investment_input.initial_lump_sum > 0.0 {
        let maturity = lump_sum_maturity(
            investment_input.initial_lump_sum,
            investment_input.annual_interest_pct,
            investment_input.time_years,
        );
        println!("  Lump Sum Alone Would Mature To: {}", group_digits(maturity));
    }

    Ok(())
}
