//! FinCalc Engine - Projection core for a pair of personal-finance calculators
//!
//! This library provides:
//! - Retirement expense drawdown projection (monthly withdrawal, yearly
//!   escalation, monthly compounding, early exit on depletion)
//! - SIP accumulation projection (monthly contribution, yearly step-up,
//!   flat monthly interest) and closed-form lump-sum maturity
//! - Annual-to-monthly rate conversions (both of the calculators' conventions)
//! - Display formatting: digit grouping and number-to-words
//! - Chart series reshaping for frontend rendering

pub mod format;
pub mod projection;
pub mod rates;

// Re-export commonly used types
pub use projection::{
    expense_chart, investment_chart, lump_sum_maturity, project_expenses, project_investment,
    ChartSeries, ExpenseInput, ExpenseProjection, InvestmentInput, InvestmentProjection,
};
pub use rates::{monthly_rate_flat, monthly_rate_from_annual, RateError};
