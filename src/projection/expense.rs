//! Expense drawdown projection
//!
//! Simulates a corpus depleting under monthly withdrawals that escalate
//! yearly, while the remaining balance keeps compounding monthly.

use serde::{Deserialize, Serialize};

use crate::rates::{monthly_rate_from_annual, RateError};

/// Inputs for a drawdown projection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpenseInput {
    /// Starting corpus
    pub initial_amount: f64,

    /// Withdrawal taken each month, before escalation
    pub monthly_expense: f64,

    /// Yearly escalation of the monthly withdrawal, in percent
    pub expense_increment_pct: f64,

    /// Projection horizon in years; 0 means no months are simulated
    pub total_years: u32,

    /// Annual CAGR applied to the balance, in percent. Converted to a
    /// monthly rate geometrically, unlike the SIP engine's flat division.
    pub annual_growth_pct: f64,
}

/// One month of drawdown output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseMonthRow {
    /// Projection month (1-indexed)
    pub month: u32,

    /// Growth credited this month, computed on the pre-withdrawal balance
    pub growth: f64,

    /// Amount withdrawn this month
    pub withdrawal: f64,

    /// Balance after growth and withdrawal, clamped at zero
    pub balance: f64,
}

/// Complete drawdown projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseProjection {
    /// One row per month actually simulated; shorter than the requested
    /// horizon when the corpus depletes early
    pub rows: Vec<ExpenseMonthRow>,

    /// Closing balance: zero when depleted, otherwise the unclamped balance
    /// at the end of the horizon
    pub final_balance: f64,

    /// Month (1-indexed) at which the balance first reached zero, or the
    /// full horizon if it never did
    pub months_to_zero: u32,
}

impl ExpenseProjection {
    /// Whether the corpus ran out before the end of the horizon
    pub fn depleted(&self) -> bool {
        self.final_balance <= 0.0 && !self.rows.is_empty()
    }

    /// Split `months_to_zero` into whole years and leftover months, as the
    /// calculator's "Amount Exhausted In" line displays it
    pub fn depletion_split(&self) -> (u32, u32) {
        (self.months_to_zero / 12, self.months_to_zero % 12)
    }
}

/// Run the drawdown projection.
///
/// Each month the balance grows first, then the withdrawal is subtracted;
/// that order is part of the contract. The withdrawal steps up by
/// `expense_increment_pct` after every completed year. Depletion (balance
/// at or below zero) ends the simulation at that month.
pub fn project_expenses(input: &ExpenseInput) -> Result<ExpenseProjection, RateError> {
    let monthly_rate = monthly_rate_from_annual(input.annual_growth_pct)?;
    let horizon = input.total_years * 12;

    let mut rows = Vec::with_capacity(horizon as usize);
    let mut balance = input.initial_amount;
    let mut expense = input.monthly_expense;

    for month in 1..=horizon {
        let growth = balance * monthly_rate;
        balance += growth;
        balance -= expense;

        rows.push(ExpenseMonthRow {
            month,
            growth,
            withdrawal: expense,
            balance: balance.max(0.0),
        });

        if balance <= 0.0 {
            return Ok(ExpenseProjection {
                rows,
                final_balance: 0.0,
                months_to_zero: month,
            });
        }

        if month % 12 == 0 {
            expense *= 1.0 + input.expense_increment_pct / 100.0;
        }
    }

    Ok(ExpenseProjection {
        rows,
        final_balance: balance,
        months_to_zero: horizon,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn demo_input() -> ExpenseInput {
        // The calculator's default demonstration parameters
        ExpenseInput {
            initial_amount: 10_000_000.0,
            monthly_expense: 50_000.0,
            expense_increment_pct: 10.0,
            total_years: 30,
            annual_growth_pct: 12.0,
        }
    }

    #[test]
    fn test_grow_then_withdraw_order() {
        let input = ExpenseInput {
            initial_amount: 1_000.0,
            monthly_expense: 100.0,
            expense_increment_pct: 0.0,
            total_years: 1,
            annual_growth_pct: 12.0,
        };
        let result = project_expenses(&input).unwrap();

        let rate = monthly_rate_from_annual(12.0).unwrap();
        let first = &result.rows[0];
        // Growth must be computed on the full pre-withdrawal balance
        assert_relative_eq!(first.growth, 1_000.0 * rate, epsilon = 1e-9);
        assert_relative_eq!(
            first.balance,
            1_000.0 * (1.0 + rate) - 100.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_depletion_exits_early() {
        let input = ExpenseInput {
            initial_amount: 1_000.0,
            monthly_expense: 400.0,
            expense_increment_pct: 0.0,
            total_years: 5,
            annual_growth_pct: 0.0,
        };
        let result = project_expenses(&input).unwrap();

        // 1000 -> 600 -> 200 -> -200: depleted in month 3
        assert_eq!(result.months_to_zero, 3);
        assert_eq!(result.rows.len(), 3);
        assert_eq!(result.final_balance, 0.0);
        assert_eq!(result.rows[2].balance, 0.0);
        assert!(result.rows.iter().take(2).all(|r| r.balance > 0.0));
        assert!(result.depleted());
    }

    #[test]
    fn test_exact_zero_counts_as_depleted() {
        let input = ExpenseInput {
            initial_amount: 1_200.0,
            monthly_expense: 400.0,
            expense_increment_pct: 0.0,
            total_years: 1,
            annual_growth_pct: 0.0,
        };
        let result = project_expenses(&input).unwrap();

        assert_eq!(result.months_to_zero, 3);
        assert_eq!(result.final_balance, 0.0);
    }

    #[test]
    fn test_no_withdrawals_never_depletes() {
        let input = ExpenseInput {
            initial_amount: 500_000.0,
            monthly_expense: 0.0,
            expense_increment_pct: 10.0,
            total_years: 10,
            annual_growth_pct: 8.0,
        };
        let result = project_expenses(&input).unwrap();

        assert_eq!(result.months_to_zero, 120);
        assert_eq!(result.rows.len(), 120);
        assert!(result.final_balance > 500_000.0);

        // Balance never decreases month over month
        let mut prev = input.initial_amount;
        for row in &result.rows {
            assert!(row.balance >= prev);
            prev = row.balance;
        }
    }

    #[test]
    fn test_yearly_escalation_applies_after_each_completed_year() {
        let input = ExpenseInput {
            initial_amount: 10_000_000.0,
            monthly_expense: 1_000.0,
            expense_increment_pct: 10.0,
            total_years: 2,
            annual_growth_pct: 0.0,
        };
        let result = project_expenses(&input).unwrap();

        assert_relative_eq!(result.rows[11].withdrawal, 1_000.0, epsilon = 1e-9);
        assert_relative_eq!(result.rows[12].withdrawal, 1_100.0, epsilon = 1e-9);
        assert_relative_eq!(result.rows[23].withdrawal, 1_100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_horizon_simulates_nothing() {
        let input = ExpenseInput {
            initial_amount: 1_000.0,
            total_years: 0,
            ..ExpenseInput::default()
        };
        let result = project_expenses(&input).unwrap();

        assert!(result.rows.is_empty());
        assert_eq!(result.months_to_zero, 0);
        assert_eq!(result.final_balance, 1_000.0);
        assert!(!result.depleted());
    }

    #[test]
    fn test_growth_rate_below_minus_hundred_is_domain_error() {
        let input = ExpenseInput {
            annual_growth_pct: -100.0,
            total_years: 1,
            ..ExpenseInput::default()
        };
        assert!(project_expenses(&input).is_err());
    }

    #[test]
    fn test_default_demo_parameters_are_unsustainable() {
        let result = project_expenses(&demo_input()).unwrap();

        assert!(result.months_to_zero < 360);
        assert_eq!(result.final_balance, 0.0);
        assert_eq!(result.rows.len() as u32, result.months_to_zero);

        let (years, months) = result.depletion_split();
        assert_eq!(years * 12 + months, result.months_to_zero);
    }
}
