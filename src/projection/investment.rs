//! SIP accumulation and lump-sum maturity projections
//!
//! The monthly rate here is the annual rate divided by twelve, a deliberate
//! difference from the drawdown engine's geometric conversion. Both
//! conventions are kept because the calculators have always disagreed on
//! this point and their outputs are the contract.

use serde::{Deserialize, Serialize};

use crate::rates::monthly_rate_flat;

/// Inputs for a SIP accumulation projection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InvestmentInput {
    /// Lump sum invested up front, before any monthly contribution
    pub initial_lump_sum: f64,

    /// Contribution made every month, before escalation
    pub monthly_contribution: f64,

    /// Yearly escalation of the monthly contribution, in percent
    pub yearly_increment_pct: f64,

    /// Annual interest rate in percent, applied monthly as rate/12
    pub annual_interest_pct: f64,

    /// Accumulation horizon in years; 0 means nothing is simulated
    pub time_years: u32,
}

/// One month of accumulation output; monetary fields are recorded rounded
/// to the nearest whole unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentMonthRow {
    /// Projection month (1-indexed)
    pub month: u32,

    /// Running sum of contributions made so far (the lump sum is not
    /// counted as a contribution)
    pub invested: f64,

    /// Accumulated value minus contributions made so far
    pub returns: f64,

    /// Accumulated value including the lump sum
    pub total: f64,
}

/// Complete SIP accumulation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentProjection {
    /// One row per simulated month; always the full horizon
    pub rows: Vec<InvestmentMonthRow>,

    /// Sum of all contributions made, from the final row
    pub total_invested: f64,

    /// Accumulated value minus contributions, from the final row
    pub total_return: f64,

    /// Accumulated value at maturity, from the final row
    pub total_amount: f64,
}

/// Maturity value of a single upfront principal under simple annual
/// compounding: `principal * (1 + rate/100)^years`. No monthly stepping.
pub fn lump_sum_maturity(principal: f64, annual_rate_pct: f64, years: u32) -> f64 {
    principal * (1.0 + annual_rate_pct / 100.0).powi(years as i32)
}

/// Run the SIP accumulation projection.
///
/// Each month the contribution is added and the combined balance grows by
/// the flat monthly rate. The contribution steps up by
/// `yearly_increment_pct` whenever a new contribution year is about to
/// start. The loop always runs the full horizon; there is no depletion.
///
/// A zero horizon yields empty rows and all-zero summary values. A zero
/// interest rate is a legal degenerate rate and the simulation runs
/// normally.
pub fn project_investment(input: &InvestmentInput) -> InvestmentProjection {
    let horizon = input.time_years * 12;
    if horizon == 0 {
        return InvestmentProjection {
            rows: Vec::new(),
            total_invested: 0.0,
            total_return: 0.0,
            total_amount: 0.0,
        };
    }

    let monthly_rate = monthly_rate_flat(input.annual_interest_pct);
    let mut rows = Vec::with_capacity(horizon as usize);
    let mut total = input.initial_lump_sum;
    let mut contribution = input.monthly_contribution;
    let mut invested = 0.0;

    for month in 1..=horizon {
        total = (total + contribution) * (1.0 + monthly_rate);
        invested += contribution;

        rows.push(InvestmentMonthRow {
            month,
            invested: invested.round(),
            returns: (total - invested).round(),
            total: total.round(),
        });

        // Step the contribution up when a whole number of years remains,
        // i.e. the next month opens a new contribution year
        let remaining = horizon - month;
        if remaining > 0 && remaining % 12 == 0 {
            contribution *= 1.0 + input.yearly_increment_pct / 100.0;
        }
    }

    let total_invested = rows.last().map(|r| r.invested).unwrap_or(0.0);
    let total_return = rows.last().map(|r| r.returns).unwrap_or(0.0);
    let total_amount = rows.last().map(|r| r.total).unwrap_or(0.0);

    InvestmentProjection {
        rows,
        total_invested,
        total_return,
        total_amount,
    }
}
