//! Chart series reshaping for external rendering
//!
//! The engine generates labeled series; the frontend just draws them. The
//! expense chart keeps full monthly resolution, while the investment chart
//! down-samples to the last month of each year. That sampling difference is
//! part of the contract.

use serde::{Deserialize, Serialize};

use super::expense::ExpenseProjection;
use super::investment::InvestmentProjection;

/// A named data series for chart rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartDataset {
    /// Display name of the series
    pub label: String,

    /// Data points, one per chart label
    pub data: Vec<f64>,
}

/// Labels plus one or more equally long data series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSeries {
    /// X-axis labels
    pub labels: Vec<String>,

    /// The data series to plot against the labels
    pub datasets: Vec<ChartDataset>,
}

fn month_label(month: u32) -> String {
    let years = (month - 1) / 12;
    let month_of_year = (month - 1) % 12 + 1;
    format!(
        "{} year{} {} month{}",
        years,
        if years == 1 { "" } else { "s" },
        month_of_year,
        if month_of_year == 1 { "" } else { "s" },
    )
}

/// Build the drawdown chart: one label per simulated month and three
/// monthly-resolution series (remaining balance, withdrawal, growth).
pub fn expense_chart(projection: &ExpenseProjection) -> ChartSeries {
    let labels = projection
        .rows
        .iter()
        .map(|row| month_label(row.month))
        .collect();

    ChartSeries {
        labels,
        datasets: vec![
            ChartDataset {
                label: "Remaining Amount".to_string(),
                data: projection.rows.iter().map(|r| r.balance).collect(),
            },
            ChartDataset {
                label: "Withdrawn Amount".to_string(),
                data: projection.rows.iter().map(|r| r.withdrawal).collect(),
            },
            ChartDataset {
                label: "Added Amount (CAGR)".to_string(),
                data: projection.rows.iter().map(|r| r.growth).collect(),
            },
        ],
    }
}

/// Build the SIP chart: one label per elapsed year, with the three series
/// sampled at every 12th monthly row (the last month of each year).
pub fn investment_chart(projection: &InvestmentProjection, years: u32) -> ChartSeries {
    let sampled: Vec<_> = projection
        .rows
        .iter()
        .filter(|row| row.month % 12 == 0)
        .take(years as usize)
        .collect();

    let labels = (1..=sampled.len() as u32)
        .map(|year| format!("Year {}", year))
        .collect();

    ChartSeries {
        labels,
        datasets: vec![
            ChartDataset {
                label: "Total Amount Invested".to_string(),
                data: sampled.iter().map(|r| r.invested).collect(),
            },
            ChartDataset {
                label: "Total Returns Accumulated".to_string(),
                data: sampled.iter().map(|r| r.returns).collect(),
            },
            ChartDataset {
                label: "Total Amount (Invested + Returns)".to_string(),
                data: sampled.iter().map(|r| r.total).collect(),
            },
        ],
    }
}
