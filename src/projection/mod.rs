//! Projection engines for the two calculators, plus chart reshaping

mod expense;
mod investment;
mod series;

pub use expense::{project_expenses, ExpenseInput, ExpenseMonthRow, ExpenseProjection};
pub use investment::{
    lump_sum_maturity, project_investment, InvestmentInput, InvestmentMonthRow,
    InvestmentProjection,
};
pub use series::{expense_chart, investment_chart, ChartDataset, ChartSeries};
