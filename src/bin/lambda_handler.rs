//! AWS Lambda handler for the calculator backends
//!
//! Accepts calculator inputs as JSON and returns summary values, the monthly
//! schedule, and a prebuilt chart series. The `calculator` field selects the
//! projection; the remaining fields are that calculator's inputs, with
//! absent fields defaulting to zero as the web forms treat blank inputs.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use fincalc_engine::format::to_words;
use fincalc_engine::projection::{ExpenseMonthRow, InvestmentMonthRow};
use fincalc_engine::{
    expense_chart, investment_chart, lump_sum_maturity, project_expenses, project_investment,
    ChartSeries, ExpenseInput, InvestmentInput,
};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use log::info;
use serde::{Deserialize, Serialize};

/// Input for the projection, dispatched on the `calculator` tag
#[derive(Debug, Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
enum CalculatorRequest {
    /// Expense drawdown projection
    Expense(ExpenseInput),
    /// SIP accumulation projection
    Investment(InvestmentInput),
    /// Closed-form lump-sum maturity
    LumpSum(LumpSumRequest),
}

/// Inputs for the lump-sum-only calculation
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LumpSumRequest {
    /// Upfront principal
    principal: f64,

    /// Annual interest rate in percent
    annual_rate_pct: f64,

    /// Horizon in whole years
    years: u32,
}

/// Output for the expense drawdown projection
#[derive(Debug, Serialize)]
struct ExpenseResponse {
    final_balance: f64,
    months_to_zero: u32,
    exhausted_in_years: u32,
    exhausted_in_months: u32,
    depleted: bool,
    rows: Vec<ExpenseMonthRow>,
    chart: ChartSeries,
    execution_time_ms: u64,
}

/// Output for the SIP accumulation projection
#[derive(Debug, Serialize)]
struct InvestmentResponse {
    total_invested: f64,
    total_return: f64,
    total_amount: f64,
    total_amount_in_words: String,
    rows: Vec<InvestmentMonthRow>,
    chart: ChartSeries,
    execution_time_ms: u64,
}

/// Output for the lump-sum maturity calculation
#[derive(Debug, Serialize)]
struct LumpSumResponse {
    maturity_amount: f64,
    maturity_amount_in_words: String,
    execution_time_ms: u64,
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(format!(r#"{{"error":"{}"}}"#, message)))
        .unwrap()
}

fn json_response<T: Serialize>(body: &T) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    // Parse request body
    let body = event.body();
    let body_str = match body {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: CalculatorRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    match request {
        CalculatorRequest::Expense(input) => {
            info!(
                "expense projection: {} years at {}% CAGR",
                input.total_years, input.annual_growth_pct
            );
            let projection = match project_expenses(&input) {
                Ok(p) => p,
                Err(e) => {
                    return Ok(error_response(400, &e.to_string()));
                }
            };

            let chart = expense_chart(&projection);
            let (exhausted_in_years, exhausted_in_months) = projection.depletion_split();
            let response = ExpenseResponse {
                final_balance: projection.final_balance,
                months_to_zero: projection.months_to_zero,
                exhausted_in_years,
                exhausted_in_months,
                depleted: projection.depleted(),
                rows: projection.rows,
                chart,
                execution_time_ms: start.elapsed().as_millis() as u64,
            };
            Ok(json_response(&response))
        }
        CalculatorRequest::Investment(input) => {
            info!(
                "investment projection: {} years at {}% interest",
                input.time_years, input.annual_interest_pct
            );
            let projection = project_investment(&input);

            let chart = investment_chart(&projection, input.time_years);
            let response = InvestmentResponse {
                total_invested: projection.total_invested,
                total_return: projection.total_return,
                total_amount: projection.total_amount,
                total_amount_in_words: to_words(projection.total_amount.max(0.0) as u64),
                rows: projection.rows,
                chart,
                execution_time_ms: start.elapsed().as_millis() as u64,
            };
            Ok(json_response(&response))
        }
        CalculatorRequest::LumpSum(input) => {
            let maturity = lump_sum_maturity(input.principal, input.annual_rate_pct, input.years);
            let response = LumpSumResponse {
                maturity_amount: maturity,
                maturity_amount_in_words: to_words(maturity.max(0.0).round() as u64),
                execution_time_ms: start.elapsed().as_millis() as u64,
            };
            Ok(json_response(&response))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
