//! Report structure and text rendering.
//!
//! This is the only place that decides how results look; the commands
//! build an `ActivityReport` and print whatever comes back from here.

use crate::analyzer::{ActivitySummary, AnalysisResult};
use crate::explorer::TransactionRecord;
use crate::utils::config::{REPORT_VERSION, TOKEN_SYMBOL};
use crate::utils::error::ExplorerError;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Analysis report for one address
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityReport {
    /// Schema version for compatibility checking
    pub version: String,

    pub address: String,

    /// Display unit of the token totals
    pub token: String,

    pub total_transactions: usize,
    pub successful_transactions: usize,
    pub unique_days: usize,
    pub unique_weeks: usize,
    pub unique_months: usize,
    pub unique_contracts: usize,
    pub total_volume_eth: f64,
    pub total_gas_fees_eth: f64,

    /// Fiat totals, absent when no rate could be fetched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiat: Option<FiatTotals>,

    /// Fiat currency that was requested
    pub fiat_currency: String,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// Fiat-denominated totals and the rate they were computed with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiatTotals {
    pub rate: f64,
    pub total_volume: f64,
    pub total_gas_fees: f64,
}

impl ActivityReport {
    /// Report for a priced analysis
    pub fn from_result(
        address: impl Into<String>,
        result: &AnalysisResult,
        fiat_currency: impl Into<String>,
        fiat_rate: f64,
    ) -> Self {
        Self {
            version: REPORT_VERSION.to_string(),
            address: address.into(),
            token: TOKEN_SYMBOL.to_string(),
            total_transactions: result.total_transactions,
            successful_transactions: result.successful_transactions,
            unique_days: result.unique_days,
            unique_weeks: result.unique_weeks,
            unique_months: result.unique_months,
            unique_contracts: result.unique_contracts,
            total_volume_eth: result.total_volume_eth,
            total_gas_fees_eth: result.total_gas_fees_eth,
            fiat: Some(FiatTotals {
                rate: fiat_rate,
                total_volume: result.total_volume_fiat,
                total_gas_fees: result.total_gas_fees_fiat,
            }),
            fiat_currency: fiat_currency.into(),
            generated_at: Utc::now().to_rfc3339(),
        }
    }

    /// Report with token totals only
    pub fn unpriced(
        address: impl Into<String>,
        summary: &ActivitySummary,
        fiat_currency: impl Into<String>,
    ) -> Self {
        Self {
            version: REPORT_VERSION.to_string(),
            address: address.into(),
            token: TOKEN_SYMBOL.to_string(),
            total_transactions: summary.total_transactions,
            successful_transactions: summary.successful_transactions,
            unique_days: summary.unique_days,
            unique_weeks: summary.unique_weeks,
            unique_months: summary.unique_months,
            unique_contracts: summary.unique_contracts,
            total_volume_eth: summary.total_volume_eth(),
            total_gas_fees_eth: summary.total_gas_fees_eth(),
            fiat: None,
            fiat_currency: fiat_currency.into(),
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Render the analysis report as text
pub fn format_report(report: &ActivityReport) -> String {
    let mut lines = Vec::new();
    let token = &report.token;
    let currency = &report.fiat_currency;

    lines.push(format!("The wallet address is: {}", report.address));
    lines.push(format!("Total number of transactions: {}", report.total_transactions));
    lines.push(format!(
        "Number of successful transactions: {}",
        report.successful_transactions
    ));
    lines.push(format!(
        "Number of unique successful transaction days: {}",
        report.unique_days
    ));
    lines.push(format!(
        "Number of unique successful transaction weeks: {}",
        report.unique_weeks
    ));
    lines.push(format!(
        "Number of unique successful transaction months: {}",
        report.unique_months
    ));
    lines.push(format!(
        "Number of unique contracts interacted with: {}",
        report.unique_contracts
    ));
    lines.push(format!("Total volume in {}: {}", token, report.total_volume_eth));
    lines.push(format!("Total gas fees in {}: {}", token, report.total_gas_fees_eth));

    match &report.fiat {
        Some(fiat) => {
            lines.push(format!(
                "Total volume in {}: {}",
                currency,
                format_fiat(fiat.total_volume, currency)
            ));
            lines.push(format!(
                "Total gas fees in {}: {}",
                currency,
                format_fiat(fiat.total_gas_fees, currency)
            ));
        }
        None => lines.push(format!(
            "{} to {} rate not available. Cannot calculate the total volume and gas fees in {}.",
            token, currency, currency
        )),
    }

    lines.join("\n")
}

/// Render a failed transaction fetch with its raw status and reason
pub fn format_fetch_error(error: &ExplorerError) -> String {
    match error.http_status() {
        Some((status, reason)) => format!(
            "Failed to retrieve transactions: HTTP {} {}",
            status, reason
        ),
        None => format!("Failed to retrieve transactions: {}", error),
    }
}

/// Shown on the display path when the balance or the price is missing
pub const BALANCE_UNAVAILABLE: &str = "Unable to retrieve balance information.";

/// Render an address balance and its fiat value
pub fn format_balance(address: &str, balance_eth: f64, currency: &str, balance_fiat: f64) -> String {
    [
        format!("The wallet address is: {}", address),
        format!("Balance: {} {}", balance_eth, TOKEN_SYMBOL),
        format!(
            "Equivalent {} Balance: {}",
            currency,
            format_fiat(balance_fiat, currency)
        ),
    ]
    .join("\n")
}

/// One line of the `--list` transaction listing
pub fn format_transaction_line(tx: &TransactionRecord, date: Option<&str>, fee_eth: Option<f64>) -> String {
    let status = if tx.is_successful() { "ok" } else { "failed" };
    let kind = if tx.is_contract_interaction() {
        "contract"
    } else {
        "transfer"
    };
    let fee = fee_eth
        .map(|f| format!("{} {}", f, TOKEN_SYMBOL))
        .unwrap_or_else(|| "-".to_string());

    format!(
        "  {} {:<10} {:<6} {:<8} to {} fee {}",
        tx.label(),
        date.unwrap_or("-"),
        status,
        kind,
        tx.to.as_deref().unwrap_or("-"),
        fee
    )
}

/// Two-decimal amount with thousands separators, prefixed with the
/// currency sign where one is known
pub fn format_fiat(amount: f64, currency: &str) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match currency_sign(currency) {
        Some(symbol) => format!("{}{}{}.{}", sign, symbol, grouped, frac_part),
        None => format!("{}{}.{} {}", sign, grouped, frac_part, currency),
    }
}

fn currency_sign(currency: &str) -> Option<&'static str> {
    match currency.to_uppercase().as_str() {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        _ => None,
    }
}
