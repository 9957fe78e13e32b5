//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Fetches one page of transactions from the explorer
//! 2. Normalizes the fetch result to a record list
//! 3. Fetches the ETH fiat rate
//! 4. Aggregates the records
//! 5. Prints the report

use crate::analyzer::{
    analyze_transactions, summarize_transactions, timestamp_to_date, transaction_fee_eth,
};
use crate::commands::models::AnalyzeArgs;
use crate::commands::utils::{validate_address, validate_fiat, validate_url};
use crate::explorer::{normalize_transactions, ExplorerClient, TransactionRecord, TxListOutcome};
use crate::output::{
    format_fetch_error, format_report, format_transaction_line, report_to_string, ActivityReport,
};
use crate::price::PriceClient;
use crate::utils::config::MAX_OFFSET;
use crate::utils::error::AnalysisError;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Client construction failures
/// * Malformed transaction data (unparseable numbers, missing fields)
///
/// A failed transaction fetch is not an error: it is printed with its
/// status code and reason and the analysis runs over an empty list.
pub fn execute_analyze(args: AnalyzeArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Starting analysis for address: {}", args.address);
    info!("Explorer endpoint: {}", args.explorer_url);

    let explorer = ExplorerClient::new(&args.explorer_url, &args.api_key)
        .context("Failed to create explorer client")?;
    let outcome = fetch_transactions(&explorer, &args);

    if let Some(error) = &outcome.error {
        println!("{}", format_fetch_error(error));
    }
    debug!("Fetched {} transactions", outcome.records.len());

    if args.list_transactions {
        print_transactions(&outcome.records);
    }

    let prices = PriceClient::new(&args.price_url).context("Failed to create price client")?;
    let rate = prices.get_rate(&args.fiat);

    let report = build_report(&args.address, &outcome.records, &args.fiat, rate)
        .context("Failed to analyze transactions")?;

    if args.json {
        println!("{}", report_to_string(&report)?);
    } else {
        println!("{}", format_report(&report));
    }

    info!("Analysis completed in {:.2?}", start_time.elapsed());

    Ok(())
}

/// Aggregate records into a report, pricing it when a rate is known
///
/// **Public** - the I/O-free part of the analyze pipeline
pub fn build_report(
    address: &str,
    records: &[TransactionRecord],
    fiat_currency: &str,
    fiat_rate: Option<f64>,
) -> Result<ActivityReport, AnalysisError> {
    match fiat_rate {
        Some(rate) => {
            let result = analyze_transactions(records, rate)?;
            Ok(ActivityReport::from_result(address, &result, fiat_currency, rate))
        }
        None => {
            let summary = summarize_transactions(records)?;
            Ok(ActivityReport::unpriced(address, &summary, fiat_currency))
        }
    }
}

/// Fetch one txlist page and normalize it
///
/// **Private** - internal helper for execute_analyze
fn fetch_transactions(explorer: &ExplorerClient, args: &AnalyzeArgs) -> TxListOutcome {
    normalize_transactions(explorer.get_transaction_list(&args.query()))
}

/// Print one line per transaction
///
/// **Private** - internal helper for execute_analyze
fn print_transactions(records: &[TransactionRecord]) {
    println!("Transactions ({}):", records.len());

    for tx in records {
        let date = tx
            .timestamp
            .as_deref()
            .and_then(|raw| raw.parse::<i64>().ok())
            .and_then(|secs| timestamp_to_date(secs).ok())
            .map(|d| d.to_string());
        let fee = transaction_fee_eth(tx).ok();

        println!("{}", format_transaction_line(tx, date.as_deref(), fee));
    }

    println!();
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_analyze_args(args: &AnalyzeArgs) -> Result<()> {
    validate_url("Explorer", &args.explorer_url)?;
    validate_url("Price", &args.price_url)?;

    if args.api_key.is_empty() {
        anyhow::bail!("API key cannot be empty");
    }

    validate_address(&args.address)?;

    if args.start_block > args.end_block {
        anyhow::bail!(
            "Start block {} is after end block {}",
            args.start_block,
            args.end_block
        );
    }

    if args.page == 0 {
        anyhow::bail!("page must be greater than 0");
    }

    if args.offset == 0 {
        anyhow::bail!("offset must be greater than 0");
    }

    if args.offset > MAX_OFFSET {
        anyhow::bail!("offset is too large (max {})", MAX_OFFSET);
    }

    validate_fiat(&args.fiat)
}
