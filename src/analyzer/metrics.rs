//! Aggregate activity metrics over a transaction list.
//!
//! Only successful transactions (receipt status "1") contribute to volume,
//! gas fees and active periods. Contract interactions are counted over every
//! record regardless of status.

use super::fees::{required, transaction_fee_wei};
use super::periods::{parse_timestamp, ActivePeriods};
use crate::explorer::TransactionRecord;
use crate::utils::error::AnalysisError;
use crate::utils::units::{parse_wei, wei_to_eth};
use log::debug;
use std::collections::HashSet;

/// Token-denominated activity totals
///
/// **Public** - returned from summarize_transactions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivitySummary {
    /// All records, whatever their status
    pub total_transactions: usize,

    pub successful_transactions: usize,

    pub unique_days: usize,

    /// Distinct ISO `(year, week)` pairs
    pub unique_weeks: usize,

    /// Distinct `(year, month)` pairs
    pub unique_months: usize,

    /// Distinct `to` addresses of non-"0x" input transactions
    pub unique_contracts: usize,

    pub total_volume_wei: u128,

    pub total_gas_fees_wei: u128,
}

impl ActivitySummary {
    pub fn total_volume_eth(&self) -> f64 {
        wei_to_eth(self.total_volume_wei)
    }

    pub fn total_gas_fees_eth(&self) -> f64 {
        wei_to_eth(self.total_gas_fees_wei)
    }

    /// Attach fiat totals at the given rate (fiat per ETH)
    pub fn priced(&self, fiat_rate: f64) -> AnalysisResult {
        let total_volume_eth = self.total_volume_eth();
        let total_gas_fees_eth = self.total_gas_fees_eth();

        AnalysisResult {
            total_transactions: self.total_transactions,
            successful_transactions: self.successful_transactions,
            unique_days: self.unique_days,
            unique_weeks: self.unique_weeks,
            unique_months: self.unique_months,
            unique_contracts: self.unique_contracts,
            total_volume_eth,
            total_gas_fees_eth,
            total_volume_fiat: total_volume_eth * fiat_rate,
            total_gas_fees_fiat: total_gas_fees_eth * fiat_rate,
        }
    }
}

/// Complete analysis snapshot in token and fiat terms
///
/// **Public** - returned from analyze_transactions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisResult {
    pub total_transactions: usize,
    pub successful_transactions: usize,
    pub unique_days: usize,
    pub unique_weeks: usize,
    pub unique_months: usize,
    pub unique_contracts: usize,
    pub total_volume_eth: f64,
    pub total_gas_fees_eth: f64,
    pub total_volume_fiat: f64,
    pub total_gas_fees_fiat: f64,
}

/// Walk the records once and collect token-denominated totals
///
/// **Public** - main entry point for aggregation
///
/// # Errors
/// * `AnalysisError::MissingField` - a field needed for a record is absent
/// * `AnalysisError::InvalidNumber` - a numeric string does not parse
/// * `AnalysisError::InvalidTimestamp` - a timestamp has no calendar date
/// * `AnalysisError::Overflow` - a wei total exceeds `u128`
pub fn summarize_transactions(
    records: &[TransactionRecord],
) -> Result<ActivitySummary, AnalysisError> {
    let mut successful = 0usize;
    let mut volume_wei: u128 = 0;
    let mut gas_fees_wei: u128 = 0;
    let mut periods = ActivePeriods::new();
    let mut contracts: HashSet<&str> = HashSet::new();

    for tx in records {
        if tx.is_contract_interaction() {
            contracts.insert(required(tx, "to", &tx.to)?);
        }

        if !tx.is_successful() {
            continue;
        }
        successful += 1;

        let value = parse_wei("value", required(tx, "value", &tx.value)?)?;
        volume_wei = volume_wei
            .checked_add(value)
            .ok_or(AnalysisError::Overflow("volume"))?;

        gas_fees_wei = gas_fees_wei
            .checked_add(transaction_fee_wei(tx)?)
            .ok_or(AnalysisError::Overflow("gas fees"))?;

        let secs = parse_timestamp(required(tx, "timeStamp", &tx.timestamp)?)?;
        periods.record_timestamp(secs)?;
    }

    let summary = ActivitySummary {
        total_transactions: records.len(),
        successful_transactions: successful,
        unique_days: periods.unique_days(),
        unique_weeks: periods.unique_weeks(),
        unique_months: periods.unique_months(),
        unique_contracts: contracts.len(),
        total_volume_wei: volume_wei,
        total_gas_fees_wei: gas_fees_wei,
    };

    debug!("Activity summary: {:?}", summary);

    Ok(summary)
}

/// Aggregate the records and price the totals at `fiat_rate`
///
/// **Public** - pure function; same input always yields the same result
pub fn analyze_transactions(
    records: &[TransactionRecord],
    fiat_rate: f64,
) -> Result<AnalysisResult, AnalysisError> {
    summarize_transactions(records).map(|summary| summary.priced(fiat_rate))
}
