//! Per-transaction gas fee computation.

use crate::explorer::TransactionRecord;
use crate::utils::error::AnalysisError;
use crate::utils::units::{parse_wei, wei_to_eth};

/// Fee paid by one transaction in wei (`gasUsed * gasPrice`)
pub fn transaction_fee_wei(tx: &TransactionRecord) -> Result<u128, AnalysisError> {
    let gas_used = parse_wei("gasUsed", required(tx, "gasUsed", &tx.gas_used)?)?;
    let gas_price = parse_wei("gasPrice", required(tx, "gasPrice", &tx.gas_price)?)?;

    gas_used
        .checked_mul(gas_price)
        .ok_or(AnalysisError::Overflow("gas fee"))
}

/// Fee paid by one transaction in ETH
pub fn transaction_fee_eth(tx: &TransactionRecord) -> Result<f64, AnalysisError> {
    transaction_fee_wei(tx).map(wei_to_eth)
}

/// Value of a field that must be present for the computation at hand
pub(crate) fn required<'a>(
    tx: &TransactionRecord,
    field: &'static str,
    value: &'a Option<String>,
) -> Result<&'a str, AnalysisError> {
    value.as_deref().ok_or_else(|| AnalysisError::MissingField {
        field,
        tx: tx.label().to_string(),
    })
}
