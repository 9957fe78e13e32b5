//! Base-unit parsing and wei/ETH conversion.

use super::config::WEI_PER_ETH;
use super::error::AnalysisError;

/// Parse a decimal base-unit string into an integer
///
/// Explorer payloads carry every numeric field as a string. Surrounding
/// whitespace is rejected like any other malformed value.
pub fn parse_wei(field: &'static str, raw: &str) -> Result<u128, AnalysisError> {
    raw.parse::<u128>().map_err(|_| AnalysisError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

/// Convert wei to ETH
///
/// Integer part and remainder are converted separately so totals above
/// 2^53 wei keep their precision until the final division.
pub fn wei_to_eth(wei: u128) -> f64 {
    let whole = wei / WEI_PER_ETH;
    let frac = wei % WEI_PER_ETH;
    whole as f64 + frac as f64 / WEI_PER_ETH as f64
}
