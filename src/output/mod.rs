//! Presentation of analysis and balance results.
//!
//! - Text summaries for the terminal
//! - JSON reports

pub mod json;
pub mod report;

// Re-export main functions
pub use json::report_to_string;
pub use report::{
    format_balance, format_fetch_error, format_fiat, format_report, format_transaction_line,
    ActivityReport, FiatTotals, BALANCE_UNAVAILABLE,
};
