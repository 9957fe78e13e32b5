//! Aggregation of explorer transactions into activity metrics.
//!
//! This module turns a plain transaction list into:
//! - Transaction counts (total and successful)
//! - Unique active days, ISO weeks and months
//! - Unique contracts interacted with
//! - Volume and gas fees in ETH and fiat

pub mod fees;
pub mod metrics;
pub mod periods;

// Re-export main types and functions
pub use fees::{transaction_fee_eth, transaction_fee_wei};
pub use metrics::{analyze_transactions, summarize_transactions, ActivitySummary, AnalysisResult};
pub use periods::{timestamp_to_date, ActivePeriods};
