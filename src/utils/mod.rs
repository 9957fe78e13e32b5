//! Utility modules for configuration, error handling, and unit conversion.

pub mod config;
pub mod error;
pub mod units;

// Re-export commonly used error types for convenience
pub use error::{AnalysisError, ExplorerError, OutputError, PriceError};
pub use units::{parse_wei, wei_to_eth};
