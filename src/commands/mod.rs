//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod analyze;
pub mod balance;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use analyze::{build_report, execute_analyze, validate_analyze_args};
pub use balance::{
    execute_balance, get_eth_balance, lookup_balance, render_balance, validate_balance_args,
};
pub use models::{AnalyzeArgs, BalanceArgs, BalanceView};
pub use utils::{
    display_version, prompt_address, resolve_address, validate_address, validate_fiat,
};
