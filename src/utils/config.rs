//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default ScrollScan API endpoint
pub const DEFAULT_EXPLORER_URL: &str = "https://api.scrollscan.com/api";

/// Default CryptoCompare price endpoint
pub const DEFAULT_PRICE_URL: &str = "https://min-api.cryptocompare.com/data/price";

/// Default timeout for explorer and price requests
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Current report schema version
pub const REPORT_VERSION: &str = "1.0.0";

// 1 ETH = 10^18 wei
pub const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;

/// Display symbol of the native token
pub const TOKEN_SYMBOL: &str = "ETH";

/// Fiat currency used when none is requested
pub const DEFAULT_FIAT: &str = "USD";

/// Currencies requested from the price API in one call
pub const QUOTE_SYMBOLS: &[&str] = &["BTC", "USD", "EUR"];

// txlist paging defaults (a single page is fetched per run)
pub const DEFAULT_START_BLOCK: u64 = 0;
pub const DEFAULT_END_BLOCK: u64 = 99_999_999;
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_OFFSET: u32 = 1000;
pub const MAX_OFFSET: u32 = 10_000;

/// Receipt status marking a successful transaction
pub const SUCCESS_STATUS: &str = "1";

/// Input payload of a plain value transfer
pub const EMPTY_INPUT: &str = "0x";
