use crate::explorer::{SortOrder, TxListQuery};
use crate::utils::config::{
    DEFAULT_END_BLOCK, DEFAULT_EXPLORER_URL, DEFAULT_FIAT, DEFAULT_OFFSET, DEFAULT_PAGE,
    DEFAULT_PRICE_URL, DEFAULT_START_BLOCK,
};

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Explorer API endpoint URL
    pub explorer_url: String,

    /// Price API endpoint URL
    pub price_url: String,

    /// Explorer API key
    pub api_key: String,

    /// Wallet address to analyze
    pub address: String,

    /// First block of the range (inclusive)
    pub start_block: u64,

    /// Last block of the range (inclusive)
    pub end_block: u64,

    /// Page number of the transaction list
    pub page: u32,

    /// Page size of the transaction list
    pub offset: u32,

    pub sort: SortOrder,

    /// Fiat currency for volume and fee totals
    pub fiat: String,

    /// Print every fetched transaction with its fee
    pub list_transactions: bool,

    /// Print the report as JSON instead of text
    pub json: bool,
}

impl AnalyzeArgs {
    /// The single txlist page this run fetches
    pub fn query(&self) -> TxListQuery {
        TxListQuery {
            address: self.address.clone(),
            start_block: self.start_block,
            end_block: self.end_block,
            page: self.page,
            offset: self.offset,
            sort: self.sort,
        }
    }
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            explorer_url: DEFAULT_EXPLORER_URL.to_string(),
            price_url: DEFAULT_PRICE_URL.to_string(),
            api_key: String::new(),
            address: String::new(),
            start_block: DEFAULT_START_BLOCK,
            end_block: DEFAULT_END_BLOCK,
            page: DEFAULT_PAGE,
            offset: DEFAULT_OFFSET,
            sort: SortOrder::Asc,
            fiat: DEFAULT_FIAT.to_string(),
            list_transactions: false,
            json: false,
        }
    }
}

/// Arguments for the balance command
#[derive(Debug, Clone)]
pub struct BalanceArgs {
    pub explorer_url: String,
    pub price_url: String,
    pub api_key: String,
    pub address: String,
    pub fiat: String,
}

impl Default for BalanceArgs {
    fn default() -> Self {
        Self {
            explorer_url: DEFAULT_EXPLORER_URL.to_string(),
            price_url: DEFAULT_PRICE_URL.to_string(),
            api_key: String::new(),
            address: String::new(),
            fiat: DEFAULT_FIAT.to_string(),
        }
    }
}

/// Balance of an address and its fiat value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceView {
    pub balance_eth: f64,
    pub balance_fiat: f64,
}
