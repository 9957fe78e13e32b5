//! Explorer API access: account balance and transaction list.

pub mod client;
pub mod types;

// Re-export main types
pub use client::ExplorerClient;
pub use types::{
    normalize_transactions, ExplorerResponse, SortOrder, TransactionRecord, TxListOutcome,
    TxListQuery,
};
