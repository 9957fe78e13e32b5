//! Types for the Etherscan-compatible `account` API exposed by ScrollScan.
//!
//! Every numeric field arrives as a decimal string. Fields are kept as
//! `Option<String>` so a record with a missing key still decodes; the
//! analyzer decides which absences are fatal.

use crate::utils::config::{
    DEFAULT_END_BLOCK, DEFAULT_OFFSET, DEFAULT_PAGE, DEFAULT_START_BLOCK, EMPTY_INPUT,
    SUCCESS_STATUS,
};
use crate::utils::error::ExplorerError;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Envelope shared by every explorer endpoint
///
/// `result` is left untyped: on success it holds a balance string or a
/// transaction array, on in-band failure the explorer puts an error
/// message string there instead.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExplorerResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

impl ExplorerResponse {
    /// Extract the transaction list from a `txlist` response
    ///
    /// A missing or null `result` yields an empty list.
    pub fn into_transactions(self) -> Result<Vec<TransactionRecord>, ExplorerError> {
        match self.result {
            None | Some(serde_json::Value::Null) => Ok(Vec::new()),
            Some(value @ serde_json::Value::Array(_)) => serde_json::from_value(value)
                .map_err(|e| ExplorerError::InvalidResponse(format!("bad transaction list: {}", e))),
            Some(serde_json::Value::String(msg)) => Err(ExplorerError::Api(msg)),
            Some(other) => Err(ExplorerError::InvalidResponse(format!(
                "unexpected txlist result: {}",
                other
            ))),
        }
    }

    /// Extract the wei balance from a `balance` response
    pub fn into_balance_wei(self) -> Result<u128, ExplorerError> {
        let failed = self.status.as_deref() == Some("0");
        match self.result {
            Some(serde_json::Value::String(raw)) => match raw.parse::<u128>() {
                Ok(wei) => Ok(wei),
                Err(_) if failed => Err(ExplorerError::Api(raw)),
                Err(_) => Err(ExplorerError::InvalidResponse(format!(
                    "balance is not an integer: {:?}",
                    raw
                ))),
            },
            _ if failed => Err(ExplorerError::Api(
                self.message.unwrap_or_else(|| "request failed".to_string()),
            )),
            _ => Err(ExplorerError::InvalidResponse(
                "Missing result field".to_string(),
            )),
        }
    }
}

/// One historical transaction as returned by `action=txlist`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "blockNumber", skip_serializing_if = "Option::is_none")]
    pub block_number: Option<String>,

    #[serde(rename = "timeStamp", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    /// Transferred value in wei
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Price per gas unit in wei
    #[serde(rename = "gasPrice", skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<String>,

    #[serde(rename = "gasUsed", skip_serializing_if = "Option::is_none")]
    pub gas_used: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,

    #[serde(rename = "txreceipt_status", skip_serializing_if = "Option::is_none")]
    pub receipt_status: Option<String>,

    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<String>,
}

impl TransactionRecord {
    /// Receipt status is exactly "1"; a missing status is not a success
    pub fn is_successful(&self) -> bool {
        self.receipt_status.as_deref() == Some(SUCCESS_STATUS)
    }

    /// Anything but the bare "0x" payload counts as a contract call
    pub fn is_contract_interaction(&self) -> bool {
        self.input.as_deref() != Some(EMPTY_INPUT)
    }

    /// Short identifier for logs and error messages
    pub fn label(&self) -> &str {
        self.hash.as_deref().unwrap_or("<unknown>")
    }
}

/// Sort order accepted by `txlist`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of a single `txlist` page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxListQuery {
    pub address: String,

    /// First block of the inclusive range
    pub start_block: u64,

    /// Last block of the inclusive range
    pub end_block: u64,

    pub page: u32,

    /// Page size
    pub offset: u32,

    pub sort: SortOrder,
}

impl TxListQuery {
    /// Query the first page of an address's full history
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            start_block: DEFAULT_START_BLOCK,
            end_block: DEFAULT_END_BLOCK,
            page: DEFAULT_PAGE,
            offset: DEFAULT_OFFSET,
            sort: SortOrder::Asc,
        }
    }

    /// Query parameters without the API key
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("module", "account".to_string()),
            ("action", "txlist".to_string()),
            ("address", self.address.clone()),
            ("startblock", self.start_block.to_string()),
            ("endblock", self.end_block.to_string()),
            ("page", self.page.to_string()),
            ("offset", self.offset.to_string()),
            ("sort", self.sort.as_str().to_string()),
        ]
    }
}

/// A fetch result normalized to a plain record sequence
///
/// Produced once at the boundary so the analyzer only ever sees records.
/// On failure `records` is empty and `error` holds the cause.
#[derive(Debug)]
pub struct TxListOutcome {
    pub records: Vec<TransactionRecord>,
    pub error: Option<ExplorerError>,
}

impl TxListOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Normalize a `txlist` fetch result, defaulting to no records on error
pub fn normalize_transactions(
    outcome: Result<ExplorerResponse, ExplorerError>,
) -> TxListOutcome {
    match outcome.and_then(ExplorerResponse::into_transactions) {
        Ok(records) => TxListOutcome {
            records,
            error: None,
        },
        Err(error) => {
            warn!("Treating failed transaction fetch as empty: {}", error);
            TxListOutcome {
                records: Vec::new(),
                error: Some(error),
            }
        }
    }
}
