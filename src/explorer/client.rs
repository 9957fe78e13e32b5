//! HTTP client for the ScrollScan explorer API.

use super::types::{ExplorerResponse, TxListQuery};
use crate::utils::config::DEFAULT_HTTP_TIMEOUT;
use crate::utils::error::ExplorerError;
use log::{debug, info};
use reqwest::blocking::Client;

/// Client for the explorer `account` endpoints
///
/// Each call issues exactly one GET request. Non-2xx responses come back as
/// `ExplorerError::HttpStatus` carrying the status code and reason phrase.
pub struct ExplorerClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ExplorerClient {
    /// Create a new explorer client
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ExplorerError> {
        let client = Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(ExplorerError::RequestFailed)?;

        Ok(Self::with_http_client(client, base_url, api_key))
    }

    /// Create a client around an existing HTTP client
    pub fn with_http_client(
        client: Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetch the latest balance of an address (`action=balance`)
    pub fn get_account_balance(&self, address: &str) -> Result<ExplorerResponse, ExplorerError> {
        info!("Fetching balance for address: {}", address);

        let params = vec![
            ("module", "account".to_string()),
            ("action", "balance".to_string()),
            ("address", address.to_string()),
            ("tag", "latest".to_string()),
        ];

        self.get(params)
    }

    /// Fetch one page of an address's transactions (`action=txlist`)
    pub fn get_transaction_list(
        &self,
        query: &TxListQuery,
    ) -> Result<ExplorerResponse, ExplorerError> {
        info!(
            "Fetching transactions for {} (blocks {}..={}, page {}, offset {}, {})",
            query.address, query.start_block, query.end_block, query.page, query.offset, query.sort
        );

        self.get(query.params())
    }

    fn get(&self, mut params: Vec<(&'static str, String)>) -> Result<ExplorerResponse, ExplorerError> {
        // Logged before the key is attached
        debug!("Explorer request: {} {:?}", self.base_url, params);
        params.push(("apikey", self.api_key.clone()));

        let response = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .map_err(ExplorerError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExplorerError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body: ExplorerResponse = response.json().map_err(ExplorerError::RequestFailed)?;

        debug!(
            "Explorer response: status={:?} message={:?}",
            body.status, body.message
        );

        Ok(body)
    }
}
