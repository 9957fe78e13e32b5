//! HTTP client for the CryptoCompare spot price endpoint.

use crate::utils::config::{DEFAULT_HTTP_TIMEOUT, QUOTE_SYMBOLS, TOKEN_SYMBOL};
use crate::utils::error::PriceError;
use log::{debug, info, warn};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::collections::HashMap;

/// Spot prices of one ETH keyed by currency code
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct PriceQuote {
    rates: HashMap<String, f64>,
}

impl PriceQuote {
    pub fn new(rates: HashMap<String, f64>) -> Self {
        Self { rates }
    }

    /// Rate for a currency code (case-insensitive)
    pub fn rate(&self, currency: &str) -> Option<f64> {
        self.rates.get(&currency.to_uppercase()).copied()
    }
}

/// Client for ETH spot prices
pub struct PriceClient {
    client: Client,
    base_url: String,
}

impl PriceClient {
    /// Create a new price client
    pub fn new(base_url: impl Into<String>) -> Result<Self, PriceError> {
        let client = Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(PriceError::RequestFailed)?;

        Ok(Self::with_http_client(client, base_url))
    }

    /// Create a client around an existing HTTP client
    pub fn with_http_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch current ETH prices
    ///
    /// Any transport, status or decode failure is logged and returned as
    /// `None` so callers skip fiat figures instead of aborting.
    pub fn get_eth_price(&self) -> Option<PriceQuote> {
        match self.fetch_quote() {
            Ok(quote) => Some(quote),
            Err(e) => {
                warn!("ETH price unavailable: {}", e);
                None
            }
        }
    }

    /// Fetch the ETH rate in a single currency
    pub fn get_rate(&self, currency: &str) -> Option<f64> {
        let rate = self.get_eth_price()?.rate(currency);
        if rate.is_none() {
            warn!("Price response has no {} rate", currency);
        }
        rate
    }

    fn fetch_quote(&self) -> Result<PriceQuote, PriceError> {
        info!("Fetching {} price", TOKEN_SYMBOL);

        let tsyms = QUOTE_SYMBOLS.join(",");
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("fsym", TOKEN_SYMBOL), ("tsyms", tsyms.as_str())])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(PriceError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let quote: PriceQuote = response.json()?;
        debug!("Price quote: {:?}", quote);

        Ok(quote)
    }
}
