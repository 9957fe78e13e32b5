//! Balance command implementation.

use crate::commands::models::{BalanceArgs, BalanceView};
use crate::commands::utils::{validate_address, validate_fiat, validate_url};
use crate::explorer::ExplorerClient;
use crate::output::{format_balance, BALANCE_UNAVAILABLE};
use crate::price::PriceClient;
use crate::utils::error::ExplorerError;
use crate::utils::units::wei_to_eth;
use anyhow::{Context, Result};
use log::{debug, info};

/// Execute the balance command
///
/// **Public** - main entry point called from main.rs
///
/// A failed balance or price lookup is reported with a generic message;
/// details only go to the debug log.
pub fn execute_balance(args: BalanceArgs) -> Result<()> {
    info!("Looking up balance for address: {}", args.address);

    let explorer = ExplorerClient::new(&args.explorer_url, &args.api_key)
        .context("Failed to create explorer client")?;
    let prices = PriceClient::new(&args.price_url).context("Failed to create price client")?;

    let view = lookup_balance(&explorer, &prices, &args.address, &args.fiat);
    println!("{}", render_balance(&args.address, &args.fiat, view));

    Ok(())
}

/// Text shown for a balance lookup outcome
pub fn render_balance(address: &str, fiat_currency: &str, view: Option<BalanceView>) -> String {
    match view {
        Some(view) => format_balance(address, view.balance_eth, fiat_currency, view.balance_fiat),
        None => BALANCE_UNAVAILABLE.to_string(),
    }
}

/// Balance of an address in ETH
pub fn get_eth_balance(explorer: &ExplorerClient, address: &str) -> Result<f64, ExplorerError> {
    let wei = explorer.get_account_balance(address)?.into_balance_wei()?;
    Ok(wei_to_eth(wei))
}

/// Balance in ETH and its fiat value
///
/// `None` when either the balance or the rate could not be retrieved.
pub fn lookup_balance(
    explorer: &ExplorerClient,
    prices: &PriceClient,
    address: &str,
    fiat_currency: &str,
) -> Option<BalanceView> {
    let balance_eth = match get_eth_balance(explorer, address) {
        Ok(balance) => balance,
        Err(e) => {
            debug!("Balance lookup failed: {}", e);
            return None;
        }
    };

    let rate = prices.get_rate(fiat_currency)?;

    Some(BalanceView {
        balance_eth,
        balance_fiat: balance_eth * rate,
    })
}

/// Validate balance arguments
pub fn validate_balance_args(args: &BalanceArgs) -> Result<()> {
    validate_url("Explorer", &args.explorer_url)?;
    validate_url("Price", &args.price_url)?;

    if args.api_key.is_empty() {
        anyhow::bail!("API key cannot be empty");
    }

    validate_address(&args.address)?;
    validate_fiat(&args.fiat)
}
