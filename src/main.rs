//! ScrollScan Analytics CLI
//!
//! Reports an address's ETH balance and aggregates its transaction
//! history into activity, volume and gas fee metrics.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;

use scrollscan_analytics::commands::{
    display_version, execute_analyze, execute_balance, resolve_address, validate_analyze_args,
    validate_balance_args, AnalyzeArgs, BalanceArgs,
};
use scrollscan_analytics::explorer::SortOrder;
use scrollscan_analytics::utils::config::{
    DEFAULT_END_BLOCK, DEFAULT_EXPLORER_URL, DEFAULT_FIAT, DEFAULT_OFFSET, DEFAULT_PAGE,
    DEFAULT_PRICE_URL, DEFAULT_START_BLOCK,
};

/// ScrollScan Analytics - wallet activity for Scroll accounts
#[derive(Parser, Debug)]
#[command(name = "scrollscan-analytics")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Options shared by every command that talks to the APIs
#[derive(Args, Debug)]
struct ApiOptions {
    /// Wallet address (prompted for when omitted)
    #[arg(short, long, env = "WALLET_ADDRESS")]
    address: Option<String>,

    /// ScrollScan API key
    #[arg(long, env = "SCROLLSCAN_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Explorer API endpoint URL
    #[arg(long, env = "SCROLLSCAN_API_URL", default_value = DEFAULT_EXPLORER_URL)]
    explorer_url: String,

    /// Price API endpoint URL
    #[arg(long, env = "PRICE_API_URL", default_value = DEFAULT_PRICE_URL)]
    price_url: String,

    /// Fiat currency for converted amounts (USD, EUR, BTC)
    #[arg(long, default_value = DEFAULT_FIAT)]
    fiat: String,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze one page of an address's transaction history
    Analyze {
        #[command(flatten)]
        api: ApiOptions,

        /// First block of the range (inclusive)
        #[arg(long, default_value_t = DEFAULT_START_BLOCK)]
        start_block: u64,

        /// Last block of the range (inclusive)
        #[arg(long, default_value_t = DEFAULT_END_BLOCK)]
        end_block: u64,

        /// Page number to fetch
        #[arg(long, default_value_t = DEFAULT_PAGE)]
        page: u32,

        /// Number of transactions per page
        #[arg(long, default_value_t = DEFAULT_OFFSET)]
        offset: u32,

        /// Sort order by block number
        #[arg(long, value_enum, default_value_t = SortOrder::Asc)]
        sort: SortOrder,

        /// Print every fetched transaction with its fee
        #[arg(long)]
        list: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show an address's ETH balance and its fiat value
    Balance {
        #[command(flatten)]
        api: ApiOptions,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Load SCROLLSCAN_API_KEY and friends from .env if present
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Analyze {
            api,
            start_block,
            end_block,
            page,
            offset,
            sort,
            list,
            json,
        } => {
            let address = resolve_address(api.address)?;

            let args = AnalyzeArgs {
                explorer_url: api.explorer_url,
                price_url: api.price_url,
                api_key: api.api_key,
                address,
                start_block,
                end_block,
                page,
                offset,
                sort,
                fiat: api.fiat.to_uppercase(),
                list_transactions: list,
                json,
            };

            // Validate args first
            validate_analyze_args(&args)?;

            execute_analyze(args)?;
        }

        Commands::Balance { api } => {
            let address = resolve_address(api.address)?;

            let args = BalanceArgs {
                explorer_url: api.explorer_url,
                price_url: api.price_url,
                api_key: api.api_key,
                address,
                fiat: api.fiat.to_uppercase(),
            };

            validate_balance_args(&args)?;

            execute_balance(args)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
