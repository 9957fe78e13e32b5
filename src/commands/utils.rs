use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

use crate::utils::config::{QUOTE_SYMBOLS, REPORT_VERSION};

/// Use the configured address, or ask for one on stdin
pub fn resolve_address(configured: Option<String>) -> Result<String> {
    if let Some(address) = configured.filter(|a| !a.trim().is_empty()) {
        return Ok(address.trim().to_string());
    }

    let stdin = io::stdin();
    prompt_address(&mut stdin.lock(), &mut io::stdout())
}

/// Prompt for a wallet address and read one line
pub fn prompt_address(input: &mut impl BufRead, output: &mut impl Write) -> Result<String> {
    write!(output, "Please enter the wallet address: ")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read wallet address")?;

    let address = line.trim();
    if address.is_empty() {
        anyhow::bail!("No wallet address given");
    }

    Ok(address.to_string())
}

/// `0x` followed by 40 hex characters
pub fn validate_address(address: &str) -> Result<()> {
    let hex = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .context("Address must start with 0x")?;

    if hex.len() != 40 {
        anyhow::bail!("Address must be 20 bytes (40 hex characters)");
    }

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        anyhow::bail!("Address contains invalid characters");
    }

    Ok(())
}

/// Fiat currency must be one the price request asks for
pub fn validate_fiat(currency: &str) -> Result<()> {
    let currency = currency.trim().to_uppercase();
    if !QUOTE_SYMBOLS.contains(&currency.as_str()) {
        anyhow::bail!(
            "Unsupported fiat currency '{}' (expected one of {})",
            currency,
            QUOTE_SYMBOLS.join(", ")
        );
    }

    Ok(())
}

pub(crate) fn validate_url(name: &str, url: &str) -> Result<()> {
    if url.is_empty() {
        anyhow::bail!("{} URL cannot be empty", name);
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!("{} URL must start with http:// or https://", name);
    }

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("ScrollScan Analytics v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_VERSION);
    println!();
    println!("Wallet balance and activity analytics for Scroll accounts.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_address_trims_input() {
        let mut input = Cursor::new("  0x4F5197CD2BAdF78Cd5C63d7a1E0D8E7F0eD7e906\n");
        let mut output = Vec::new();

        let address = prompt_address(&mut input, &mut output).unwrap();
        assert_eq!(address, "0x4F5197CD2BAdF78Cd5C63d7a1E0D8E7F0eD7e906");
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Please enter the wallet address: "
        );
    }

    #[test]
    fn test_prompt_address_empty_line() {
        let mut input = Cursor::new("\n");
        assert!(prompt_address(&mut input, &mut Vec::new()).is_err());
    }

    #[test]
    fn test_resolve_address_prefers_configured() {
        let address = resolve_address(Some(" 0xabc ".to_string())).unwrap();
        assert_eq!(address, "0xabc");
    }

    #[test]
    fn test_validate_address() {
        assert!(validate_address("0x4F5197CD2BAdF78Cd5C63d7a1E0D8E7F0eD7e906").is_ok());
        assert!(validate_address("4F5197CD2BAdF78Cd5C63d7a1E0D8E7F0eD7e906").is_err());
        assert!(validate_address("0x4F5197").is_err());
        assert!(validate_address("0xZZ5197CD2BAdF78Cd5C63d7a1E0D8E7F0eD7e906").is_err());
    }

    #[test]
    fn test_validate_fiat() {
        assert!(validate_fiat("USD").is_ok());
        assert!(validate_fiat("eur").is_ok());
        assert!(validate_fiat("BTC").is_ok());
        assert!(validate_fiat("GBP").is_err());
        assert!(validate_fiat("").is_err());
    }
}
