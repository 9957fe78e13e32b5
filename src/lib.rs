//! ScrollScan Analytics
//!
//! Balance lookup and transaction activity analytics for Scroll
//! accounts, backed by the ScrollScan explorer API and CryptoCompare
//! spot prices.
//!
//! This crate provides the core implementation for the
//! `scrollscan-analytics` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! export SCROLLSCAN_API_KEY=...
//! scrollscan-analytics analyze --address 0x4F5197CD2BAdF78Cd5C63d7a1E0D8E7F0eD7e906
//! scrollscan-analytics balance --address 0x4F5197CD2BAdF78Cd5C63d7a1E0D8E7F0eD7e906
//! ```

pub mod analyzer;
pub mod commands;
pub mod explorer;
pub mod output;
pub mod price;
pub mod utils;
