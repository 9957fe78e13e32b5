//! Fiat price lookup for the native token.

pub mod client;

pub use client::{PriceClient, PriceQuote};
