//! Tradefolio Market Data Crate
//!
//! Provider-agnostic daily market data fetching for the Tradefolio portfolio
//! tracker.
//!
//! # Overview
//!
//! The core crate consumes one interface from here: given a ticker and a date
//! range, return a time-ordered series of daily OHLC candles. Providers may
//! fail per-ticker; callers treat a failed fetch as "no price available" for
//! that instrument and carry on.
//!
//! # Core Types
//!
//! - [`Candle`] - One day of open/high/low/close data
//! - [`MarketDataProvider`] - Trait implemented by each data source
//! - [`YahooProvider`] - Yahoo Finance implementation

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::Candle;
pub use provider::{MarketDataProvider, YahooProvider};
