//! Tradefolio Core - Domain entities, calculators, and services.
//!
//! This crate contains the business logic for the Tradefolio portfolio
//! tracker: the FIFO lot ledger, the unrealized and realized P&L
//! calculators, the cash balance fold, concentration-limit analysis, and
//! the target-return / technical-signal report. Storage and market data
//! sit behind traits implemented here (CSV trade log) and in the
//! `tradefolio-market-data` crate (Yahoo Finance).

pub mod constants;
pub mod errors;
pub mod indicators;
pub mod market_data;
pub mod portfolio;
pub mod settings;
pub mod trades;

// Re-export common types from the portfolio module
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
