use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by trade log operations.
#[derive(Error, Debug)]
pub enum TradeError {
    /// A sell was entered for more quantity than the log currently holds.
    /// `available` is the aggregate buy-minus-sell quantity for the ticker,
    /// surfaced so the caller can show it to the user.
    #[error("Insufficient holdings for {ticker}: requested {requested}, available {available}")]
    InsufficientHoldings {
        ticker: String,
        requested: Decimal,
        available: Decimal,
    },

    #[error("Invalid trade: {0}")]
    Invalid(String),

    #[error("Trade log storage failed: {0}")]
    Storage(String),
}
