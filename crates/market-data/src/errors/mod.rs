//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur during market data operations.
///
/// All variants are terminal per-ticker: the portfolio calculators treat a
/// failed fetch as "no price available" for that instrument rather than
/// retrying or aborting the whole report.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol was not found by the provider.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The symbol exists but has no quotes in the requested period.
    #[error("No data for date range")]
    NoDataForRange,

    /// A provider-specific error occurred.
    #[error("Provider error from {provider}: {message}")]
    ProviderError {
        /// The provider that produced the error
        provider: String,
        /// Provider-specific error details
        message: String,
    },

    /// A quote could not be converted into the crate's model
    /// (e.g. a non-finite price value).
    #[error("Invalid quote data: {0}")]
    InvalidQuote(String),
}
