//! Market data provider trait definition.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::MarketDataError;
use crate::models::Candle;

/// Trait for market data providers.
///
/// Implement this trait to add support for a new data source. The portfolio
/// calculators only need daily history; failures are per-symbol and the
/// caller decides how to isolate them.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider, e.g. "YAHOO".
    /// Used for logging and error attribution.
    fn id(&self) -> &'static str;

    /// Fetch the daily OHLC history for a symbol over `[start, end]`,
    /// ascending by date.
    async fn historical_candles(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Candle>, MarketDataError>;
}
