use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tradefolio_market_data::Candle;

/// Immutable price data for one computation pass.
///
/// Built once per report from one fetch per distinct ticker. A ticker that
/// failed to fetch simply has no entry; calculators treat it as priceless
/// and skip the instrument rather than failing the report.
#[derive(Debug, Default)]
pub struct PriceSnapshot {
    series: HashMap<String, Vec<Candle>>,
}

impl PriceSnapshot {
    /// Build a snapshot from per-ticker candle series, each ascending by date.
    pub fn new(series: HashMap<String, Vec<Candle>>) -> Self {
        Self { series }
    }

    /// Full daily series for a ticker, ascending by date.
    pub fn series(&self, ticker: &str) -> Option<&[Candle]> {
        self.series.get(ticker).map(|candles| candles.as_slice())
    }

    /// Latest known close for a ticker.
    pub fn latest_close(&self, ticker: &str) -> Option<Decimal> {
        self.series
            .get(ticker)
            .and_then(|candles| candles.last())
            .map(|candle| candle.close)
    }

    pub fn has_price(&self, ticker: &str) -> bool {
        self.series
            .get(ticker)
            .is_some_and(|candles| !candles.is_empty())
    }

    /// The most recent candle date across all tickers; the report's
    /// reference date.
    pub fn as_of(&self) -> Option<NaiveDate> {
        self.series
            .values()
            .filter_map(|candles| candles.last())
            .map(|candle| candle.date)
            .max()
    }
}
