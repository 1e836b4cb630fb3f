use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One day of OHLC market data.
///
/// Candles are daily: the trade log carries calendar dates without a time
/// component, so everything downstream keys prices by [`NaiveDate`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candle {
    /// Trading day of the candle
    pub date: NaiveDate,

    /// Opening price
    pub open: Decimal,

    /// Intraday high
    pub high: Decimal,

    /// Intraday low
    pub low: Decimal,

    /// Closing price
    pub close: Decimal,

    /// Trading volume, when the provider reports it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<Decimal>,
}

impl Candle {
    /// Create a candle with a flat open/high/low equal to the close.
    /// Useful for providers or tests that only carry closing prices.
    pub fn from_close(date: NaiveDate, close: Decimal) -> Self {
        Self {
            date,
            open: close,
            high: close,
            low: close,
            close,
            volume: None,
        }
    }
}
