//! Yahoo Finance market data provider.
//!
//! Fetches daily OHLC history for equities and ETFs through the
//! `yahoo_finance_api` crate. Korean exchange listings use the usual
//! Yahoo suffixes (e.g. `069500.KS`).

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use log::{debug, warn};
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use time::OffsetDateTime;
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::Candle;
use crate::provider::MarketDataProvider;

/// Yahoo Finance market data provider.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub fn new() -> Result<Self, MarketDataError> {
        let connector = yahoo::YahooConnector::new().map_err(|e| MarketDataError::ProviderError {
            provider: "YAHOO".to_string(),
            message: format!("Failed to initialize Yahoo connector: {}", e),
        })?;
        Ok(Self { connector })
    }

    /// Convert a calendar date to the `time::OffsetDateTime` the Yahoo API expects.
    fn date_to_offset_datetime(date: NaiveDate) -> OffsetDateTime {
        let timestamp = date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp())
            .unwrap_or_default();
        OffsetDateTime::from_unix_timestamp(timestamp).unwrap_or_else(|_| OffsetDateTime::now_utc())
    }

    /// Convert a Yahoo quote into a [`Candle`].
    fn yahoo_quote_to_candle(quote: yahoo::Quote) -> Result<Candle, MarketDataError> {
        let date = Utc
            .timestamp_opt(quote.timestamp as i64, 0)
            .single()
            .ok_or_else(|| {
                MarketDataError::InvalidQuote(format!("Invalid timestamp: {}", quote.timestamp))
            })?
            .date_naive();

        let close = Decimal::from_f64_retain(quote.close).ok_or_else(|| {
            MarketDataError::InvalidQuote(format!("Invalid close price: {}", quote.close))
        })?;

        Ok(Candle {
            date,
            open: Decimal::from_f64_retain(quote.open).unwrap_or(close),
            high: Decimal::from_f64_retain(quote.high).unwrap_or(close),
            low: Decimal::from_f64_retain(quote.low).unwrap_or(close),
            close,
            volume: Decimal::from_u64(quote.volume),
        })
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        "YAHOO"
    }

    async fn historical_candles(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Candle>, MarketDataError> {
        debug!(
            "Fetching daily history for {} from {} to {} from Yahoo",
            symbol, start, end
        );

        let start_time = Self::date_to_offset_datetime(start);
        // The range end is exclusive upstream; extend by one day so the
        // requested end date is included.
        let end_time = Self::date_to_offset_datetime(end + Duration::days(1));

        let response = self
            .connector
            .get_quote_history(symbol, start_time, end_time)
            .await
            .map_err(|e| {
                if matches!(e, yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) {
                    MarketDataError::SymbolNotFound(symbol.to_string())
                } else {
                    MarketDataError::ProviderError {
                        provider: "YAHOO".to_string(),
                        message: e.to_string(),
                    }
                }
            })?;

        match response.quotes() {
            Ok(yahoo_quotes) => {
                let mut candles: Vec<Candle> = yahoo_quotes
                    .into_iter()
                    .filter_map(|q| match Self::yahoo_quote_to_candle(q) {
                        Ok(candle) => Some(candle),
                        Err(e) => {
                            warn!("Skipping quote for {} due to conversion error: {:?}", symbol, e);
                            None
                        }
                    })
                    .collect();

                if candles.is_empty() {
                    return Err(MarketDataError::NoDataForRange);
                }

                candles.sort_by_key(|c| c.date);
                Ok(candles)
            }
            Err(yahoo::YahooError::NoQuotes) => {
                warn!(
                    "No historical quotes returned for '{}' between {} and {}",
                    symbol, start, end
                );
                Err(MarketDataError::NoDataForRange)
            }
            Err(e) => Err(MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn converts_yahoo_quote_to_candle() {
        let quote = yahoo::Quote {
            timestamp: 1735689600, // 2025-01-01 00:00:00 UTC
            open: 100.0,
            high: 105.0,
            low: 99.0,
            close: 104.0,
            volume: 1000,
            adjclose: 104.0,
        };

        let candle = YahooProvider::yahoo_quote_to_candle(quote).unwrap();
        assert_eq!(candle.date, date(2025, 1, 1));
        assert_eq!(candle.close, dec!(104.0));
        assert_eq!(candle.low, dec!(99.0));
        assert_eq!(candle.volume, Some(dec!(1000)));
    }

    #[test]
    fn rejects_non_finite_close() {
        let quote = yahoo::Quote {
            timestamp: 1735689600,
            open: 100.0,
            high: 105.0,
            low: 99.0,
            close: f64::NAN,
            volume: 0,
            adjclose: 0.0,
        };

        assert!(matches!(
            YahooProvider::yahoo_quote_to_candle(quote),
            Err(MarketDataError::InvalidQuote(_))
        ));
    }
}
