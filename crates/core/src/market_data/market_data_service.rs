use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use futures::future::join_all;
use log::{debug, warn};
use tradefolio_market_data::MarketDataProvider;

use crate::market_data::PriceSnapshot;

/// Fetches daily price history once per distinct ticker and caches the
/// result (or the failure) in a [`PriceSnapshot`] for one computation pass.
pub struct MarketDataService {
    provider: Arc<dyn MarketDataProvider>,
}

impl MarketDataService {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    /// Fetch history for every distinct ticker in `tickers`.
    ///
    /// Returns the snapshot plus the tickers that failed, with the error
    /// text, so the caller can surface warnings. A failed ticker never
    /// aborts the batch; it is simply absent from the snapshot.
    pub async fn snapshot(
        &self,
        tickers: &[String],
        start: NaiveDate,
        end: NaiveDate,
    ) -> (PriceSnapshot, Vec<(String, String)>) {
        let mut unique: Vec<&String> = Vec::new();
        for ticker in tickers {
            if !unique.contains(&ticker) {
                unique.push(ticker);
            }
        }

        debug!(
            "Fetching price history for {} tickers from {} via {}",
            unique.len(),
            start,
            self.provider.id()
        );

        let fetches = unique.iter().map(|ticker| {
            let provider = Arc::clone(&self.provider);
            async move {
                let result = provider.historical_candles(ticker, start, end).await;
                (ticker.to_string(), result)
            }
        });

        let mut series = HashMap::new();
        let mut failures = Vec::new();

        for (ticker, result) in join_all(fetches).await {
            match result {
                Ok(candles) => {
                    series.insert(ticker, candles);
                }
                Err(e) => {
                    warn!("Price fetch failed for {}: {}", ticker, e);
                    failures.push((ticker, e.to_string()));
                }
            }
        }

        (PriceSnapshot::new(series), failures)
    }
}
