use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tradefolio_market_data::{Candle, MarketDataError, MarketDataProvider};

use crate::market_data::MarketDataService;

// --- Mock provider ---

struct MockProvider {
    series: HashMap<String, Vec<Candle>>,
}

#[async_trait]
impl MarketDataProvider for MockProvider {
    fn id(&self) -> &'static str {
        "MOCK"
    }

    async fn historical_candles(
        &self,
        symbol: &str,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<Vec<Candle>, MarketDataError> {
        self.series
            .get(symbol)
            .cloned()
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn failed_ticker_is_isolated() {
    let mut series = HashMap::new();
    series.insert(
        "069500".to_string(),
        vec![
            Candle::from_close(date(2025, 1, 2), dec!(100)),
            Candle::from_close(date(2025, 1, 3), dec!(104)),
        ],
    );
    let service = MarketDataService::new(Arc::new(MockProvider { series }));

    let (snapshot, failures) = service
        .snapshot(
            &["069500".to_string(), "DELISTED".to_string()],
            date(2025, 1, 1),
            date(2025, 1, 31),
        )
        .await;

    assert_eq!(snapshot.latest_close("069500"), Some(dec!(104)));
    assert!(!snapshot.has_price("DELISTED"));
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, "DELISTED");
}

#[tokio::test]
async fn duplicate_tickers_are_fetched_once() {
    let mut series = HashMap::new();
    series.insert(
        "069500".to_string(),
        vec![Candle::from_close(date(2025, 1, 2), dec!(100))],
    );
    let service = MarketDataService::new(Arc::new(MockProvider { series }));

    let tickers = vec!["069500".to_string(), "069500".to_string()];
    let (snapshot, failures) = service
        .snapshot(&tickers, date(2025, 1, 1), date(2025, 1, 31))
        .await;

    assert!(failures.is_empty());
    assert_eq!(snapshot.as_of(), Some(date(2025, 1, 2)));
}
