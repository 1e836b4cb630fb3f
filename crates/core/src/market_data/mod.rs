//! Price snapshot fetching for one computation pass.

mod market_data_service;
mod price_snapshot;

pub use market_data_service::MarketDataService;
pub use price_snapshot::PriceSnapshot;

#[cfg(test)]
mod market_data_service_tests;
