//! Domain models for the market data crate.

mod candle;

pub use candle::Candle;
