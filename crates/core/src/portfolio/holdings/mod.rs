//! Open positions and unrealized P&L.

mod holdings_model;
mod holdings_service;

pub use holdings_model::*;
pub use holdings_service::HoldingsService;
