//! Closed trades and realized P&L.

mod realized_model;
mod realized_service;

pub use realized_model::*;
pub use realized_service::RealizedService;

#[cfg(test)]
mod realized_service_tests;
