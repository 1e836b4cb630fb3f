//! Trade log: domain model, storage traits, CSV repository, and the
//! entry-time service with the over-sell guard.

mod csv_repository;
mod trades_errors;
mod trades_model;
mod trades_service;
mod trades_traits;

pub use csv_repository::CsvTradeRepository;
pub use trades_errors::TradeError;
pub use trades_model::*;
pub use trades_service::TradeService;
pub use trades_traits::*;
