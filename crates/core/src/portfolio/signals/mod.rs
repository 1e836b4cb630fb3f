//! Target-return bands and technical signals.

mod signals_model;
mod signals_service;

pub use signals_model::*;
pub use signals_service::SignalsService;
