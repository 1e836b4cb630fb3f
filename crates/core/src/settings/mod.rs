//! Application settings: accounts, fee policy, limits, target windows.

mod settings_model;
mod settings_service;

pub use settings_model::*;
pub use settings_service::*;

#[cfg(test)]
mod settings_tests;
