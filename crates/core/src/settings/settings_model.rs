//! Settings domain models.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Which market an account trades in. Domestic and foreign accounts carry
/// different fee rates and initial capital.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Market {
    Domestic,
    Foreign,
}

/// How a computed fee amount is rounded before it is applied.
///
/// The default truncates toward zero, matching brokerage statements that
/// drop sub-unit fee amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeeRounding {
    #[default]
    Floor,
    Nearest,
    Exact,
}

/// Per-account configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSettings {
    pub id: String,
    pub name: String,
    pub market: Market,
    /// Native currency of the account's instruments (e.g. "KRW", "USD").
    pub currency: String,
    pub initial_capital: Decimal,
    /// Brokerage fee rate applied to both legs, as a fraction (0.001 = 0.1%).
    pub fee_rate: Decimal,
}

/// Fee computation rule for one account: rate plus rounding.
/// Shared by the lot ledger, the realized calculator, and the cash fold so
/// all three stay consistent.
#[derive(Debug, Clone, Copy)]
pub struct FeePolicy {
    pub rate: Decimal,
    pub rounding: FeeRounding,
}

impl FeePolicy {
    /// Fee charged on a gross amount.
    pub fn fee(&self, amount: Decimal) -> Decimal {
        let raw = amount * self.rate;
        match self.rounding {
            FeeRounding::Floor => raw.floor(),
            FeeRounding::Nearest => raw.round(),
            FeeRounding::Exact => raw,
        }
    }
}

/// Application settings.
///
/// Loaded from a JSON file; a missing file yields the defaults below, which
/// mirror the numbers the tracker started with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub accounts: Vec<AccountSettings>,
    #[serde(default)]
    pub fee_rounding: FeeRounding,
    /// Single fixed FX rate used to display foreign-account values in the
    /// base currency (KRW per USD).
    pub display_fx_rate: Decimal,
    /// Concentration limit per classification label, in percent of total
    /// assets. Labels absent from this table have no limit.
    pub concentration_limits: HashMap<String, Decimal>,
    /// Target-return holding window per classification label, in days
    /// (10 / 30 / 60). Labels absent from this table get no target bands.
    pub target_windows: HashMap<String, u32>,
}

impl Settings {
    /// Look up an account by id.
    pub fn account(&self, account_id: &str) -> Result<&AccountSettings> {
        self.accounts
            .iter()
            .find(|a| a.id == account_id)
            .ok_or_else(|| Error::MissingConfigKey(format!("account '{}'", account_id)))
    }

    /// Fee policy for an account.
    pub fn fee_policy(&self, account: &AccountSettings) -> FeePolicy {
        FeePolicy {
            rate: account.fee_rate,
            rounding: self.fee_rounding,
        }
    }

    /// Concentration limit for a classification label, if configured.
    pub fn concentration_limit(&self, label: &str) -> Option<Decimal> {
        self.concentration_limits.get(label).copied()
    }

    /// Target-return window for a classification label, if configured.
    pub fn target_window(&self, label: &str) -> Option<u32> {
        self.target_windows.get(label).copied()
    }
}

impl Default for Settings {
    fn default() -> Self {
        let concentration_limits = HashMap::from([
            ("FX & Commodities".to_string(), dec!(20)),
            ("Domestic Equity Sector".to_string(), dec!(15)),
            ("Domestic Equity Index".to_string(), dec!(30)),
            ("Domestic Bond Aggregate".to_string(), dec!(50)),
            ("Domestic Bond Corporate".to_string(), dec!(30)),
            ("Rate-Linked / Ultra-Short Bond".to_string(), dec!(50)),
            ("Foreign Equity Sector".to_string(), dec!(10)),
            ("Foreign Equity Index".to_string(), dec!(30)),
            ("Foreign Bond Aggregate".to_string(), dec!(50)),
            ("Foreign Bond Corporate".to_string(), dec!(30)),
        ]);

        let target_windows = HashMap::from([
            ("Domestic Equity Sector".to_string(), 30),
            ("Foreign Equity Sector".to_string(), 30),
            ("Foreign Equity Index".to_string(), 30),
            ("Domestic Equity Index".to_string(), 60),
            ("FX & Commodities".to_string(), 60),
            ("Domestic Bond Aggregate".to_string(), 60),
            ("Domestic Bond Corporate".to_string(), 60),
            ("Foreign Bond Aggregate".to_string(), 60),
            ("Foreign Bond Corporate".to_string(), 60),
            ("Rate-Linked / Ultra-Short Bond".to_string(), 60),
        ]);

        Settings {
            accounts: vec![
                AccountSettings {
                    id: "domestic".to_string(),
                    name: "Domestic brokerage".to_string(),
                    market: Market::Domestic,
                    currency: "KRW".to_string(),
                    initial_capital: dec!(800_000_000),
                    fee_rate: dec!(0.001),
                },
                AccountSettings {
                    id: "foreign".to_string(),
                    name: "Foreign brokerage".to_string(),
                    market: Market::Foreign,
                    currency: "USD".to_string(),
                    initial_capital: dec!(147_449),
                    fee_rate: dec!(0.002),
                },
            ],
            fee_rounding: FeeRounding::Floor,
            display_fx_rate: dec!(1379.1),
            concentration_limits,
            target_windows,
        }
    }
}
