//! Holdings domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether brokerage fees are included in the cost basis and deducted from
/// the projected sale when computing unrealized profit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeeMode {
    #[default]
    Inclusive,
    Exclusive,
}

/// One open position, evaluated against the latest known close.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub account_id: String,
    pub ticker: String,
    pub name: String,
    pub category: String,
    pub sub_category: Option<String>,
    /// Start of the current continuous holding period. Always set for an
    /// open position; cleared (and later reset) across a full closure.
    pub acquired_on: Option<NaiveDate>,
    pub quantity: Decimal,
    /// Weighted average cost per unit, fee-exclusive.
    pub average_cost: Decimal,
    /// Total remaining cost basis, fee-exclusive.
    pub total_cost: Decimal,
    /// Total remaining cost basis including buy-side fees.
    pub total_cost_with_fee: Decimal,
    pub latest_price: Decimal,
    /// `quantity * latest_price`.
    pub market_value: Decimal,
    pub profit: Decimal,
    pub return_pct: Decimal,
}

impl Holding {
    /// The label used for limit and target-window lookups: the secondary
    /// classification level when present, the primary one otherwise.
    pub fn group_label(&self) -> &str {
        self.sub_category.as_deref().unwrap_or(&self.category)
    }
}

/// Account-level rollup of the unrealized report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub currency: String,
    pub total_profit: Decimal,
    /// Total profit against the account's initial capital, in percent.
    pub total_return_pct: Decimal,
    /// Sum of open position market values.
    pub market_value: Decimal,
    pub cash: Decimal,
    /// `market_value + cash`.
    pub total_assets: Decimal,
}

impl PortfolioSummary {
    /// The same summary converted at a fixed display FX rate. Used to show
    /// foreign-account values in the base currency; the conversion is
    /// display-only and never feeds back into any calculation.
    pub fn converted(&self, fx_rate: Decimal, currency: &str) -> PortfolioSummary {
        PortfolioSummary {
            currency: currency.to_string(),
            total_profit: self.total_profit * fx_rate,
            total_return_pct: self.total_return_pct,
            market_value: self.market_value * fx_rate,
            cash: self.cash * fx_rate,
            total_assets: self.total_assets * fx_rate,
        }
    }
}
