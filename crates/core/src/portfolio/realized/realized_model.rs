//! Realized P&L domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One sell event matched against its FIFO buy lots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealizedTrade {
    pub account_id: String,
    pub ticker: String,
    pub name: String,
    pub category: String,
    pub sub_category: Option<String>,
    /// Acquisition date of the last buy lot the sell consumed from. A sell
    /// matching no open lot carries no buy date.
    pub buy_date: Option<NaiveDate>,
    pub sell_date: NaiveDate,
    /// Quantity actually matched against open lots; an oversold sell
    /// matches only what was open, while its full net proceeds still
    /// count toward `profit`.
    pub quantity: Decimal,
    /// Fee-inclusive matched cost divided by the matched quantity.
    pub buy_unit_price: Decimal,
    /// Net proceeds (amount minus sell-side fee) divided by the matched
    /// quantity.
    pub sell_unit_price: Decimal,
    /// Net proceeds minus the fee-inclusive matched cost.
    pub profit: Decimal,
    /// Profit over fee-inclusive matched cost, in percent. `None` when the
    /// matched cost is zero and no meaningful ratio exists.
    pub return_pct: Option<Decimal>,
}

/// All realized trades of an account, oldest sell first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealizedReport {
    pub trades: Vec<RealizedTrade>,
    pub total_profit: Decimal,
}
