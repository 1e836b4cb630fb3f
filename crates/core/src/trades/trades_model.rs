//! Trade domain models.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::trades::TradeError;

/// Buy or sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeSide {
    Buy,
    Sell,
}

/// One manually-entered trade.
///
/// Amounts are gross, in the account's native currency. `unit_price` is the
/// implied average price (`amount / quantity`); it is informational and is
/// never re-parsed from a formatted string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub account_id: String,
    pub ticker: String,
    pub name: String,
    /// Primary classification label.
    pub category: String,
    /// Secondary classification label; the foreign log has only one level.
    pub sub_category: Option<String>,
    pub trade_date: NaiveDate,
    pub side: TradeSide,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub amount: Decimal,
}

impl Trade {
    /// The label used for grouping and limit lookups: the secondary level
    /// when present, the primary one otherwise.
    pub fn group_label(&self) -> &str {
        self.sub_category.as_deref().unwrap_or(&self.category)
    }
}

/// Input model for entering a new trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrade {
    pub ticker: String,
    pub name: String,
    pub category: String,
    pub sub_category: Option<String>,
    pub trade_date: NaiveDate,
    pub side: TradeSide,
    pub quantity: Decimal,
    pub amount: Decimal,
}

impl NewTrade {
    pub fn validate(&self) -> Result<()> {
        if self.ticker.trim().is_empty() {
            return Err(ValidationError::MissingField("ticker".to_string()).into());
        }
        if !self.quantity.is_sign_positive() || self.quantity.is_zero() {
            return Err(TradeError::Invalid(format!(
                "quantity must be positive, got {}",
                self.quantity
            ))
            .into());
        }
        if self.amount.is_sign_negative() || self.amount.is_zero() {
            return Err(TradeError::Invalid(format!(
                "amount must be positive, got {}",
                self.amount
            ))
            .into());
        }
        Ok(())
    }
}

/// Stable sort by trade date. Ties keep their original input order, which
/// is what determines FIFO matching for same-day trades.
pub fn sort_by_date(trades: &mut [Trade]) {
    trades.sort_by_key(|t| t.trade_date);
}

/// Explicit grouping step: ticker -> ordered trades, tickers in order of
/// first appearance. The input must already be date-sorted; groups preserve
/// that order.
pub fn group_by_ticker<'a>(trades: &'a [Trade]) -> Vec<(String, Vec<&'a Trade>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<&'a Trade>)> = Vec::new();

    for trade in trades {
        match index.get(trade.ticker.as_str()) {
            Some(&i) => groups[i].1.push(trade),
            None => {
                index.insert(trade.ticker.as_str(), groups.len());
                groups.push((trade.ticker.clone(), vec![trade]));
            }
        }
    }

    groups
}
