//! Cash balance tracker.

use rust_decimal::Decimal;

use crate::settings::{AccountSettings, FeePolicy};
use crate::trades::{Trade, TradeSide};

/// Remaining cash after replaying the full trade log from the account's
/// initial capital. Buys cost `amount + fee`, sells return `amount - fee`.
///
/// A pure fold: order within the log does not change the result, but the
/// log handed in is the chronological snapshot the other calculators use.
pub fn remaining_cash(trades: &[Trade], account: &AccountSettings, fees: &FeePolicy) -> Decimal {
    let mut cash = account.initial_capital;
    for trade in trades {
        let fee = fees.fee(trade.amount);
        match trade.side {
            TradeSide::Buy => cash -= trade.amount + fee,
            TradeSide::Sell => cash += trade.amount - fee,
        }
    }
    cash
}
