use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::Result;
use crate::portfolio::ledger::LotLedger;
use crate::portfolio::realized::{RealizedReport, RealizedTrade};
use crate::settings::Settings;
use crate::trades::{group_by_ticker, TradeServiceTrait, TradeSide};

/// Realized P&L calculator: replays the trade log through the FIFO lot
/// ledger and emits one row per sell event.
///
/// Like the unrealized report, everything is recomputed from the full log
/// on every call.
pub struct RealizedService {
    trade_service: Arc<dyn TradeServiceTrait>,
    settings: Arc<Settings>,
}

impl RealizedService {
    pub fn new(trade_service: Arc<dyn TradeServiceTrait>, settings: Arc<Settings>) -> Self {
        Self {
            trade_service,
            settings,
        }
    }

    /// Realized trades for an account, oldest sell first.
    pub fn report(&self, account_id: &str) -> Result<RealizedReport> {
        let account = self.settings.account(account_id)?;
        let fees = self.settings.fee_policy(account);
        let trades = self.trade_service.get_trades(account_id)?;

        let mut realized = Vec::new();

        for (ticker, group) in group_by_ticker(&trades) {
            let mut ledger = LotLedger::new();

            for trade in &group {
                let Some(matched) = ledger.apply(trade, &fees) else {
                    continue;
                };
                if matched.is_empty() {
                    debug!(
                        "Sell of {} on {} matched no open lots, skipping",
                        ticker, trade.trade_date
                    );
                    continue;
                }
                debug_assert_eq!(trade.side, TradeSide::Sell);

                // The full net proceeds count against the matched cost,
                // even when the sell quantity exceeded the open lots.
                let fee = fees.fee(trade.amount);
                let net_proceeds = trade.amount - fee;
                let profit = net_proceeds - matched.cost_with_fee;
                let return_pct = if matched.cost_with_fee.is_zero() {
                    None
                } else {
                    Some(profit / matched.cost_with_fee * dec!(100))
                };

                realized.push(RealizedTrade {
                    account_id: account_id.to_string(),
                    ticker: ticker.clone(),
                    name: trade.name.clone(),
                    category: trade.category.clone(),
                    sub_category: trade.sub_category.clone(),
                    buy_date: matched.last_acquired_on,
                    sell_date: trade.trade_date,
                    quantity: matched.quantity,
                    buy_unit_price: matched.cost_with_fee / matched.quantity,
                    sell_unit_price: net_proceeds / matched.quantity,
                    profit,
                    return_pct,
                });
            }
        }

        realized.sort_by_key(|r| r.sell_date);
        let total_profit = realized.iter().map(|r| r.profit).sum();

        Ok(RealizedReport {
            trades: realized,
            total_profit,
        })
    }
}
