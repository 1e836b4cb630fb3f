use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::Result;
use crate::market_data::PriceSnapshot;
use crate::portfolio::cash::remaining_cash;
use crate::portfolio::holdings::{FeeMode, Holding, PortfolioSummary};
use crate::portfolio::ledger::LotLedger;
use crate::settings::Settings;
use crate::trades::{group_by_ticker, TradeServiceTrait};

/// Position calculator: replays the trade log through the FIFO lot ledger
/// and evaluates the open lots against the latest known close.
///
/// Everything is recomputed from the full log on every call; there is no
/// cached derived state to invalidate when the log is edited.
pub struct HoldingsService {
    trade_service: Arc<dyn TradeServiceTrait>,
    settings: Arc<Settings>,
}

impl HoldingsService {
    pub fn new(trade_service: Arc<dyn TradeServiceTrait>, settings: Arc<Settings>) -> Self {
        Self {
            trade_service,
            settings,
        }
    }

    /// Open positions for an account, sorted by profit descending.
    ///
    /// Instruments that are fully closed or have no price in the snapshot
    /// contribute no row.
    pub fn holdings(
        &self,
        account_id: &str,
        fee_mode: FeeMode,
        snapshot: &PriceSnapshot,
    ) -> Result<Vec<Holding>> {
        let account = self.settings.account(account_id)?;
        let fees = self.settings.fee_policy(account);
        let trades = self.trade_service.get_trades(account_id)?;

        let mut holdings = Vec::new();

        for (ticker, group) in group_by_ticker(&trades) {
            let Some(latest_price) = snapshot.latest_close(&ticker) else {
                debug!("No price for {}, excluding from unrealized report", ticker);
                continue;
            };

            let mut ledger = LotLedger::new();
            for trade in &group {
                ledger.apply(trade, &fees);
            }

            if ledger.is_flat() {
                continue;
            }

            let quantity = ledger.remaining_quantity();
            let total_cost = ledger.remaining_cost();
            let total_cost_with_fee = ledger.remaining_cost_with_fee();
            let market_value = latest_price * quantity;

            let (profit, cost_base) = match fee_mode {
                FeeMode::Exclusive => (market_value - total_cost, total_cost),
                FeeMode::Inclusive => (
                    market_value - total_cost_with_fee - fees.fee(market_value),
                    total_cost_with_fee,
                ),
            };
            let return_pct = if cost_base.is_zero() {
                Decimal::ZERO
            } else {
                profit / cost_base * dec!(100)
            };

            // Classification and name come from the most recent trade.
            let last = match group.last() {
                Some(last) => *last,
                None => continue,
            };

            holdings.push(Holding {
                account_id: account_id.to_string(),
                ticker,
                name: last.name.clone(),
                category: last.category.clone(),
                sub_category: last.sub_category.clone(),
                acquired_on: ledger.opened_on(),
                quantity,
                average_cost: ledger.average_cost().unwrap_or(Decimal::ZERO),
                total_cost,
                total_cost_with_fee,
                latest_price,
                market_value,
                profit,
                return_pct,
            });
        }

        holdings.sort_by(|a, b| b.profit.cmp(&a.profit));
        Ok(holdings)
    }

    /// Account-level rollup: total profit, overall return against initial
    /// capital, market value, remaining cash, and total assets.
    pub fn summary(
        &self,
        account_id: &str,
        fee_mode: FeeMode,
        snapshot: &PriceSnapshot,
    ) -> Result<PortfolioSummary> {
        let account = self.settings.account(account_id)?;
        let fees = self.settings.fee_policy(account);

        let holdings = self.holdings(account_id, fee_mode, snapshot)?;
        let trades = self.trade_service.get_trades(account_id)?;

        let total_profit: Decimal = holdings.iter().map(|h| h.profit).sum();
        let market_value: Decimal = holdings.iter().map(|h| h.market_value).sum();
        let cash = remaining_cash(&trades, account, &fees);

        let total_return_pct = if account.initial_capital.is_zero() {
            Decimal::ZERO
        } else {
            total_profit / account.initial_capital * dec!(100)
        };

        Ok(PortfolioSummary {
            currency: account.currency.clone(),
            total_profit,
            total_return_pct,
            market_value,
            cash,
            total_assets: market_value + cash,
        })
    }
}
