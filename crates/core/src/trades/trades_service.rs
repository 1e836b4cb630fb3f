use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::errors::Result;
use crate::trades::{
    sort_by_date, NewTrade, Trade, TradeError, TradeRepositoryTrait, TradeServiceTrait, TradeSide,
};

/// Entry-time service over the trade log.
///
/// Calculators never mutate the log; they read a snapshot through
/// [`TradeServiceTrait::get_trades`]. Mutation happens only here.
pub struct TradeService {
    repository: Arc<dyn TradeRepositoryTrait>,
}

impl TradeService {
    pub fn new(repository: Arc<dyn TradeRepositoryTrait>) -> Self {
        Self { repository }
    }

    /// Aggregate buy-minus-sell quantity for a ticker.
    ///
    /// This is deliberately coarser than FIFO lot matching: it only guards
    /// data entry against overselling, and can admit a sell the ledger will
    /// satisfy with a different lot split than the user may expect.
    fn available_quantity(trades: &[Trade], ticker: &str) -> Decimal {
        trades
            .iter()
            .filter(|t| t.ticker == ticker)
            .map(|t| match t.side {
                TradeSide::Buy => t.quantity,
                TradeSide::Sell => -t.quantity,
            })
            .sum()
    }
}

impl TradeServiceTrait for TradeService {
    fn get_trades(&self, account_id: &str) -> Result<Vec<Trade>> {
        let mut trades = self.repository.load(account_id)?;
        sort_by_date(&mut trades);
        Ok(trades)
    }

    fn add_trade(&self, account_id: &str, new_trade: NewTrade) -> Result<Trade> {
        new_trade.validate()?;

        let mut trades = self.repository.load(account_id)?;

        if new_trade.side == TradeSide::Sell {
            let available = Self::available_quantity(&trades, &new_trade.ticker);
            if new_trade.quantity > available {
                return Err(TradeError::InsufficientHoldings {
                    ticker: new_trade.ticker,
                    requested: new_trade.quantity,
                    available,
                }
                .into());
            }
        }

        let trade = Trade {
            id: Uuid::new_v4().to_string(),
            account_id: account_id.to_string(),
            ticker: new_trade.ticker,
            name: new_trade.name,
            category: new_trade.category,
            sub_category: new_trade.sub_category,
            trade_date: new_trade.trade_date,
            side: new_trade.side,
            quantity: new_trade.quantity,
            unit_price: new_trade.amount / new_trade.quantity,
            amount: new_trade.amount,
        };

        trades.push(trade.clone());
        sort_by_date(&mut trades);
        self.repository.replace_all(account_id, &trades)?;

        debug!(
            "Appended {:?} {} x{} to trade log {}",
            trade.side, trade.ticker, trade.quantity, account_id
        );
        Ok(trade)
    }

    fn delete_trades(&self, account_id: &str, trade_ids: &[String]) -> Result<Vec<Trade>> {
        let mut trades = self.repository.load(account_id)?;
        let before = trades.len();
        trades.retain(|t| !trade_ids.contains(&t.id));

        if trades.len() != before {
            self.repository.replace_all(account_id, &trades)?;
            debug!(
                "Deleted {} trades from trade log {}",
                before - trades.len(),
                account_id
            );
        }

        sort_by_date(&mut trades);
        Ok(trades)
    }
}
