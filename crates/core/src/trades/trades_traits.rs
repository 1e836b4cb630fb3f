use crate::errors::Result;
use crate::trades::{NewTrade, Trade};

/// Durable trade log storage, one ordered log per account.
pub trait TradeRepositoryTrait: Send + Sync {
    /// Load the full log for an account. A missing or malformed store
    /// yields an empty log, never an error.
    fn load(&self, account_id: &str) -> Result<Vec<Trade>>;

    /// Persist the full log for an account, replacing what was there.
    fn replace_all(&self, account_id: &str, trades: &[Trade]) -> Result<()>;
}

/// Trade log operations exposed to the input layer.
pub trait TradeServiceTrait: Send + Sync {
    /// Snapshot of the log, stably sorted by trade date.
    fn get_trades(&self, account_id: &str) -> Result<Vec<Trade>>;

    /// Validate and append a trade. Sells are pre-checked against the
    /// aggregate available quantity; a rejected trade leaves the log
    /// untouched.
    fn add_trade(&self, account_id: &str, new_trade: NewTrade) -> Result<Trade>;

    /// Delete the selected trades and return the remaining ordered log.
    fn delete_trades(&self, account_id: &str, trade_ids: &[String]) -> Result<Vec<Trade>>;
}
