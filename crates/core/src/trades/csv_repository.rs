use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use crate::errors::Result;
use crate::trades::{Trade, TradeError, TradeRepositoryTrait};

/// CSV-backed trade log store, one file per account under a data directory.
///
/// A missing or unreadable file is an empty log (initial state), never an
/// error; only write failures surface to the caller.
pub struct CsvTradeRepository {
    directory: PathBuf,
}

impl CsvTradeRepository {
    pub fn new(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    fn log_path(&self, account_id: &str) -> PathBuf {
        self.directory.join(format!("trading_log_{}.csv", account_id))
    }
}

impl TradeRepositoryTrait for CsvTradeRepository {
    fn load(&self, account_id: &str) -> Result<Vec<Trade>> {
        let path = self.log_path(account_id);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = match csv::Reader::from_path(&path) {
            Ok(reader) => reader,
            Err(e) => {
                warn!(
                    "Trade log {} could not be opened ({}), treating as empty",
                    path.display(),
                    e
                );
                return Ok(Vec::new());
            }
        };

        let mut trades = Vec::new();
        for record in reader.deserialize::<Trade>() {
            match record {
                Ok(trade) => trades.push(trade),
                Err(e) => {
                    warn!(
                        "Trade log {} is malformed ({}), treating as empty",
                        path.display(),
                        e
                    );
                    return Ok(Vec::new());
                }
            }
        }

        Ok(trades)
    }

    fn replace_all(&self, account_id: &str, trades: &[Trade]) -> Result<()> {
        fs::create_dir_all(&self.directory)
            .map_err(|e| TradeError::Storage(format!("{}: {}", self.directory.display(), e)))?;

        let path = self.log_path(account_id);
        let mut writer = csv::Writer::from_path(&path)
            .map_err(|e| TradeError::Storage(format!("{}: {}", path.display(), e)))?;

        for trade in trades {
            writer
                .serialize(trade)
                .map_err(|e| TradeError::Storage(format!("{}: {}", path.display(), e)))?;
        }
        writer
            .flush()
            .map_err(|e| TradeError::Storage(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }
}
