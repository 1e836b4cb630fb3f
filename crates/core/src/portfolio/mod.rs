//! Portfolio calculators: the FIFO lot ledger and the reports built on it.

pub mod allocation;
pub mod cash;
pub mod holdings;
pub mod ledger;
pub mod realized;
pub mod signals;

pub use allocation::{AllocationDimension, AllocationGroup, AllocationService, PortfolioAllocations};
pub use cash::remaining_cash;
pub use holdings::{FeeMode, Holding, HoldingsService, PortfolioSummary};
pub use ledger::{LotLedger, LotMatch, OpenLot};
pub use realized::{RealizedReport, RealizedService, RealizedTrade};
pub use signals::{
    AdxSignal, BollingerSignal, RsiSignal, SignalRow, SignalsService, TargetBands,
};
