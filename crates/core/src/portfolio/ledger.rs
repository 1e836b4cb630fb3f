//! FIFO lot ledger.
//!
//! One ordered queue of open buy lots per instrument, appended at the tail
//! on buys and consumed from the head on sells. Both the unrealized and the
//! realized calculators replay the trade log through this single
//! implementation, so the two reports can never disagree on lot matching.
//!
//! The ledger is ephemeral: it is rebuilt from the full log on every
//! computation pass, which keeps it correct under log edits and deletions.

use std::collections::VecDeque;

use chrono::NaiveDate;
use log::warn;
use rust_decimal::Decimal;

use crate::settings::FeePolicy;
use crate::trades::{Trade, TradeSide};

/// One open buy lot.
///
/// Invariant: partial consumption reduces `quantity`, `cost` and
/// `cost_with_fee` by the same proportion. A lot is removed from the queue
/// when its quantity reaches exactly zero.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenLot {
    pub quantity: Decimal,
    /// Remaining cost basis, fee-exclusive.
    pub cost: Decimal,
    /// Remaining cost basis including the buy-side fee.
    pub cost_with_fee: Decimal,
    pub acquired_on: NaiveDate,
}

/// What one sell event matched against the open lots.
#[derive(Debug, Clone, PartialEq)]
pub struct LotMatch {
    pub quantity: Decimal,
    pub cost: Decimal,
    pub cost_with_fee: Decimal,
    /// Acquisition date of the last lot this sell consumed from.
    pub last_acquired_on: Option<NaiveDate>,
}

impl LotMatch {
    fn empty() -> Self {
        LotMatch {
            quantity: Decimal::ZERO,
            cost: Decimal::ZERO,
            cost_with_fee: Decimal::ZERO,
            last_acquired_on: None,
        }
    }

    /// True when the sell matched no open quantity at all.
    pub fn is_empty(&self) -> bool {
        self.quantity.is_zero()
    }
}

/// Per-instrument FIFO queue of open lots.
#[derive(Debug, Default)]
pub struct LotLedger {
    lots: VecDeque<OpenLot>,
}

impl LotLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one trade. Buys push a lot and return `None`; sells consume
    /// from the head and return the match.
    pub fn apply(&mut self, trade: &Trade, fees: &FeePolicy) -> Option<LotMatch> {
        match trade.side {
            TradeSide::Buy => {
                let fee = fees.fee(trade.amount);
                self.record_buy(trade.quantity, trade.amount, fee, trade.trade_date);
                None
            }
            TradeSide::Sell => Some(self.record_sell(trade.quantity)),
        }
    }

    /// Push a new lot at the tail.
    pub fn record_buy(&mut self, quantity: Decimal, amount: Decimal, fee: Decimal, date: NaiveDate) {
        if quantity <= Decimal::ZERO {
            warn!("Skipping buy lot with non-positive quantity {}", quantity);
            return;
        }

        self.lots.push_back(OpenLot {
            quantity,
            cost: amount,
            cost_with_fee: amount + fee,
            acquired_on: date,
        });
    }

    /// Consume lots from the head until the sell quantity is satisfied.
    ///
    /// A sell exceeding all open quantity empties the queue and drops the
    /// leftover silently; the log tolerates that much data-entry slack.
    pub fn record_sell(&mut self, quantity: Decimal) -> LotMatch {
        let mut remaining = quantity;
        let mut matched = LotMatch::empty();

        if remaining <= Decimal::ZERO {
            warn!("Skipping sell with non-positive quantity {}", quantity);
            return matched;
        }

        while remaining > Decimal::ZERO {
            let Some(head) = self.lots.front_mut() else {
                warn!(
                    "Sell quantity exceeds open lots by {}, dropping leftover",
                    remaining
                );
                break;
            };

            if head.quantity > remaining {
                // Proportional allocation: quantity, cost and cost_with_fee
                // shrink by the same factor.
                let portion = remaining / head.quantity;
                let cost_portion = head.cost * portion;
                let cost_with_fee_portion = head.cost_with_fee * portion;

                head.quantity -= remaining;
                head.cost -= cost_portion;
                head.cost_with_fee -= cost_with_fee_portion;

                matched.quantity += remaining;
                matched.cost += cost_portion;
                matched.cost_with_fee += cost_with_fee_portion;
                matched.last_acquired_on = Some(head.acquired_on);
                remaining = Decimal::ZERO;
            } else {
                remaining -= head.quantity;
                matched.quantity += head.quantity;
                matched.cost += head.cost;
                matched.cost_with_fee += head.cost_with_fee;
                matched.last_acquired_on = Some(head.acquired_on);
                self.lots.pop_front();
            }
        }

        matched
    }

    /// Start date of the current (not historical) holding period: the
    /// acquisition date of the oldest still-open lot. `None` once the
    /// position fully closes, even if it later reopens.
    pub fn opened_on(&self) -> Option<NaiveDate> {
        self.lots.front().map(|lot| lot.acquired_on)
    }

    pub fn is_flat(&self) -> bool {
        self.lots.is_empty()
    }

    pub fn remaining_quantity(&self) -> Decimal {
        self.lots.iter().map(|lot| lot.quantity).sum()
    }

    pub fn remaining_cost(&self) -> Decimal {
        self.lots.iter().map(|lot| lot.cost).sum()
    }

    pub fn remaining_cost_with_fee(&self) -> Decimal {
        self.lots.iter().map(|lot| lot.cost_with_fee).sum()
    }

    /// Weighted average cost (fee-exclusive) of the open quantity.
    pub fn average_cost(&self) -> Option<Decimal> {
        let quantity = self.remaining_quantity();
        if quantity.is_zero() {
            None
        } else {
            Some(self.remaining_cost() / quantity)
        }
    }

    pub fn lots(&self) -> impl Iterator<Item = &OpenLot> {
        self.lots.iter()
    }
}
