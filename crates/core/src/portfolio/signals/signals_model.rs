//! Signal report domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// RSI classification against the 70/30 thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RsiSignal {
    Overbought,
    Oversold,
    Neutral,
}

/// Where the latest close sits relative to the Bollinger bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BollingerSignal {
    /// Close below the lower band: a buy signal.
    BelowLower,
    /// Close above the upper band: a sell warning.
    AboveUpper,
    InRange,
}

/// Trend strength from ADX against the 20 threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdxSignal {
    StrongTrend,
    WeakTrend,
}

/// Target and stop bands for one position, in percent.
///
/// Derived from the baseline daily return scaled by the classification's
/// holding window: the conservative target at 0.8x and the stretched one at
/// 1.2x (both floored), stops at minus half of each target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetBands {
    pub target_low_pct: f64,
    pub target_high_pct: f64,
    pub exit_low_pct: f64,
    pub exit_high_pct: f64,
}

/// One row of the signal report: the holding's return joined with its
/// target bands and the latest technical readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalRow {
    pub ticker: String,
    pub name: String,
    pub acquired_on: Option<NaiveDate>,
    /// Unrealized return of the holding, in percent.
    pub return_pct: Decimal,
    /// `None` when the classification has no holding window configured or
    /// the price history is too short to establish a baseline.
    pub bands: Option<TargetBands>,
    pub rsi: f64,
    pub rsi_signal: RsiSignal,
    pub bollinger_signal: BollingerSignal,
    pub adx: f64,
    pub adx_signal: AdxSignal,
}
