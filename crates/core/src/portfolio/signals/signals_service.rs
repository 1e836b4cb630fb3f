use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;
use num_traits::ToPrimitive;
use tradefolio_market_data::Candle;

use crate::constants::{
    ADX_PERIOD, ADX_TREND_THRESHOLD, BASELINE_RETURN_WINDOW, BOLLINGER_PERIOD, BOLLINGER_STD_DEV,
    RSI_OVERBOUGHT, RSI_OVERSOLD, RSI_PERIOD, TARGET_FLOOR_HIGH, TARGET_FLOOR_LOW,
};
use crate::indicators::{adx, bollinger_bands, rsi};
use crate::market_data::PriceSnapshot;
use crate::portfolio::holdings::Holding;
use crate::portfolio::signals::{
    AdxSignal, BollingerSignal, RsiSignal, SignalRow, TargetBands,
};
use crate::settings::Settings;

/// Builds the per-position signal report: target/stop bands scaled from the
/// instrument's own baseline return, plus the latest RSI, Bollinger, and
/// ADX readings.
pub struct SignalsService {
    settings: Arc<Settings>,
}

impl SignalsService {
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }

    /// One row per open holding with price history; priceless tickers are
    /// skipped, never an error.
    pub fn report(&self, holdings: &[Holding], snapshot: &PriceSnapshot) -> Vec<SignalRow> {
        let mut rows = Vec::new();

        for holding in holdings {
            let Some(candles) = snapshot.series(&holding.ticker) else {
                debug!("No price history for {}, excluding from signal report", holding.ticker);
                continue;
            };
            if candles.is_empty() {
                continue;
            }

            let closes: Vec<f64> = candles
                .iter()
                .map(|c| c.close.to_f64().unwrap_or(0.0))
                .collect();
            let highs: Vec<f64> = candles
                .iter()
                .map(|c| c.high.to_f64().unwrap_or(0.0))
                .collect();
            let lows: Vec<f64> = candles
                .iter()
                .map(|c| c.low.to_f64().unwrap_or(0.0))
                .collect();

            let bands = holding
                .acquired_on
                .and_then(|acquired_on| self.target_bands(holding, candles, &closes, acquired_on));

            let rsi_last = last(&rsi(&closes, RSI_PERIOD));
            let rsi_signal = if rsi_last > RSI_OVERBOUGHT {
                RsiSignal::Overbought
            } else if rsi_last < RSI_OVERSOLD {
                RsiSignal::Oversold
            } else {
                RsiSignal::Neutral
            };

            let bb = bollinger_bands(&closes, BOLLINGER_PERIOD, BOLLINGER_STD_DEV);
            let close_last = last(&closes);
            let bollinger_signal = if closes.len() < BOLLINGER_PERIOD {
                BollingerSignal::InRange
            } else if close_last < last(&bb.lower) {
                BollingerSignal::BelowLower
            } else if close_last > last(&bb.upper) {
                BollingerSignal::AboveUpper
            } else {
                BollingerSignal::InRange
            };

            let adx_last = last(&adx(&highs, &lows, &closes, ADX_PERIOD));
            let adx_signal = if adx_last > ADX_TREND_THRESHOLD {
                AdxSignal::StrongTrend
            } else {
                AdxSignal::WeakTrend
            };

            rows.push(SignalRow {
                ticker: holding.ticker.clone(),
                name: holding.name.clone(),
                acquired_on: holding.acquired_on,
                return_pct: holding.return_pct,
                bands,
                rsi: rsi_last,
                rsi_signal,
                bollinger_signal,
                adx: adx_last,
                adx_signal,
            });
        }

        rows
    }

    /// Target bands from the baseline daily return: the mean over the
    /// trailing sessions (capped at the baseline window) ending at the
    /// acquisition date, scaled by the classification's holding window.
    fn target_bands(
        &self,
        holding: &Holding,
        candles: &[Candle],
        closes: &[f64],
        acquired_on: NaiveDate,
    ) -> Option<TargetBands> {
        let window = self.settings.target_window(holding.group_label())?;

        let mut returns = Vec::new();
        for i in 1..candles.len() {
            if candles[i].date > acquired_on {
                break;
            }
            if closes[i - 1] != 0.0 {
                returns.push((closes[i] - closes[i - 1]) / closes[i - 1]);
            }
        }
        if returns.is_empty() {
            return None;
        }

        let tail = &returns[returns.len().saturating_sub(BASELINE_RETURN_WINDOW)..];
        let baseline = tail.iter().sum::<f64>() / tail.len() as f64;

        let scaled = baseline * window as f64;
        let target_low = (scaled * 0.8).max(TARGET_FLOOR_LOW);
        let target_high = (scaled * 1.2).max(TARGET_FLOOR_HIGH);

        Some(TargetBands {
            target_low_pct: target_low * 100.0,
            target_high_pct: target_high * 100.0,
            exit_low_pct: target_low * -0.5 * 100.0,
            exit_high_pct: target_high * -0.5 * 100.0,
        })
    }
}

fn last(values: &[f64]) -> f64 {
    values.last().copied().unwrap_or(0.0)
}
