//! Relative Strength Index with Wilder's smoothing.

/// RSI from smoothed average gain and loss, with the degenerate cases
/// pinned: all gains is 100, all losses is 0, no movement is 50.
#[inline]
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss <= 0.0 {
        if avg_gain <= 0.0 {
            50.0
        } else {
            100.0
        }
    } else if avg_gain <= 0.0 {
        0.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}

/// RSI over a close series.
///
/// The first complete value sits at index `period`, seeded with the simple
/// average of the first `period` gains and losses; later values use
/// Wilder's smoothing. Positions before the warm-up, and the whole output
/// when the series is too short, hold the neutral 50.
pub fn rsi(closes: &[f64], period: usize) -> Vec<f64> {
    let n = closes.len();
    let mut result = vec![50.0; n];

    if period == 0 || n <= period {
        return result;
    }

    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;

    for i in 1..=period {
        let change = closes[i] - closes[i - 1];
        if change > 0.0 {
            avg_gain += change;
        } else {
            avg_loss -= change;
        }
    }
    avg_gain /= period as f64;
    avg_loss /= period as f64;
    result[period] = rsi_from_averages(avg_gain, avg_loss);

    let alpha = 1.0 / period as f64;
    for i in (period + 1)..n {
        let change = closes[i] - closes[i - 1];
        let (gain, loss) = if change > 0.0 {
            (change, 0.0)
        } else {
            (0.0, -change)
        };

        avg_gain = alpha * gain + (1.0 - alpha) * avg_gain;
        avg_loss = alpha * loss + (1.0 - alpha) * avg_loss;
        result[i] = rsi_from_averages(avg_gain, avg_loss);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotone_series_pins_the_extremes() {
        let up: Vec<f64> = (0..25).map(|i| 100.0 + i as f64).collect();
        let down: Vec<f64> = (0..25).map(|i| 100.0 - i as f64).collect();

        assert!(rsi(&up, 14)[24] > 70.0);
        assert!(rsi(&down, 14)[24] < 30.0);
    }

    #[test]
    fn values_stay_in_bounds() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 0.5).sin() * 8.0).collect();
        for value in rsi(&closes, 14) {
            assert!((0.0..=100.0).contains(&value));
        }
    }

    #[test]
    fn alternating_series_hovers_near_neutral() {
        let closes: Vec<f64> = (0..30)
            .map(|i| if i % 2 == 0 { 101.0 } else { 99.0 })
            .collect();
        let values = rsi(&closes, 14);
        assert!(values[29] > 40.0 && values[29] < 60.0);
    }

    #[test]
    fn short_series_stays_neutral() {
        let closes = vec![100.0, 101.0, 102.0];
        assert!(rsi(&closes, 14).iter().all(|&v| v == 50.0));
    }
}
