//! Average Directional Index.

/// ADX over daily high/low/close series, using Wilder's smoothing
/// throughout.
///
/// The first value sits at index `2 * period - 1` (one warm-up for the
/// directional indices, a second for their average); earlier positions
/// hold zero. Readings above ~20-25 mark a trending market.
pub fn adx(highs: &[f64], lows: &[f64], closes: &[f64], period: usize) -> Vec<f64> {
    let n = highs.len().min(lows.len()).min(closes.len());
    let mut result = vec![0.0; n];

    if period == 0 || n < 2 * period {
        return result;
    }

    // True range and directional movement, defined from the second bar on.
    let mut tr = vec![0.0; n];
    let mut plus_dm = vec![0.0; n];
    let mut minus_dm = vec![0.0; n];

    for i in 1..n {
        let high_low = highs[i] - lows[i];
        let high_close = (highs[i] - closes[i - 1]).abs();
        let low_close = (lows[i] - closes[i - 1]).abs();
        tr[i] = high_low.max(high_close).max(low_close);

        let up_move = highs[i] - highs[i - 1];
        let down_move = lows[i - 1] - lows[i];
        if up_move > down_move && up_move > 0.0 {
            plus_dm[i] = up_move;
        }
        if down_move > up_move && down_move > 0.0 {
            minus_dm[i] = down_move;
        }
    }

    // Wilder-smoothed running sums, seeded over the first period.
    let mut sm_tr: f64 = tr[1..=period].iter().sum();
    let mut sm_plus: f64 = plus_dm[1..=period].iter().sum();
    let mut sm_minus: f64 = minus_dm[1..=period].iter().sum();

    let mut dx = vec![0.0; n];
    for i in period..n {
        if i > period {
            sm_tr = sm_tr - sm_tr / period as f64 + tr[i];
            sm_plus = sm_plus - sm_plus / period as f64 + plus_dm[i];
            sm_minus = sm_minus - sm_minus / period as f64 + minus_dm[i];
        }

        if sm_tr > 0.0 {
            let plus_di = 100.0 * sm_plus / sm_tr;
            let minus_di = 100.0 * sm_minus / sm_tr;
            let di_sum = plus_di + minus_di;
            if di_sum > 0.0 {
                dx[i] = 100.0 * (plus_di - minus_di).abs() / di_sum;
            }
        }
    }

    // ADX seeds with the simple average of the first period of DX values,
    // then continues with Wilder's smoothing.
    let first = 2 * period - 1;
    result[first] = dx[period..=first].iter().sum::<f64>() / period as f64;
    for i in (first + 1)..n {
        result[i] = (result[i - 1] * (period - 1) as f64 + dx[i]) / period as f64;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(closes: &[f64]) -> (Vec<f64>, Vec<f64>) {
        let highs: Vec<f64> = closes.iter().map(|c| c + 1.0).collect();
        let lows: Vec<f64> = closes.iter().map(|c| c - 1.0).collect();
        (highs, lows)
    }

    #[test]
    fn strong_trend_reads_high() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + 2.0 * i as f64).collect();
        let (highs, lows) = series(&closes);

        let values = adx(&highs, &lows, &closes, 14);
        assert!(values[59] > 25.0);
    }

    #[test]
    fn flat_market_reads_low() {
        let closes: Vec<f64> = (0..60)
            .map(|i| if i % 2 == 0 { 100.5 } else { 99.5 })
            .collect();
        let (highs, lows) = series(&closes);

        let values = adx(&highs, &lows, &closes, 14);
        assert!(values[59] < 20.0);
    }

    #[test]
    fn values_stay_in_bounds() {
        let closes: Vec<f64> = (0..80).map(|i| 100.0 + (i as f64 * 0.4).sin() * 6.0).collect();
        let (highs, lows) = series(&closes);

        for value in adx(&highs, &lows, &closes, 14) {
            assert!((0.0..=100.0).contains(&value));
        }
    }

    #[test]
    fn short_series_yields_zeros() {
        let closes = vec![100.0; 10];
        let (highs, lows) = series(&closes);
        assert!(adx(&highs, &lows, &closes, 14).iter().all(|&v| v == 0.0));
    }
}
