//! Technical indicators over daily close series.
//!
//! All indicators work on plain `f64` slices: market math tolerates binary
//! floating point, unlike the money math in the portfolio calculators which
//! stays in `Decimal`. Each function returns a vector aligned with its
//! input; positions before the warm-up period hold the documented neutral
//! value.

mod adx;
mod rsi;

pub use adx::adx;
pub use rsi::rsi;

/// Bollinger band series: a moving average with bands a fixed number of
/// standard deviations above and below it.
#[derive(Debug, Clone)]
pub struct BollingerBands {
    pub middle: Vec<f64>,
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
}

/// Bollinger bands over a close series.
///
/// The window is the `period` closes ending at each position, inclusive;
/// the standard deviation is the population one. Positions before the
/// warm-up hold zero in all three bands.
pub fn bollinger_bands(closes: &[f64], period: usize, num_std: f64) -> BollingerBands {
    let n = closes.len();
    let mut middle = vec![0.0; n];
    let mut upper = vec![0.0; n];
    let mut lower = vec![0.0; n];

    if period == 0 {
        return BollingerBands { middle, upper, lower };
    }

    for i in (period - 1)..n {
        let window = &closes[i + 1 - period..=i];
        let mean = window.iter().sum::<f64>() / period as f64;
        let variance = window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / period as f64;
        let std = variance.sqrt();

        middle[i] = mean;
        upper[i] = mean + num_std * std;
        lower[i] = mean - num_std * std;
    }

    BollingerBands { middle, upper, lower }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_bracket_the_moving_average() {
        let closes: Vec<f64> = (0..40).map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0).collect();
        let bb = bollinger_bands(&closes, 20, 2.0);

        for i in 19..40 {
            assert!(bb.upper[i] >= bb.middle[i]);
            assert!(bb.lower[i] <= bb.middle[i]);
        }
    }

    #[test]
    fn constant_series_collapses_the_bands() {
        let closes = vec![100.0; 30];
        let bb = bollinger_bands(&closes, 20, 2.0);

        assert_eq!(bb.middle[29], 100.0);
        assert_eq!(bb.upper[29], 100.0);
        assert_eq!(bb.lower[29], 100.0);
    }

    #[test]
    fn warm_up_positions_are_zero() {
        let closes: Vec<f64> = (0..25).map(|i| 100.0 + i as f64).collect();
        let bb = bollinger_bands(&closes, 20, 2.0);

        assert_eq!(bb.middle[18], 0.0);
        assert!(bb.middle[19] > 0.0);
    }
}
