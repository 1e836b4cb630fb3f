/// Lookback period for RSI
pub const RSI_PERIOD: usize = 14;

/// RSI level above which an instrument is considered overbought
pub const RSI_OVERBOUGHT: f64 = 70.0;

/// RSI level below which an instrument is considered oversold
pub const RSI_OVERSOLD: f64 = 30.0;

/// Lookback period for Bollinger bands
pub const BOLLINGER_PERIOD: usize = 20;

/// Bollinger band width in standard deviations
pub const BOLLINGER_STD_DEV: f64 = 2.0;

/// Lookback period for ADX
pub const ADX_PERIOD: usize = 14;

/// ADX level above which the trend is considered strong
pub const ADX_TREND_THRESHOLD: f64 = 20.0;

/// Number of trailing sessions used for the baseline daily return
pub const BASELINE_RETURN_WINDOW: usize = 120;

/// Floor for the conservative (0.8x) target-return band, as a fraction
pub const TARGET_FLOOR_LOW: f64 = 0.04;

/// Floor for the stretched (1.2x) target-return band, as a fraction
pub const TARGET_FLOOR_HIGH: f64 = 0.06;

/// A group is flagged when its weight reaches this share of its limit
pub const LIMIT_WARNING_RATIO: &str = "0.8";

/// Default settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";
