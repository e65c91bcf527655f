// =============================================================================
// Indicator Parameters
// =============================================================================
//
// Window lengths for the full indicator catalogue.  Every field carries a
// serde default so a partial `indicator_params` block in the runtime config
// still loads.

use serde::{Deserialize, Serialize};

fn default_ma_periods() -> Vec<usize> {
    vec![5, 10, 20, 60, 120, 250]
}

fn default_macd_fast() -> usize {
    12
}

fn default_macd_slow() -> usize {
    26
}

fn default_macd_signal() -> usize {
    9
}

fn default_14() -> usize {
    14
}

fn default_20() -> usize {
    20
}

fn default_kdj_n() -> usize {
    9
}

fn default_kdj_m() -> usize {
    3
}

fn default_bb_k() -> f64 {
    2.0
}

fn default_roc_period() -> usize {
    12
}

fn default_aroon_period() -> usize {
    25
}

fn default_tenkan() -> usize {
    9
}

fn default_kijun() -> usize {
    26
}

fn default_senkou_b() -> usize {
    52
}

fn default_displacement() -> usize {
    26
}

/// Windows for every indicator in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorParams {
    /// Periods for the simple and exponential moving averages.
    #[serde(default = "default_ma_periods")]
    pub ma_periods: Vec<usize>,

    #[serde(default = "default_macd_fast")]
    pub macd_fast: usize,
    #[serde(default = "default_macd_slow")]
    pub macd_slow: usize,
    #[serde(default = "default_macd_signal")]
    pub macd_signal: usize,

    #[serde(default = "default_14")]
    pub rsi_period: usize,

    /// RSV look-back.
    #[serde(default = "default_kdj_n")]
    pub kdj_n: usize,
    /// K smoothing; alpha = 1 / m1.
    #[serde(default = "default_kdj_m")]
    pub kdj_m1: usize,
    /// D smoothing; alpha = 1 / m2.
    #[serde(default = "default_kdj_m")]
    pub kdj_m2: usize,

    #[serde(default = "default_20")]
    pub bollinger_period: usize,
    /// Band distance in standard deviations.
    #[serde(default = "default_bb_k")]
    pub bollinger_k: f64,

    #[serde(default = "default_14")]
    pub atr_period: usize,
    #[serde(default = "default_14")]
    pub adx_period: usize,
    #[serde(default = "default_20")]
    pub obv_ma_period: usize,
    #[serde(default = "default_20")]
    pub cci_period: usize,
    #[serde(default = "default_14")]
    pub williams_period: usize,
    #[serde(default = "default_14")]
    pub mfi_period: usize,
    #[serde(default = "default_roc_period")]
    pub roc_period: usize,
    #[serde(default = "default_aroon_period")]
    pub aroon_period: usize,

    #[serde(default = "default_tenkan")]
    pub ichimoku_tenkan: usize,
    #[serde(default = "default_kijun")]
    pub ichimoku_kijun: usize,
    #[serde(default = "default_senkou_b")]
    pub ichimoku_senkou_b: usize,
    /// Forward shift of the cloud and backward shift of the lagging line.
    #[serde(default = "default_displacement")]
    pub ichimoku_displacement: usize,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            ma_periods: default_ma_periods(),
            macd_fast: default_macd_fast(),
            macd_slow: default_macd_slow(),
            macd_signal: default_macd_signal(),
            rsi_period: default_14(),
            kdj_n: default_kdj_n(),
            kdj_m1: default_kdj_m(),
            kdj_m2: default_kdj_m(),
            bollinger_period: default_20(),
            bollinger_k: default_bb_k(),
            atr_period: default_14(),
            adx_period: default_14(),
            obv_ma_period: default_20(),
            cci_period: default_20(),
            williams_period: default_14(),
            mfi_period: default_14(),
            roc_period: default_roc_period(),
            aroon_period: default_aroon_period(),
            ichimoku_tenkan: default_tenkan(),
            ichimoku_kijun: default_kijun(),
            ichimoku_senkou_b: default_senkou_b(),
            ichimoku_displacement: default_displacement(),
        }
    }
}
