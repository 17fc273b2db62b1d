//! Scene configuration records and their built-in defaults.

use derive_more::Constructor;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Body width as a fraction of the candle slot.
pub const CANDLE_WIDTH_RATIO: f64 = 0.6;
/// Wick stroke width in pixels.
pub const WICK_WIDTH: f64 = 2.0;
/// Extra headroom above the highest high and below the lowest low.
pub const PRICE_PADDING_RATIO: f64 = 0.05;

config_with_overrides! {
    /// Colors and typography of a chart scene.
    pub struct ThemeConfig / ThemeOverrides {
        background: String = "#0a0a0a".to_string(),
        grid_color: String = "#1a1a1a".to_string(),
        bullish_color: String = "#26a69a".to_string(),
        bearish_color: String = "#ef5350".to_string(),
        text_color: String = "#555555".to_string(),
        trend_line_color: String = "#FFD700".to_string(),
        channel_fill_color: String = "#FFD700".to_string(),
        annotation_color: String = "#ffffff".to_string(),
        font_family: String = "monospace".to_string(),
    }
}

config_with_overrides! {
    /// Entrance timing, in frames.
    pub struct TimingConfig / TimingOverrides {
        /// Frames between two consecutive candles.
        candle_interval: f64 = 4.0,
        trend_line_delay: f64 = 5.0,
        trend_line_duration: f64 = 20.0,
        annotation_delay: f64 = 10.0,
    }
}

config_with_overrides! {
    /// Camera panning. When enabled the chart is wider than the viewport.
    pub struct PanConfig / PanOverrides {
        enabled: bool = true,
        visible_candles: f64 = 12.0,
        /// Slots kept free between the newest candle and the right edge.
        lead_candles: f64 = 3.0,
    }
}

config_with_overrides! {
    /// Margins between the composition edge and the chart area, in pixels.
    pub struct ChartPadding / PaddingOverrides {
        top: f64 = 60.0,
        right: f64 = 80.0,
        bottom: f64 = 60.0,
        left: f64 = 20.0,
    }
}

/// Process-wide theme every scene override is resolved against.
pub static DEFAULT_THEME: Lazy<ThemeConfig> = Lazy::new(ThemeConfig::default);

/// Output surface supplied by the host runtime.
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct Composition {
    pub width: f64,
    pub height: f64,
    pub fps: f64,
}

impl Default for Composition {
    fn default() -> Self {
        Self { width: 1920.0, height: 1080.0, fps: 30.0 }
    }
}
