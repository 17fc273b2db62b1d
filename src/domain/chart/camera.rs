//! Horizontal camera that follows the newest candle.

use serde::Serialize;

use super::scale::ScaleContext;
use super::value_objects::ViewBox;
use crate::domain::scene::{ChartPadding, PanConfig, TimingConfig};

/// Per-frame horizontal offset of every pannable layer.
///
/// The offset is a direct function of the frame number: there is no velocity
/// or easing state carried between frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    pub enabled: bool,
    pub candle_interval: f64,
    pub visible_candles: f64,
    pub lead_candles: f64,
    pub slot_width: f64,
    pub padding_left: f64,
    /// Full chart width including both horizontal paddings.
    pub content_width: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Camera {
    pub fn new(
        pan: &PanConfig,
        timing: &TimingConfig,
        scale: &ScaleContext,
        padding: &ChartPadding,
        viewport_width: f64,
        viewport_height: f64,
    ) -> Self {
        Self {
            enabled: pan.enabled,
            candle_interval: timing.candle_interval,
            visible_candles: pan.visible_candles,
            lead_candles: pan.lead_candles,
            slot_width: scale.candle_slot_width,
            padding_left: padding.left,
            content_width: scale.candle_slot_width * scale.candle_count as f64 + padding.left + padding.right,
            viewport_width,
            viewport_height,
        }
    }

    /// Largest offset that still keeps the last candle inside the viewport.
    pub fn max_scroll(&self) -> f64 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    /// Offset that puts the newest candle `lead_candles` slots from the right edge.
    pub fn target_x(&self, frame: f64) -> f64 {
        let current_candle = frame / self.candle_interval;
        let left_edge_candle = current_candle - (self.visible_candles - self.lead_candles);
        self.padding_left + left_edge_candle * self.slot_width
    }

    /// Clamped offset for `frame`; always 0 when panning is disabled.
    pub fn offset_at(&self, frame: f64) -> f64 {
        if !self.enabled {
            return 0.0;
        }
        self.target_x(frame).min(self.max_scroll()).max(0.0)
    }

    pub fn view_box(&self, frame: f64) -> ViewBox {
        ViewBox::new(self.offset_at(frame), 0.0, self.viewport_width, self.viewport_height)
    }
}
