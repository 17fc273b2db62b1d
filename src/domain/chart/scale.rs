//! Index/price to pixel mapping.

use serde::Serialize;

use super::value_objects::{Point, Rect};
use crate::domain::errors::{SceneError, SceneResult};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{CandleData, PriceRange};
use crate::domain::scene::{CANDLE_WIDTH_RATIO, ChartPadding, PRICE_PADDING_RATIO, PanConfig};
use crate::log_debug;

/// Coordinate mapping derived from a candle series and the composition size.
///
/// Pure derived view: recompute it whenever the candles, the composition or
/// the pan configuration change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleContext {
    pub candle_slot_width: f64,
    pub candle_body_width: f64,
    pub price_min: f64,
    pub price_max: f64,
    /// Spans every candle slot, so it is wider than the viewport when panning.
    pub chart_area: Rect,
    pub candle_count: usize,
}

impl ScaleContext {
    /// Derive the scale. `pan` switches from fit-all to fixed slot width.
    pub fn compute(
        candles: &[CandleData],
        width: f64,
        height: f64,
        padding: &ChartPadding,
        pan: Option<&PanConfig>,
    ) -> SceneResult<Self> {
        let raw = PriceRange::of(candles)
            .ok_or_else(|| SceneError::InsufficientData("cannot scale an empty candle series".into()))?;
        if !(raw.span() > 0.0) {
            return Err(SceneError::InsufficientData(format!(
                "price range {}..{} is empty",
                raw.min, raw.max
            )));
        }
        let prices = raw.padded(PRICE_PADDING_RATIO);

        let chart_height = height - padding.top - padding.bottom;
        let viewable_width = width - padding.left - padding.right;
        if !(chart_height > 0.0 && viewable_width > 0.0) {
            return Err(SceneError::InvalidDimensions { width, height });
        }

        let candle_slot_width = match pan.filter(|p| p.enabled) {
            Some(pan) if pan.visible_candles > 0.0 => viewable_width / pan.visible_candles,
            Some(_) => {
                return Err(SceneError::validation("pan.visibleCandles", "must be greater than 0"));
            }
            None => viewable_width / candles.len() as f64,
        };

        let chart_area = Rect::new(
            padding.left,
            padding.top,
            candle_slot_width * candles.len() as f64,
            chart_height,
        );

        log_debug!(
            LogComponent::Domain("Scale"),
            "prices {:.2}..{:.2}, slot {:.2}px over {} candles",
            prices.min,
            prices.max,
            candle_slot_width,
            candles.len()
        );

        Ok(Self {
            candle_slot_width,
            candle_body_width: candle_slot_width * CANDLE_WIDTH_RATIO,
            price_min: prices.min,
            price_max: prices.max,
            chart_area,
            candle_count: candles.len(),
        })
    }

    /// Horizontal centre of the slot at `index`; fractional indices fall between slots.
    pub fn x(&self, index: f64) -> f64 {
        self.chart_area.x + (index + 0.5) * self.candle_slot_width
    }

    /// Vertical pixel of `price`; higher prices map to smaller y.
    pub fn y(&self, price: f64) -> f64 {
        self.chart_area.y + self.chart_area.height
            - (price - self.price_min) / (self.price_max - self.price_min) * self.chart_area.height
    }

    pub fn point(&self, index: f64, price: f64) -> Point {
        Point::new(self.x(index), self.y(price))
    }

    pub fn price_span(&self) -> f64 {
        self.price_max - self.price_min
    }
}
