use super::primitives::CandleShape;
use crate::domain::chart::{Point, Rect, ScaleContext, Segment};
use crate::domain::market_data::CandleData;
use crate::domain::scene::{ThemeConfig, WICK_WIDTH};

/// Turns a candle and its entrance progress into body and wick geometry.
pub struct CandleRenderer<'a> {
    scale: &'a ScaleContext,
    theme: &'a ThemeConfig,
}

impl<'a> CandleRenderer<'a> {
    pub fn new(scale: &'a ScaleContext, theme: &'a ThemeConfig) -> Self {
        Self { scale, theme }
    }

    pub fn render(&self, index: usize, candle: &CandleData, progress: f64) -> CandleShape {
        let scale = self.scale;
        let cx = scale.x(index as f64);
        let body_top = scale.y(candle.body_high());
        let body_bottom = scale.y(candle.body_low());
        let body_height = body_bottom - body_top;
        let half_width = scale.candle_body_width / 2.0;

        let bullish = candle.is_bullish();
        let color = if bullish { &self.theme.bullish_color } else { &self.theme.bearish_color };

        CandleShape {
            index,
            bullish,
            color: color.clone(),
            // doji candles keep a visible 1px body
            body: Rect::new(cx - half_width, body_top, scale.candle_body_width, body_height.max(1.0)),
            upper_wick: Segment::new(Point::new(cx, scale.y(candle.high)), Point::new(cx, body_top)),
            lower_wick: Segment::new(Point::new(cx, body_bottom), Point::new(cx, scale.y(candle.low))),
            wick_width: WICK_WIDTH,
            progress,
            opacity: progress,
            scale_y: progress,
            origin_y: body_top + body_height / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scene::{ChartPadding, DEFAULT_THEME};

    fn scale() -> ScaleContext {
        let candles = [CandleData::new(100.0, 110.0, 90.0, 105.0), CandleData::new(105.0, 108.0, 95.0, 101.0)];
        ScaleContext::compute(&candles, 500.0, 320.0, &ChartPadding::default(), None).unwrap()
    }

    #[test]
    fn bullish_body_between_open_and_close() {
        let scale = scale();
        let renderer = CandleRenderer::new(&scale, &DEFAULT_THEME);
        let candle = CandleData::new(100.0, 110.0, 90.0, 105.0);
        let shape = renderer.render(0, &candle, 1.0);
        assert!(shape.bullish);
        assert_eq!(shape.color, DEFAULT_THEME.bullish_color);
        assert!((shape.body.y - scale.y(105.0)).abs() < 1e-9);
        assert!((shape.body.bottom() - scale.y(100.0)).abs() < 1e-9);
        assert_eq!(shape.body.width, scale.candle_body_width);
        assert_eq!(shape.upper_wick.from.y, scale.y(110.0));
        assert_eq!(shape.upper_wick.to.y, shape.body.y);
        assert_eq!(shape.lower_wick.to.y, scale.y(90.0));
    }

    #[test]
    fn doji_body_is_one_pixel() {
        let scale = scale();
        let renderer = CandleRenderer::new(&scale, &DEFAULT_THEME);
        let shape = renderer.render(1, &CandleData::new(100.0, 104.0, 96.0, 100.0), 0.5);
        assert!(shape.bullish);
        assert_eq!(shape.body.height, 1.0);
        assert_eq!(shape.origin_y, shape.body.y);
        assert_eq!(shape.opacity, 0.5);
        assert_eq!(shape.scale_y, 0.5);
    }

    #[test]
    fn bearish_uses_bearish_color() {
        let scale = scale();
        let renderer = CandleRenderer::new(&scale, &DEFAULT_THEME);
        let shape = renderer.render(1, &CandleData::new(105.0, 108.0, 95.0, 101.0), 1.0);
        assert!(!shape.bullish);
        assert_eq!(shape.color, DEFAULT_THEME.bearish_color);
    }
}
