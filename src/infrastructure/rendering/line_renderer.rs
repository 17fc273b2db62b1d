use super::primitives::{ChannelShape, DEFAULT_STROKE_WIDTH, DashAnimation, LineShape};
use crate::domain::chart::{ScaleContext, Segment};
use crate::domain::scene::{ChannelData, ThemeConfig, TrendLineData};

/// Channel fill opacity when the scene does not set one.
pub const DEFAULT_CHANNEL_FILL_OPACITY: f64 = 0.08;

/// Trend lines and channels; both reveal themselves with a dash offset.
pub struct LineRenderer<'a> {
    scale: &'a ScaleContext,
    theme: &'a ThemeConfig,
}

impl<'a> LineRenderer<'a> {
    pub fn new(scale: &'a ScaleContext, theme: &'a ThemeConfig) -> Self {
        Self { scale, theme }
    }

    pub fn trend_line(&self, line: &TrendLineData, progress: f64) -> LineShape {
        let segment = Segment::new(
            self.scale.point(line.start_index, line.start_price),
            self.scale.point(line.end_index, line.end_price),
        );
        LineShape {
            segment,
            color: line.color.clone().unwrap_or_else(|| self.theme.trend_line_color.clone()),
            stroke_width: line.stroke_width.unwrap_or(DEFAULT_STROKE_WIDTH),
            dash: DashAnimation::reveal(segment.length(), progress),
            dash_pattern: line.dash_array.clone(),
            progress,
        }
    }

    /// `line_progress` drives both boundaries, `fill_progress` the polygon.
    pub fn channel(&self, channel: &ChannelData, line_progress: f64, fill_progress: f64) -> ChannelShape {
        let (upper, lower) = (&channel.upper, &channel.lower);
        let polygon = [
            self.scale.point(upper.start_index, upper.start_price),
            self.scale.point(upper.end_index, upper.end_price),
            self.scale.point(lower.end_index, lower.end_price),
            self.scale.point(lower.start_index, lower.start_price),
        ];
        ChannelShape {
            polygon,
            fill_color: channel.fill_color.clone().unwrap_or_else(|| self.theme.channel_fill_color.clone()),
            fill_opacity: channel.fill_opacity.unwrap_or(DEFAULT_CHANNEL_FILL_OPACITY) * fill_progress,
            upper: self.trend_line(upper, line_progress),
            lower: self.trend_line(lower, line_progress),
        }
    }
}
