//! Drawable primitives handed to the host compositor.
//!
//! Everything here is plain data in composition pixels, serialised in
//! camelCase so the host can map it straight onto SVG/HTML attributes.

use serde::Serialize;

use crate::domain::chart::{Point, Rect, Segment};

/// Default stroke of trend lines, channel boundaries and annotation shapes.
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

/// Stroke dash that reveals a line from its start as progress goes 0 → 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashAnimation {
    /// Dash and gap length: the whole line.
    pub length: f64,
    /// `length × (1 − progress)`.
    pub offset: f64,
}

impl DashAnimation {
    pub fn reveal(length: f64, progress: f64) -> Self {
        Self { length, offset: length * (1.0 - progress) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandleShape {
    pub index: usize,
    pub bullish: bool,
    pub color: String,
    pub body: Rect,
    pub upper_wick: Segment,
    pub lower_wick: Segment,
    pub wick_width: f64,
    /// Raw spring value; may overshoot 1.
    pub progress: f64,
    pub opacity: f64,
    /// Vertical scale about `origin_y`.
    pub scale_y: f64,
    pub origin_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineShape {
    pub segment: Segment,
    pub color: String,
    pub stroke_width: f64,
    pub dash: DashAnimation,
    /// Caller supplied dash pattern, passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_pattern: Option<String>,
    pub progress: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelShape {
    /// Upper start, upper end, lower end, lower start.
    pub polygon: [Point; 4],
    pub fill_color: String,
    pub fill_opacity: f64,
    pub upper: LineShape,
    pub lower: LineShape,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowShape {
    pub tip: Point,
    pub tail: Point,
    pub color: String,
    pub stroke_width: f64,
    pub dash: DashAnimation,
    /// Tip followed by the two barbs.
    pub head: [Point; 3],
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleShape {
    pub center: Point,
    pub radius: f64,
    pub color: String,
    pub stroke_width: f64,
    pub opacity: f64,
}

/// Annotations drawn inside the pannable vector layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnnotationShape {
    Arrow(ArrowShape),
    Circle(CircleShape),
}

/// Text label anchored at its bottom centre.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextShape {
    pub anchor: Point,
    pub text: String,
    pub color: String,
    pub font_size: f64,
    pub font_family: String,
    /// Box shift in percent of its own size.
    pub translate_percent: (f64, f64),
    pub scale: f64,
    pub opacity: f64,
}
