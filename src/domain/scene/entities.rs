use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

use super::config::{PaddingOverrides, PanOverrides, ThemeOverrides, TimingOverrides};
use crate::domain::market_data::CandleData;

/// Straight line between two (index, price) anchors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendLineData {
    pub start_index: f64,
    pub start_price: f64,
    pub end_index: f64,
    pub end_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash_array: Option<String>,
}

impl TrendLineData {
    pub fn new(start_index: f64, start_price: f64, end_index: f64, end_price: f64) -> Self {
        Self {
            start_index,
            start_price,
            end_index,
            end_price,
            color: None,
            stroke_width: None,
            dash_array: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    /// Index of the later anchor; the line waits for that candle.
    pub fn last_index(&self) -> f64 {
        self.start_index.max(self.end_index)
    }
}

/// Price band between two trend lines over the same index range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelData {
    pub upper: TrendLineData,
    pub lower: TrendLineData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
}

impl ChannelData {
    pub fn first_index(&self) -> f64 {
        self.upper.start_index.min(self.lower.start_index)
    }

    pub fn last_index(&self) -> f64 {
        self.upper.end_index.max(self.lower.end_index)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, StrumDisplay, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ArrowDirection {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl ArrowDirection {
    /// Screen-space displacement from tail to tip (y grows downwards).
    pub fn displacement(self, length: f64) -> (f64, f64) {
        match self {
            Self::Up => (0.0, -length),
            Self::Down => (0.0, length),
            Self::Left => (-length, 0.0),
            Self::Right => (length, 0.0),
        }
    }
}

/// Variant-specific part of an annotation, tagged by `type` in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, AsRefStr)]
#[serde(tag = "type", rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AnnotationKind {
    Text {
        #[serde(default)]
        text: String,
        #[serde(rename = "fontSize", default, skip_serializing_if = "Option::is_none")]
        font_size: Option<f64>,
    },
    Arrow {
        #[serde(rename = "arrowDirection", default, skip_serializing_if = "Option::is_none")]
        direction: Option<ArrowDirection>,
        #[serde(rename = "arrowLength", default, skip_serializing_if = "Option::is_none")]
        length: Option<f64>,
    },
    Circle {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        radius: Option<f64>,
    },
}

/// Marker placed at an (index, price) point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub index: f64,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Overrides the scheduled appear frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appear_frame: Option<f64>,
    #[serde(flatten)]
    pub kind: AnnotationKind,
}

impl Annotation {
    pub fn text(index: f64, price: f64, text: impl Into<String>) -> Self {
        Self::with_kind(index, price, AnnotationKind::Text { text: text.into(), font_size: None })
    }

    pub fn arrow(index: f64, price: f64, direction: ArrowDirection) -> Self {
        Self::with_kind(index, price, AnnotationKind::Arrow { direction: Some(direction), length: None })
    }

    pub fn circle(index: f64, price: f64, radius: f64) -> Self {
        Self::with_kind(index, price, AnnotationKind::Circle { radius: Some(radius) })
    }

    fn with_kind(index: f64, price: f64, kind: AnnotationKind) -> Self {
        Self { index, price, color: None, appear_frame: None, kind }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_appear_frame(mut self, frame: f64) -> Self {
        self.appear_frame = Some(frame);
        self
    }

    /// Text annotations live in a separate, translated layer.
    pub fn is_text(&self) -> bool {
        matches!(self.kind, AnnotationKind::Text { .. })
    }
}

/// Scene as supplied by the caller, before defaults are applied.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDefinition {
    pub candles: Vec<CandleData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trend_lines: Vec<TrendLineData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub channels: Vec<ChannelData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(default, skip_serializing_if = "TimingOverrides::is_empty")]
    pub timing: TimingOverrides,
    #[serde(default, skip_serializing_if = "ThemeOverrides::is_empty")]
    pub theme: ThemeOverrides,
    #[serde(default, skip_serializing_if = "PanOverrides::is_empty")]
    pub pan: PanOverrides,
    #[serde(default, skip_serializing_if = "PaddingOverrides::is_empty")]
    pub padding: PaddingOverrides,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn annotation_variants_parse_by_type_tag() {
        let json = r##"[
            {"type": "text", "index": 12, "price": 101, "text": "breakout", "fontSize": 28},
            {"type": "arrow", "index": 15, "price": 99, "arrowDirection": "up", "arrowLength": 35},
            {"type": "circle", "index": 14.5, "price": 93.5, "radius": 22, "color": "#FFD700", "appearFrame": 90}
        ]"##;
        let parsed: Vec<Annotation> = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed[0].kind,
            AnnotationKind::Text { text: "breakout".into(), font_size: Some(28.0) }
        );
        assert_eq!(
            parsed[1].kind,
            AnnotationKind::Arrow { direction: Some(ArrowDirection::Up), length: Some(35.0) }
        );
        assert_eq!(parsed[2].index, 14.5);
        assert_eq!(parsed[2].appear_frame, Some(90.0));
        assert_eq!(parsed[2].color.as_deref(), Some("#FFD700"));
        assert_eq!(parsed[2].kind.as_ref(), "circle");
    }

    #[test]
    fn unknown_annotation_type_rejected() {
        let json = r#"{"type": "star", "index": 1, "price": 2}"#;
        assert!(serde_json::from_str::<Annotation>(json).is_err());
    }

    #[test]
    fn arrow_direction_strings() {
        assert_eq!(ArrowDirection::from_str("left").unwrap(), ArrowDirection::Left);
        assert_eq!(ArrowDirection::Down.to_string(), "down");
        assert_eq!(ArrowDirection::Right.displacement(40.0), (40.0, 0.0));
        assert_eq!(ArrowDirection::Up.displacement(40.0), (0.0, -40.0));
    }

    #[test]
    fn channel_index_bounds() {
        let channel = ChannelData {
            upper: TrendLineData::new(0.0, 106.0, 14.0, 92.0),
            lower: TrendLineData::new(1.0, 100.0, 12.0, 86.0),
            fill_color: None,
            fill_opacity: None,
        };
        assert_eq!(channel.first_index(), 0.0);
        assert_eq!(channel.last_index(), 14.0);
    }
}
