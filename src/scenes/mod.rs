//! Built-in chart scenes, addressable by id.

use crate::domain::market_data::CandleData;
use crate::domain::scene::{
    Annotation, AnnotationKind, ArrowDirection, ChannelData, PanOverrides, SceneDefinition, TimingOverrides,
    TrendLineData,
};

pub const DESCENDING_CHANNEL_BREAKOUT: &str = "descending-channel-breakout";

/// Ids accepted by [`by_name`].
pub const BUILTIN_SCENES: &[&str] = &[DESCENDING_CHANNEL_BREAKOUT];

pub fn by_name(name: &str) -> Option<SceneDefinition> {
    match name {
        DESCENDING_CHANNEL_BREAKOUT => Some(descending_channel_breakout()),
        _ => None,
    }
}

/// Descending channel, breakout on candle 12, retest on 14 and a rally.
pub fn descending_channel_breakout() -> SceneDefinition {
    const OHLC: [(f64, f64, f64, f64); 20] = [
        // channel
        (105.0, 106.0, 102.0, 103.0),
        (103.0, 105.0, 101.0, 104.0),
        (104.0, 105.0, 100.0, 101.0),
        (101.0, 103.0, 99.0, 102.0),
        (102.0, 103.0, 98.0, 99.0),
        (99.0, 101.0, 97.0, 100.0),
        (100.0, 101.0, 96.0, 97.0),
        (97.0, 99.0, 95.0, 98.0),
        (98.0, 99.0, 94.0, 95.0),
        (95.0, 97.0, 93.0, 96.0),
        (96.0, 97.0, 92.0, 93.0),
        (93.0, 95.0, 91.0, 92.0),
        // breakout
        (92.0, 99.0, 91.0, 98.0),
        // pullback and retest
        (98.0, 100.0, 96.0, 97.0),
        (97.0, 98.0, 93.0, 94.0),
        (94.0, 99.0, 93.0, 98.0),
        // rally
        (98.0, 102.0, 97.0, 101.0),
        (101.0, 105.0, 100.0, 104.0),
        (104.0, 107.0, 103.0, 106.0),
        (106.0, 110.0, 105.0, 109.0),
    ];
    const GOLD: &str = "#FFD700";
    const TEAL: &str = "#26a69a";

    let boundary = |start: f64, end: f64| {
        TrendLineData::new(0.0, start, 14.0, end).with_color(GOLD).with_stroke_width(2.0)
    };
    let marker = |index: f64, price: f64, color: &str, kind: AnnotationKind| Annotation {
        index,
        price,
        color: Some(color.to_string()),
        appear_frame: None,
        kind,
    };
    let label = |text: &str| AnnotationKind::Text { text: text.to_string(), font_size: Some(28.0) };

    SceneDefinition {
        candles: OHLC.iter().map(|&(o, h, l, c)| CandleData::new(o, h, l, c)).collect(),
        channels: vec![ChannelData {
            upper: boundary(106.0, 92.0),
            lower: boundary(100.0, 86.0),
            fill_color: None,
            fill_opacity: Some(0.06),
        }],
        annotations: vec![
            Annotation::circle(12.0, 99.0, 25.0).with_color(TEAL),
            marker(12.0, 101.0, TEAL, label("돌파")),
            Annotation::circle(14.5, 93.5, 22.0).with_color(GOLD),
            marker(14.5, 88.0, GOLD, label("리테스트")),
            marker(15.0, 99.0, TEAL, AnnotationKind::Arrow {
                direction: Some(ArrowDirection::Up),
                length: Some(35.0),
            }),
        ],
        timing: TimingOverrides {
            candle_interval: Some(5.0),
            trend_line_delay: Some(3.0),
            trend_line_duration: Some(25.0),
            annotation_delay: Some(8.0),
        },
        pan: PanOverrides { enabled: Some(true), visible_candles: Some(10.0), lead_candles: Some(3.0) },
        ..Default::default()
    }
}
