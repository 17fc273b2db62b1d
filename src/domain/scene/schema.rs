//! Scene parsing and validation.
//!
//! A scene is parsed with serde (shape errors) and then checked field by
//! field (value errors). Only a [`ResolvedScene`] reaches the renderer, so
//! partially-invalid data is never drawn.

use super::config::{ChartPadding, DEFAULT_THEME, PanConfig, ThemeConfig, TimingConfig};
use super::entities::{Annotation, AnnotationKind, ChannelData, SceneDefinition, TrendLineData};
use crate::domain::errors::{SceneError, SceneResult};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{CandleData, PriceRange};
use crate::{log_debug, log_warn};

/// Parse a scene definition from JSON.
pub fn parse_scene(json: &str) -> SceneResult<SceneDefinition> {
    serde_json::from_str(json).map_err(SceneError::from)
}

/// Parse and validate in one step.
pub fn load_scene(json: &str) -> SceneResult<ResolvedScene> {
    parse_scene(json)?.resolve()
}

/// Scene with every configuration field resolved and every value checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedScene {
    pub candles: Vec<CandleData>,
    pub trend_lines: Vec<TrendLineData>,
    pub channels: Vec<ChannelData>,
    pub annotations: Vec<Annotation>,
    pub timing: TimingConfig,
    pub theme: ThemeConfig,
    pub pan: PanConfig,
    pub padding: ChartPadding,
}

impl SceneDefinition {
    /// Merge overrides onto the defaults and validate the result.
    pub fn resolve(&self) -> SceneResult<ResolvedScene> {
        let scene = ResolvedScene {
            candles: self.candles.clone(),
            trend_lines: self.trend_lines.clone(),
            channels: self.channels.clone(),
            annotations: self.annotations.clone(),
            timing: self.timing.resolve(),
            theme: self.theme.apply(&DEFAULT_THEME),
            pan: self.pan.resolve(),
            padding: self.padding.resolve(),
        };
        scene.validate()?;
        log_debug!(
            LogComponent::Domain("Schema"),
            "scene resolved: {} candles, {} lines, {} channels, {} annotations",
            scene.candles.len(),
            scene.trend_lines.len(),
            scene.channels.len(),
            scene.annotations.len()
        );
        Ok(scene)
    }
}

impl ResolvedScene {
    pub fn validate(&self) -> SceneResult<()> {
        self.validate_candles()?;
        self.validate_timing()?;
        self.validate_pan()?;
        self.validate_padding()?;
        for (i, line) in self.trend_lines.iter().enumerate() {
            validate_line(&format!("trendLines[{i}]"), line)?;
        }
        for (i, channel) in self.channels.iter().enumerate() {
            validate_channel(&format!("channels[{i}]"), channel)?;
        }
        for (i, annotation) in self.annotations.iter().enumerate() {
            validate_annotation(&format!("annotations[{i}]"), annotation)?;
        }
        Ok(())
    }

    fn validate_candles(&self) -> SceneResult<()> {
        if self.candles.is_empty() {
            return Err(SceneError::InsufficientData("scene has no candles".into()));
        }
        if let Some(i) = self.candles.iter().position(|c| !c.is_finite()) {
            return Err(SceneError::validation(format!("candles[{i}]"), "must contain finite prices"));
        }
        if let Some(i) = self.candles.iter().position(|c| !c.is_consistent()) {
            log_warn!(
                LogComponent::Domain("Schema"),
                "candles[{i}]: high/low do not enclose open/close; drawn as given"
            );
        }
        // Checked so the scale's vertical mapping never divides by zero.
        let range = PriceRange::of(&self.candles)
            .ok_or_else(|| SceneError::InsufficientData("scene has no candles".into()))?;
        if range.span() <= 0.0 {
            return Err(SceneError::InsufficientData(format!(
                "all candles share the price {}; the price range is empty",
                range.min
            )));
        }
        Ok(())
    }

    fn validate_timing(&self) -> SceneResult<()> {
        let t = &self.timing;
        positive("timing.candleInterval", t.candle_interval)?;
        positive("timing.trendLineDuration", t.trend_line_duration)?;
        non_negative("timing.trendLineDelay", t.trend_line_delay)?;
        non_negative("timing.annotationDelay", t.annotation_delay)
    }

    fn validate_pan(&self) -> SceneResult<()> {
        if !self.pan.enabled {
            return Ok(());
        }
        positive("pan.visibleCandles", self.pan.visible_candles)?;
        non_negative("pan.leadCandles", self.pan.lead_candles)?;
        if self.pan.lead_candles > self.pan.visible_candles {
            return Err(SceneError::validation(
                "pan.leadCandles",
                format!("must not exceed pan.visibleCandles ({})", self.pan.visible_candles),
            ));
        }
        Ok(())
    }

    fn validate_padding(&self) -> SceneResult<()> {
        let p = &self.padding;
        non_negative("padding.top", p.top)?;
        non_negative("padding.right", p.right)?;
        non_negative("padding.bottom", p.bottom)?;
        non_negative("padding.left", p.left)
    }
}

fn validate_line(path: &str, line: &TrendLineData) -> SceneResult<()> {
    finite(&format!("{path}.startIndex"), line.start_index)?;
    finite(&format!("{path}.startPrice"), line.start_price)?;
    finite(&format!("{path}.endIndex"), line.end_index)?;
    finite(&format!("{path}.endPrice"), line.end_price)?;
    if let Some(width) = line.stroke_width {
        positive(&format!("{path}.strokeWidth"), width)?;
    }
    Ok(())
}

fn validate_channel(path: &str, channel: &ChannelData) -> SceneResult<()> {
    validate_line(&format!("{path}.upper"), &channel.upper)?;
    validate_line(&format!("{path}.lower"), &channel.lower)?;
    if let Some(opacity) = channel.fill_opacity {
        if !(0.0..=1.0).contains(&opacity) {
            return Err(SceneError::validation(format!("{path}.fillOpacity"), "must be within [0, 1]"));
        }
    }
    Ok(())
}

fn validate_annotation(path: &str, annotation: &Annotation) -> SceneResult<()> {
    finite(&format!("{path}.index"), annotation.index)?;
    finite(&format!("{path}.price"), annotation.price)?;
    if let Some(frame) = annotation.appear_frame {
        finite(&format!("{path}.appearFrame"), frame)?;
    }
    match &annotation.kind {
        AnnotationKind::Text { font_size, .. } => {
            if let Some(size) = font_size {
                positive(&format!("{path}.fontSize"), *size)?;
            }
        }
        AnnotationKind::Arrow { length, .. } => {
            if let Some(length) = length {
                positive(&format!("{path}.arrowLength"), *length)?;
            }
        }
        AnnotationKind::Circle { radius } => {
            if let Some(radius) = radius {
                positive(&format!("{path}.radius"), *radius)?;
            }
        }
    }
    Ok(())
}

fn finite(field: &str, value: f64) -> SceneResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SceneError::validation(field, "must be a finite number"))
    }
}

fn positive(field: &str, value: f64) -> SceneResult<()> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(SceneError::validation(field, format!("must be greater than 0, got {value}")))
    }
}

fn non_negative(field: &str, value: f64) -> SceneResult<()> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(SceneError::validation(field, format!("must not be negative, got {value}")))
    }
}
