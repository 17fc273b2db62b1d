//! Appear frames and entrance progress for every scene element.

use super::interpolate::{Easing, clamped_progress};
use super::spring::{SpringConfig, spring};
use crate::domain::scene::{Annotation, ChannelData, TimingConfig, TrendLineData};

/// Drawable element categories, each with its own entrance curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Candle,
    TrendLine,
    ChannelLine,
    ChannelFill,
    Annotation,
}

/// How local frames map to entrance progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressCurve {
    Spring(SpringConfig),
    /// `clamp(local / duration, 0, 1)` shaped by `easing`.
    Linear { duration: f64, easing: Easing },
}

impl ProgressCurve {
    pub fn progress(&self, local_frame: f64, fps: f64) -> f64 {
        match self {
            Self::Spring(config) => spring(local_frame, fps, config),
            Self::Linear { duration, easing } => easing.apply(clamped_progress(local_frame, *duration)),
        }
    }
}

/// Maps elements to appear frames and frames to progress.
///
/// Every answer is a pure function of the frame: nothing is remembered
/// between calls, so frames can be asked for in any order.
#[derive(Debug, Clone, PartialEq)]
pub struct AppearScheduler {
    pub timing: TimingConfig,
    pub fps: f64,
}

impl AppearScheduler {
    pub fn new(timing: TimingConfig, fps: f64) -> Self {
        Self { timing, fps }
    }

    pub fn curve(&self, kind: ElementKind) -> ProgressCurve {
        let linear = ProgressCurve::Linear { duration: self.timing.trend_line_duration, easing: Easing::Linear };
        match kind {
            ElementKind::Candle => ProgressCurve::Spring(SpringConfig::CANDLE),
            ElementKind::Annotation => ProgressCurve::Spring(SpringConfig::ANNOTATION),
            ElementKind::TrendLine | ElementKind::ChannelLine | ElementKind::ChannelFill => linear,
        }
    }

    /// Fractional indices appear between their neighbours' frames.
    pub fn candle_appear(&self, index: f64) -> f64 {
        index * self.timing.candle_interval
    }

    pub fn line_appear(&self, line: &TrendLineData) -> f64 {
        self.after_last_anchor(line.last_index())
    }

    /// Waits for the earliest start and the latest end, whichever comes later.
    pub fn channel_appear(&self, channel: &ChannelData) -> f64 {
        self.after_last_anchor(channel.first_index().max(channel.last_index()))
    }

    pub fn annotation_appear(&self, annotation: &Annotation) -> f64 {
        annotation
            .appear_frame
            .unwrap_or_else(|| self.candle_appear(annotation.index) + self.timing.annotation_delay)
    }

    fn after_last_anchor(&self, last_index: f64) -> f64 {
        self.candle_appear(last_index) + self.timing.trend_line_delay
    }

    /// Frames elapsed since `appear`, or `None` while the element is absent.
    pub fn local_frame(&self, frame: f64, appear: f64) -> Option<f64> {
        (frame >= appear).then(|| frame - appear)
    }

    pub fn progress(&self, kind: ElementKind, frame: f64, appear: f64) -> Option<f64> {
        let curve = self.curve(kind);
        self.local_frame(frame, appear).map(|local| curve.progress(local, self.fps))
    }

    pub fn candle_progress(&self, index: usize, frame: f64) -> Option<f64> {
        self.progress(ElementKind::Candle, frame, self.candle_appear(index as f64))
    }

    pub fn annotation_progress(&self, annotation: &Annotation, frame: f64) -> Option<f64> {
        self.progress(ElementKind::Annotation, frame, self.annotation_appear(annotation))
    }
}
