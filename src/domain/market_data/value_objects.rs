use derive_more::Constructor;
use serde::{Deserialize, Serialize};

/// One OHLC price bar. Its only identity is the position in the series.
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct CandleData {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl CandleData {
    /// `close == open` counts as bullish.
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }

    pub fn body_high(&self) -> f64 {
        self.open.max(self.close)
    }

    pub fn body_low(&self) -> f64 {
        self.open.min(self.close)
    }

    /// Checks the OHLC ordering callers assume; the engine does not enforce it.
    pub fn is_consistent(&self) -> bool {
        self.high >= self.body_high() && self.low <= self.body_low()
    }

    pub fn is_finite(&self) -> bool {
        self.open.is_finite() && self.high.is_finite() && self.low.is_finite() && self.close.is_finite()
    }
}

/// Closed price interval
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// Lowest low and highest high of the series, in one pass.
    pub fn of(candles: &[CandleData]) -> Option<Self> {
        if candles.is_empty() {
            return None;
        }
        let (min, max) = candles
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), c| (lo.min(c.low), hi.max(c.high)));
        Some(Self { min, max })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Widen both ends by `ratio` of the span.
    pub fn padded(&self, ratio: f64) -> Self {
        let pad = self.span() * ratio;
        Self { min: self.min - pad, max: self.max + pad }
    }
}
