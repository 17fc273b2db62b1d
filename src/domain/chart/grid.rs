//! Horizontal price gridlines at "nice" 1/2/5 × 10^n increments.

use serde::Serialize;

use super::scale::ScaleContext;

/// Number of gridlines the step is tuned for.
pub const GRID_TARGET_LINES: usize = 8;
/// Gap between the chart area's right edge and the price labels.
pub const GRID_LABEL_OFFSET_X: f64 = 8.0;
/// Baseline shift that roughly centres a label on its line.
pub const GRID_LABEL_OFFSET_Y: f64 = 4.0;
pub const GRID_LABEL_FONT_SIZE: f64 = 13.0;

/// Round `range / target_lines` to a human-friendly step.
pub fn nice_step(range: f64, target_lines: usize) -> f64 {
    let rough = range / target_lines as f64;
    let magnitude = 10f64.powf(rough.log10().floor());
    let residual = rough / magnitude;
    if residual <= 1.5 {
        magnitude
    } else if residual <= 3.0 {
        2.0 * magnitude
    } else if residual <= 7.0 {
        5.0 * magnitude
    } else {
        10.0 * magnitude
    }
}

/// Decimal places for labels: sub-unit steps get cents.
pub fn label_precision(step: f64) -> usize {
    if step < 1.0 { 2 } else { 0 }
}

/// Multiples of `step` inside `[min, max]`, ascending.
pub fn grid_prices(min: f64, max: f64, step: f64) -> Vec<f64> {
    if !(step.is_finite() && step > 0.0) || !(min.is_finite() && max.is_finite()) {
        return Vec::new();
    }
    let mut prices = Vec::new();
    let mut price = (min / step).ceil() * step;
    while price <= max {
        prices.push(price);
        price += step;
    }
    prices
}

/// One horizontal gridline with its price label.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLine {
    pub price: f64,
    pub y: f64,
    pub x1: f64,
    pub x2: f64,
    pub label: String,
    pub label_x: f64,
    pub label_y: f64,
}

/// Gridlines spanning the whole chart area for the scale's price bounds.
pub fn grid_lines(scale: &ScaleContext) -> Vec<GridLine> {
    let step = nice_step(scale.price_span(), GRID_TARGET_LINES);
    let precision = label_precision(step);
    let area = scale.chart_area;
    grid_prices(scale.price_min, scale.price_max, step)
        .into_iter()
        .map(|price| {
            let y = scale.y(price);
            GridLine {
                price,
                y,
                x1: area.x,
                x2: area.right(),
                label: format!("{price:.precision$}"),
                label_x: area.right() + GRID_LABEL_OFFSET_X,
                label_y: y + GRID_LABEL_OFFSET_Y,
            }
        })
        .collect()
}
