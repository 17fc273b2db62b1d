//! Piecewise-linear interpolation with easing and per-side extrapolation.

use std::f64::consts::PI;

use crate::domain::errors::{SceneError, SceneResult};

/// What happens to inputs outside the input range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolate {
    /// Continue the edge segment's slope.
    #[default]
    Extend,
    /// Hold the edge value.
    Clamp,
    /// Return the input unchanged.
    Identity,
}

/// Base easing curves on `[0, 1]`, in their "ease-in" form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    Linear,
    Quad,
    Cubic,
    Sin,
    Circle,
    Exp,
}

impl Curve {
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::Quad => t * t,
            Self::Cubic => t * t * t,
            Self::Sin => 1.0 - (t * PI / 2.0).cos(),
            Self::Circle => 1.0 - (1.0 - t * t).sqrt(),
            Self::Exp => 2f64.powf(10.0 * (t - 1.0)),
        }
    }
}

/// Easing applied to the normalised position inside a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    In(Curve),
    /// Mirror of `In`: `1 - c(1 - t)`.
    Out(Curve),
    InOut(Curve),
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::In(curve) => curve.apply(t),
            Self::Out(curve) => 1.0 - curve.apply(1.0 - t),
            Self::InOut(curve) => {
                if t < 0.5 {
                    curve.apply(t * 2.0) / 2.0
                } else {
                    1.0 - curve.apply((1.0 - t) * 2.0) / 2.0
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InterpolateOptions {
    pub easing: Easing,
    pub extrapolate_left: Extrapolate,
    pub extrapolate_right: Extrapolate,
}

impl InterpolateOptions {
    /// Clamp on both sides.
    pub fn clamped() -> Self {
        Self { extrapolate_left: Extrapolate::Clamp, extrapolate_right: Extrapolate::Clamp, ..Self::default() }
    }

    /// Extend to the left, clamp to the right.
    pub fn clamp_right() -> Self {
        Self { extrapolate_right: Extrapolate::Clamp, ..Self::default() }
    }

    pub fn with_easing(self, easing: Easing) -> Self {
        Self { easing, ..self }
    }
}

/// Map `input` through the piecewise-linear function defined by the two ranges.
///
/// `input_range` must be strictly increasing, both ranges must have the same
/// length (at least 2) and contain only finite values.
pub fn interpolate(
    input: f64,
    input_range: &[f64],
    output_range: &[f64],
    options: InterpolateOptions,
) -> SceneResult<f64> {
    check_ranges(input_range, output_range)?;
    let segment = find_segment(input, input_range);
    Ok(interpolate_segment(
        input,
        (input_range[segment], input_range[segment + 1]),
        (output_range[segment], output_range[segment + 1]),
        options,
    ))
}

/// `clamp(local / duration, 0, 1)` for a validated positive duration.
pub fn clamped_progress(local_frame: f64, duration: f64) -> f64 {
    interpolate_segment(local_frame, (0.0, duration), (0.0, 1.0), InterpolateOptions::clamped())
}

fn check_ranges(input_range: &[f64], output_range: &[f64]) -> SceneResult<()> {
    if input_range.len() < 2 {
        return Err(SceneError::Animation("input range needs at least 2 stops".into()));
    }
    if input_range.len() != output_range.len() {
        return Err(SceneError::Animation(format!(
            "input range has {} stops but output range has {}",
            input_range.len(),
            output_range.len()
        )));
    }
    if input_range.iter().chain(output_range).any(|v| !v.is_finite()) {
        return Err(SceneError::Animation("ranges must contain finite numbers".into()));
    }
    if input_range.windows(2).any(|w| w[1] <= w[0]) {
        return Err(SceneError::Animation(format!(
            "input range must be strictly increasing, got {input_range:?}"
        )));
    }
    Ok(())
}

/// Index of the segment whose upper stop is the first one `>= input`;
/// inputs past the last stop use the final segment.
fn find_segment(input: f64, input_range: &[f64]) -> usize {
    let last = input_range.len() - 1;
    (1..last).find(|&i| input_range[i] >= input).unwrap_or(last) - 1
}

fn interpolate_segment(
    input: f64,
    (in_min, in_max): (f64, f64),
    (out_min, out_max): (f64, f64),
    options: InterpolateOptions,
) -> f64 {
    let mut value = input;
    if value < in_min {
        match options.extrapolate_left {
            Extrapolate::Identity => return value,
            Extrapolate::Clamp => value = in_min,
            Extrapolate::Extend => {}
        }
    }
    if value > in_max {
        match options.extrapolate_right {
            Extrapolate::Identity => return value,
            Extrapolate::Clamp => value = in_max,
            Extrapolate::Extend => {}
        }
    }
    if out_min == out_max {
        return out_min;
    }
    let t = options.easing.apply((value - in_min) / (in_max - in_min));
    t * (out_max - out_min) + out_min
}
