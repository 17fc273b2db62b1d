//! Damped harmonic oscillator stepped once per video frame.
//!
//! The spring starts at rest at 0 and is pulled towards 1. For every frame
//! `f` up to the requested one the state advances analytically to
//! `t = f / fps` seconds, with each step limited to 64 ms:
//!
//! * `ζ = c / (2·√(k·m))`, `ω₀ = √(k/m)`, `ω₁ = ω₀·√(1 − ζ²)`
//! * under-damped (`ζ < 1`):
//!   `x(t) = 1 − e^(−ζω₀t)·(sin(ω₁t)·(v₀ + ζω₀x₀)/ω₁ + x₀·cos(ω₁t))`
//! * otherwise the critically-damped solution
//!   `x(t) = 1 − e^(−ω₀t)·(x₀ + (v₀ + ω₀x₀)·t)`
//!
//! where `x₀` is the remaining distance to the target and `v₀` the negated
//! velocity at the start of the step. Stepping per frame (rather than
//! evaluating one closed form) keeps results identical to frame-by-frame
//! playback for any fps.

use serde::{Deserialize, Serialize};

use crate::domain::errors::{SceneError, SceneResult};

/// Longest simulated step, in milliseconds.
const MAX_STEP_MS: f64 = 64.0;
/// Distance to the target and speed below which the spring counts as settled.
const REST_THRESHOLD: f64 = 1e-6;
/// Frames simulated at most; an undamped spring never settles.
const MAX_STEPS: u64 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpringConfig {
    pub damping: f64,
    pub mass: f64,
    pub stiffness: f64,
    /// Never report progress above 1.
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self { damping: 10.0, mass: 1.0, stiffness: 100.0, overshoot_clamping: false }
    }
}

impl SpringConfig {
    /// Candle pop-in.
    pub const CANDLE: SpringConfig =
        SpringConfig { damping: 15.0, mass: 0.4, stiffness: 120.0, overshoot_clamping: false };
    /// Text, arrow and circle annotations.
    pub const ANNOTATION: SpringConfig =
        SpringConfig { damping: 18.0, mass: 0.5, stiffness: 100.0, overshoot_clamping: false };
    /// Channel name in the intro.
    pub const INTRO_TITLE: SpringConfig =
        SpringConfig { damping: 12.0, mass: 1.0, stiffness: 100.0, overshoot_clamping: false };

    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    pub fn validate(&self) -> SceneResult<()> {
        for (name, value) in [("damping", self.damping), ("mass", self.mass), ("stiffness", self.stiffness)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SceneError::Animation(format!("spring {name} must be positive, got {value}")));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
struct SpringState {
    current: f64,
    velocity: f64,
    last_timestamp_ms: f64,
}

impl SpringState {
    const AT_REST: SpringState = SpringState { current: 0.0, velocity: 0.0, last_timestamp_ms: 0.0 };
    const TARGET: f64 = 1.0;

    fn advance(self, now_ms: f64, config: &SpringConfig) -> SpringState {
        let delta_ms = (now_ms - self.last_timestamp_ms).min(MAX_STEP_MS);
        let t = delta_ms / 1000.0;

        let c = config.damping;
        let m = config.mass;
        let k = config.stiffness;
        let v0 = -self.velocity;
        let x0 = Self::TARGET - self.current;
        let zeta = c / (2.0 * (k * m).sqrt());
        let omega0 = (k / m).sqrt();

        let (current, velocity) = if zeta < 1.0 {
            let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
            let (sin1, cos1) = (omega1 * t).sin_cos();
            let envelope = (-zeta * omega0 * t).exp();
            let frag = envelope * (sin1 * ((v0 + zeta * omega0 * x0) / omega1) + x0 * cos1);
            let velocity =
                zeta * omega0 * frag - envelope * (cos1 * (v0 + zeta * omega0 * x0) - omega1 * x0 * sin1);
            (Self::TARGET - frag, velocity)
        } else {
            let envelope = (-omega0 * t).exp();
            let current = Self::TARGET - envelope * (x0 + (v0 + omega0 * x0) * t);
            let velocity = envelope * (v0 * (t * omega0 - 1.0) + t * x0 * omega0 * omega0);
            (current, velocity)
        };

        SpringState { current, velocity, last_timestamp_ms: now_ms }
    }

    fn is_settled(&self) -> bool {
        (Self::TARGET - self.current).abs() < REST_THRESHOLD && self.velocity.abs() < REST_THRESHOLD
    }
}

/// Spring progress at `frame` frames after the animation started.
///
/// Negative frames clamp to 0. A fractional frame is honoured by the final
/// step only, as a host scrubbing between frames would see it. Once the
/// spring has settled the result is exactly 1, so the cost is bounded by the
/// settling time rather than by `frame`.
pub fn spring(frame: f64, fps: f64, config: &SpringConfig) -> f64 {
    let frame = frame.max(0.0);
    let whole = frame.floor();
    let rest = frame - whole;
    let steps = (whole as u64).min(MAX_STEPS);

    let mut state = SpringState::AT_REST;
    for step in 0..=steps {
        let f = if step == steps { step as f64 + rest } else { step as f64 };
        state = state.advance(f / fps * 1000.0, config);
        if state.is_settled() {
            return SpringState::TARGET;
        }
    }

    if config.overshoot_clamping {
        state.current.min(SpringState::TARGET)
    } else {
        state.current
    }
}
