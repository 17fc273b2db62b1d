//! Frame-driven animation primitives and the appear scheduler.

pub mod interpolate;
pub mod schedule;
pub mod spring;

pub use interpolate::{Curve, Easing, Extrapolate, InterpolateOptions, clamped_progress, interpolate};
pub use schedule::{AppearScheduler, ElementKind, ProgressCurve};
pub use spring::{SpringConfig, spring};
