//! Frame-indexed geometry engine for animated candlestick-chart videos.
//!
//! A scene (candles, trend lines, channels, annotations) is validated once,
//! bound to a composition size, and then turned into drawable primitives for
//! any frame number. The host compositor draws them; nothing here keeps
//! state between frames.

#[macro_use]
mod macros;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod scenes;

pub use application::{FrameOutput, IntroConfig, IntroFrame, SceneComposer};
pub use domain::errors::{SceneError, SceneResult};
pub use domain::scene::{Composition, ResolvedScene, SceneDefinition, load_scene, parse_scene};
