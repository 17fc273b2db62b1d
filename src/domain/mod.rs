//! Domain layer: price data, chart geometry, animation timing and scenes.
//!
//! Nothing in here touches the host: every function is a pure mapping from
//! scene data and a frame number to numbers.

pub mod animation;
pub mod chart;
pub mod errors;
pub mod logging;
pub mod market_data;
pub mod scene;
