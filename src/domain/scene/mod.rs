//! Scene aggregate: chart data, overlays and their configuration.

pub mod config;
pub mod entities;
pub mod schema;

pub use config::*;
pub use entities::*;
pub use schema::{ResolvedScene, load_scene, parse_scene};
