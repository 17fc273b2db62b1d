//! Chart geometry: scale, camera and gridlines.

pub mod camera;
pub mod grid;
pub mod scale;
pub mod value_objects;

pub use camera::Camera;
pub use grid::{GridLine, grid_lines, nice_step};
pub use scale::ScaleContext;
pub use value_objects::*;
