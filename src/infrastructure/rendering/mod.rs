pub mod annotation_renderer;
pub mod candle_renderer;
pub mod line_renderer;
pub mod primitives;

pub use annotation_renderer::{AnnotationRenderer, RenderedAnnotation};
pub use candle_renderer::CandleRenderer;
pub use line_renderer::LineRenderer;
pub use primitives::*;
