use super::primitives::{AnnotationShape, ArrowShape, CircleShape, DEFAULT_STROKE_WIDTH, DashAnimation, TextShape};
use crate::domain::chart::{Point, ScaleContext, Segment};
use crate::domain::scene::{Annotation, AnnotationKind, ArrowDirection, ThemeConfig};

pub const DEFAULT_FONT_SIZE: f64 = 24.0;
pub const DEFAULT_ARROW_LENGTH: f64 = 40.0;
pub const DEFAULT_CIRCLE_RADIUS: f64 = 20.0;
pub const ARROW_HEAD_SIZE: f64 = 8.0;
/// Angle between the shaft and each barb, in radians.
pub const ARROW_HEAD_SPREAD: f64 = 0.5;
/// Text is lifted above its anchor by this share of its own box.
pub const TEXT_TRANSLATE_PERCENT: (f64, f64) = (-50.0, -120.0);
const CIRCLE_PULSE_SPEED: f64 = 0.15;
const CIRCLE_PULSE_AMPLITUDE: f64 = 0.05;
const CIRCLE_MAX_OPACITY: f64 = 0.8;

/// Output of [`AnnotationRenderer::render`]; text goes to the HTML layer.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedAnnotation {
    Vector(AnnotationShape),
    Text(TextShape),
}

pub struct AnnotationRenderer<'a> {
    scale: &'a ScaleContext,
    theme: &'a ThemeConfig,
}

impl<'a> AnnotationRenderer<'a> {
    pub fn new(scale: &'a ScaleContext, theme: &'a ThemeConfig) -> Self {
        Self { scale, theme }
    }

    /// `frame` is the absolute frame; the circle pulse runs on it.
    pub fn render(&self, annotation: &Annotation, progress: f64, frame: f64) -> RenderedAnnotation {
        let anchor = self.scale.point(annotation.index, annotation.price);
        let color = annotation.color.clone().unwrap_or_else(|| self.theme.annotation_color.clone());

        match &annotation.kind {
            AnnotationKind::Text { text, font_size } => RenderedAnnotation::Text(TextShape {
                anchor,
                text: text.clone(),
                color,
                font_size: font_size.unwrap_or(DEFAULT_FONT_SIZE),
                font_family: self.theme.font_family.clone(),
                translate_percent: TEXT_TRANSLATE_PERCENT,
                scale: progress,
                opacity: progress,
            }),
            AnnotationKind::Arrow { direction, length } => RenderedAnnotation::Vector(AnnotationShape::Arrow(
                arrow(anchor, direction.unwrap_or_default(), length.unwrap_or(DEFAULT_ARROW_LENGTH), color, progress),
            )),
            AnnotationKind::Circle { radius } => {
                let pulse = 1.0 + (frame * CIRCLE_PULSE_SPEED).sin() * CIRCLE_PULSE_AMPLITUDE;
                RenderedAnnotation::Vector(AnnotationShape::Circle(CircleShape {
                    center: anchor,
                    radius: radius.unwrap_or(DEFAULT_CIRCLE_RADIUS) * progress * pulse,
                    color,
                    stroke_width: DEFAULT_STROKE_WIDTH,
                    opacity: progress * CIRCLE_MAX_OPACITY,
                }))
            }
        }
    }
}

/// Arrow whose tip sits on the anchor and whose tail trails behind it.
fn arrow(tip: Point, direction: ArrowDirection, length: f64, color: String, progress: f64) -> ArrowShape {
    let (dx, dy) = direction.displacement(length);
    let tail = tip.offset(-dx, -dy);
    let angle = Segment::new(tail, tip).angle();
    let barb = |spread: f64| {
        Point::new(
            tip.x - ARROW_HEAD_SIZE * (angle + spread).cos(),
            tip.y - ARROW_HEAD_SIZE * (angle + spread).sin(),
        )
    };

    ArrowShape {
        tip,
        tail,
        color,
        stroke_width: DEFAULT_STROKE_WIDTH,
        dash: DashAnimation::reveal(dx.hypot(dy), progress),
        head: [tip, barb(-ARROW_HEAD_SPREAD), barb(ARROW_HEAD_SPREAD)],
        opacity: progress,
    }
}
