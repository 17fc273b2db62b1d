use std::ops::Range;

use serde::Serialize;

use crate::domain::{
    animation::{AppearScheduler, ElementKind},
    chart::{Camera, GridLine, ScaleContext, ViewBox, grid::GRID_LABEL_FONT_SIZE, grid_lines},
    errors::{SceneError, SceneResult},
    logging::LogComponent,
    scene::{Composition, ResolvedScene, load_scene},
};
use crate::infrastructure::rendering::{
    AnnotationRenderer, AnnotationShape, CandleRenderer, CandleShape, ChannelShape, LineRenderer, LineShape,
    RenderedAnnotation, TextShape,
};
use crate::{log_frame, log_info};

/// Price gridlines with their shared styling.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLayer {
    pub stroke: String,
    pub label_color: String,
    pub font_family: String,
    pub font_size: f64,
    pub lines: Vec<GridLine>,
}

/// HTML text overlay, shifted horizontally to follow the camera.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLayer {
    pub translate_x: f64,
    pub width: f64,
    pub texts: Vec<TextShape>,
}

/// Everything visible at one frame, in draw order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameOutput {
    pub frame: f64,
    pub width: f64,
    pub height: f64,
    pub background: String,
    pub camera_x: f64,
    pub view_box: ViewBox,
    pub content_width: f64,
    pub grid: GridLayer,
    pub candles: Vec<CandleShape>,
    pub channels: Vec<ChannelShape>,
    pub trend_lines: Vec<LineShape>,
    pub annotations: Vec<AnnotationShape>,
    pub text_layer: TextLayer,
}

/// Renders a validated scene frame by frame.
///
/// Scale, camera and gridlines depend only on the scene and the composition,
/// so they are computed once here and shared by every frame. The composer is
/// immutable afterwards and can be used from several threads at once.
#[derive(Debug, Clone)]
pub struct SceneComposer {
    scene: ResolvedScene,
    composition: Composition,
    scale: ScaleContext,
    camera: Camera,
    scheduler: AppearScheduler,
    grid: GridLayer,
}

impl SceneComposer {
    pub fn new(scene: ResolvedScene, composition: Composition) -> SceneResult<Self> {
        validate_composition(&composition)?;

        let scale = ScaleContext::compute(
            &scene.candles,
            composition.width,
            composition.height,
            &scene.padding,
            Some(&scene.pan),
        )?;
        let camera = Camera::new(
            &scene.pan,
            &scene.timing,
            &scale,
            &scene.padding,
            composition.width,
            composition.height,
        );
        let scheduler = AppearScheduler::new(scene.timing.clone(), composition.fps);
        let grid = GridLayer {
            stroke: scene.theme.grid_color.clone(),
            label_color: scene.theme.text_color.clone(),
            font_family: scene.theme.font_family.clone(),
            font_size: GRID_LABEL_FONT_SIZE,
            lines: grid_lines(&scale),
        };

        log_info!(
            LogComponent::Application("Composer"),
            "composer ready: {}x{} @ {} fps, content width {:.1}px, pan {}",
            composition.width,
            composition.height,
            composition.fps,
            camera.content_width,
            if camera.enabled { "on" } else { "off" }
        );

        Ok(Self { scene, composition, scale, camera, scheduler, grid })
    }

    /// Parse, validate and compose in one step.
    pub fn from_json(json: &str, composition: Composition) -> SceneResult<Self> {
        Self::new(load_scene(json)?, composition)
    }

    pub fn scene(&self) -> &ResolvedScene {
        &self.scene
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    pub fn scale(&self) -> &ScaleContext {
        &self.scale
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn scheduler(&self) -> &AppearScheduler {
        &self.scheduler
    }

    /// Frame at which the last element starts its entrance.
    pub fn last_appear_frame(&self) -> f64 {
        let s = &self.scheduler;
        let candles = s.candle_appear(self.scene.candles.len().saturating_sub(1) as f64);
        let lines = self.scene.trend_lines.iter().map(|l| s.line_appear(l));
        let channels = self.scene.channels.iter().map(|c| s.channel_appear(c));
        let annotations = self.scene.annotations.iter().map(|a| s.annotation_appear(a));
        lines.chain(channels).chain(annotations).fold(candles, f64::max)
    }

    /// Render one frame. Non-finite frames are rejected.
    pub fn render_frame(&self, frame: f64) -> SceneResult<FrameOutput> {
        if !frame.is_finite() {
            return Err(SceneError::validation("frame", format!("must be a finite number, got {frame}")));
        }
        Ok(self.compose(frame))
    }

    /// Render a contiguous range of whole frames, in order.
    pub fn render_frames(&self, frames: Range<u32>) -> Vec<FrameOutput> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            frames.into_par_iter().map(|f| self.compose(f64::from(f))).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            frames.map(|f| self.compose(f64::from(f))).collect()
        }
    }

    fn compose(&self, frame: f64) -> FrameOutput {
        let scene = &self.scene;
        let theme = &scene.theme;
        let scheduler = &self.scheduler;

        let candle_renderer = CandleRenderer::new(&self.scale, theme);
        let candles: Vec<CandleShape> = scene
            .candles
            .iter()
            .enumerate()
            .filter_map(|(i, candle)| {
                scheduler.candle_progress(i, frame).map(|p| candle_renderer.render(i, candle, p))
            })
            .collect();

        let line_renderer = LineRenderer::new(&self.scale, theme);
        let channels: Vec<ChannelShape> = scene
            .channels
            .iter()
            .filter_map(|channel| {
                let appear = scheduler.channel_appear(channel);
                let lines = scheduler.progress(ElementKind::ChannelLine, frame, appear)?;
                let fill = scheduler.progress(ElementKind::ChannelFill, frame, appear)?;
                Some(line_renderer.channel(channel, lines, fill))
            })
            .collect();
        let trend_lines: Vec<LineShape> = scene
            .trend_lines
            .iter()
            .filter_map(|line| {
                scheduler
                    .progress(ElementKind::TrendLine, frame, scheduler.line_appear(line))
                    .map(|p| line_renderer.trend_line(line, p))
            })
            .collect();

        let annotation_renderer = AnnotationRenderer::new(&self.scale, theme);
        let mut annotations = Vec::new();
        let mut texts = Vec::new();
        for annotation in &scene.annotations {
            let Some(progress) = scheduler.annotation_progress(annotation, frame) else {
                continue;
            };
            match annotation_renderer.render(annotation, progress, frame) {
                RenderedAnnotation::Vector(shape) => annotations.push(shape),
                RenderedAnnotation::Text(text) => texts.push(text),
            }
        }

        let camera_x = self.camera.offset_at(frame);
        log_frame!(
            frame,
            LogComponent::Application("Composer"),
            "camera {camera_x:.1}, {} candles, {} annotations",
            candles.len(),
            annotations.len() + texts.len()
        );

        FrameOutput {
            frame,
            width: self.composition.width,
            height: self.composition.height,
            background: theme.background.clone(),
            camera_x,
            view_box: self.camera.view_box(frame),
            content_width: self.camera.content_width,
            grid: self.grid.clone(),
            candles,
            channels,
            trend_lines,
            annotations,
            text_layer: TextLayer { translate_x: -camera_x, width: self.camera.content_width, texts },
        }
    }
}

fn validate_composition(composition: &Composition) -> SceneResult<()> {
    for (field, value) in [
        ("composition.width", composition.width),
        ("composition.height", composition.height),
        ("composition.fps", composition.fps),
    ] {
        if !(value.is_finite() && value > 0.0) {
            return Err(SceneError::validation(field, format!("must be greater than 0, got {value}")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market_data::CandleData;
    use crate::domain::scene::{Annotation, SceneDefinition, TimingOverrides, TrendLineData};

    fn scene() -> ResolvedScene {
        SceneDefinition {
            candles: (0..6).map(|i| CandleData::new(10.0, 12.0 + i as f64, 9.0, 11.0)).collect(),
            trend_lines: vec![TrendLineData::new(0.0, 10.0, 4.0, 14.0)],
            annotations: vec![Annotation::text(2.0, 12.0, "hi"), Annotation::circle(3.0, 11.0, 10.0)],
            timing: TimingOverrides { candle_interval: Some(2.0), ..Default::default() },
            ..Default::default()
        }
        .resolve()
        .unwrap()
    }

    #[test]
    fn composition_must_be_positive() {
        let err = SceneComposer::new(scene(), Composition::new(1920.0, 1080.0, 0.0)).unwrap_err();
        assert_eq!(err.field(), Some("composition.fps"));
    }

    #[test]
    fn elements_join_as_time_passes() {
        let composer = SceneComposer::new(scene(), Composition::default()).unwrap();
        let first = composer.render_frame(0.0).unwrap();
        assert_eq!(first.candles.len(), 1);
        assert!(first.trend_lines.is_empty());
        assert!(first.annotations.is_empty() && first.text_layer.texts.is_empty());

        // line appears at 4 * 2 + 5 = 13, text at 2 * 2 + 10 = 14, circle at 16
        let later = composer.render_frame(16.0).unwrap();
        assert_eq!(later.candles.len(), 6);
        assert_eq!(later.trend_lines.len(), 1);
        assert_eq!(later.text_layer.texts.len(), 1);
        assert_eq!(later.annotations.len(), 1);
        assert_eq!(composer.last_appear_frame(), 16.0);
    }

    #[test]
    fn text_layer_tracks_camera() {
        let composer = SceneComposer::new(scene(), Composition::default()).unwrap();
        let frame = composer.render_frame(40.0).unwrap();
        assert_eq!(frame.text_layer.translate_x, -frame.camera_x);
        assert_eq!(frame.text_layer.width, frame.content_width);
        assert_eq!(frame.view_box.x, frame.camera_x);
    }

    #[test]
    fn non_finite_frame_rejected() {
        let composer = SceneComposer::new(scene(), Composition::default()).unwrap();
        assert_eq!(composer.render_frame(f64::NAN).unwrap_err().field(), Some("frame"));
    }

    #[test]
    fn range_matches_single_frames() {
        let composer = SceneComposer::new(scene(), Composition::default()).unwrap();
        let frames = composer.render_frames(0..20);
        assert_eq!(frames.len(), 20);
        assert_eq!(frames[7], composer.render_frame(7.0).unwrap());
    }
}
