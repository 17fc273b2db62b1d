use candle_motion::application::{FrameOutput, SceneComposer};
use candle_motion::domain::scene::Composition;
use candle_motion::infrastructure::rendering::AnnotationShape;
use candle_motion::scenes;

fn composer() -> SceneComposer {
    let scene = scenes::descending_channel_breakout().resolve().unwrap();
    SceneComposer::new(scene, Composition::default()).unwrap()
}

fn frame(composer: &SceneComposer, f: f64) -> FrameOutput {
    composer.render_frame(f).unwrap()
}

#[test]
fn first_frame_shows_only_the_first_candle() {
    let out = frame(&composer(), 0.0);
    assert_eq!(out.candles.len(), 1);
    assert_eq!(out.candles[0].index, 0);
    assert_eq!(out.candles[0].progress, 0.0);
    assert_eq!(out.candles[0].opacity, 0.0);
    assert!(out.channels.is_empty());
    assert!(out.annotations.is_empty());
    assert!(out.text_layer.texts.is_empty());
    assert_eq!(out.camera_x, 0.0);
    assert_eq!(out.background, "#0a0a0a");
}

#[test]
fn breakout_candle_starts_at_frame_sixty() {
    let out = frame(&composer(), 60.0);
    assert_eq!(out.candles.len(), 13);
    assert!(out.candles[..12].iter().all(|c| c.progress > 0.0));
    assert_eq!(out.candles[12].index, 12);
    assert_eq!(out.candles[12].progress, 0.0);
    assert!(out.candles[12].bullish);
    // channel waits for candle 14 plus the line delay
    assert!(out.channels.is_empty());
    // "돌파" appears at 12 * 5 + 8 = 68
    assert!(out.text_layer.texts.is_empty());
}

#[test]
fn breakout_label_and_channel_by_frame_eighty() {
    let c = composer();
    let out = frame(&c, 80.0);

    assert_eq!(out.text_layer.texts.len(), 1);
    let label = &out.text_layer.texts[0];
    assert_eq!(label.text, "돌파");
    assert_eq!(label.color, "#26a69a");
    assert_eq!(label.font_size, 28.0);
    assert!(label.opacity > 0.0);
    assert_eq!(label.anchor, c.scale().point(12.0, 101.0));

    // channel appeared at 73, linear over 25 frames
    assert_eq!(out.channels.len(), 1);
    let channel = &out.channels[0];
    assert!((channel.upper.progress - 7.0 / 25.0).abs() < 1e-12);
    assert!((channel.fill_opacity - 0.06 * 7.0 / 25.0).abs() < 1e-12);
    assert_eq!(channel.upper.color, "#FFD700");

    assert_eq!(out.annotations.len(), 1);
    assert!(matches!(out.annotations[0], AnnotationShape::Circle(_)));
}

#[test]
fn camera_follows_and_text_layer_counter_translates() {
    let c = composer();
    let out = frame(&c, 80.0);
    // slot 182, left edge candle 16 - 7 = 9
    assert_eq!(out.camera_x, 20.0 + 9.0 * 182.0);
    assert_eq!(out.view_box.x, out.camera_x);
    assert_eq!(out.view_box.width, 1920.0);
    assert_eq!(out.text_layer.translate_x, -out.camera_x);
    assert_eq!(out.content_width, 182.0 * 20.0 + 100.0);

    let end = frame(&c, 400.0);
    assert_eq!(end.camera_x, end.content_width - 1920.0);
}

#[test]
fn everything_present_once_settled() {
    let out = frame(&composer(), 200.0);
    assert_eq!(out.candles.len(), 20);
    assert!(out.candles.iter().all(|c| (c.progress - 1.0).abs() < 1e-3));
    assert_eq!(out.annotations.len(), 3);
    assert_eq!(out.text_layer.texts.len(), 2);
    assert_eq!(out.channels[0].upper.dash.offset, 0.0);
}

#[test]
fn distant_frames_render_the_settled_chart() {
    let composer = composer();
    for f in [1e6, 1e12, 1e300] {
        let out = frame(&composer, f);
        assert_eq!(out.candles.len(), 20);
        assert!(out.candles.iter().all(|c| c.progress == 1.0 && c.opacity == 1.0), "frame {f}");
        assert_eq!(out.camera_x, 1820.0);
        assert_eq!(out.annotations.len(), 3);
    }
}

#[test]
fn grid_labels() {
    let out = frame(&composer(), 0.0);
    let labels: Vec<&str> = out.grid.lines.iter().map(|l| l.label.as_str()).collect();
    insta::assert_snapshot!(labels.join(" "), @"92 94 96 98 100 102 104 106 108 110");
    assert_eq!(out.grid.font_size, 13.0);
    assert_eq!(out.grid.stroke, "#1a1a1a");
}

#[test]
fn timeline_summary() {
    let c = composer();
    let summary: Vec<String> = [0.0, 60.0, 80.0, 120.0]
        .iter()
        .map(|&f| {
            let out = frame(&c, f);
            format!(
                "{f}: {} candles, {} channels, {} shapes, {} texts",
                out.candles.len(),
                out.channels.len(),
                out.annotations.len(),
                out.text_layer.texts.len()
            )
        })
        .collect();
    insta::assert_snapshot!(summary.join("\n"), @r"
    0: 1 candles, 0 channels, 0 shapes, 0 texts
    60: 13 candles, 0 channels, 0 shapes, 0 texts
    80: 17 candles, 1 channels, 1 shapes, 1 texts
    120: 20 candles, 1 channels, 3 shapes, 2 texts
    ");
}

#[test]
fn frames_are_independent_of_render_order() {
    let c = composer();
    let forward: Vec<FrameOutput> = (0..90).map(|f| frame(&c, f as f64)).collect();
    for f in (0..90).rev() {
        assert_eq!(frame(&c, f as f64), forward[f]);
    }
    assert_eq!(c.render_frames(0..90), forward);
}
