//! Branded five-second intro: a rising price line, drifting particles and
//! the channel title, every value a pure function of the frame.

use serde::Serialize;

use crate::domain::{
    animation::{Curve, Easing, InterpolateOptions, SpringConfig, interpolate, spring},
    chart::Point,
    errors::{SceneError, SceneResult},
};

/// Length of the intro at 30 fps.
pub const INTRO_DURATION_FRAMES: u32 = 150;

/// Shape of the price line drawn behind the title.
pub const PRICE_POINTS: [f64; 38] = [
    40.0, 38.0, 42.0, 36.0, 44.0, 41.0, 47.0, 43.0, 50.0, 46.0, 53.0, 49.0, 56.0, 52.0, 58.0, 55.0, 62.0, 58.0,
    65.0, 61.0, 68.0, 72.0, 66.0, 74.0, 70.0, 78.0, 73.0, 80.0, 76.0, 84.0, 88.0, 82.0, 90.0, 86.0, 94.0, 91.0,
    96.0, 100.0,
];

const PARTICLE_COUNT: usize = 20;
const GRID_COLUMNS: usize = 40;
const GRID_ROWS: usize = 22;
const GRID_OPACITY: f64 = 0.06;
const GRID_STROKE_WIDTH: f64 = 0.5;
/// Price line band, as fractions of the height.
const LINE_BAND_TOP: f64 = 0.3;
const LINE_BAND_HEIGHT: f64 = 0.4;

config_with_overrides! {
    /// Texts and accent color of the intro.
    pub struct IntroConfig / IntroOverrides {
        channel_name: String = "YHH TRADING".to_string(),
        tagline: String = "ALGORITHMIC GOLD TRADING".to_string(),
        accent_color: String = "#FFD700".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntroGrid {
    pub opacity: f64,
    pub stroke_width: f64,
    pub columns: Vec<f64>,
    pub rows: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceLine {
    pub progress: f64,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Particle {
    pub center: Point,
    pub size: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntroTitle {
    pub text: String,
    pub opacity: f64,
    /// Vertical offset in pixels, 40 at the start and 0 once settled.
    pub offset_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntroTagline {
    pub text: String,
    pub opacity: f64,
    /// Revealed share of the tagline, 0 to 100.
    pub width_percent: f64,
}

/// Visual state of the intro at one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntroFrame {
    pub frame: f64,
    pub width: f64,
    pub height: f64,
    pub accent_color: String,
    /// Opacity of the whole intro; fades out at the end.
    pub opacity: f64,
    pub background_pulse: f64,
    pub grid: IntroGrid,
    pub price_line: PriceLine,
    pub scan_line_y: f64,
    pub particles: Vec<Particle>,
    pub title: IntroTitle,
    pub divider_width: f64,
    pub tagline: IntroTagline,
    pub flash_opacity: f64,
}

impl IntroFrame {
    pub fn compute(frame: f64, fps: f64, width: f64, height: f64, config: &IntroConfig) -> SceneResult<Self> {
        for (field, value) in [("fps", fps), ("width", width), ("height", height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SceneError::validation(field, format!("must be greater than 0, got {value}")));
            }
        }
        if !frame.is_finite() {
            return Err(SceneError::validation("frame", "must be a finite number"));
        }

        let clamped = InterpolateOptions::clamped();
        let ease_out = Easing::Out(Curve::Cubic);

        let title_spring = spring(frame - 40.0, fps, &SpringConfig::INTRO_TITLE);
        let line_progress =
            interpolate(frame, &[0.0, 60.0], &[0.0, 1.0], InterpolateOptions::clamp_right().with_easing(ease_out))?;

        Ok(Self {
            frame,
            width,
            height,
            accent_color: config.accent_color.clone(),
            opacity: interpolate(frame, &[130.0, 150.0], &[1.0, 0.0], clamped)?,
            background_pulse: interpolate(frame, &[0.0, 75.0, 150.0], &[0.0, 0.3, 0.0], InterpolateOptions::clamp_right())?,
            grid: IntroGrid {
                opacity: GRID_OPACITY,
                stroke_width: GRID_STROKE_WIDTH,
                columns: (0..GRID_COLUMNS).map(|i| i as f64 * (width / GRID_COLUMNS as f64)).collect(),
                rows: (0..GRID_ROWS).map(|i| i as f64 * (height / GRID_ROWS as f64)).collect(),
            },
            price_line: PriceLine { progress: line_progress, points: price_points(line_progress, width, height) },
            scan_line_y: interpolate(frame, &[15.0, 80.0], &[-100.0, height + 100.0], clamped)?,
            particles: (0..PARTICLE_COUNT).map(|i| particle(i, frame, width, height)).collect::<SceneResult<_>>()?,
            title: IntroTitle {
                text: config.channel_name.clone(),
                opacity: interpolate(frame, &[40.0, 55.0], &[0.0, 1.0], clamped)?,
                offset_y: interpolate(title_spring, &[0.0, 1.0], &[40.0, 0.0], InterpolateOptions::default())?,
            },
            divider_width: interpolate(frame, &[35.0, 65.0], &[0.0, 400.0], clamped.with_easing(ease_out))?,
            tagline: IntroTagline {
                text: config.tagline.clone(),
                opacity: interpolate(frame, &[65.0, 80.0], &[0.0, 1.0], clamped)?,
                width_percent: interpolate(frame, &[65.0, 90.0], &[0.0, 100.0], clamped.with_easing(ease_out))?,
            },
            flash_opacity: interpolate(frame, &[100.0, 110.0, 120.0], &[0.0, 0.6, 0.0], clamped)?,
        })
    }
}

/// Leading points of [`PRICE_POINTS`] revealed at `progress`, spread over the full width.
fn price_points(progress: f64, width: f64, height: f64) -> Vec<Point> {
    let (min, max) = PRICE_POINTS
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &p| (lo.min(p), hi.max(p)));
    let segment_width = width / (PRICE_POINTS.len() - 1) as f64;
    let band_top = height * LINE_BAND_TOP;
    let band_height = height * LINE_BAND_HEIGHT;
    let shown = ((progress * PRICE_POINTS.len() as f64).floor().max(0.0) as usize + 1).min(PRICE_POINTS.len());

    PRICE_POINTS[..shown]
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            Point::new(i as f64 * segment_width, band_top + band_height - (p - min) / (max - min) * band_height)
        })
        .collect()
}

fn particle(i: usize, frame: f64, width: f64, height: f64) -> SceneResult<Particle> {
    let start = 10.0 + i as f64 * 4.0;
    let clamped = InterpolateOptions::clamped();
    let side = if i % 2 == 0 { 0.1 } else { 0.9 };
    let drift = interpolate(frame, &[start, start + 50.0], &[0.0, -30.0], clamped)?;

    Ok(Particle {
        center: Point::new(
            side * width + (i as f64 * 2.5).sin() * 100.0,
            height * 0.2 + i as f64 * height * 0.6 / PARTICLE_COUNT as f64 + drift,
        ),
        size: 2.0 + (i % 3) as f64,
        opacity: interpolate(frame, &[start, start + 15.0, start + 50.0], &[0.0, 0.6, 0.0], clamped)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(frame: f64) -> IntroFrame {
        IntroFrame::compute(frame, 30.0, 1920.0, 1080.0, &IntroConfig::default()).unwrap()
    }

    #[test]
    fn first_frame() {
        let intro = at(0.0);
        assert_eq!(intro.opacity, 1.0);
        assert_eq!(intro.price_line.points.len(), 1);
        // 40 sits 4/64 of the way up the 432px band that starts at y = 324
        let first = intro.price_line.points[0];
        assert_eq!(first.x, 0.0);
        assert!((first.y - (756.0 - 27.0)).abs() < 1e-9);
        assert_eq!(intro.scan_line_y, -100.0);
        assert_eq!(intro.title.opacity, 0.0);
        assert_eq!(intro.title.offset_y, 40.0);
        assert_eq!(intro.divider_width, 0.0);
        assert!(intro.particles.iter().all(|p| p.opacity == 0.0));
        assert_eq!(intro.grid.columns.len(), 40);
        assert_eq!(intro.grid.rows.len(), 22);
    }

    #[test]
    fn line_fully_drawn_after_two_seconds() {
        let intro = at(60.0);
        assert_eq!(intro.price_line.progress, 1.0);
        assert_eq!(intro.price_line.points.len(), 38);
        let last = intro.price_line.points[37];
        assert!((last.x - 1920.0).abs() < 1e-9);
        assert!((last.y - 1080.0 * 0.3).abs() < 1e-9);
    }

    #[test]
    fn flash_peaks_and_fade_out_ends_black() {
        assert!((at(110.0).flash_opacity - 0.6).abs() < 1e-12);
        assert_eq!(at(125.0).flash_opacity, 0.0);
        assert_eq!(at(150.0).opacity, 0.0);
        assert_eq!(at(140.0).opacity, 0.5);
    }

    #[test]
    fn title_settles() {
        let intro = at(149.0);
        assert_eq!(intro.title.opacity, 1.0);
        assert!(intro.title.offset_y.abs() < 0.5);
        assert_eq!(intro.tagline.width_percent, 100.0);
        assert_eq!(intro.title.text, "YHH TRADING");
    }

    #[test]
    fn overrides_replace_texts_only() {
        let overrides: IntroOverrides = serde_json::from_str(r#"{"channelName": "DESK"}"#).unwrap();
        let config = overrides.resolve();
        assert_eq!(config.channel_name, "DESK");
        assert_eq!(config.tagline, "ALGORITHMIC GOLD TRADING");
    }

    #[test]
    fn bad_surface_rejected() {
        let err = IntroFrame::compute(0.0, 0.0, 1920.0, 1080.0, &IntroConfig::default()).unwrap_err();
        assert_eq!(err.field(), Some("fps"));
    }
}
