use candle_motion::application::intro::PRICE_POINTS;
use candle_motion::application::{INTRO_DURATION_FRAMES, IntroConfig, IntroFrame};

fn at(frame: f64) -> IntroFrame {
    IntroFrame::compute(frame, 30.0, 1920.0, 1080.0, &IntroConfig::default()).unwrap()
}

#[test]
fn price_line_reveals_point_by_point() {
    let mut previous = 0;
    for f in 0..=60 {
        let shown = at(f as f64).price_line.points.len();
        assert!(shown >= previous, "frame {f}");
        assert!((1..=PRICE_POINTS.len()).contains(&shown));
        previous = shown;
    }
    assert_eq!(previous, PRICE_POINTS.len());
}

#[test]
fn scan_line_sweeps_the_screen() {
    assert_eq!(at(10.0).scan_line_y, -100.0);
    assert_eq!(at(80.0).scan_line_y, 1180.0);
    assert_eq!(at(140.0).scan_line_y, 1180.0);
    assert!((at(47.5).scan_line_y - 540.0).abs() < 1e-9);
}

#[test]
fn particles_fade_in_and_out() {
    // particle 0 starts at frame 10 and peaks 15 frames later
    let p = |f: f64| at(f).particles[0];
    assert_eq!(p(10.0).opacity, 0.0);
    assert!((p(25.0).opacity - 0.6).abs() < 1e-12);
    assert_eq!(p(60.0).opacity, 0.0);
    assert_eq!(p(60.0).center.y - p(10.0).center.y, -30.0);
    assert_eq!(at(0.0).particles.len(), 20);
    assert_eq!(at(0.0).particles[4].size, 3.0);
}

#[test]
fn tagline_follows_title() {
    let early = at(60.0);
    assert_eq!(early.tagline.opacity, 0.0);
    assert!(early.title.opacity > 0.0);
    let late = at(90.0);
    assert_eq!(late.tagline.opacity, 1.0);
    assert_eq!(late.tagline.width_percent, 100.0);
    assert_eq!(late.divider_width, 400.0);
}

#[test]
fn background_pulse_peaks_mid_way() {
    assert_eq!(at(0.0).background_pulse, 0.0);
    assert!((at(75.0).background_pulse - 0.3).abs() < 1e-12);
    assert!(at(f64::from(INTRO_DURATION_FRAMES)).background_pulse.abs() < 1e-12);
}

#[test]
fn custom_texts_carry_through() {
    let config = IntroConfig { channel_name: "DESK".into(), accent_color: "#00ffcc".into(), ..Default::default() };
    let intro = IntroFrame::compute(50.0, 30.0, 1280.0, 720.0, &config).unwrap();
    assert_eq!(intro.title.text, "DESK");
    assert_eq!(intro.accent_color, "#00ffcc");
    assert_eq!(intro.tagline.text, "ALGORITHMIC GOLD TRADING");
}
