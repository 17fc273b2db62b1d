use candle_motion::application::{IntroConfig, IntroFrame, SceneComposer};
use candle_motion::domain::market_data::CandleData;
use candle_motion::domain::scene::{Composition, SceneDefinition, TrendLineData};
use candle_motion::scenes;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

/// Random-walk candles with a trend line over the whole series.
fn generate_scene(count: usize) -> SceneDefinition {
    let mut candles = Vec::with_capacity(count);
    let mut price = 100.0;
    for i in 0..count {
        let open = price;
        let close = open + (i as f64 * 0.37).sin() * 2.0;
        let high = open.max(close) + (i as f64 * 0.3).cos().abs();
        let low = open.min(close) - (i as f64 * 0.4).sin().abs();
        candles.push(CandleData::new(open, high, low, close));
        price = close;
    }
    SceneDefinition {
        trend_lines: vec![TrendLineData::new(0.0, candles[0].low, (count - 1) as f64, price)],
        candles,
        ..Default::default()
    }
}

fn bench_single_frame(c: &mut Criterion) {
    let composer = SceneComposer::new(
        scenes::descending_channel_breakout().resolve().unwrap(),
        Composition::default(),
    )
    .unwrap();

    let mut group = c.benchmark_group("breakout_frame");
    for frame in [0.0, 60.0, 120.0] {
        group.bench_with_input(BenchmarkId::new("render_frame", frame), &frame, |b, &frame| {
            b.iter(|| composer.render_frame(black_box(frame)).unwrap())
        });
    }
    group.finish();
}

fn bench_series_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("series_size");
    group.measurement_time(Duration::from_secs(10));
    for count in [50, 500, 5000] {
        let composer = SceneComposer::new(generate_scene(count).resolve().unwrap(), Composition::default()).unwrap();
        let settled = composer.last_appear_frame() + 30.0;
        group.bench_with_input(BenchmarkId::new("settled_frame", count), &settled, |b, &frame| {
            b.iter(|| composer.render_frame(black_box(frame)).unwrap())
        });
    }
    group.finish();
}

fn bench_sequence(c: &mut Criterion) {
    let composer = SceneComposer::new(
        scenes::descending_channel_breakout().resolve().unwrap(),
        Composition::default(),
    )
    .unwrap();
    let mut group = c.benchmark_group("sequence");
    group.measurement_time(Duration::from_secs(15));
    group.bench_function("render_frames_0_150", |b| b.iter(|| composer.render_frames(black_box(0..150))));
    group.bench_function("intro_0_150", |b| {
        let config = IntroConfig::default();
        b.iter(|| {
            (0..150)
                .map(|f| IntroFrame::compute(f as f64, 30.0, 1920.0, 1080.0, &config).unwrap())
                .count()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_single_frame, bench_series_size, bench_sequence);
criterion_main!(benches);
