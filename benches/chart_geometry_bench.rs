use bankroll_chart::api::{ChartMode, ChartRenderer};
use bankroll_chart::core::{
    AmountRange, ChartState, DataPoint, Viewport, catmull_rom_segments, project_points,
};
use criterion::{Criterion, criterion_group, criterion_main};
use rust_decimal::Decimal;
use std::hint::black_box;

fn oscillating_amounts(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            (t * 0.05).sin() * 500.0 + t * 0.1
        })
        .collect()
}

fn bench_catmull_rom_2k(c: &mut Criterion) {
    let amounts = oscillating_amounts(2_000);
    let range = AmountRange::from_amounts(&amounts).expect("non-empty");
    let state = ChartState::new(range, 1_600.0, 400.0);
    let knots = project_points(&amounts, state);

    c.bench_function("catmull_rom_2k", |b| {
        b.iter(|| {
            let _ = catmull_rom_segments(black_box(&knots));
        })
    });
}

fn bench_profit_render_2k(c: &mut Criterion) {
    let renderer = ChartRenderer::default();
    let points: Vec<DataPoint> = oscillating_amounts(2_000)
        .into_iter()
        .map(|amount| DataPoint::from_f64(amount).expect("finite amount"))
        .collect();

    c.bench_function("profit_render_2k", |b| {
        b.iter(|| {
            let _ = renderer.render(
                black_box(&points),
                black_box(ChartMode::Profit),
                black_box(Viewport::new(1_600.0, 400.0)),
            );
        })
    });
}

fn bench_buy_in_render_2k(c: &mut Criterion) {
    let renderer = ChartRenderer::default();
    let points: Vec<DataPoint> = (0..2_000)
        .map(|i| DataPoint::new(Decimal::from(i * 25)))
        .collect();

    c.bench_function("buy_in_render_2k", |b| {
        b.iter(|| {
            let _ = renderer.render(
                black_box(&points),
                black_box(ChartMode::BuyIn),
                black_box(Viewport::new(1_600.0, 400.0)),
            );
        })
    });
}

criterion_group!(
    benches,
    bench_catmull_rom_2k,
    bench_profit_render_2k,
    bench_buy_in_render_2k
);
criterion_main!(benches);
