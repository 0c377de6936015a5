//! Criterion benchmarks for feedlot_core sweeps
//!
//! Run with: cargo bench -p feedlot_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use feedlot_core::analysis::{AxisRange, SweepAxis, SweepSettings, analyze, sweep_1d, sweep_2d};
use feedlot_core::{ScenarioBuilder, ScenarioInputs, evaluate};

fn reference_inputs() -> ScenarioInputs {
    ScenarioBuilder::new()
        .purchase(3_000.0, 200.0)
        .sale(3_500.0, 300.0)
        .feed(60_000.0, 8.0)
        .daily_gain(1.5)
        .overhead_per_day(20.0)
        .health_cost(1_000.0)
        .build()
}

fn bench_single_evaluation(c: &mut Criterion) {
    let inputs = reference_inputs().validate();

    c.bench_function("evaluate_per_head", |b| b.iter(|| evaluate(black_box(&inputs))));
}

fn bench_sensitivity_curve(c: &mut Criterion) {
    let inputs = reference_inputs().validate();
    let range = AxisRange::new(SweepAxis::SalePrice, 2_000.0, 6_000.0, 81);

    c.bench_function("sweep_1d_81_points", |b| {
        b.iter(|| sweep_1d(black_box(&inputs), black_box(&range)))
    });
}

fn bench_margin_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep_2d");
    let inputs = reference_inputs().validate();

    for size in [20, 60, 200].iter() {
        let rows = AxisRange::new(SweepAxis::PurchasePrice, 2_000.0, 6_000.0, *size);
        let cols = AxisRange::new(SweepAxis::SalePrice, 2_000.0, 6_000.0, *size);

        group.bench_with_input(BenchmarkId::new("cells", size * size), size, |b, _| {
            b.iter(|| sweep_2d(black_box(&inputs), black_box(&rows), black_box(&cols)))
        });
    }

    group.finish();
}

fn bench_dashboard_analysis(c: &mut Criterion) {
    let inputs = reference_inputs();
    let settings = SweepSettings::default();

    c.bench_function("analyze_default_settings", |b| {
        b.iter(|| analyze(black_box(&inputs), black_box(&settings)))
    });
}

criterion_group!(
    benches,
    bench_single_evaluation,
    bench_sensitivity_curve,
    bench_margin_map,
    bench_dashboard_analysis,
);
criterion_main!(benches);
