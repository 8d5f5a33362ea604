use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kundali::dasha::{compute_vimshottari_dasha, DashaLevel, DashaSettings};
use kundali::{BirthInstant, ChartEngine, EngineSettings};

fn new_york_birth() -> BirthInstant {
    BirthInstant::parse("2000-01-01", "12:00", 40.7128, -74.0060, "America/New_York")
        .unwrap()
}

fn bench_calculate_chart(c: &mut Criterion) {
    let engine = ChartEngine::default();
    let birth = new_york_birth();

    c.bench_function("calculate_chart", |b| {
        b.iter(|| engine.calculate(black_box(&birth)))
    });
}

fn bench_calculate_chart_sub_periods(c: &mut Criterion) {
    let mut settings = EngineSettings::default();
    settings.dasha.depth = DashaLevel::Sub;
    let engine = ChartEngine::new(settings).unwrap();
    let birth = new_york_birth();

    c.bench_function("calculate_chart_sub_periods", |b| {
        b.iter(|| engine.calculate(black_box(&birth)))
    });
}

fn bench_vimshottari_dasha(c: &mut Criterion) {
    let birth = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
    let settings = DashaSettings {
        full_cycles: 2,
        max_periods: 19,
        depth: DashaLevel::Primary,
    };

    c.bench_function("compute_vimshottari_dasha", |b| {
        b.iter(|| {
            compute_vimshottari_dasha(black_box(birth), black_box(199.4243108927467), &settings)
        })
    });
}

criterion_group!(
    benches,
    bench_calculate_chart,
    bench_calculate_chart_sub_periods,
    bench_vimshottari_dasha
);
criterion_main!(benches);
