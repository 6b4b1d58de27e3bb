use chartkit_core::style::BarGrouping;
use chartkit_core::{Chart, ChartStyle, DataPoint, MultiSeries, Series, Size};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

const SIZE: Size = Size::new(1024.0, 640.0);

fn wave(n: usize) -> Series {
    let values: Vec<f64> = (0..n).map(|i| (i as f64 * 0.01).sin() * 10.0 + 12.0).collect();
    Series::from_values("wave", &values)
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");

    for &n in &[1_000usize, 10_000usize] {
        let mut style = ChartStyle::default();
        style.line.curved = true;
        let chart = Chart::line(wave(n)).with_style(style);
        group.bench_function(format!("curved_line_{n}"), |b| b.iter(|| black_box(chart.layout(SIZE))));
    }

    let mut style = ChartStyle::default();
    style.bar.grouping = BarGrouping::Stacked;
    let stacked = Chart::bar(MultiSeries::new((0..3).map(|_| wave(200)).collect())).with_style(style);
    group.bench_function("stacked_bars_200x3", |b| b.iter(|| black_box(stacked.layout(SIZE))));

    let rings: Vec<DataPoint> = (1..=12)
        .map(|i| DataPoint::new(i as f64).with_children((1..=4).map(|j| DataPoint::new(j as f64)).collect()))
        .collect();
    let pie = Chart::pie(Series::with_points("", rings));
    group.bench_function("two_layer_pie_12", |b| b.iter(|| black_box(pie.layout(SIZE))));

    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
