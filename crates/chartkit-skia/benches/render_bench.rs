use anyhow::Result;
use chartkit_core::{Chart, Series, Size};
use chartkit_skia::{RenderOptions, SkiaRenderer};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart(n: usize) -> Chart {
    let values: Vec<f64> = (0..n).map(|i| (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001)).collect();
    Chart::line(Series::from_values("wave", &values))
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    let renderer = SkiaRenderer::new();
    for &n in &[1_000usize, 10_000usize] {
        group.bench_function(format!("line_{n}"), |b| {
            let frame = build_chart(n).layout(Size::new(800.0, 500.0));
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = renderer.render_png_bytes(&frame, &opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
