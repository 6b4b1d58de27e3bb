// File: crates/chartkit-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG, plus degenerate-surface handling.

use chartkit_core::{Chart, Series, Size};
use chartkit_skia::{RenderOptions, SkiaRenderer};

#[test]
fn render_smoke_png() {
    let chart = Chart::line(Series::from_values("close", &[0.0, 2.0, 1.0, 3.5, 2.5]));
    let frame = chart.layout(Size::new(640.0, 400.0));

    let renderer = SkiaRenderer::new();
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    renderer.render_to_png(&frame, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = renderer.render_png_bytes(&frame, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn single_point_pie_renders() {
    let chart = Chart::pie(Series::from_values("share", &[42.0]));
    let frame = chart.layout(Size::new(300.0, 300.0));
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let bytes = SkiaRenderer::new().render_png_bytes(&frame, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn zero_size_frame_is_an_error_not_a_panic() {
    let chart = Chart::line(Series::from_values("close", &[1.0, 2.0]));
    let frame = chart.layout(Size::new(0.0, 0.0));
    assert!(frame.elements.is_empty());
    let err = SkiaRenderer::new().render_png_bytes(&frame, &RenderOptions::default());
    assert!(err.is_err());
}
