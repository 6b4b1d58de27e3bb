// File: crates/chartkit-core/tests/line_geometry.rs
// Purpose: Line point placement, divide-by-zero protection and path construction.

use chartkit_core::line::{filled_line_path, line_path, line_point_x, line_point_y, line_points, line_points_over, ranged_band_path, ranged_points};
use chartkit_core::{bezier_controls, safe_divide, Baseline, ChartData, DataPoint, PathCommand, Point, Scale, Series, Size, Topline};

#[test]
fn safe_divide_returns_zero_for_zero_denominator() {
    for x in [0.0, 1.0, -7.5, 1e300] {
        assert_eq!(safe_divide(x, 0.0), 0.0);
    }
    assert_eq!(safe_divide(9.0, 3.0), 3.0);
    assert_eq!(safe_divide(-1.0, 4.0), -0.25);
}

#[test]
fn first_and_last_points_span_the_width() {
    let w = 300.0;
    for count in 2..12 {
        assert_eq!(line_point_x(0, count, w), 0.0);
        assert!((line_point_x(count - 1, count, w) - w).abs() < 1e-9, "count {count}");
    }
}

#[test]
fn single_or_no_point_maps_to_left_edge() {
    assert_eq!(line_point_x(0, 1, 300.0), 0.0);
    assert_eq!(line_point_x(0, 0, 300.0), 0.0);
    assert_eq!(line_point_x(3, 5, 0.0), 0.0);
}

#[test]
fn minimum_is_bottom_and_top_is_min_plus_range() {
    for (min, range, h) in [(0.0, 100.001, 200.0), (-50.0, 10.0, 80.0), (3.0, 0.001, 1.0)] {
        assert_eq!(line_point_y(min, min, range, h), h);
        assert!(line_point_y(min + range, min, range, h).abs() < 1e-9);
    }
}

#[test]
fn zero_range_collapses_to_bottom() {
    assert_eq!(line_point_y(5.0, 5.0, 0.0, 100.0), 100.0);
    assert_eq!(line_point_y(99.0, 5.0, 0.0, 100.0), 100.0);
}

#[test]
fn bezier_controls_sit_at_horizontal_midpoint() {
    let (c1, c2) = bezier_controls(Point::new(0.0, 10.0), Point::new(100.0, 50.0));
    assert_eq!(c1, Point::new(50.0, 10.0));
    assert_eq!(c2, Point::new(50.0, 50.0));
}

#[test]
fn curved_path_uses_one_cubic_per_segment() {
    let series = Series::from_values("s", &[20.0, 90.0, 100.0, 75.0]);
    let data = ChartData::Single(series.clone());
    let scale = Scale::resolve(&data, Baseline::Zero, Topline::MaximumOfData);
    let points = line_points(&series, &scale, Size::new(300.0, 200.0));
    assert_eq!(points[0], Point::new(0.0, 200.0 - 20.0 / scale.range * 200.0));
    assert!((points[3].x - 300.0).abs() < 1e-9);

    let path = line_path(&series, &points, true, false);
    let cmds = path.commands();
    assert_eq!(cmds.len(), 4);
    assert!(matches!(cmds[0], PathCommand::MoveTo(p) if p == points[0]));
    let PathCommand::CubicTo { control1, control2, to } = cmds[1] else { panic!("expected cubic") };
    assert_eq!(to, points[1]);
    assert_eq!((control1, control2), bezier_controls(points[0], points[1]));
}

#[test]
fn ignore_zero_skips_zero_points() {
    let series = Series::from_values("s", &[1.0, 0.0, 3.0]);
    let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
    let path = line_path(&series, &points, false, true);
    assert_eq!(path.commands(), &[PathCommand::MoveTo(points[0]), PathCommand::LineTo(points[2])]);
}

#[test]
fn filled_path_closes_along_the_bottom() {
    let points = vec![Point::new(0.0, 10.0), Point::new(50.0, 5.0)];
    let path = filled_line_path(&points, false, 100.0);
    let cmds = path.commands();
    assert_eq!(cmds[cmds.len() - 3], PathCommand::LineTo(Point::new(50.0, 100.0)));
    assert_eq!(cmds[cmds.len() - 2], PathCommand::LineTo(Point::new(0.0, 100.0)));
    assert_eq!(cmds[cmds.len() - 1], PathCommand::Close);
    assert!(filled_line_path(&[], false, 100.0).is_empty());
}

#[test]
fn ranged_band_runs_upper_then_lower_reversed() {
    let series = Series::with_points(
        "r",
        vec![DataPoint::ranged(0.0, 10.0).unwrap(), DataPoint::ranged(2.0, 8.0).unwrap()],
    );
    let scale = Scale::resolve(&ChartData::Ranged(series.clone()), Baseline::Zero, Topline::MaximumOfData);
    let (upper, lower) = ranged_points(&series, &scale, Size::new(100.0, 100.0));
    assert!(upper.iter().zip(&lower).all(|(u, l)| u.y <= l.y));

    let path = ranged_band_path(&upper, &lower, false);
    let cmds = path.commands();
    assert_eq!(cmds[0], PathCommand::MoveTo(upper[0]));
    assert_eq!(cmds[2], PathCommand::LineTo(lower[1]));
    assert_eq!(cmds[3], PathCommand::LineTo(lower[0]));
    assert_eq!(cmds[4], PathCommand::Close);
}

#[test]
fn shorter_series_are_spaced_over_the_longest() {
    let scale = Scale { min_value: 0.0, max_value: 10.0, range: 10.0, average: 5.0 };
    let short = Series::from_values("b", &[1.0, 2.0, 3.0]);
    let size = Size::new(400.0, 100.0);
    let points = line_points_over(&short, 5, &scale, size);
    assert_eq!(points.iter().map(|p| p.x).collect::<Vec<_>>(), vec![0.0, 100.0, 200.0]);
    // fewer slots than points never squeezes the series
    assert_eq!(line_points_over(&short, 0, &scale, size), line_points(&short, &scale, size));
}
