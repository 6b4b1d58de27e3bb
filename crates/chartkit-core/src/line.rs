// File: crates/chartkit-core/src/line.rs
// Summary: Line chart point placement and path construction (straight, curved, filled, ranged band).

use crate::math::safe_divide;
use crate::path::Path;
use crate::scale::Scale;
use crate::series::Series;
use crate::types::{Point, Size};

/// Equal horizontal spacing; the first index sits on the left edge, the last on the right.
/// A series of zero or one point maps to `0.0`.
#[inline]
pub fn line_point_x(index: usize, count: usize, width: f64) -> f64 {
    let spaces = count.saturating_sub(1) as f64;
    safe_divide(width, spaces) * index as f64
}

/// `min_value` maps to the bottom edge, `min_value + range` to the top.
#[inline]
pub fn line_point_y(value: f64, min_value: f64, range: f64, height: f64) -> f64 {
    height - safe_divide(value - min_value, range) * height
}

/// Surface positions for each point of `series`, spread over its own length.
pub fn line_points(series: &Series, scale: &Scale, size: Size) -> Vec<Point> {
    line_points_over(series, series.len(), scale, size)
}

/// Surface positions with the width divided into `slots` x positions, so
/// shorter series of a multi-series chart share the spacing of the longest.
pub fn line_points_over(series: &Series, slots: usize, scale: &Scale, size: Size) -> Vec<Point> {
    let count = slots.max(series.len());
    series
        .values()
        .enumerate()
        .map(|(i, v)| {
            Point::new(
                line_point_x(i, count, size.width),
                line_point_y(v, scale.min_value, scale.range, size.height),
            )
        })
        .collect()
}

/// Positions of the upper and lower bounds of a ranged series.
pub fn ranged_points(series: &Series, scale: &Scale, size: Size) -> (Vec<Point>, Vec<Point>) {
    let count = series.len();
    let place = |i: usize, v: f64| {
        Point::new(
            line_point_x(i, count, size.width),
            line_point_y(v, scale.min_value, scale.range, size.height),
        )
    };
    series
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| (place(i, p.high()), place(i, p.low())))
        .unzip()
}

/// Stroke path through the points. With `ignore_zero`, zero-valued points are
/// left out of the path and their neighbours are joined directly.
pub fn line_path(series: &Series, points: &[Point], curved: bool, ignore_zero: bool) -> Path {
    if !ignore_zero {
        return Path::polyline(points, curved);
    }
    let kept: Vec<Point> = series
        .points
        .iter()
        .zip(points)
        .filter(|(p, _)| p.value != 0.0)
        .map(|(_, &pt)| pt)
        .collect();
    Path::polyline(&kept, curved)
}

/// Area under the line, closed along the bottom edge at `height`.
pub fn filled_line_path(points: &[Point], curved: bool, height: f64) -> Path {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Path::new();
    };
    let mut path = Path::polyline(points, curved);
    path.line_to(Point::new(last.x, height))
        .line_to(Point::new(first.x, height))
        .close();
    path
}

/// Closed band between upper points (left to right) and lower points (right to left).
pub fn ranged_band_path(upper: &[Point], lower: &[Point], curved: bool) -> Path {
    if upper.is_empty() || lower.is_empty() {
        return Path::new();
    }
    let reversed: Vec<Point> = lower.iter().rev().copied().collect();
    let mut path = Path::polyline(upper, curved);
    path.extend_through(&reversed, curved, false);
    path.close();
    path
}
