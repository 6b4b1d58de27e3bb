// File: crates/chartkit-core/src/touch.rs
// Summary: Pointer hit-testing: map a location in plot space to the datum under it.

use crate::bar::{
    bar_band, bar_lane, grouped_bar_rects, grouped_horizontal_bar_rects, lane_values, stacked_bar_rects,
    stacked_horizontal_bar_rects,
};
use crate::line::{line_point_x, line_point_y};
use crate::math::safe_divide;
use crate::pie::{layer_count, layered_segments, point_at, ring_radii};
use crate::scale::Scale;
use crate::series::Series;
use crate::style::BarGrouping;
use crate::types::{Point, Rect, Size};

/// The datum under a pointer and where an indicator should be drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchInfo {
    pub series: usize,
    /// Position of the point within its level; for nested pie points see `path`.
    pub index: usize,
    /// Index route from the top level down to the point. `[index]` outside nested pies.
    pub path: Vec<usize>,
    pub value: f64,
    pub label: Option<String>,
    pub location: Point,
}

fn info(series_index: usize, series: &Series, index: usize, location: Point) -> TouchInfo {
    let p = &series.points[index];
    TouchInfo { series: series_index, index, path: vec![index], value: p.value, label: p.label.clone(), location }
}

/// Nearest index along x, snapped to the point position on the line.
/// `slots` is the number of x positions the chart spreads its series over;
/// a series shorter than that snaps to its own last point.
pub fn touch_line(
    series_index: usize,
    series: &Series,
    slots: usize,
    scale: &Scale,
    size: Size,
    at: Point,
) -> Option<TouchInfo> {
    let len = series.len();
    if len == 0 {
        return None;
    }
    let count = slots.max(len);
    let step = safe_divide(size.width, count.saturating_sub(1) as f64);
    let raw = safe_divide(at.x, step).round();
    let index = raw.clamp(0.0, (len - 1) as f64) as usize;
    let value = series.points[index].value;
    let location = Point::new(
        line_point_x(index, count, size.width),
        line_point_y(value, scale.min_value, scale.range, size.height),
    );
    Some(info(series_index, series, index, location))
}

/// Index of the equal slot of `extent / count` containing `offset`.
fn slot_at(offset: f64, extent: f64, count: usize) -> Option<usize> {
    if count == 0 || offset < 0.0 || offset > extent {
        return None;
    }
    let slot = safe_divide(extent, count as f64);
    Some((safe_divide(offset, slot).floor() as usize).min(count - 1))
}

/// The lane containing `at.x`; the indicator sits at the top of the bar.
pub fn touch_bar(series_index: usize, series: &Series, max_value: f64, size: Size, at: Point) -> Option<TouchInfo> {
    let count = series.len();
    let index = slot_at(at.x, size.width, count)?;
    let lane = bar_lane(index, count, Rect::from_size(size));
    let value = series.points[index].value;
    let top = size.height - crate::bar::bar_height(value, max_value, size.height);
    Some(info(series_index, series, index, Point::new(lane.center().x, top)))
}

/// The band containing `at.y`; the indicator sits at the end of the bar.
pub fn touch_horizontal_bar(series_index: usize, series: &Series, scale: &Scale, size: Size, at: Point) -> Option<TouchInfo> {
    let count = series.len();
    let index = slot_at(at.y, size.height, count)?;
    let band = bar_band(index, count, Rect::from_size(size));
    let value = series.points[index].value;
    let length = crate::bar::horizontal_bar_length(value, scale.min_value, scale.range, size.width);
    Some(info(series_index, series, index, Point::new(length, band.center().y)))
}

/// Hits for every series with a bar in the lane under `at.x`, laid out the
/// way multi-series bars are drawn. Lanes come from the longest series.
/// Indicators sit at the top centre of each sub-bar or stacked segment.
pub fn touch_bar_lane(
    series: &[Series],
    grouping: BarGrouping,
    max_value: f64,
    width_factor: f64,
    size: Size,
    at: Point,
) -> Vec<TouchInfo> {
    let count = series.iter().map(Series::len).max().unwrap_or(0);
    let Some(index) = slot_at(at.x, size.width, count) else { return Vec::new() };
    let lane = bar_lane(index, count, Rect::from_size(size));
    let values = lane_values(series, index);
    let rects = match grouping {
        BarGrouping::Grouped => grouped_bar_rects(&values, max_value, lane, width_factor),
        BarGrouping::Stacked => stacked_bar_rects(&values, max_value, lane, width_factor),
    };
    series
        .iter()
        .zip(rects)
        .enumerate()
        .filter(|(_, (s, _))| index < s.len())
        .map(|(j, (s, r))| info(j, s, index, Point::new(r.center().x, r.top())))
        .collect()
}

/// Horizontal counterpart of [`touch_bar_lane`]; indicators sit at the
/// right end of each bar, vertically centred.
pub fn touch_horizontal_bar_band(
    series: &[Series],
    grouping: BarGrouping,
    scale: &Scale,
    width_factor: f64,
    size: Size,
    at: Point,
) -> Vec<TouchInfo> {
    let count = series.iter().map(Series::len).max().unwrap_or(0);
    let Some(index) = slot_at(at.y, size.height, count) else { return Vec::new() };
    let band = bar_band(index, count, Rect::from_size(size));
    let values = lane_values(series, index);
    let rects = match grouping {
        BarGrouping::Grouped => grouped_horizontal_bar_rects(&values, scale, band, width_factor),
        BarGrouping::Stacked => stacked_horizontal_bar_rects(&values, scale.max_value, band, width_factor),
    };
    series
        .iter()
        .zip(rects)
        .enumerate()
        .filter(|(_, (s, _))| index < s.len())
        .map(|(j, (s, r))| info(j, s, index, Point::new(r.right(), r.center().y)))
        .collect()
}

/// The pie point under `at`, searching every ring. Rings split
/// `inner_radius..=outer_radius` evenly by depth, top level innermost.
/// The indicator sits at the segment's mid-angle, halfway through its ring.
pub fn touch_pie(
    series: &Series,
    start_angle: f64,
    center: Point,
    outer_radius: f64,
    inner_radius: f64,
    at: Point,
) -> Option<TouchInfo> {
    let layers = layer_count(&series.points);
    let distance = at.distance(center);
    if layers == 0 || distance > outer_radius || distance < inner_radius {
        return None;
    }
    let band = safe_divide(outer_radius - inner_radius, layers as f64);
    let depth = (safe_divide(distance - inner_radius, band).floor() as usize).min(layers - 1);
    let angle = (at.y - center.y).atan2(at.x - center.x);

    let ring = layered_segments(&series.points, start_angle)
        .into_iter()
        .find(|r| r.depth == depth && r.arc.contains_angle(angle))?;
    let point = point_at(&series.points, &ring.path)?;
    let (ring_inner, ring_outer) = ring_radii(inner_radius, outer_radius, layers, depth);
    Some(TouchInfo {
        series: 0,
        index: ring.path.last().copied().unwrap_or(0),
        path: ring.path.clone(),
        value: point.value,
        label: point.label.clone(),
        location: ring.arc.label_anchor(center, (ring_inner + ring_outer) / 2.0),
    })
}
