// File: crates/chartkit-core/src/bar.rs
// Summary: Bar geometry: lane layout, vertical/horizontal/ranged bars, grouped and stacked variants.

use crate::math::{clamp, safe_divide};
use crate::scale::Scale;
use crate::series::Series;
use crate::types::{Rect, Size};

/// A bar expressed as size + offsets relative to its lane origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarGeometry {
    pub width: f64,
    pub height: f64,
    pub x_offset: f64,
    pub y_offset: f64,
}

impl BarGeometry {
    /// Place this bar inside `lane`, in surface coordinates.
    pub fn in_lane(&self, lane: Rect) -> Rect {
        Rect::new(lane.x + self.x_offset, lane.y + self.y_offset, self.width, self.height).standardized()
    }
}

/// Lane for bar `index` of `count`: equal-width columns over the full height.
pub fn bar_lane(index: usize, count: usize, surface: Rect) -> Rect {
    let w = safe_divide(surface.width, count as f64);
    Rect::new(surface.x + w * index as f64, surface.y, w, surface.height)
}

/// Horizontal band for category `index` of `count`.
pub fn bar_band(index: usize, count: usize, surface: Rect) -> Rect {
    let h = safe_divide(surface.height, count as f64);
    Rect::new(surface.x, surface.y + h * index as f64, surface.width, h)
}

#[inline]
pub fn bar_height(value: f64, max_value: f64, total_height: f64) -> f64 {
    total_height * safe_divide(value, max_value)
}

/// Fraction of the lane to fill, limited to `[0, 1]`.
#[inline]
pub fn bar_width(total_width: f64, width_factor: f64) -> f64 {
    total_width * clamp(width_factor, 0.0, 1.0)
}

/// Offset that centers a bar of `width_factor` within its lane.
#[inline]
pub fn bar_x_offset(total_width: f64, width_factor: f64) -> f64 {
    -bar_width(total_width, width_factor) / 2.0 + total_width / 2.0
}

/// Vertical bar rising from the bottom of a lane of `lane` size.
pub fn bar_geometry(value: f64, max_value: f64, lane: Size, width_factor: f64) -> BarGeometry {
    let height = bar_height(value, max_value, lane.height);
    BarGeometry {
        width: bar_width(lane.width, width_factor),
        height,
        x_offset: bar_x_offset(lane.width, width_factor),
        y_offset: lane.height - height,
    }
}

/// Floating bar spanning `lower..upper` on the scale.
pub fn ranged_bar_geometry(lower: f64, upper: f64, scale: &Scale, lane: Size, width_factor: f64) -> BarGeometry {
    let height = safe_divide(upper - lower, scale.range) * lane.height;
    BarGeometry {
        width: bar_width(lane.width, width_factor),
        height,
        x_offset: bar_x_offset(lane.width, width_factor),
        y_offset: lane.height - safe_divide(upper - scale.min_value, scale.range) * lane.height,
    }
}

#[inline]
pub fn horizontal_bar_length(value: f64, min_value: f64, range: f64, width: f64) -> f64 {
    safe_divide(value - min_value, range) * width
}

/// Vertical center of category `index` within its band.
#[inline]
pub fn category_label_center_y(index: usize, count: usize, height: f64) -> f64 {
    let band = safe_divide(height, count as f64);
    band * index as f64 + band / 2.0
}

/// Horizontal bar from the left edge of `band`, thickness = `width_factor` of the band.
pub fn horizontal_bar_rect(value: f64, scale: &Scale, band: Rect, width_factor: f64) -> Rect {
    let length = horizontal_bar_length(value, scale.min_value, scale.range, band.width);
    let thickness = bar_width(band.height, width_factor);
    Rect::new(band.x, band.y + bar_x_offset(band.height, width_factor), length, thickness).standardized()
}

/// Bars for one group: the lane is split evenly between `values`, each
/// sub-lane holding one centered bar.
pub fn grouped_bar_rects(values: &[f64], max_value: f64, lane: Rect, width_factor: f64) -> Vec<Rect> {
    let n = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let sub = bar_lane(i, n, lane);
            bar_geometry(v, max_value, sub.size(), width_factor).in_lane(sub)
        })
        .collect()
}

/// Segments for one stack, bottom first. Heights are scaled against the
/// stacked maximum (the largest per-index total).
pub fn stacked_bar_rects(values: &[f64], stacked_max: f64, lane: Rect, width_factor: f64) -> Vec<Rect> {
    let width = bar_width(lane.width, width_factor);
    let x = lane.x + bar_x_offset(lane.width, width_factor);
    let mut top = lane.bottom();
    values
        .iter()
        .map(|&v| {
            let h = bar_height(v, stacked_max, lane.height);
            top -= h;
            Rect::new(x, top, width, h).standardized()
        })
        .collect()
}

/// Value of every series at `index`, 0 where a series is too short.
pub fn lane_values(series: &[Series], index: usize) -> Vec<f64> {
    series.iter().map(|s| s.points.get(index).map_or(0.0, |p| p.value)).collect()
}

/// Horizontal counterpart of [`grouped_bar_rects`]: the band is split into
/// one sub-band per value.
pub fn grouped_horizontal_bar_rects(values: &[f64], scale: &Scale, band: Rect, width_factor: f64) -> Vec<Rect> {
    let n = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| horizontal_bar_rect(v, scale, bar_band(i, n, band), width_factor))
        .collect()
}

/// Horizontal counterpart of [`stacked_bar_rects`], growing rightward from the band's left edge.
pub fn stacked_horizontal_bar_rects(values: &[f64], stacked_max: f64, band: Rect, width_factor: f64) -> Vec<Rect> {
    let thickness = bar_width(band.height, width_factor);
    let y = band.y + bar_x_offset(band.height, width_factor);
    let mut x = band.x;
    values
        .iter()
        .map(|&v| {
            let length = bar_height(v, stacked_max, band.width);
            let rect = Rect::new(x, y, length, thickness).standardized();
            x += length;
            rect
        })
        .collect()
}
