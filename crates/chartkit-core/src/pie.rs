// File: crates/chartkit-core/src/pie.rs
// Summary: Pie/doughnut arc segments, multi-layer rings and segment paths.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::math::safe_divide;
use crate::path::Path;
use crate::series::DataPoint;
use crate::types::Point;

/// First segment starts at 3 o'clock.
pub const ORIGIN_RIGHT: f64 = 0.0;
/// First segment starts at 12 o'clock.
pub const ORIGIN_TOP: f64 = -FRAC_PI_2;

/// Angular extent of one segment, radians, clockwise on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSegment {
    pub start_angle: f64,
    pub sweep: f64,
}

impl ArcSegment {
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep
    }

    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.sweep / 2.0
    }

    /// Wedge (`inner_radius == 0`) or ring sector outline.
    pub fn path(&self, center: Point, outer_radius: f64, inner_radius: f64) -> Path {
        let mut path = Path::new();
        if inner_radius <= 0.0 {
            path.move_to(center)
                .arc(center, outer_radius, self.start_angle, self.sweep)
                .close();
        } else {
            path.move_to(point_on_circle(center, outer_radius, self.start_angle))
                .arc(center, outer_radius, self.start_angle, self.sweep)
                .arc(center, inner_radius, self.end_angle(), -self.sweep)
                .close();
        }
        path
    }

    /// Anchor for a segment label at `radius` from the center.
    pub fn label_anchor(&self, center: Point, radius: f64) -> Point {
        point_on_circle(center, radius, self.mid_angle())
    }

    /// Whether `angle` falls in `[start, start + sweep)`, modulo a full turn.
    pub fn contains_angle(&self, angle: f64) -> bool {
        if self.sweep <= 0.0 {
            return false;
        }
        if self.sweep >= TAU {
            return true;
        }
        let rel = (angle - self.start_angle).rem_euclid(TAU);
        rel < self.sweep
    }
}

pub fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

/// Split `span` radians starting at `start` in proportion to `values`.
/// A zero total yields zero sweeps, all starting at `start`.
pub fn arc_segments_within(values: &[f64], start: f64, span: f64) -> Vec<ArcSegment> {
    let total: f64 = values.iter().sum();
    let mut cursor = start;
    values
        .iter()
        .map(|&v| {
            let sweep = span * safe_divide(v, total);
            let seg = ArcSegment { start_angle: cursor, sweep };
            cursor += sweep;
            seg
        })
        .collect()
}

/// Full-circle segments, the first starting at `start_offset`.
pub fn arc_segments(values: &[f64], start_offset: f64) -> Vec<ArcSegment> {
    arc_segments_within(values, start_offset, TAU)
}

/// One ring of a multi-layer pie.
#[derive(Clone, Debug, PartialEq)]
pub struct RingSegment {
    /// Depth of the ring; 0 is the top level, drawn innermost.
    pub depth: usize,
    /// Index path from the top level down to this point.
    pub path: Vec<usize>,
    pub arc: ArcSegment,
}

/// Segments for every layer. Children of a point share out that point's own
/// sweep, so each inner ring lines up under its parent.
pub fn layered_segments(points: &[DataPoint], start_offset: f64) -> Vec<RingSegment> {
    let mut out = Vec::new();
    push_layer(points, start_offset, TAU, 0, &mut Vec::new(), &mut out);
    out
}

fn push_layer(
    points: &[DataPoint],
    start: f64,
    span: f64,
    depth: usize,
    prefix: &mut Vec<usize>,
    out: &mut Vec<RingSegment>,
) {
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    for (i, (p, arc)) in points.iter().zip(arc_segments_within(&values, start, span)).enumerate() {
        prefix.push(i);
        out.push(RingSegment { depth, path: prefix.clone(), arc });
        if !p.children.is_empty() {
            push_layer(&p.children, arc.start_angle, arc.sweep, depth + 1, prefix, out);
        }
        prefix.pop();
    }
}

/// Follow an index path (as in `RingSegment::path`) down through the children.
pub fn point_at<'a>(points: &'a [DataPoint], path: &[usize]) -> Option<&'a DataPoint> {
    let (&first, rest) = path.split_first()?;
    let p = points.get(first)?;
    if rest.is_empty() { Some(p) } else { point_at(&p.children, rest) }
}

/// Deepest ring level present in `points` (1 for a flat pie).
pub fn layer_count(points: &[DataPoint]) -> usize {
    if points.is_empty() {
        return 0;
    }
    1 + points.iter().map(|p| layer_count(&p.children)).max().unwrap_or(0)
}

/// Inner and outer radius of the ring at `depth` when `layers` rings share
/// the space between `inner` and `outer` equally.
pub fn ring_radii(inner: f64, outer: f64, layers: usize, depth: usize) -> (f64, f64) {
    let band = safe_divide(outer - inner, layers as f64);
    let ring_inner = inner + band * depth as f64;
    (ring_inner, ring_inner + band)
}

/// Alpha for a ring at `depth`: opaque at the top level, 60 less per level, never below 0.
pub fn ring_fade(depth: usize) -> u8 {
    let step = u8::try_from(depth).unwrap_or(u8::MAX).saturating_mul(60);
    u8::MAX.saturating_sub(step)
}
