// File: crates/chartkit-core/src/path.rs
// Summary: Renderer-agnostic path commands, S-curve control points and rounded-rect outlines.

use serde::{Deserialize, Serialize};

use crate::types::{Point, Rect};

/// A command in a path. Arcs are circular and expressed as center + angles
/// so a rasterizer can map them onto its own oval-arc primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo { control1: Point, control2: Point, to: Point },
    /// Circular arc. Implies a straight segment from the current point to the arc start.
    Arc { center: Point, radius: f64, start_angle: f64, sweep: f64 },
    Close,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    pub fn cubic_to(&mut self, control1: Point, control2: Point, to: Point) -> &mut Self {
        self.commands.push(PathCommand::CubicTo { control1, control2, to });
        self
    }

    pub fn arc(&mut self, center: Point, radius: f64, start_angle: f64, sweep: f64) -> &mut Self {
        self.commands.push(PathCommand::Arc { center, radius, start_angle, sweep });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Last explicit end point, ignoring arcs.
    pub fn current_point(&self) -> Option<Point> {
        self.commands.iter().rev().find_map(|c| match *c {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::CubicTo { to, .. } => Some(to),
            _ => None,
        })
    }

    /// Copy of the path shifted by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Path {
        let commands = self
            .commands
            .iter()
            .map(|c| match *c {
                PathCommand::MoveTo(p) => PathCommand::MoveTo(p.offset(dx, dy)),
                PathCommand::LineTo(p) => PathCommand::LineTo(p.offset(dx, dy)),
                PathCommand::CubicTo { control1, control2, to } => PathCommand::CubicTo {
                    control1: control1.offset(dx, dy),
                    control2: control2.offset(dx, dy),
                    to: to.offset(dx, dy),
                },
                PathCommand::Arc { center, radius, start_angle, sweep } => PathCommand::Arc {
                    center: center.offset(dx, dy),
                    radius,
                    start_angle,
                    sweep,
                },
                PathCommand::Close => PathCommand::Close,
            })
            .collect();
        Path { commands }
    }

    /// Polyline through `points`, straight or S-curved.
    pub fn polyline(points: &[Point], curved: bool) -> Path {
        let mut path = Path::new();
        path.extend_through(points, curved, true);
        path
    }

    /// Continue the path through `points`. When `start` is set the first point
    /// opens a new sub-path, otherwise it is joined with a line.
    pub fn extend_through(&mut self, points: &[Point], curved: bool, start: bool) -> &mut Self {
        let Some((&first, rest)) = points.split_first() else { return self };
        if start { self.move_to(first); } else { self.line_to(first); }
        let mut prev = first;
        for &next in rest {
            if curved {
                let (c1, c2) = bezier_controls(prev, next);
                self.cubic_to(c1, c2, next);
            } else {
                self.line_to(next);
            }
            prev = next;
        }
        self
    }

    /// Rectangle outline, clockwise from the top-left corner.
    pub fn rect(r: Rect) -> Path {
        let r = r.standardized();
        let mut path = Path::new();
        path.move_to(Point::new(r.left(), r.top()))
            .line_to(Point::new(r.right(), r.top()))
            .line_to(Point::new(r.right(), r.bottom()))
            .line_to(Point::new(r.left(), r.bottom()))
            .close();
        path
    }

    pub fn circle(center: Point, radius: f64) -> Path {
        let mut path = Path::new();
        path.move_to(Point::new(center.x + radius, center.y))
            .arc(center, radius, 0.0, std::f64::consts::TAU)
            .close();
        path
    }
}

/// Control points for the cubic segment from `prev` to `next`.
///
/// Horizontal tangents at both ends: each control point sits at the
/// horizontal midpoint and keeps its own endpoint's y.
#[inline]
pub fn bezier_controls(prev: Point, next: Point) -> (Point, Point) {
    let half = (next.x - prev.x) / 2.0;
    (Point::new(prev.x + half, prev.y), Point::new(next.x - half, next.y))
}

/// Independent corner radii for bar outlines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_left: f64,
    pub bottom_right: f64,
}

impl CornerRadii {
    pub const fn uniform(r: f64) -> Self {
        Self { top_left: r, top_right: r, bottom_left: r, bottom_right: r }
    }

    pub const fn top(r: f64) -> Self {
        Self { top_left: r, top_right: r, bottom_left: 0.0, bottom_right: 0.0 }
    }

    /// Each radius bounded to `[0, min(w/2, h/2)]`.
    pub fn clamped(&self, width: f64, height: f64) -> Self {
        let limit = (width / 2.0).min(height / 2.0).max(0.0);
        let c = |r: f64| r.max(0.0).min(limit);
        Self {
            top_left: c(self.top_left),
            top_right: c(self.top_right),
            bottom_left: c(self.bottom_left),
            bottom_right: c(self.bottom_right),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.top_left == 0.0 && self.top_right == 0.0 && self.bottom_left == 0.0 && self.bottom_right == 0.0
    }
}

/// Closed rounded-rectangle outline. Radii are clamped first so corner arcs
/// never overlap or invert, whatever the requested values.
pub fn rounded_rect(rect: Rect, radii: CornerRadii) -> Path {
    use std::f64::consts::{FRAC_PI_2, PI};

    let r = rect.standardized();
    let radii = radii.clamped(r.width, r.height);
    if radii.is_zero() {
        return Path::rect(r);
    }
    let (l, t, rt, b) = (r.left(), r.top(), r.right(), r.bottom());

    let mut path = Path::new();
    path.move_to(Point::new(l + radii.top_left, t))
        .line_to(Point::new(rt - radii.top_right, t))
        .arc(Point::new(rt - radii.top_right, t + radii.top_right), radii.top_right, -FRAC_PI_2, FRAC_PI_2)
        .line_to(Point::new(rt, b - radii.bottom_right))
        .arc(Point::new(rt - radii.bottom_right, b - radii.bottom_right), radii.bottom_right, 0.0, FRAC_PI_2)
        .line_to(Point::new(l + radii.bottom_left, b))
        .arc(Point::new(l + radii.bottom_left, b - radii.bottom_left), radii.bottom_left, FRAC_PI_2, FRAC_PI_2)
        .line_to(Point::new(l, t + radii.top_left))
        .arc(Point::new(l + radii.top_left, t + radii.top_left), radii.top_left, PI, FRAC_PI_2)
        .close();
    path
}
