// File: crates/chartkit-core/src/chart.rs
// Summary: Chart struct and layout pipeline producing a renderer-agnostic Frame.

use tracing::{debug, trace};

use crate::axis::{x_axis_labels, x_value_labels, y_axis_labels, y_category_labels, AxisMarker, LabelPlacement};
use crate::bar::{
    bar_band, bar_geometry, bar_lane, bar_width, bar_x_offset, grouped_bar_rects, grouped_horizontal_bar_rects,
    horizontal_bar_length, horizontal_bar_rect, lane_values, ranged_bar_geometry, stacked_bar_rects,
    stacked_horizontal_bar_rects,
};
use crate::frame::{Frame, Stroke, TextAlign};
use crate::legend::{legend_entries, LegendEntry, LegendSymbol};
use crate::line::{filled_line_path, line_path, line_points_over, ranged_band_path, ranged_points};
use crate::math::{clamp, safe_divide};
use crate::path::{rounded_rect, Path};
use crate::pie::{layer_count, layered_segments, point_at, ring_fade, ring_radii};
use crate::scale::Scale;
use crate::series::{ChartData, ChartKind, DataPoint, Series};
use crate::style::{BarGrouping, ChartStyle, Orientation, PointShape};
use crate::theme::Theme;
use crate::touch::{
    touch_bar, touch_bar_lane, touch_horizontal_bar, touch_horizontal_bar_band, touch_line, touch_pie, TouchInfo,
};
use crate::types::{Point, Rect, Rgba, Size};

/// Category labels beyond this count are thinned to every n-th.
const MAX_X_LABELS: usize = 12;
/// Gap between the plot edge and axis labels.
const LABEL_GAP: f64 = 8.0;

pub struct Chart {
    pub kind: ChartKind,
    pub style: ChartStyle,
    pub theme: Theme,
    data: ChartData,
}

impl Chart {
    pub fn new(kind: ChartKind, data: impl Into<ChartData>) -> Self {
        Self { kind, style: ChartStyle::default(), theme: Theme::default(), data: data.into() }
    }

    pub fn line(data: impl Into<ChartData>) -> Self {
        Self::new(ChartKind::Line, data)
    }

    pub fn bar(data: impl Into<ChartData>) -> Self {
        Self::new(ChartKind::Bar, data)
    }

    pub fn pie(series: Series) -> Self {
        Self::new(ChartKind::Pie, series)
    }

    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn data(&self) -> &ChartData {
        &self.data
    }

    /// Replace the data set wholesale. The next layout resolves a fresh scale.
    pub fn set_data(&mut self, data: impl Into<ChartData>) {
        self.data = data.into();
    }

    fn is_stacked(&self) -> bool {
        self.kind == ChartKind::Bar && self.style.bar.grouping == BarGrouping::Stacked
    }

    /// Scale for the current data. Stacked bars scale against per-index totals.
    pub fn scale(&self) -> Scale {
        let (baseline, topline) = (self.style.baseline, self.style.topline);
        match &self.data {
            ChartData::Multi(m) if self.is_stacked() => Scale::resolve_stacked(m, baseline, topline),
            data => Scale::resolve(data, baseline, topline),
        }
    }

    pub fn plot_rect(&self, size: Size) -> Rect {
        self.style.insets.inset(size)
    }

    fn series_color(&self, index: usize) -> Rgba {
        self.data
            .series()
            .get(index)
            .and_then(|s| s.color)
            .unwrap_or_else(|| self.theme.series_color(index))
    }

    pub fn legend(&self) -> Vec<LegendEntry> {
        legend_entries(&self.data, self.kind, &self.theme)
    }

    /// Lay the chart out on a surface of `size`.
    pub fn layout(&self, size: Size) -> Frame {
        let mut frame = Frame::new(size, self.theme.background);
        if size.is_empty() {
            debug!(width = size.width, height = size.height, "skipping layout for empty surface");
            return frame;
        }
        let plot = self.plot_rect(size);
        let scale = self.scale();
        trace!(kind = ?self.kind, ?scale, ?plot, "layout");

        match (self.kind, self.style.bar.orientation) {
            (ChartKind::Line, _) => {
                self.layout_value_axes(&mut frame, plot, &scale, LabelPlacement::Points);
                self.layout_lines(&mut frame, plot, &scale);
                self.layout_markers(&mut frame, plot, &scale, LabelPlacement::Points);
            }
            (ChartKind::Bar, Orientation::Vertical) => {
                self.layout_value_axes(&mut frame, plot, &scale, LabelPlacement::Lanes);
                self.layout_bars(&mut frame, plot, &scale);
                self.layout_markers(&mut frame, plot, &scale, LabelPlacement::Lanes);
            }
            (ChartKind::Bar, Orientation::Horizontal) => {
                self.layout_category_axes(&mut frame, plot, &scale);
                self.layout_horizontal_bars(&mut frame, plot, &scale);
            }
            (ChartKind::Pie, _) => self.layout_pie(&mut frame, plot),
        }

        self.layout_legend(&mut frame, size, plot);
        frame
    }

    /// Hit-test a surface location. Returns one hit per series that has data there.
    pub fn touch(&self, size: Size, at: Point) -> Vec<TouchInfo> {
        let plot = self.plot_rect(size);
        let local = Point::new(at.x - plot.x, at.y - plot.y);
        let area = plot.size();
        let scale = self.scale();
        let series = self.data.series();
        let slots = self.data.max_len();
        let (grouping, wf) = (self.style.bar.grouping, self.style.bar.width_factor);
        let to_surface = |mut t: TouchInfo| {
            t.location = t.location.offset(plot.x, plot.y);
            t
        };

        let hits: Vec<TouchInfo> = match (self.kind, self.style.bar.orientation) {
            (ChartKind::Line, _) => series
                .iter()
                .enumerate()
                .filter_map(|(i, s)| touch_line(i, s, slots, &scale, area, local))
                .collect(),
            (ChartKind::Bar, Orientation::Vertical) => match &self.data {
                ChartData::Multi(m) => touch_bar_lane(&m.series, grouping, scale.max_value, wf, area, local),
                _ => series
                    .iter()
                    .enumerate()
                    .filter_map(|(i, s)| touch_bar(i, s, scale.max_value, area, local))
                    .collect(),
            },
            (ChartKind::Bar, Orientation::Horizontal) => match &self.data {
                ChartData::Multi(m) => touch_horizontal_bar_band(&m.series, grouping, &scale, wf, area, local),
                _ => series
                    .iter()
                    .enumerate()
                    .filter_map(|(i, s)| touch_horizontal_bar(i, s, &scale, area, local))
                    .collect(),
            },
            (ChartKind::Pie, _) => {
                let Some(s) = series.first() else { return Vec::new() };
                let (outer, inner) = self.pie_radii(area);
                touch_pie(s, self.style.pie.start_angle, Rect::from_size(area).center(), outer, inner, local)
                    .into_iter()
                    .collect()
            }
        };
        hits.into_iter().map(to_surface).collect()
    }

    // ---- axes ------------------------------------------------------------------

    fn category_points(&self) -> &[DataPoint] {
        self.data
            .series()
            .iter()
            .max_by_key(|s| s.len())
            .map(|s| s.points.as_slice())
            .unwrap_or(&[])
    }

    fn layout_value_axes(&self, frame: &mut Frame, plot: Rect, scale: &Scale, placement: LabelPlacement) {
        let axis = &self.style.axis;
        let y_labels = y_axis_labels(scale, axis.y_label_count, axis.decimals, plot.height);

        if axis.show_grid {
            for l in &y_labels {
                let y = plot.y + l.position;
                frame.stroke(segment(Point::new(plot.left(), y), Point::new(plot.right(), y)), Stroke::new(self.theme.grid, 1.0));
            }
        }
        frame.stroke(
            Path::polyline(
                &[
                    Point::new(plot.left(), plot.top()),
                    Point::new(plot.left(), plot.bottom()),
                    Point::new(plot.right(), plot.bottom()),
                ],
                false,
            ),
            Stroke::new(self.theme.axis_line, axis.line_width),
        );

        if axis.show_y_labels {
            for l in y_labels {
                let anchor = Point::new(plot.left() - LABEL_GAP, plot.y + l.position);
                frame.text(l.text, anchor, TextAlign::Right, self.theme.axis_label, axis.label_size);
            }
        }
        if axis.show_x_labels {
            let labels = x_axis_labels(self.category_points(), placement, &axis.date_format, plot.width);
            let stride = labels.len().div_ceil(MAX_X_LABELS).max(1);
            for l in labels.into_iter().step_by(stride) {
                let anchor = Point::new(plot.x + l.position, plot.bottom() + LABEL_GAP + axis.label_size / 2.0);
                frame.text(l.text, anchor, TextAlign::Center, self.theme.axis_label, axis.label_size);
            }
        }
    }

    fn layout_category_axes(&self, frame: &mut Frame, plot: Rect, scale: &Scale) {
        let axis = &self.style.axis;
        let x_labels = x_value_labels(scale, axis.y_label_count, axis.decimals, plot.width);

        if axis.show_grid {
            for l in &x_labels {
                let x = plot.x + l.position;
                frame.stroke(segment(Point::new(x, plot.top()), Point::new(x, plot.bottom())), Stroke::new(self.theme.grid, 1.0));
            }
        }
        frame.stroke(
            Path::polyline(
                &[
                    Point::new(plot.left(), plot.top()),
                    Point::new(plot.left(), plot.bottom()),
                    Point::new(plot.right(), plot.bottom()),
                ],
                false,
            ),
            Stroke::new(self.theme.axis_line, axis.line_width),
        );

        if axis.show_x_labels {
            for l in x_labels {
                let anchor = Point::new(plot.x + l.position, plot.bottom() + LABEL_GAP + axis.label_size / 2.0);
                frame.text(l.text, anchor, TextAlign::Center, self.theme.axis_label, axis.label_size);
            }
        }
        if axis.show_y_labels {
            for l in y_category_labels(self.category_points(), &axis.date_format, plot.height) {
                let anchor = Point::new(plot.left() - LABEL_GAP, plot.y + l.position);
                frame.text(l.text, anchor, TextAlign::Right, self.theme.axis_label, axis.label_size);
            }
        }
    }

    fn layout_markers(&self, frame: &mut Frame, plot: Rect, scale: &Scale, placement: LabelPlacement) {
        let count = self.data.max_len();
        let size = self.style.axis.label_size;
        for marker in &self.style.axis.markers {
            let line = marker.resolve(scale, count, placement, plot.size());
            let (from, to) = (line.from.offset(plot.x, plot.y), line.to.offset(plot.x, plot.y));
            frame.stroke(segment(from, to), Stroke::new(self.theme.marker, 1.0));
            let Some(label) = line.label else { continue };
            match marker {
                AxisMarker::Index { .. } => {
                    frame.text(label, from.offset(4.0, size / 2.0), TextAlign::Left, self.theme.marker, size);
                }
                _ => {
                    frame.text(label, to.offset(-4.0, -size / 2.0 - 2.0), TextAlign::Right, self.theme.marker, size);
                }
            }
        }
    }

    // ---- line ------------------------------------------------------------------

    fn layout_lines(&self, frame: &mut Frame, plot: Rect, scale: &Scale) {
        let area = plot.size();
        let style = &self.style.line;
        let ranged = self.data.is_ranged();
        let slots = self.data.max_len();

        for (i, series) in self.data.series().iter().enumerate() {
            let color = self.series_color(i);
            let points = line_points_over(series, slots, scale, area);

            if ranged {
                let (upper, lower) = ranged_points(series, scale, area);
                let band = ranged_band_path(&upper, &lower, style.curved);
                frame.fill(band.translated(plot.x, plot.y), color.with_alpha(style.fill_alpha));
            } else if style.filled {
                let fill = filled_line_path(&points, style.curved, area.height);
                frame.fill(fill.translated(plot.x, plot.y), color.with_alpha(style.fill_alpha));
            }

            let stroke = line_path(series, &points, style.curved, style.ignore_zero);
            if !stroke.is_empty() {
                frame.stroke(stroke.translated(plot.x, plot.y), Stroke::new(color, style.stroke_width));
            }

            if self.style.points.visible {
                for (p, pt) in series.points.iter().zip(&points) {
                    if style.ignore_zero && p.value == 0.0 {
                        continue;
                    }
                    self.point_marker(frame, pt.offset(plot.x, plot.y), color);
                }
            }
        }
    }

    fn point_marker(&self, frame: &mut Frame, center: Point, color: Rgba) {
        let style = &self.style.points;
        let r = style.diameter / 2.0;
        let path = match style.shape {
            PointShape::Circle => Path::circle(center, r),
            PointShape::Square => Path::rect(Rect::new(center.x - r, center.y - r, style.diameter, style.diameter)),
        };
        frame.fill_and_stroke(path, self.theme.point_fill, Stroke::new(color, style.outline_width));
    }

    // ---- bar -------------------------------------------------------------------

    fn bar_shape(&self, frame: &mut Frame, rect: Rect, plot: Rect, color: Rgba) {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        let path = rounded_rect(rect.translate(plot.x, plot.y), self.style.bar.corner_radii);
        frame.fill(path, color);
    }

    fn point_color(&self, series_index: usize, point: &DataPoint) -> Rgba {
        point.color.unwrap_or_else(|| self.series_color(series_index))
    }

    fn layout_bars(&self, frame: &mut Frame, plot: Rect, scale: &Scale) {
        let style = &self.style.bar;
        let wf = style.width_factor;
        let local = Rect::from_size(plot.size());
        let count = self.data.max_len();

        match &self.data {
            ChartData::Single(s) => {
                for (i, p) in s.points.iter().enumerate() {
                    let lane = bar_lane(i, count, local);
                    let rect = bar_geometry(p.value, scale.max_value, lane.size(), wf).in_lane(lane);
                    self.bar_shape(frame, rect, plot, self.point_color(0, p));
                }
            }
            ChartData::Ranged(s) => {
                for (i, p) in s.points.iter().enumerate() {
                    let lane = bar_lane(i, count, local);
                    let rect = ranged_bar_geometry(p.low(), p.high(), scale, lane.size(), wf).in_lane(lane);
                    self.bar_shape(frame, rect, plot, self.point_color(0, p));
                }
            }
            ChartData::Multi(m) => {
                for i in 0..count {
                    let lane = bar_lane(i, count, local);
                    let values = lane_values(&m.series, i);
                    let rects = match style.grouping {
                        BarGrouping::Grouped => grouped_bar_rects(&values, scale.max_value, lane, wf),
                        BarGrouping::Stacked => stacked_bar_rects(&values, scale.max_value, lane, wf),
                    };
                    for (j, rect) in rects.into_iter().enumerate() {
                        self.bar_shape(frame, rect, plot, self.series_color(j));
                    }
                }
            }
        }
    }

    fn layout_horizontal_bars(&self, frame: &mut Frame, plot: Rect, scale: &Scale) {
        let style = &self.style.bar;
        let wf = style.width_factor;
        let local = Rect::from_size(plot.size());
        let count = self.data.max_len();

        match &self.data {
            ChartData::Single(s) => {
                for (i, p) in s.points.iter().enumerate() {
                    let rect = horizontal_bar_rect(p.value, scale, bar_band(i, count, local), wf);
                    self.bar_shape(frame, rect, plot, self.point_color(0, p));
                }
            }
            ChartData::Ranged(s) => {
                for (i, p) in s.points.iter().enumerate() {
                    let band = bar_band(i, count, local);
                    let start = horizontal_bar_length(p.low(), scale.min_value, scale.range, band.width);
                    let end = horizontal_bar_length(p.high(), scale.min_value, scale.range, band.width);
                    let rect = Rect::new(
                        band.x + start,
                        band.y + bar_x_offset(band.height, wf),
                        end - start,
                        bar_width(band.height, wf),
                    );
                    self.bar_shape(frame, rect.standardized(), plot, self.point_color(0, p));
                }
            }
            ChartData::Multi(m) => {
                for i in 0..count {
                    let band = bar_band(i, count, local);
                    let values = lane_values(&m.series, i);
                    let rects = match style.grouping {
                        BarGrouping::Grouped => grouped_horizontal_bar_rects(&values, scale, band, wf),
                        BarGrouping::Stacked => stacked_horizontal_bar_rects(&values, scale.max_value, band, wf),
                    };
                    for (j, rect) in rects.into_iter().enumerate() {
                        self.bar_shape(frame, rect, plot, self.series_color(j));
                    }
                }
            }
        }
    }

    // ---- pie -------------------------------------------------------------------

    /// Outer and inner radius for a plot area of `area`.
    fn pie_radii(&self, area: Size) -> (f64, f64) {
        let outer = (area.width.min(area.height) / 2.0).max(0.0);
        let inner = outer * clamp(self.style.pie.inner_radius_fraction, 0.0, 1.0);
        (outer, inner)
    }

    fn layout_pie(&self, frame: &mut Frame, plot: Rect) {
        let Some(series) = self.data.series().first() else { return };
        let style = &self.style.pie;
        let center = plot.center();
        let (outer, inner) = self.pie_radii(plot.size());
        let layers = layer_count(&series.points).max(1);
        let total = series.total();

        // Top-level ring sits innermost; each level of children wraps around its parent.
        for ring in layered_segments(&series.points, style.start_angle) {
            if ring.arc.sweep <= 0.0 {
                continue;
            }
            let Some(point) = point_at(&series.points, &ring.path) else { continue };
            let (ring_inner, ring_outer) = ring_radii(inner, outer, layers, ring.depth);
            let root = ring.path[0];
            let color = point
                .color
                .unwrap_or_else(|| self.theme.series_color(root).with_alpha(ring_fade(ring.depth)));

            frame.fill_and_stroke(
                ring.arc.path(center, ring_outer, ring_inner),
                color,
                Stroke::new(self.theme.background, style.stroke_width),
            );

            if style.show_labels && ring.depth == 0 {
                let radius = if layers == 1 {
                    inner + (outer - inner) * style.label_radius_fraction
                } else {
                    (ring_inner + ring_outer) / 2.0
                };
                let text = point
                    .label
                    .clone()
                    .unwrap_or_else(|| format!("{:.0}%", safe_divide(point.value, total) * 100.0));
                let anchor = ring.arc.label_anchor(center, radius);
                frame.text(text, anchor, TextAlign::Center, self.theme.axis_label, self.style.axis.label_size);
            }
        }
    }

    // ---- legend ----------------------------------------------------------------

    fn layout_legend(&self, frame: &mut Frame, size: Size, plot: Rect) {
        let style = &self.style.legend;
        if !style.visible {
            return;
        }
        let entries = self.legend();
        if entries.is_empty() {
            return;
        }
        let below_axis = plot.bottom() + LABEL_GAP * 2.0 + self.style.axis.label_size * 1.5;
        let y = below_axis.min(size.height - style.swatch_size);
        let half = style.swatch_size / 2.0;
        let mut x = plot.left();

        for entry in entries {
            match entry.symbol {
                LegendSymbol::Line => frame.stroke(
                    segment(Point::new(x, y), Point::new(x + style.swatch_size, y)),
                    Stroke::new(entry.color, self.style.line.stroke_width),
                ),
                LegendSymbol::Swatch => {
                    frame.fill(Path::rect(Rect::new(x, y - half, style.swatch_size, style.swatch_size)), entry.color)
                }
            }
            x += style.swatch_size + 6.0;
            let width = estimate_text_width(&entry.label, style.label_size);
            frame.text(entry.label, Point::new(x, y), TextAlign::Left, self.theme.axis_label, style.label_size);
            x += width + style.spacing;
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn segment(from: Point, to: Point) -> Path {
    Path::polyline(&[from, to], false)
}

/// Rough advance width; layout does not depend on real font metrics.
fn estimate_text_width(text: &str, size: f64) -> f64 {
    text.chars().count() as f64 * size * 0.6
}
