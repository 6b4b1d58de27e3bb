// File: crates/chartkit-core/src/axis.rs
// Summary: Axis label placement and marker (average / point-of-interest) resolution.

use serde::{Deserialize, Serialize};

use crate::bar::{bar_lane, category_label_center_y};
use crate::grid::linspace;
use crate::line::{line_point_x, line_point_y};
use crate::scale::Scale;
use crate::series::DataPoint;
use crate::types::{Point, Rect, Size};

/// A label positioned along one axis. `position` is the coordinate on that
/// axis (y for value labels, x for category labels) in plot space.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    pub value: f64,
    pub text: String,
    pub position: f64,
}

/// Where category labels line up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelPlacement {
    /// Spread edge to edge, like the points of a line chart.
    Points,
    /// Centered in equal lanes, like bars.
    Lanes,
}

pub fn format_value(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// `count` evenly spaced value labels from `min_value` (bottom) to `max_value` (top).
pub fn y_axis_labels(scale: &Scale, count: usize, decimals: usize, height: f64) -> Vec<AxisLabel> {
    linspace(scale.min_value, scale.max_value, count)
        .into_iter()
        .map(|v| AxisLabel {
            value: v,
            text: format_value(v, decimals),
            position: line_point_y(v, scale.min_value, scale.range, height),
        })
        .collect()
}

/// Value labels along a horizontal axis (horizontal bar charts), left to right.
pub fn x_value_labels(scale: &Scale, count: usize, decimals: usize, width: f64) -> Vec<AxisLabel> {
    linspace(scale.min_value, scale.max_value, count)
        .into_iter()
        .map(|v| AxisLabel {
            value: v,
            text: format_value(v, decimals),
            position: crate::bar::horizontal_bar_length(v, scale.min_value, scale.range, width),
        })
        .collect()
}

/// Text for a category: point label, else formatted date, else the index.
pub fn category_text(point: &DataPoint, index: usize, date_format: &str) -> String {
    if let Some(label) = &point.label {
        return label.clone();
    }
    if let Some(date) = point.date {
        return date.format(date_format).to_string();
    }
    index.to_string()
}

/// Category labels along the x axis.
pub fn x_axis_labels(points: &[DataPoint], placement: LabelPlacement, date_format: &str, width: f64) -> Vec<AxisLabel> {
    let count = points.len();
    let surface = Rect::new(0.0, 0.0, width, 0.0);
    points
        .iter()
        .enumerate()
        .map(|(i, p)| AxisLabel {
            value: i as f64,
            text: category_text(p, i, date_format),
            position: match placement {
                LabelPlacement::Points => line_point_x(i, count, width),
                LabelPlacement::Lanes => bar_lane(i, count, surface).center().x,
            },
        })
        .collect()
}

/// Category labels down the y axis (horizontal bar charts).
pub fn y_category_labels(points: &[DataPoint], date_format: &str, height: f64) -> Vec<AxisLabel> {
    let count = points.len();
    points
        .iter()
        .enumerate()
        .map(|(i, p)| AxisLabel {
            value: i as f64,
            text: category_text(p, i, date_format),
            position: category_label_center_y(i, count, height),
        })
        .collect()
}

/// Extra guide lines drawn over the plot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum AxisMarker {
    /// Horizontal line at a fixed value.
    Value { value: f64, label: Option<String> },
    /// Horizontal line at the resolved average.
    Average { label: Option<String> },
    /// Vertical line at a data index.
    Index { index: usize, label: Option<String> },
}

/// A marker resolved into plot space.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerLine {
    pub from: Point,
    pub to: Point,
    pub label: Option<String>,
}

impl AxisMarker {
    /// Resolve against the scale. `count` is the number of x positions and
    /// `placement` decides whether indexes land on points or lane centers.
    pub fn resolve(&self, scale: &Scale, count: usize, placement: LabelPlacement, size: Size) -> MarkerLine {
        let horizontal = |v: f64, label: &Option<String>| {
            let y = line_point_y(v, scale.min_value, scale.range, size.height);
            MarkerLine { from: Point::new(0.0, y), to: Point::new(size.width, y), label: label.clone() }
        };
        match self {
            AxisMarker::Value { value, label } => horizontal(*value, label),
            AxisMarker::Average { label } => horizontal(scale.average, label),
            AxisMarker::Index { index, label } => {
                let x = match placement {
                    LabelPlacement::Points => line_point_x(*index, count, size.width),
                    LabelPlacement::Lanes => bar_lane(*index, count, Rect::from_size(size)).center().x,
                };
                MarkerLine { from: Point::new(x, 0.0), to: Point::new(x, size.height), label: label.clone() }
            }
        }
    }
}
