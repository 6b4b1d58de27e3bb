// File: crates/chartkit-core/src/style.rs
// Summary: Chart styling configuration, one struct per concern, loadable from JSON.

use std::path::Path as FsPath;

use serde::{Deserialize, Serialize};

use crate::axis::AxisMarker;
use crate::error::{ChartError, Result};
use crate::path::CornerRadii;
use crate::pie::ORIGIN_RIGHT;
use crate::scale::{Baseline, Topline};
use crate::types::Insets;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    /// S-curve interpolation between points instead of straight segments.
    pub curved: bool,
    pub stroke_width: f64,
    /// Fill the area under the line.
    pub filled: bool,
    pub fill_alpha: u8,
    /// Skip zero values when building the stroke.
    pub ignore_zero: bool,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self { curved: false, stroke_width: 2.0, filled: false, fill_alpha: 96, ignore_zero: false }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointShape {
    Circle,
    Square,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointStyle {
    pub visible: bool,
    pub diameter: f64,
    pub shape: PointShape,
    pub outline_width: f64,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self { visible: false, diameter: 6.0, shape: PointShape::Circle, outline_width: 1.5 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisStyle {
    pub show_grid: bool,
    pub show_y_labels: bool,
    pub show_x_labels: bool,
    pub y_label_count: usize,
    pub decimals: usize,
    /// chrono format string for dated points.
    pub date_format: String,
    pub label_size: f64,
    pub line_width: f64,
    pub markers: Vec<AxisMarker>,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_y_labels: true,
            show_x_labels: true,
            y_label_count: 6,
            decimals: 0,
            date_format: "%b %d".to_string(),
            label_size: 12.0,
            line_width: 1.5,
            markers: Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarGrouping {
    /// Side by side within each lane.
    #[default]
    Grouped,
    /// On top of each other within each lane.
    Stacked,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarStyle {
    /// How much of each lane a bar fills, `[0, 1]`.
    pub width_factor: f64,
    pub corner_radii: CornerRadii,
    pub orientation: Orientation,
    pub grouping: BarGrouping,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            width_factor: 0.7,
            corner_radii: CornerRadii::default(),
            orientation: Orientation::Vertical,
            grouping: BarGrouping::Grouped,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieStyle {
    /// Angle of the first segment, radians. See `pie::ORIGIN_TOP`.
    pub start_angle: f64,
    /// Hole size as a fraction of the outer radius; 0 draws a pie.
    pub inner_radius_fraction: f64,
    pub show_labels: bool,
    /// Label distance from the center as a fraction of the outer radius.
    pub label_radius_fraction: f64,
    pub stroke_width: f64,
}

impl Default for PieStyle {
    fn default() -> Self {
        Self {
            start_angle: ORIGIN_RIGHT,
            inner_radius_fraction: 0.0,
            show_labels: true,
            label_radius_fraction: 0.7,
            stroke_width: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendStyle {
    pub visible: bool,
    pub swatch_size: f64,
    pub spacing: f64,
    pub label_size: f64,
}

impl Default for LegendStyle {
    fn default() -> Self {
        Self { visible: true, swatch_size: 10.0, spacing: 16.0, label_size: 12.0 }
    }
}

/// Complete styling for one chart. Built once and passed by value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub baseline: Baseline,
    pub topline: Topline,
    pub insets: Insets,
    pub line: LineStyle,
    pub points: PointStyle,
    pub axis: AxisStyle,
    pub bar: BarStyle,
    pub pie: PieStyle,
    pub legend: LegendStyle,
}

impl ChartStyle {
    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<FsPath>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ChartError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
