// File: crates/chartkit-core/src/series.rs
// Summary: Data model for single, multi and ranged series.
// Notes:
// - One point shape serves every chart kind; ranged bounds and pie children
//   are optional fields rather than separate point types.
// - Series are replaced wholesale on refresh. Nothing derived from them is cached.

use chrono::NaiveDate;

use crate::error::{ChartError, Result};
use crate::types::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataPoint {
    pub value: f64,
    pub upper: Option<f64>,
    pub lower: Option<f64>,
    pub label: Option<String>,
    pub date: Option<NaiveDate>,
    pub color: Option<Rgba>,
    /// Inner ring of a multi-layer pie; empty elsewhere.
    pub children: Vec<DataPoint>,
}

impl DataPoint {
    pub fn new(value: f64) -> Self {
        Self { value, ..Self::default() }
    }

    /// Ranged point with `value` at the band midpoint.
    /// Enforces `lower <= upper`.
    pub fn ranged(lower: f64, upper: f64) -> Result<Self> {
        if lower > upper {
            return Err(ChartError::InvalidRange { lower, upper });
        }
        Ok(Self {
            value: lower + (upper - lower) / 2.0,
            upper: Some(upper),
            lower: Some(lower),
            ..Self::default()
        })
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_children(mut self, children: Vec<DataPoint>) -> Self {
        self.children = children;
        self
    }

    /// Lowest value this point occupies on the value axis.
    pub fn low(&self) -> f64 { self.lower.unwrap_or(self.value) }

    /// Highest value this point occupies on the value axis.
    pub fn high(&self) -> f64 { self.upper.unwrap_or(self.value) }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub label: String,
    pub color: Option<Rgba>,
    pub points: Vec<DataPoint>,
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), color: None, points: Vec::new() }
    }

    pub fn with_points(label: impl Into<String>, points: Vec<DataPoint>) -> Self {
        Self { label: label.into(), color: None, points }
    }

    /// Build from bare values, in order.
    pub fn from_values(label: impl Into<String>, values: &[f64]) -> Self {
        Self::with_points(label, values.iter().copied().map(DataPoint::new).collect())
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    pub fn push(&mut self, point: DataPoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    /// Sum of values; the pie chart's denominator.
    pub fn total(&self) -> f64 {
        self.values().sum()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiSeries {
    pub series: Vec<Series>,
}

impl MultiSeries {
    pub fn new(series: Vec<Series>) -> Self {
        Self { series }
    }

    pub fn push(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Length of the longest member; the number of x positions or bar groups.
    pub fn max_len(&self) -> usize {
        self.series.iter().map(Series::len).max().unwrap_or(0)
    }

    /// Per-index totals across all member series (missing points count as 0).
    pub fn stacked_totals(&self) -> Vec<f64> {
        let mut totals = vec![0.0; self.max_len()];
        for s in &self.series {
            for (i, p) in s.points.iter().enumerate() {
                totals[i] += p.value;
            }
        }
        totals
    }
}

/// Tagged data set handed to the resolver and layout.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartData {
    Single(Series),
    Multi(MultiSeries),
    Ranged(Series),
}

impl ChartData {
    /// Member series in render order.
    pub fn series(&self) -> &[Series] {
        match self {
            ChartData::Single(s) | ChartData::Ranged(s) => std::slice::from_ref(s),
            ChartData::Multi(m) => &m.series,
        }
    }

    pub fn points(&self) -> impl Iterator<Item = &DataPoint> + '_ {
        self.series().iter().flat_map(|s| s.points.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.points().next().is_none()
    }

    /// Number of x positions shared by the member series.
    pub fn max_len(&self) -> usize {
        self.series().iter().map(Series::len).max().unwrap_or(0)
    }

    pub fn is_ranged(&self) -> bool {
        matches!(self, ChartData::Ranged(_))
    }
}

impl From<Series> for ChartData {
    fn from(s: Series) -> Self { ChartData::Single(s) }
}

impl From<MultiSeries> for ChartData {
    fn from(m: MultiSeries) -> Self { ChartData::Multi(m) }
}
