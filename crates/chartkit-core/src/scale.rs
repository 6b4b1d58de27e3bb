// File: crates/chartkit-core/src/scale.rs
// Summary: Scale resolution (min/max/range/average) from data and baseline/topline policies.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::math::{safe_divide, RANGE_EPSILON};
use crate::series::{ChartData, MultiSeries};

/// How the low bound of the value axis is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "policy", content = "value")]
pub enum Baseline {
    #[default]
    Zero,
    MinimumOfData,
    /// `min(data minimum, floor)`.
    MinimumWithFloor(f64),
}

/// How the high bound of the value axis is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "policy", content = "value")]
pub enum Topline {
    #[default]
    MaximumOfData,
    /// `max(data maximum, ceiling)`.
    MaximumWithCeiling(f64),
}

/// Derived value-axis scale. `range` is always strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    pub min_value: f64,
    pub max_value: f64,
    pub range: f64,
    pub average: f64,
}

impl Default for Scale {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[derive(Clone, Copy, Debug)]
struct Extent {
    low: f64,
    high: f64,
    sum: f64,
    count: usize,
}

impl Extent {
    const NONE: Self = Self { low: f64::INFINITY, high: f64::NEG_INFINITY, sum: 0.0, count: 0 };

    fn add(mut self, low: f64, high: f64, value: f64) -> Self {
        self.low = self.low.min(low);
        self.high = self.high.max(high);
        self.sum += value;
        self.count += 1;
        self
    }
}

impl Scale {
    /// Scale of an empty data set: everything zero, range = epsilon.
    pub const EMPTY: Scale = Scale { min_value: 0.0, max_value: 0.0, range: RANGE_EPSILON, average: 0.0 };

    /// Resolve over every point of every series, flattened.
    /// Ranged points contribute `lower` to the minimum and `upper` to the maximum.
    pub fn resolve(data: &ChartData, baseline: Baseline, topline: Topline) -> Scale {
        let extent = data
            .points()
            .fold(Extent::NONE, |e, p| e.add(p.low(), p.high(), p.value));
        Self::from_extent(extent, baseline, topline)
    }

    /// Resolve over bare values.
    pub fn from_values<I>(values: I, baseline: Baseline, topline: Topline) -> Scale
    where
        I: IntoIterator<Item = f64>,
    {
        let extent = values.into_iter().fold(Extent::NONE, |e, v| e.add(v, v, v));
        Self::from_extent(extent, baseline, topline)
    }

    /// Resolve over per-index totals, for stacked bars.
    pub fn resolve_stacked(data: &MultiSeries, baseline: Baseline, topline: Topline) -> Scale {
        Self::from_values(data.stacked_totals(), baseline, topline)
    }

    fn from_extent(extent: Extent, baseline: Baseline, topline: Topline) -> Scale {
        if extent.count == 0 {
            debug!("resolving scale over empty data");
            return Scale::EMPTY;
        }

        let min_value = match baseline {
            Baseline::Zero => 0.0,
            Baseline::MinimumOfData => extent.low,
            Baseline::MinimumWithFloor(floor) => extent.low.min(floor),
        };
        let max_value = match topline {
            Topline::MaximumOfData => extent.high,
            Topline::MaximumWithCeiling(ceiling) => extent.high.max(ceiling),
        };

        // An override can put the floor above the data maximum (zero baseline
        // over negative data); the span never goes below zero.
        Scale {
            min_value,
            max_value,
            range: (max_value - min_value).max(0.0) + RANGE_EPSILON,
            average: safe_divide(extent.sum, extent.count as f64),
        }
    }

    /// Fraction of the scale covered by `value` above `min_value`.
    #[inline]
    pub fn normalize(&self, value: f64) -> f64 {
        safe_divide(value - self.min_value, self.range)
    }
}
