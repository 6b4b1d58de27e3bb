// File: crates/chartkit-core/src/legend.rs
// Summary: Legend entries derived from chart data and theme.

use crate::series::{ChartData, ChartKind};
use crate::theme::Theme;
use crate::types::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendSymbol {
    /// Short stroke, for line series.
    Line,
    /// Filled square, for bars and segments.
    Swatch,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgba,
    pub symbol: LegendSymbol,
}

/// One entry per series, or per point where points carry their own identity
/// (every pie; single bar series with per-point colors).
pub fn legend_entries(data: &ChartData, kind: ChartKind, theme: &Theme) -> Vec<LegendEntry> {
    let per_point = match (kind, data) {
        (ChartKind::Pie, _) => true,
        (ChartKind::Bar, ChartData::Single(s)) => s.points.iter().any(|p| p.color.is_some()),
        _ => false,
    };

    if per_point {
        let Some(series) = data.series().first() else { return Vec::new() };
        return series
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| LegendEntry {
                label: p.label.clone().unwrap_or_else(|| i.to_string()),
                color: p.color.unwrap_or_else(|| theme.series_color(i)),
                symbol: LegendSymbol::Swatch,
            })
            .collect();
    }

    let symbol = if kind == ChartKind::Line { LegendSymbol::Line } else { LegendSymbol::Swatch };
    data.series()
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.label.is_empty())
        .map(|(i, s)| LegendEntry {
            label: s.label.clone(),
            color: s.color.unwrap_or_else(|| theme.series_color(i)),
            symbol,
        })
        .collect()
}
