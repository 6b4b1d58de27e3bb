// File: crates/chartkit-core/tests/legend.rs
// Purpose: Legend entries per series or per point, with palette fallback.

use chartkit_core::legend::{legend_entries, LegendSymbol};
use chartkit_core::{ChartData, ChartKind, DataPoint, MultiSeries, Rgba, Series, Theme};

#[test]
fn line_legend_lists_named_series() {
    let theme = Theme::dark();
    let red = Rgba::rgb(255, 0, 0);
    let data = ChartData::Multi(MultiSeries::new(vec![
        Series::from_values("a", &[1.0]),
        Series::from_values("", &[2.0]),
        Series::from_values("c", &[3.0]).with_color(red),
    ]));
    let entries = legend_entries(&data, ChartKind::Line, &theme);
    let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["a", "c"]);
    assert_eq!(entries[0].color, theme.series_color(0));
    assert_eq!(entries[1].color, red);
    assert!(entries.iter().all(|e| e.symbol == LegendSymbol::Line));
}

#[test]
fn pie_legend_lists_points() {
    let theme = Theme::light();
    let series = Series::with_points("share", vec![DataPoint::new(1.0).with_label("Rent"), DataPoint::new(2.0)]);
    let entries = legend_entries(&ChartData::Single(series), ChartKind::Pie, &theme);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].label, "Rent");
    assert_eq!(entries[1].label, "1");
    assert_eq!(entries[1].color, theme.series_color(1));
    assert!(entries.iter().all(|e| e.symbol == LegendSymbol::Swatch));
}

#[test]
fn colored_bars_are_listed_per_point() {
    let theme = Theme::dark();
    let green = Rgba::rgb(0, 200, 0);
    let plain = Series::from_values("sales", &[1.0, 2.0]);
    let entries = legend_entries(&ChartData::Single(plain), ChartKind::Bar, &theme);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].symbol, LegendSymbol::Swatch);

    let colored = Series::with_points("sales", vec![DataPoint::new(1.0).with_color(green), DataPoint::new(2.0)]);
    let entries = legend_entries(&ChartData::Single(colored), ChartKind::Bar, &theme);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].color, green);
}

#[test]
fn palette_cycles_and_themes_resolve_by_name() {
    let theme = Theme::dark();
    assert_eq!(theme.series_color(0), theme.series_color(chartkit_core::theme::PALETTE_LEN));
    assert_eq!(chartkit_core::theme::find("LIGHT").name, "light");
    assert_eq!(chartkit_core::theme::find("high-contrast-dark").name, "high-contrast-dark");
    assert_eq!(chartkit_core::theme::find("unknown").name, "dark");
}
