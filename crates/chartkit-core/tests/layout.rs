// File: crates/chartkit-core/tests/layout.rs
// Purpose: Chart layout into frames: axes, bars, pie segments, markers and legend.

use std::f64::consts::TAU;

use chartkit_core::axis::AxisMarker;
use chartkit_core::style::{BarGrouping, Orientation};
use chartkit_core::{Chart, ChartData, ChartStyle, DataPoint, Element, Frame, MultiSeries, Path, PathCommand, Series, Size};

const SIZE: Size = Size::new(640.0, 400.0);

fn texts(frame: &Frame) -> Vec<&str> {
    frame.texts().collect()
}

fn fills(frame: &Frame) -> usize {
    frame
        .elements
        .iter()
        .filter(|e| matches!(e, Element::Path { fill: Some(_), stroke: None, .. }))
        .count()
}

fn arc_sweeps(path: &Path) -> Vec<f64> {
    path.commands()
        .iter()
        .filter_map(|c| match *c {
            PathCommand::Arc { sweep, .. } => Some(sweep),
            _ => None,
        })
        .collect()
}

#[test]
fn empty_surface_lays_out_nothing() {
    let chart = Chart::line(Series::from_values("s", &[1.0, 2.0]));
    let frame = chart.layout(Size::new(0.0, 300.0));
    assert!(frame.elements.is_empty());
    assert_eq!(frame.background, chart.theme.background);
}

#[test]
fn line_chart_labels_both_axes() {
    let chart = Chart::line(Series::from_values("", &[0.0, 50.0, 100.0]));
    let frame = chart.layout(SIZE);
    let t = texts(&frame);
    for label in ["0", "20", "40", "60", "80", "100", "1", "2"] {
        assert!(t.contains(&label), "missing {label} in {t:?}");
    }
}

#[test]
fn empty_data_still_draws_axes() {
    let frame = Chart::line(Series::new("")).layout(SIZE);
    assert!(frame.paths().count() > 0);
    assert!(texts(&frame).contains(&"0"));
}

#[test]
fn pie_labels_show_percent_shares() {
    let frame = Chart::pie(Series::from_values("", &[10.0, 50.0])).layout(SIZE);
    let t = texts(&frame);
    assert!(t.contains(&"17%"));
    assert!(t.contains(&"83%"));
    let segments: Vec<Vec<f64>> = frame.paths().map(arc_sweeps).filter(|s| !s.is_empty()).collect();
    assert_eq!(segments.len(), 2);
}

#[test]
fn single_point_pie_is_a_full_circle() {
    let frame = Chart::pie(Series::from_values("", &[42.0])).layout(SIZE);
    let sweeps: Vec<f64> = frame.paths().flat_map(arc_sweeps).collect();
    assert_eq!(sweeps, vec![TAU]);
}

#[test]
fn doughnut_rings_wrap_children_outside_parents() {
    let mut style = ChartStyle::default();
    style.pie.inner_radius_fraction = 0.4;
    let series = Series::with_points(
        "",
        vec![
            DataPoint::new(2.0).with_label("A").with_children(vec![DataPoint::new(1.0), DataPoint::new(1.0)]),
            DataPoint::new(2.0).with_label("B"),
        ],
    );
    let frame = Chart::pie(series).with_style(style).layout(SIZE);
    // two top-level ring sectors, two child sectors; each carries an outer and an inner arc
    let sectors: Vec<Vec<f64>> = frame.paths().map(arc_sweeps).filter(|s| s.len() == 2).collect();
    assert_eq!(sectors.len(), 4);
    let t = texts(&frame);
    assert!(t.contains(&"A") && t.contains(&"B"));
}

#[test]
fn zero_value_bars_are_not_drawn() {
    let frame = Chart::bar(Series::from_values("", &[0.0, 5.0])).layout(SIZE);
    assert_eq!(fills(&frame), 1);
}

#[test]
fn stacked_bars_scale_to_the_tallest_stack() {
    let data = MultiSeries::new(vec![Series::from_values("a", &[1.0, 2.0]), Series::from_values("b", &[3.0, 1.0])]);
    let grouped = Chart::bar(data.clone());
    assert_eq!(grouped.scale().max_value, 3.0);

    let mut style = ChartStyle::default();
    style.bar.grouping = BarGrouping::Stacked;
    let stacked = Chart::bar(data).with_style(style);
    assert_eq!(stacked.scale().max_value, 4.0);
    // four segments plus two legend swatches
    assert_eq!(fills(&stacked.layout(SIZE)), 6);
}

#[test]
fn horizontal_bars_label_categories_down_the_side() {
    let mut style = ChartStyle::default();
    style.bar.orientation = Orientation::Horizontal;
    let series = Series::with_points("", vec![DataPoint::new(3.0).with_label("Mon"), DataPoint::new(4.0).with_label("Tue")]);
    let frame = Chart::bar(series).with_style(style).layout(SIZE);
    let t = texts(&frame);
    assert!(t.contains(&"Mon") && t.contains(&"Tue"));
    assert_eq!(fills(&frame), 2);
}

#[test]
fn ranged_line_fills_its_band() {
    let series = Series::with_points("", vec![DataPoint::ranged(1.0, 3.0).unwrap(), DataPoint::ranged(2.0, 5.0).unwrap()]);
    let frame = Chart::line(ChartData::Ranged(series)).layout(SIZE);
    assert_eq!(fills(&frame), 1);
}

#[test]
fn markers_and_legend_follow_style() {
    let mut style = ChartStyle::default();
    style.axis.markers.push(AxisMarker::Average { label: Some("avg".into()) });
    let data = MultiSeries::new(vec![Series::from_values("north", &[1.0, 2.0]), Series::from_values("south", &[2.0, 3.0])]);

    let frame = Chart::line(data.clone()).with_style(style.clone()).layout(SIZE);
    let t = texts(&frame);
    assert!(t.contains(&"avg"));
    assert!(t.contains(&"north") && t.contains(&"south"));

    style.legend.visible = false;
    let frame = Chart::line(data).with_style(style).layout(SIZE);
    assert!(!texts(&frame).contains(&"north"));
}

#[test]
fn replacing_data_rescales() {
    let mut chart = Chart::line(Series::from_values("s", &[1.0, 2.0]));
    assert_eq!(chart.scale().max_value, 2.0);
    chart.set_data(Series::from_values("s", &[10.0, 20.0, 30.0]));
    assert_eq!(chart.scale().max_value, 30.0);
    assert_eq!(chart.data().max_len(), 3);
}
