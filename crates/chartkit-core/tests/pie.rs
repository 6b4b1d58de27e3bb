// File: crates/chartkit-core/tests/pie.rs
// Purpose: Arc segment sweeps, angle containment, segment outlines and multi-layer rings.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use chartkit_core::pie::{arc_segments_within, layer_count, layered_segments, point_at, ring_fade, ring_radii, ORIGIN_TOP};
use chartkit_core::{arc_segments, ArcSegment, DataPoint, PathCommand, Point};

const EPS: f64 = 1e-9;

#[test]
fn sweeps_are_proportional_and_contiguous() {
    let segs = arc_segments(&[10.0, 50.0], 0.0);
    assert!((segs[0].sweep - 1.047).abs() < 1e-3);
    assert!((segs[0].sweep - TAU / 6.0).abs() < EPS);
    assert!((segs[1].start_angle - segs[0].end_angle()).abs() < EPS);
    assert!((segs[1].sweep - 5.236).abs() < 1e-3);
    let total: f64 = segs.iter().map(|s| s.sweep).sum();
    assert!((total - TAU).abs() < EPS);
}

#[test]
fn start_offset_rotates_every_segment() {
    let segs = arc_segments(&[1.0, 1.0], ORIGIN_TOP);
    assert_eq!(segs[0].start_angle, -FRAC_PI_2);
    assert!((segs[1].start_angle - FRAC_PI_2).abs() < EPS);
}

#[test]
fn zero_total_gives_empty_segments() {
    let segs = arc_segments(&[0.0, 0.0, 0.0], 0.0);
    assert!(segs.iter().all(|s| s.sweep == 0.0 && s.start_angle == 0.0));
    assert!(arc_segments(&[], 0.0).is_empty());
}

#[test]
fn single_value_spans_a_full_turn() {
    let segs = arc_segments(&[42.0], 0.0);
    assert_eq!(segs[0].sweep, TAU);
    assert!(segs[0].contains_angle(-3.0));
}

#[test]
fn contains_angle_wraps_around() {
    let seg = ArcSegment { start_angle: 0.0, sweep: FRAC_PI_2 };
    assert!(seg.contains_angle(PI / 4.0));
    assert!(seg.contains_angle(TAU + 0.1));
    assert!(!seg.contains_angle(-PI / 4.0));

    let top_half = ArcSegment { start_angle: ORIGIN_TOP, sweep: PI };
    assert!(top_half.contains_angle(0.0));
    assert!(!top_half.contains_angle(PI));
    assert!(!ArcSegment { start_angle: 0.0, sweep: 0.0 }.contains_angle(0.0));
}

#[test]
fn wedge_and_ring_outlines() {
    let seg = ArcSegment { start_angle: 0.0, sweep: FRAC_PI_2 };
    let center = Point::new(50.0, 50.0);

    let wedge = seg.path(center, 40.0, 0.0);
    assert_eq!(
        wedge.commands(),
        &[
            PathCommand::MoveTo(center),
            PathCommand::Arc { center, radius: 40.0, start_angle: 0.0, sweep: FRAC_PI_2 },
            PathCommand::Close,
        ]
    );

    let ring = seg.path(center, 40.0, 20.0);
    let cmds = ring.commands();
    assert_eq!(cmds[0], PathCommand::MoveTo(Point::new(90.0, 50.0)));
    assert_eq!(cmds[2], PathCommand::Arc { center, radius: 20.0, start_angle: FRAC_PI_2, sweep: -FRAC_PI_2 });
    assert_eq!(cmds[3], PathCommand::Close);
}

#[test]
fn label_anchor_is_at_mid_angle() {
    let seg = ArcSegment { start_angle: 0.0, sweep: PI };
    let p = seg.label_anchor(Point::new(0.0, 0.0), 10.0);
    assert!(p.x.abs() < EPS);
    assert!((p.y - 10.0).abs() < EPS);
}

#[test]
fn children_split_their_parent_sweep() {
    let points = vec![
        DataPoint::new(3.0).with_children(vec![DataPoint::new(1.0), DataPoint::new(2.0)]),
        DataPoint::new(3.0),
    ];
    assert_eq!(layer_count(&points), 2);
    assert_eq!(layer_count(&[]), 0);
    assert_eq!(layer_count(&[DataPoint::new(1.0)]), 1);

    let rings = layered_segments(&points, 0.0);
    let paths: Vec<Vec<usize>> = rings.iter().map(|r| r.path.clone()).collect();
    assert_eq!(paths, vec![vec![0], vec![0, 0], vec![0, 1], vec![1]]);

    assert_eq!(rings[1].depth, 1);
    assert!((rings[1].arc.sweep - PI / 3.0).abs() < EPS);
    assert!((rings[2].arc.start_angle - PI / 3.0).abs() < EPS);
    assert!((rings[2].arc.end_angle() - rings[0].arc.end_angle()).abs() < EPS);
    assert!((rings[3].arc.start_angle - PI).abs() < EPS);

    assert_eq!(point_at(&points, &[0, 1]).map(|p| p.value), Some(2.0));
    assert!(point_at(&points, &[1, 0]).is_none());
    assert!(point_at(&points, &[]).is_none());
}

#[test]
fn partial_span_subdivision() {
    let segs = arc_segments_within(&[1.0, 3.0], PI, PI);
    assert!((segs[0].sweep - PI / 4.0).abs() < EPS);
    assert!((segs[1].end_angle() - TAU).abs() < EPS);
}

#[test]
fn rings_share_the_radius_evenly() {
    assert_eq!(ring_radii(20.0, 100.0, 4, 0), (20.0, 40.0));
    assert_eq!(ring_radii(20.0, 100.0, 4, 3), (80.0, 100.0));
    assert_eq!(ring_radii(0.0, 100.0, 0, 0), (0.0, 0.0));
}

#[test]
fn ring_fade_bottoms_out_instead_of_wrapping() {
    assert_eq!(ring_fade(0), 255);
    assert_eq!(ring_fade(1), 195);
    assert_eq!(ring_fade(4), 15);
    assert_eq!(ring_fade(5), 0);
    assert_eq!(ring_fade(256), 0);
    assert_eq!(ring_fade(300), 0);
}
