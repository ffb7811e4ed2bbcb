use depix::DepixError;
use depix::core::{PixelPoint, parse_path};
use proptest::prelude::*;

fn coordinate() -> impl Strategy<Value = (i32, i32)> {
    (-10_000i32..10_000, -10_000i32..10_000)
}

fn render_pairs(pairs: &[(i32, i32)]) -> String {
    pairs
        .iter()
        .map(|(x, y)| format!("{x},{y}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn inkscape_style_relative_path() {
    let points = parse_path("m 120.5,300 40,-20.25 40,10 H 300 V 0").expect("parse");
    assert_eq!(
        points,
        vec![
            PixelPoint::new(120.5, 300.0),
            PixelPoint::new(160.5, 279.75),
            PixelPoint::new(200.5, 289.75),
            PixelPoint::new(500.5, 289.75),
            PixelPoint::new(500.5, 289.75),
        ]
    );
}

#[test]
fn mode_switch_back_to_pairs_is_not_supported() {
    let err = parse_path("M 0,0 V 5 1,1").expect_err("pair in vertical mode");
    assert!(matches!(err, DepixError::InvalidCoordinateArity { .. }));
}

#[test]
fn extra_whitespace_is_ignored() {
    let points = parse_path("\n  M\t1,1    2,2\n").expect("parse");
    assert_eq!(points.len(), 2);
}

proptest! {
    #[test]
    fn absolute_path_yields_literal_points(pairs in prop::collection::vec(coordinate(), 1..32)) {
        let raw = format!("M {}", render_pairs(&pairs));
        let points = parse_path(&raw).expect("parse");

        prop_assert_eq!(points.len(), pairs.len());
        for (point, (x, y)) in points.iter().zip(&pairs) {
            prop_assert_eq!(*point, PixelPoint::new(f64::from(*x), f64::from(*y)));
        }
    }

    #[test]
    fn relative_path_yields_prefix_sums(pairs in prop::collection::vec(coordinate(), 1..32)) {
        let raw = format!("m {}", render_pairs(&pairs));
        let points = parse_path(&raw).expect("parse");

        let mut sum = (0i64, 0i64);
        for (point, (dx, dy)) in points.iter().zip(&pairs) {
            sum = (sum.0 + i64::from(*dx), sum.1 + i64::from(*dy));
            prop_assert_eq!(*point, PixelPoint::new(sum.0 as f64, sum.1 as f64));
        }
    }

    #[test]
    fn vertical_segment_keeps_x(start in coordinate(), value in -10_000i32..10_000) {
        let raw = format!("M {},{} V {value}", start.0, start.1);
        let points = parse_path(&raw).expect("parse");
        prop_assert_eq!(points[1].x, f64::from(start.0));
        prop_assert_eq!(points[1].y, f64::from(value));
    }

    #[test]
    fn horizontal_segment_keeps_y(start in coordinate(), value in -10_000i32..10_000) {
        let raw = format!("M {},{} H {value}", start.0, start.1);
        let points = parse_path(&raw).expect("parse");
        prop_assert_eq!(points[1].x, f64::from(value));
        prop_assert_eq!(points[1].y, f64::from(start.1));
    }

    #[test]
    fn relative_axis_segments_offset_the_moving_component(
        start in coordinate(),
        dv in -10_000i32..10_000,
        dh in -10_000i32..10_000
    ) {
        let raw = format!("m {},{} V {dv} H {dh}", start.0, start.1);
        let points = parse_path(&raw).expect("parse");
        let (x0, y0) = (f64::from(start.0), f64::from(start.1));
        prop_assert_eq!(points[1], PixelPoint::new(x0, y0 + f64::from(dv)));
        prop_assert_eq!(points[2], PixelPoint::new(x0 + f64::from(dh), y0 + f64::from(dv)));
    }
}
