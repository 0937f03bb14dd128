use super::*;

fn approx(a: Point, b: Point, tol: f64) -> bool {
    (a - b).hypot() <= tol
}

#[test]
fn straight_line_is_measured_and_clamped() {
    let geo = PathGeometry::from_points(
        &[Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
        PathStyle::Polyline,
    );
    assert!((geo.total_length() - 100.0).abs() < 1e-9);
    assert!(approx(geo.point_at_length(25.0), Point::new(25.0, 0.0), 1e-6));
    assert_eq!(geo.point_at_length(-5.0), Point::new(0.0, 0.0));
    assert_eq!(geo.point_at_length(500.0), Point::new(100.0, 0.0));
    assert_eq!(geo.point_at_length(f64::NAN), Point::new(0.0, 0.0));
}

#[test]
fn polyline_corners_are_walked_in_order() {
    let geo = PathGeometry::from_points(
        &[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ],
        PathStyle::Polyline,
    );
    assert!((geo.total_length() - 20.0).abs() < 1e-9);
    assert!(approx(geo.point_at_length(10.0), Point::new(10.0, 0.0), 1e-6));
    assert!(approx(geo.point_at_length(15.0), Point::new(10.0, 5.0), 1e-6));
}

#[test]
fn degenerate_inputs_have_zero_length() {
    let empty = PathGeometry::from_points(&[], PathStyle::Polyline);
    assert!(empty.is_empty());
    assert_eq!(empty.point_at_length(3.0), Point::ZERO);

    let single = PathGeometry::from_points(&[Point::new(4.0, 2.0)], PathStyle::Spline);
    assert!(single.is_empty());
    assert_eq!(single.point_at_length(0.0), Point::new(4.0, 2.0));

    let repeated = PathGeometry::from_points(
        &[Point::new(1.0, 1.0), Point::new(1.0, 1.0)],
        PathStyle::Polyline,
    );
    assert!(repeated.is_empty());
}

#[test]
fn zero_length_segments_are_skipped() {
    let geo = PathGeometry::from_points(
        &[
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        ],
        PathStyle::Polyline,
    );
    assert!((geo.total_length() - 10.0).abs() < 1e-9);
    assert!(approx(geo.point_at_length(5.0), Point::new(5.0, 0.0), 1e-6));
}

#[test]
fn spline_endpoints_are_exact_and_length_exceeds_chord() {
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(20.0, 0.0),
        Point::new(30.0, 10.0),
    ];
    let geo = PathGeometry::from_points(&pts, PathStyle::Spline);
    assert!(geo.total_length() > 30.0);
    assert_eq!(geo.point_at_length(0.0), pts[0]);
    assert_eq!(geo.point_at_length(geo.total_length()), pts[3]);

    let mut prev = 0.0;
    for i in 1..=20 {
        let d = geo.total_length() * f64::from(i) / 20.0;
        let p = geo.point_at_length(d);
        let q = geo.point_at_length(prev);
        // Chord between two arc-length offsets never exceeds the arc.
        assert!((p - q).hypot() <= d - prev + 1e-6);
        prev = d;
    }
}

#[test]
fn unit_points_go_through_the_grid() {
    let grid = Grid::new(100.0, 100.0, 10.0, 10.0).unwrap();
    let geo = PathGeometry::from_unit_points(
        &grid,
        &[Point::new(0.0, 5.0), Point::new(10.0, 5.0)],
        PathStyle::Polyline,
    );
    assert!((geo.total_length() - 100.0).abs() < 1e-9);
    assert_eq!(geo.point_at_length(0.0), Point::new(0.0, 50.0));
}

#[test]
fn svg_measures_first_contour_only() {
    let geo = PathGeometry::from_svg("M0 0 L10 0 M20 0 L50 0").unwrap();
    assert!((geo.total_length() - 10.0).abs() < 1e-9);

    let err = PathGeometry::from_svg("M0 0 X 10").unwrap_err();
    assert!(matches!(err, StrokeError::Validation(_)));
}

#[test]
fn fitted_svg_is_scaled_and_anchored_at_bottom() {
    let geo =
        PathGeometry::from_svg_fitted("M0 0 L0 10", Point::new(5.0, 5.0), Vec2::new(20.0, 20.0))
            .unwrap();
    assert!((geo.total_length() - 20.0).abs() < 1e-9);
    assert!(approx(geo.point_at_length(0.0), Point::new(5.0, -15.0), 1e-9));
    assert!(approx(geo.point_at_length(20.0), Point::new(5.0, 5.0), 1e-9));

    assert!(
        PathGeometry::from_svg_fitted("M0 0 L1 1", Point::ZERO, Vec2::new(0.0, 1.0)).is_err()
    );
}
