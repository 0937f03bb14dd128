use super::*;
use crate::path::geometry::PathStyle;

/// A horizontal strand at y = 50 (d 0..=100) followed by a vertical strand at x = 50
/// (d 200..=300), crossing at (50, 50).
fn crossing_samples() -> SampleSet {
    let mut points = Vec::new();
    let mut distances = Vec::new();
    for i in 0..=100 {
        points.extend([i as f32, 50.0]);
        distances.push(i as f32);
    }
    for i in 0..=100 {
        points.extend([50.0, i as f32]);
        distances.push(200.0 + i as f32);
    }
    SampleSet::new(points, distances).unwrap()
}

#[test]
fn crossing_is_reported_on_the_later_strand() {
    let records = find_intersections(&crossing_samples(), 1, 5.0);
    assert_eq!(records.len(), 1);
    let r = records[0];
    assert_eq!(r.distance_along_path, 250.0);
    assert_eq!(r.separation, 0.0);
    assert!((r.tangent_p1 - Point::new(50.0, 45.0)).hypot() < 1e-9);
    assert!((r.tangent_p2 - Point::new(50.0, 55.0)).hypot() < 1e-9);
    assert_eq!(
        r.packed(),
        [250.0, 50.0, 45.0, 50.0, 55.0]
    );
}

#[test]
fn record_count_is_bounded_and_segments_are_proper() {
    let samples = crossing_samples();
    for expected in 0..=3 {
        let records = find_intersections(&samples, expected, 5.0);
        assert!(records.len() <= expected);
        for r in &records {
            assert_ne!(r.tangent_p1, r.tangent_p2);
            assert!((r.tangent_length() - 10.0).abs() < 1e-9);
        }
    }
}

#[test]
fn straight_paths_still_yield_a_low_confidence_record() {
    let geo = PathGeometry::from_points(
        &[Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
        PathStyle::Polyline,
    );
    let samples = geo.sample(11).unwrap();
    let records = geo.find_intersections(&samples, 1, 5.0);
    assert_eq!(records.len(), 1);
    assert!((records[0].separation - 10.0).abs() < 1e-4);
}

#[test]
fn degenerate_inputs_produce_no_records() {
    let geo = PathGeometry::from_points(&[Point::new(2.0, 2.0)], PathStyle::Polyline);
    let samples = geo.sample(8).unwrap();
    assert!(find_intersections(&samples, 2, 5.0).is_empty());

    assert!(find_intersections(&crossing_samples(), 2, 0.0).is_empty());
}
