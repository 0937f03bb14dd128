use super::*;
use crate::path::geometry::PathStyle;

fn line(len: f64) -> PathGeometry {
    PathGeometry::from_points(
        &[Point::new(0.0, 0.0), Point::new(len, 0.0)],
        PathStyle::Polyline,
    )
}

#[test]
fn straight_line_samples_are_linear() {
    let geo = line(99.0);
    let s = geo.sample(100).unwrap();
    assert_eq!(s.len(), 100);
    assert_eq!(s.points().len(), 200);
    for i in 0..100 {
        let expected = i as f32;
        assert!((s.distances()[i] - expected).abs() < 1e-4);
        assert!((s.points()[2 * i] - expected).abs() < 1e-4);
        assert_eq!(s.points()[2 * i + 1], 0.0);
    }
}

#[test]
fn endpoints_are_exact_and_distances_monotone() {
    let geo = PathGeometry::from_points(
        &[
            Point::new(0.0, 0.0),
            Point::new(30.0, 40.0),
            Point::new(60.0, 0.0),
        ],
        PathStyle::Spline,
    );
    let s = geo.sample(DEFAULT_SAMPLE_COUNT).unwrap();
    assert_eq!(s.distances()[0], 0.0);
    assert_eq!(s.total_length(), geo.total_length() as f32);
    assert!(s.distances().windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn sampling_is_idempotent() {
    let geo = line(37.5);
    assert_eq!(geo.sample(64).unwrap(), geo.sample(64).unwrap());
}

#[test]
fn sample_count_bounds_are_enforced() {
    let geo = line(10.0);
    assert!(matches!(geo.sample(1), Err(StrokeError::Validation(_))));
    assert!(matches!(
        geo.sample(MAX_SAMPLES + 1),
        Err(StrokeError::Capacity(_))
    ));
    assert_eq!(geo.sample(MAX_SAMPLES).unwrap().len(), MAX_SAMPLES);
}

#[test]
fn zero_length_geometry_samples_collapse() {
    let geo = PathGeometry::from_points(&[Point::new(3.0, 4.0)], PathStyle::Polyline);
    let s = geo.sample(4).unwrap();
    assert!(s.distances().iter().all(|&d| d == 0.0));
    assert!(s.iter().all(|(p, _)| p == Point::new(3.0, 4.0)));
}

#[test]
fn external_sample_sets_are_validated() {
    assert!(SampleSet::new(vec![0.0, 0.0, 1.0, 0.0], vec![0.0, 1.0]).is_ok());
    assert!(SampleSet::new(vec![0.0, 0.0, 1.0], vec![0.0, 1.0]).is_err());
    assert!(SampleSet::new(vec![0.0, 0.0, 1.0, 0.0], vec![1.0, 0.5]).is_err());
    assert!(SampleSet::new(vec![0.0, 0.0], vec![0.0]).is_err());
    assert!(SampleSet::new(vec![0.0, f32::NAN, 1.0, 0.0], vec![0.0, 1.0]).is_err());
}
