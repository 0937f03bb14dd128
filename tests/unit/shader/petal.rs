use super::*;
use crate::paint::schema::ColorBreakpoint;

fn uniforms(progress: f32) -> PetalUniforms {
    let schema = ColorSchema::new(vec![
        ColorBreakpoint::new(0.0, [1.0, 0.0, 0.0, 1.0]),
        ColorBreakpoint::new(1.0, [0.0, 0.0, 1.0, 1.0]),
    ])
    .unwrap();
    PetalUniforms::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0), &schema, progress).unwrap()
}

fn alpha_at(u: &PetalUniforms, x: f64) -> f32 {
    evaluate_petal(u, Point::new(x, 0.0))[3]
}

#[test]
fn unused_stops_are_padded() {
    let u = uniforms(1.0);
    assert_eq!(u.num_stops, 2);
    assert_eq!(u.colors[5], [0.0, 0.0, 0.0, 1.0]);
    assert_eq!(u.positions[9], 1.0);
}

#[test]
fn too_many_stops_are_rejected() {
    let stops = (0..=MAX_PETAL_STOPS)
        .map(|i| ColorBreakpoint::new(i as f32 / MAX_PETAL_STOPS as f32, [1.0, 1.0, 1.0, 1.0]))
        .collect();
    let schema = ColorSchema::new(stops).unwrap();
    let err = PetalUniforms::new(Point::ZERO, Point::new(1.0, 0.0), &schema, 1.0).unwrap_err();
    assert!(matches!(err, StrokeError::Capacity(_)));
}

#[test]
fn zero_progress_is_transparent() {
    let u = uniforms(0.0);
    assert_eq!(evaluate_petal(&u, Point::new(10.0, 0.0)), TRANSPARENT);
}

#[test]
fn full_progress_shows_smoothed_gradient() {
    let u = uniforms(1.0);
    let c = evaluate_petal(&u, Point::new(50.0, 0.0));
    for (got, want) in c.iter().zip([0.5, 0.0, 0.5, 1.0]) {
        assert!((got - want).abs() < 1e-6);
    }
    assert_eq!(evaluate_petal(&u, Point::new(0.0, 0.0)), [1.0, 0.0, 0.0, 1.0]);
}

#[test]
fn fade_steps_behind_the_head() {
    // progress 0.5: fade range 0.45 in four steps of 0.1125.
    let u = uniforms(0.5);
    assert_eq!(alpha_at(&u, 60.0), 0.0);
    assert_eq!(alpha_at(&u, 49.0), 0.0);
    assert!((alpha_at(&u, 35.0) - 0.15).abs() < 1e-6);
    assert!((alpha_at(&u, 20.0) - 0.3).abs() < 1e-6);
    assert!((alpha_at(&u, 10.0) - 0.5).abs() < 1e-6);
    assert!((alpha_at(&u, 1.0) - 1.0).abs() < 1e-6);
}
