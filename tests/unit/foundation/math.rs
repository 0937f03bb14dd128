use super::*;

#[test]
fn fnv_hash_is_stable_and_order_sensitive() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"spark");
    let mut b = Fnv1a64::new_default();
    b.write_u8(b's');
    b.write_bytes(b"park");
    assert_eq!(a.finish(), b.finish());

    let mut c = Fnv1a64::new_default();
    c.write_f64(1.0);
    c.write_f64(2.0);
    let mut d = Fnv1a64::new_default();
    d.write_f64(2.0);
    d.write_f64(1.0);
    assert_ne!(c.finish(), d.finish());
}

#[test]
fn smoothstep_hits_edges_and_midpoint() {
    assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 0.0), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
    assert_eq!(smoothstep(0.0, 1.0, 1.0), 1.0);
    assert_eq!(smoothstep(1.0, 1.0, 0.99), 0.0);
    assert_eq!(smoothstep(1.0, 1.0, 1.0), 1.0);
}

#[test]
fn mix_reproduces_endpoints() {
    let a = 0.123_f32;
    let b = 0.987_f32;
    assert_eq!(mix(a, b, 0.0), a);
    assert_eq!(mix(a, b, 1.0), b);
}

#[test]
fn segment_distance_projects_and_clamps() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(10.0, 0.0);

    let (d, along) = distance_to_segment(Point::new(4.0, 3.0), a, b);
    assert!((d - 3.0).abs() < 1e-12);
    assert!((along - 4.0).abs() < 1e-12);

    let (d, along) = distance_to_segment(Point::new(13.0, 4.0), a, b);
    assert!((d - 5.0).abs() < 1e-12);
    assert!((along - 10.0).abs() < 1e-12);

    let (d, along) = distance_to_segment(Point::new(3.0, 4.0), a, a);
    assert!((d - 5.0).abs() < 1e-12);
    assert_eq!(along, 0.0);
}
