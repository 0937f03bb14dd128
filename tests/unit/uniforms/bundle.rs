use super::*;
use crate::foundation::core::Point;
use crate::paint::schema::ColorBreakpoint;
use crate::uniforms::config::StrokeWidthToken;

fn samples() -> SampleSet {
    SampleSet::new(vec![0.0, 0.0, 5.0, 0.0, 10.0, 0.0], vec![0.0, 5.0, 10.0]).unwrap()
}

fn schema() -> ColorSchema {
    ColorSchema::new(vec![
        ColorBreakpoint::new(0.0, [1.0, 0.0, 0.0, 1.0]),
        ColorBreakpoint::new(1.0, [0.0, 0.0, 1.0, 1.0]),
    ])
    .unwrap()
}

fn record(d: f32) -> IntersectionRecord {
    IntersectionRecord {
        distance_along_path: d,
        tangent_p1: Point::new(1.0, 2.0),
        tangent_p2: Point::new(3.0, 4.0),
        separation: 0.0,
    }
}

#[test]
fn layout_size_matches_flattened_bundle() {
    assert_eq!(UNIFORM_FLOAT_COUNT, 2022);
    let b = UniformBundle::build(
        &samples(),
        &schema(),
        &[],
        &StrokeWidthToken::Stroke3.config(),
        ProgressPair::full(),
    )
    .unwrap();
    assert_eq!(b.to_floats().len(), UNIFORM_FLOAT_COUNT);
    assert_eq!(b.to_bytes().len(), 4 * UNIFORM_FLOAT_COUNT);
}

#[test]
fn samples_pad_with_last_entry_and_the_rest_with_zero() {
    let b = UniformBundle::build(
        &samples(),
        &schema(),
        &[record(7.0)],
        &StrokeWidthToken::Stroke3.config(),
        ProgressPair::new(0.5, 0.25),
    )
    .unwrap();
    let f = b.to_floats();

    assert_eq!(f[0], 10.0);
    assert_eq!(f[1], 3.0);
    // u_points starts at 2; slot 3 onwards repeats (10, 0).
    assert_eq!(&f[2..8], &[0.0, 0.0, 5.0, 0.0, 10.0, 0.0]);
    assert_eq!(&f[2 + 2 * (MAX_SAMPLES - 1)..2 + 2 * MAX_SAMPLES], &[10.0, 0.0]);
    let dist = 2 + 2 * MAX_SAMPLES;
    assert_eq!(f[dist + 2], 10.0);
    assert_eq!(f[dist + MAX_SAMPLES - 1], 10.0);

    let bp = dist + MAX_SAMPLES + 2;
    assert_eq!(f[bp - 2], 0.5);
    assert_eq!(f[bp - 1], 2.0);
    assert_eq!(&f[bp..bp + 3], &[0.0, 1.0, 0.0]);
    let colors = bp + MAX_BREAKPOINTS;
    assert_eq!(&f[colors..colors + 8], &[1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0]);
    assert!(f[colors + 8..colors + 4 * MAX_BREAKPOINTS].iter().all(|&v| v == 0.0));

    let ints = colors + 4 * MAX_BREAKPOINTS;
    assert_eq!(f[ints], 1.0);
    assert_eq!(&f[ints + 1..ints + 6], &[7.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(&f[ints + 6..ints + 11], &[0.0; 5]);

    let tail = &f[ints + 11..];
    assert_eq!(tail, &[3.0, 5.0, 0.9, 0.5, 0.5, 0.25, 1.0]);
}

#[test]
fn over_capacity_intersections_are_rejected() {
    let err = UniformBundle::build(
        &samples(),
        &schema(),
        &[record(1.0), record(2.0), record(3.0)],
        &StrokeWidthToken::Stroke3.config(),
        ProgressPair::full(),
    )
    .unwrap_err();
    assert!(matches!(err, StrokeError::Capacity(_)));
}

#[test]
fn progress_updates_leave_geometry_alone() {
    let mut b = UniformBundle::build(
        &samples(),
        &schema(),
        &[],
        &StrokeWidthToken::Stroke1.config(),
        ProgressPair::hidden(),
    )
    .unwrap();
    let before = b.clone();
    b.set_progress(ProgressPair::new(2.0, -1.0), 0.5);
    assert_eq!(b.progress(), ProgressPair::new(1.0, 0.0));
    assert_eq!(b.progress_alpha(), 0.5);
    assert_eq!(b.points(), before.points());
    assert_eq!(b.total_length(), before.total_length());
}

#[test]
fn byte_payload_writes_counts_as_ints() {
    let b = UniformBundle::build(
        &samples(),
        &schema(),
        &[record(7.0)],
        &StrokeWidthToken::Stroke3.config(),
        ProgressPair::new(0.5, 0.25),
    )
    .unwrap();
    let bytes = b.to_bytes();
    let word = |name: &str| {
        let at = UniformBundle::byte_offset(name).unwrap();
        [bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]]
    };

    assert_eq!(UniformBundle::byte_offset("u_numPoints"), Some(4));
    assert_eq!(i32::from_ne_bytes(word("u_numPoints")), 3);
    assert_eq!(i32::from_ne_bytes(word("u_numBreakpoints")), 2);
    assert_eq!(i32::from_ne_bytes(word("u_numIntersections")), 1);

    assert_eq!(f32::from_ne_bytes(word("u_totalLength")), 10.0);
    assert_eq!(f32::from_ne_bytes(word("u_progressFront")), 0.5);
    assert_eq!(f32::from_ne_bytes(word("u_progressBack")), 0.25);
    assert_eq!(UniformBundle::byte_offset("u_missing"), None);
}
