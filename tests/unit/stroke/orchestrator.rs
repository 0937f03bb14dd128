use super::*;
use crate::foundation::core::Point;
use crate::grid::mapping::Grid;
use crate::paint::schemes::ColorScheme;
use crate::stroke::controller::StrokeOptions;
use crate::uniforms::config::StrokeWidthToken;

fn spark(start_at: f64) -> Stroke {
    Stroke::spark(
        vec![Point::new(1.0, 1.0), Point::new(8.0, 1.0)],
        Grid::new(100.0, 100.0, 10.0, 10.0).unwrap(),
        ColorScheme::Teal.default_schema(),
        StrokeWidthToken::Stroke2,
        StrokeOptions {
            sample_count: 20,
            duration_ms: 100.0,
            ease: Ease::Linear,
            start_at_orchestration: start_at,
            ..StrokeOptions::default()
        },
    )
    .unwrap()
}

fn orchestrator() -> Orchestrator {
    let mut o = Orchestrator::new(TweenConfig::new(200.0, Ease::Linear)).unwrap();
    o.push_stroke(spark(0.0));
    o.push_stroke(spark(0.5));
    o
}

#[test]
fn strokes_trigger_in_orchestration_order() {
    let mut o = orchestrator();
    o.run().unwrap();
    assert_eq!(o.strokes()[0].phase(), StrokePhase::Armed);

    o.advance(20.0);
    // Snapshot was still 0.
    assert_eq!(o.strokes()[0].phase(), StrokePhase::Armed);
    o.advance(20.0);
    assert_eq!(o.strokes()[0].phase(), StrokePhase::Running);
    assert_eq!(o.strokes()[1].phase(), StrokePhase::Armed);

    for _ in 0..5 {
        o.advance(20.0);
    }
    assert!(o.progress() > 0.5);
    o.advance(20.0);
    assert_eq!(o.strokes()[1].phase(), StrokePhase::Running);
}

#[test]
fn runs_to_completion() {
    let mut o = orchestrator();
    o.run().unwrap();
    for _ in 0..100 {
        o.advance(20.0);
    }
    assert!(o.is_finished());
    assert_eq!(o.progress(), 1.0);
}

#[test]
fn pause_and_reset_reach_every_child() {
    let mut o = orchestrator();
    o.run().unwrap();
    o.advance(20.0);
    o.advance(20.0);
    o.pause(true);
    assert!(o.is_paused());
    let before = o.progress();
    o.advance(20.0);
    assert_eq!(o.progress(), before);
    assert!(o.strokes().iter().all(|s| s.is_paused()));

    o.pause(false);
    o.reset();
    assert_eq!(o.progress(), 0.0);
    assert!(o.strokes().iter().all(|s| s.phase() == StrokePhase::Idle));
}

#[test]
fn seek_is_reproducible() {
    let mut a = orchestrator();
    a.seek(120.0, 50.0).unwrap();
    let mut b = orchestrator();
    b.seek(120.0, 50.0).unwrap();
    assert_eq!(a.progress(), b.progress());
    assert_eq!(a.strokes()[0].progress(), b.strokes()[0].progress());
    assert!((a.progress() - 0.6).abs() < 1e-9);
    assert!(a.seek(10.0, 0.0).is_err());
}

#[test]
fn draws_skip_empty_strokes() {
    let mut o = orchestrator();
    o.push_stroke(
        Stroke::line(
            Vec::new(),
            Grid::new(100.0, 100.0, 10.0, 10.0).unwrap(),
            ColorScheme::Red.default_schema(),
            StrokeWidthToken::Stroke1,
            StrokeOptions::default(),
        )
        .unwrap(),
    );
    assert!(o.draws().is_empty());
    o.run().unwrap();
    assert_eq!(o.draws().len(), 2);
}
