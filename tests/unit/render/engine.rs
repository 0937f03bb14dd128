use super::*;
use crate::paint::schema::{ColorBreakpoint, ColorSchema};
use crate::path::geometry::{PathGeometry, PathStyle};
use crate::uniforms::bundle::{ProgressPair, UniformBundle};
use crate::uniforms::config::StrokeWidthToken;

#[derive(Default)]
struct Recorder {
    strokes: usize,
    petals: usize,
    circles: Vec<(Point, f64)>,
}

impl RenderEngine for Recorder {
    fn draw_stroke(&mut self, _draw: &StrokeDraw<'_>) -> StrokeResult<()> {
        self.strokes += 1;
        Ok(())
    }

    fn fill_petal(&mut self, _draw: &PetalDraw<'_>) -> StrokeResult<()> {
        self.petals += 1;
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, _color: Rgba) -> StrokeResult<()> {
        self.circles.push((center, radius));
        Ok(())
    }
}

#[test]
fn submit_dispatches_by_variant() {
    let geo = PathGeometry::from_points(
        &[Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
        PathStyle::Polyline,
    );
    let samples = geo.sample(4).unwrap();
    let schema = ColorSchema::new(vec![ColorBreakpoint::new(0.0, [1.0; 4])]).unwrap();
    let bundle = UniformBundle::build(
        &samples,
        &schema,
        &[],
        &StrokeWidthToken::Stroke2.config(),
        ProgressPair::full(),
    )
    .unwrap();

    let mut rec = Recorder::default();
    rec.submit(&DrawCall::Stroke(StrokeDraw {
        path: geo.path(),
        stroke_width: 2.0,
        uniforms: &bundle,
    }))
    .unwrap();
    rec.submit(&DrawCall::Circle {
        center: Point::new(1.0, 2.0),
        radius: 3.0,
        color: [1.0; 4],
    })
    .unwrap();
    assert_eq!(rec.strokes, 1);
    assert_eq!(rec.petals, 0);
    assert_eq!(rec.circles, vec![(Point::new(1.0, 2.0), 3.0)]);
}

#[test]
fn overlay_dots_become_circles() {
    let dot = OverlayDot {
        center: Point::new(4.0, 8.0),
        radius: 2.0,
        color: [0.5, 0.5, 0.5, 0.5],
    };
    match DrawCall::from(dot) {
        DrawCall::Circle {
            center,
            radius,
            color,
        } => {
            assert_eq!(center, Point::new(4.0, 8.0));
            assert_eq!(radius, 2.0);
            assert_eq!(color, [0.5; 4]);
        }
        other => panic!("unexpected draw call {other:?}"),
    }
}
