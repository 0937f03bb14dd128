use super::*;

#[test]
fn names_round_trip() {
    for p in Preset::ALL {
        assert_eq!(p.name().parse::<Preset>().unwrap(), p);
        assert_eq!(p.to_string(), p.name());
    }
    assert!(matches!("confetti".parse::<Preset>(), Err(StrokeError::Config(_))));
}

#[test]
fn presets_build_with_expected_stroke_counts() {
    let expected = [
        (Preset::Playground, 24),
        (Preset::Fireworks, 48),
        (Preset::Avatar, 21),
    ];
    for (preset, count) in expected {
        let scene = preset.scene(false).unwrap();
        assert_eq!(scene.stroke_count(), count, "{preset}");
        assert_eq!(scene.build().unwrap().strokes().len(), count, "{preset}");
    }
}

#[test]
fn playground_uses_its_own_grid() {
    let scene = Preset::Playground.scene(true).unwrap();
    assert_eq!(scene.grid.cell_width(), 16.0);
    assert_eq!(scene.grid.cell_height(), 8.0);
    assert_eq!(scene.grid.radius(), 1.0);
    assert!(scene.keep_trail);
    assert_eq!(
        scene
            .confetti
            .iter()
            .filter(|c| matches!(c.shape, ConfettiShape::Loop(_)))
            .count(),
        4
    );
}

#[test]
fn playground_loops_report_crossings() {
    let scene = Preset::Playground.scene(false).unwrap();
    let mut orch = scene.build().unwrap();
    orch.run().unwrap();
    let curled = orch
        .strokes()
        .iter()
        .filter(|s| s.options().style == crate::path::geometry::PathStyle::Spline);
    for s in curled {
        assert!(!s.intersections().is_empty());
    }
}
