use super::*;

#[test]
fn every_scheme_spans_zero_to_one_opaque() {
    for scheme in ColorScheme::ALL {
        let schema = scheme.default_schema();
        assert_eq!(schema.len(), DEFAULT_SCHEME_BREAKPOINTS);
        assert_eq!(schema.stops()[0].breakpoint, 0.0);
        assert_eq!(schema.stops()[schema.len() - 1].breakpoint, 1.0);
        assert!(schema.stops().iter().all(|s| s.color[3] == 1.0));
        assert_eq!(scheme.schema(DEFAULT_SCHEME_BREAKPOINTS).unwrap(), schema);
    }
}

#[test]
fn linear_schemes_follow_their_ramp() {
    let orange = ColorScheme::Orange.default_schema();
    assert_eq!(orange.stops()[2].color, [1.0, 0.5, 0.0, 1.0]);

    let pink = ColorScheme::Pink.default_schema();
    assert_eq!(pink.stops()[4].color, [1.0, 0.5, 1.0, 1.0]);

    let ocean = ColorScheme::Ocean.schema(4).unwrap();
    // 0.5 + i / (2n) with i = 3, n = 4.
    assert!((ocean.stops()[3].color[2] - 0.875).abs() < 1e-6);
}

#[test]
fn rainbow_reverse_mirrors_rainbow() {
    let fwd = ColorScheme::Rainbow.default_schema();
    let rev = ColorScheme::RainbowReverse.default_schema();
    assert_eq!(fwd.stops()[1].color, rev.stops()[3].color);
    assert_eq!(fwd.stops()[0].color, rev.stops()[4].color);
}

#[test]
fn too_few_breakpoints_are_rejected() {
    assert!(ColorScheme::Blue.schema(1).is_err());
    assert!(ColorScheme::Blue.schema(0).is_err());
}
