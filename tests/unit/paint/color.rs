use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: ColorDef = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, ColorDef::rgba(1.0, 0.0, 0.0, 1.0));

    let c: ColorDef = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert!((c.b - 1.0).abs() < 1e-6);
    assert!((c.a - (128.0 / 255.0)).abs() < 1e-9);

    assert!(serde_json::from_value::<ColorDef>(json!("#12345")).is_err());
}

#[test]
fn parses_objects_and_arrays() {
    let c: ColorDef = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, ColorDef::rgba(0.25, 0.5, 0.75, 1.0));

    let c: ColorDef = serde_json::from_value(json!([0.25, 0.5, 0.75, 0.5])).unwrap();
    assert_eq!(c.to_premul(), [0.125, 0.25, 0.375, 0.5]);

    let c: ColorDef = serde_json::from_value(json!({"h": 240.0, "s": 1.0, "l": 0.5})).unwrap();
    assert!(c.r.abs() < 1e-9 && c.g.abs() < 1e-9 && (c.b - 1.0).abs() < 1e-9);

    assert!(serde_json::from_value::<ColorDef>(json!([1.0, 0.0])).is_err());
}

#[test]
fn alpha_helpers_premultiply() {
    assert_eq!(ac(0.5, [1.0, 0.5, 0.0]), [0.5, 0.25, 0.0, 0.5]);
    assert_eq!(c([1.0, 0.5, 0.0, 0.5]), [0.5, 0.25, 0.0, 0.5]);
    assert_eq!(nc(255, 0, 51), [1.0, 0.0, 0.2]);
}

#[test]
fn hsl_primary_hues() {
    let red = hsl_to_rgb(0.0, 1.0, 0.5);
    let green = hsl_to_rgb(1.0 / 3.0, 1.0, 0.5);
    for (got, want) in red.iter().zip([1.0, 0.0, 0.0]) {
        assert!((got - want).abs() < 1e-9);
    }
    for (got, want) in green.iter().zip([0.0, 1.0, 0.0]) {
        assert!((got - want).abs() < 1e-9);
    }
    assert_eq!(hsl_to_rgb(0.3, 0.0, 0.25), [0.25, 0.25, 0.25]);
}
