use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StrokeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        StrokeError::geometry("x")
            .to_string()
            .contains("geometry error:")
    );
    assert!(
        StrokeError::config("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        StrokeError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        StrokeError::capacity("x")
            .to_string()
            .contains("capacity exceeded:")
    );
    assert!(
        StrokeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StrokeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: StrokeError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, StrokeError::Serde(_)));
}
