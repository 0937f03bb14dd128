use super::*;

#[test]
fn table_rows_match_width_bands() {
    let c = StrokeWidthToken::Stroke3.config();
    assert_eq!(
        c,
        AnimationConfig {
            stroke_width: 3.0,
            tangent_extension: 5.0,
            falloff_back: 0.5,
            falloff_front: 0.9,
            search_threshold: 0.5,
            tangent_start_adjustment: 5.0,
        }
    );

    let c = StrokeWidthToken::Stroke6.config();
    assert_eq!((c.tangent_extension, c.falloff_front, c.tangent_start_adjustment), (15.0, 1.0, 11.0));
    let c = StrokeWidthToken::Stroke7.config();
    assert_eq!((c.falloff_front, c.tangent_start_adjustment), (1.0, 14.0));
    let c = StrokeWidthToken::Stroke10.config();
    assert_eq!((c.stroke_width, c.falloff_front, c.tangent_start_adjustment), (10.0, 0.9, 10.0));
}

#[test]
fn tokens_round_trip_through_strings() {
    for t in StrokeWidthToken::ALL {
        assert_eq!(t.to_string().parse::<StrokeWidthToken>().unwrap(), t);
    }
    let t: StrokeWidthToken = serde_json::from_str("\"stroke/9\"").unwrap();
    assert_eq!(t, StrokeWidthToken::Stroke9);
    assert_eq!(serde_json::to_string(&t).unwrap(), "\"stroke/9\"");
}

#[test]
fn unknown_tokens_fail_fast() {
    for bad in ["stroke/0", "stroke/11", "stroke/", "3", "Stroke/3"] {
        let err = AnimationConfig::for_token(bad).unwrap_err();
        assert!(matches!(err, StrokeError::Config(_)), "{bad}");
    }
    assert!(serde_json::from_str::<StrokeWidthToken>("\"stroke/42\"").is_err());
}
