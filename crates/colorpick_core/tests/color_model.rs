use colorpick_core::{ColorRecord, ColorValidationError, HexColor, DEFAULT_COLOR};

#[test]
fn record_serializes_to_single_color_key() {
    let record = ColorRecord::new(HexColor::parse("#123abc").unwrap());

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json, serde_json::json!({ "color": "#123abc" }));

    let decoded: ColorRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn deserialize_rejects_invalid_color() {
    let err = serde_json::from_value::<ColorRecord>(serde_json::json!({ "color": "red" }))
        .unwrap_err();
    assert!(
        err.to_string().contains("must start with `#`"),
        "unexpected error: {err}"
    );
}

#[test]
fn parse_preserves_case_and_short_form() {
    assert_eq!(HexColor::parse("#AbC").unwrap().as_str(), "#AbC");
    assert_eq!(HexColor::parse("#FF0080").unwrap().to_string(), "#FF0080");
}

#[test]
fn parse_rejects_documented_examples() {
    for input in ["", "red", "#12345", "#gggggg", "123456"] {
        assert!(HexColor::parse(input).is_err(), "{input:?} should be rejected");
    }
    assert_eq!(HexColor::parse(""), Err(ColorValidationError::Empty));
}

#[test]
fn default_record_is_builtin_color() {
    assert_eq!(ColorRecord::default().color.as_str(), DEFAULT_COLOR);
    assert_eq!(DEFAULT_COLOR, "#ff0080");
}
