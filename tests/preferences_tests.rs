// Integration tests for preference normalization

use ai_hair_stylist::{normalize_set, normalize_value, ClientPreferences, StylistError};
use pretty_assertions::assert_eq;

#[test]
fn test_preferences_from_json_handle_aliases() {
    let prefs = ClientPreferences::from_json_str(
        r#"{
            "face_shape": "Heart",
            "hair_length": "Short",
            "tags": ["Volume"],
            "avoid": ["heat-styling", "bold"]
        }"#,
    )
    .unwrap();

    assert_eq!(prefs.face_shape(), Some("heart"));
    assert_eq!(prefs.hair_length(), Some("short"));
    assert_eq!(
        prefs.keywords().iter().cloned().collect::<Vec<_>>(),
        vec!["volume".to_string()]
    );
    assert!(prefs.avoid().contains("bold"));
}

#[test]
fn test_keywords_preferred_over_missing_tags() {
    let prefs = ClientPreferences::from_json_str(r#"{"keywords": "Curls"}"#).unwrap();
    assert!(prefs.keywords().contains("curls"));
}

#[test]
fn test_avoid_has_no_alias() {
    let err = ClientPreferences::from_json_str(r#"{"avoid_tags": ["bold"]}"#).unwrap_err();
    assert!(matches!(err, StylistError::InvalidPreferenceField { field } if field == "avoid_tags"));
}

#[test]
fn test_non_object_root() {
    let err = ClientPreferences::from_json_str("[1, 2]").unwrap_err();
    assert!(matches!(err, StylistError::InvalidPreferenceValue { .. }));
}

#[test]
fn test_mapping_equals_builder() {
    let from_json = ClientPreferences::from_json_str(
        r#"{"hair_texture": " CURLY ", "maintenance": "Low", "keywords": ["Curls", "curls"]}"#,
    )
    .unwrap();
    let built = ClientPreferences::new()
        .with_hair_texture("curly")
        .with_maintenance("low")
        .with_keywords(["curls"]);

    assert_eq!(from_json, built);
}

#[test]
fn test_normalization_is_idempotent() {
    for raw in ["  Oval", "SQUARE ", "heart", "  ", ""] {
        let once = normalize_value(Some(raw));
        assert_eq!(normalize_value(once.as_deref()), once);
    }

    let once = normalize_set([" Volume", "volume", "Wash-And-Go", " "]);
    assert_eq!(normalize_set(once.iter()), once);

    let prefs = ClientPreferences::new()
        .with_face_shape(" Oval ")
        .with_keywords(["A", "b "]);
    let again = ClientPreferences::new()
        .with_face_shape(prefs.face_shape().unwrap())
        .with_keywords(prefs.keywords());
    assert_eq!(prefs, again);
}
