use super::*;

#[test]
fn text_and_defaults_parse() {
    let cfg = TrashConfig::from_json_str(r#"{ "text": "abc" }"#).unwrap();
    assert_eq!(cfg.text, InputDef::Text("abc".to_string()));
    assert_eq!(cfg.spacing, DEFAULT_SPACING);
    assert_eq!(cfg.sprites, SpriteOverrides::default());
}

#[test]
fn item_arrays_and_sprites_parse() {
    let cfg = TrashConfig::from_json_str(
        r#"{
            "text": ["foo", "bar"],
            "spacing": 0,
            "sprites": { "can": "[C]", "right": ">" }
        }"#,
    )
    .unwrap();
    assert_eq!(
        cfg.text,
        InputDef::Items(vec!["foo".to_string(), "bar".to_string()])
    );
    assert_eq!(cfg.spacing, 0);
    assert_eq!(cfg.sprites.can.as_deref(), Some("[C]"));
    assert_eq!(cfg.sprites.space, None);

    let st = cfg.build().unwrap();
    assert_eq!(st.frame_count(), 2);
    assert_eq!(st.render(None).unwrap(), "foo>bar[C]");
}

#[test]
fn unknown_fields_are_rejected() {
    let err = TrashConfig::from_json_str(r#"{ "text": "a", "speed": 3 }"#).unwrap_err();
    assert!(matches!(err, TrashError::Serde(_)));

    let err =
        TrashConfig::from_json_str(r#"{ "text": "a", "sprites": { "hat": "^" } }"#).unwrap_err();
    assert!(matches!(err, TrashError::Serde(_)));
}

#[test]
fn validate_catches_empty_input_and_sprites() {
    let cfg = TrashConfig::new(InputDef::Items(vec![]));
    assert!(matches!(cfg.validate(), Err(TrashError::InvalidInput(_))));

    let mut cfg = TrashConfig::new(InputDef::Text("ok".into()));
    assert!(cfg.validate().is_ok());
    cfg.sprites.space = Some(String::new());
    assert!(matches!(cfg.validate(), Err(TrashError::InvalidInput(_))));
}

#[test]
fn missing_file_is_reported() {
    let err = TrashConfig::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}

#[test]
fn json_round_trips_through_serde() {
    let cfg = TrashConfig {
        text: InputDef::Items(vec!["x".into()]),
        spacing: 4,
        sprites: SpriteOverrides::default().left("<"),
    };
    let json = serde_json::to_string(&cfg).unwrap();
    assert_eq!(TrashConfig::from_json_str(&json).unwrap(), cfg);
}

#[test]
fn oversized_spacing_fails_validation() {
    let cfg = TrashConfig::from_json_str(r#"{ "text": "ab", "spacing": 4294967295 }"#).unwrap();
    assert!(matches!(cfg.validate(), Err(TrashError::InvalidInput(_))));
    assert!(matches!(cfg.build(), Err(TrashError::InvalidInput(_))));
}

#[test]
fn empty_item_in_config_is_kept() {
    let cfg = TrashConfig::from_json_str(r#"{ "text": ["a", "", "c"] }"#).unwrap();
    cfg.validate().unwrap();
    assert_eq!(cfg.build().unwrap().frame_count(), 3);
}
