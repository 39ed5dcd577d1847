use colorpick_core::{
    ColorRecord, ColorRepository, ColorService, FormError, HexColor, InMemoryColorRepository,
    JsonFileColorRepository,
};

fn record(color: &str) -> ColorRecord {
    ColorRecord::new(HexColor::parse(color).unwrap())
}

#[test]
fn show_on_fresh_store_displays_default_without_messages() {
    let service = ColorService::new(InMemoryColorRepository::new());

    let state = service.show();
    assert_eq!(state.current, ColorRecord::default());
    assert!(state.errors.is_empty());
    assert!(!state.saved);
}

#[test]
fn submit_valid_color_persists_and_displays_it() {
    let service = ColorService::new(InMemoryColorRepository::new());

    let state = service.submit("  #123abc\n");
    assert!(state.saved);
    assert!(state.errors.is_empty());
    assert_eq!(state.current, record("#123abc"));
    assert_eq!(service.repository().stored(), Some(record("#123abc")));
    assert_eq!(service.show().current, record("#123abc"));
}

#[test]
fn submit_invalid_color_keeps_previous_value() {
    let service = ColorService::new(InMemoryColorRepository::with_record(record("#0f0")));

    let state = service.submit("notacolor");
    assert!(!state.saved);
    assert_eq!(state.current, record("#0f0"));
    assert_eq!(
        state.errors,
        vec![FormError::InvalidColor {
            input: "notacolor".to_string()
        }]
    );
    assert_eq!(service.repository().stored(), Some(record("#0f0")));
}

#[test]
fn submit_caps_echoed_input_length() {
    let service = ColorService::new(InMemoryColorRepository::new());

    let state = service.submit(&"x".repeat(500));
    match &state.errors[..] {
        [FormError::InvalidColor { input }] => assert_eq!(input.chars().count(), 64),
        other => panic!("unexpected errors: {other:?}"),
    }
}

#[test]
fn submit_storage_failure_is_reported_not_raised() {
    let repo = InMemoryColorRepository::with_record(record("#abcdef"));
    repo.fail_writes(true);
    let service = ColorService::new(repo);

    let state = service.submit("#123456");
    assert!(!state.saved);
    assert_eq!(state.errors, vec![FormError::Storage]);
    assert_eq!(state.current, record("#abcdef"));
}

#[test]
fn submit_through_file_store_survives_new_service_instance() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("color.json");

    let first = ColorService::new(JsonFileColorRepository::new(&path));
    assert!(first.submit("#F08").saved);

    let second = ColorService::new(JsonFileColorRepository::new(&path));
    assert_eq!(second.show().current, record("#F08"));
    assert_eq!(second.repository().load(), record("#F08"));
}
