use colorpick_core::{
    render, render_page, ColorRecord, FormError, HexColor, Locale, PageState, DEFAULT_COLOR,
};

fn record(color: &str) -> ColorRecord {
    ColorRecord::new(HexColor::parse(color).unwrap())
}

#[test]
fn default_page_shows_color_in_preview_and_inputs() {
    let html = render(&ColorRecord::default(), &[], false, Locale::De).into_string();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<html lang="de">"#));
    assert!(html.contains(&format!(":root {{ --color: {DEFAULT_COLOR}; }}")));
    assert_eq!(html.matches(&format!(r#"value="{DEFAULT_COLOR}""#)).count(), 2);
    assert!(html.contains(r#"name="color""#));
    assert!(html.contains(r#"aria-live="polite""#));
    assert!(!html.contains(r#"class="success""#));
    assert!(!html.contains(r#"class="error""#));
}

#[test]
fn saved_page_shows_success_message_with_value() {
    let state = PageState {
        current: record("#123abc"),
        errors: Vec::new(),
        saved: true,
    };

    let html = render_page(&state, Locale::En).into_string();
    assert!(html.contains(r#"<html lang="en">"#));
    assert!(html.contains("Color saved successfully: <strong>#123abc</strong>"));
}

#[test]
fn errors_are_rendered_in_order() {
    let html = render(
        &record("#fff"),
        &["first".to_string(), "second".to_string()],
        false,
        Locale::De,
    )
    .into_string();

    let first = html.find(r#"<div class="error">first</div>"#).unwrap();
    let second = html.find(r#"<div class="error">second</div>"#).unwrap();
    assert!(first < second);
}

#[test]
fn rejected_input_is_escaped_in_error_message() {
    let state = PageState {
        current: ColorRecord::default(),
        errors: vec![FormError::InvalidColor {
            input: r#"<script>alert("x")</script>"#.to_string(),
        }],
        saved: false,
    };

    let html = render_page(&state, Locale::De).into_string();
    assert!(html.contains("Ungültiger Farbwert."));
    assert!(html.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"));
    assert!(!html.contains("alert(\"x\")"));
    assert_eq!(html.matches("<script>").count(), 1);
}

#[test]
fn storage_and_serialization_errors_use_generic_messages() {
    let state = PageState {
        current: ColorRecord::default(),
        errors: vec![FormError::Serialization, FormError::Storage],
        saved: false,
    };

    let html = render_page(&state, Locale::De).into_string();
    assert!(html.contains("Fehler beim Erstellen der JSON-Daten."));
    assert!(html.contains("Fehler beim Speichern der Datei. Schreibrechte prüfen."));
}

#[test]
fn empty_submission_message_has_no_echo() {
    let state = PageState {
        current: ColorRecord::default(),
        errors: vec![FormError::InvalidColor {
            input: String::new(),
        }],
        saved: false,
    };

    let html = render_page(&state, Locale::En).into_string();
    assert!(html.contains("Please use a hex color such as #ff0080 or #f08.</div>"));
    assert!(!html.contains("Input:"));
}
