//! Color form page.

use crate::i18n::{Locale, Messages};
use crate::model::color::ColorRecord;
use crate::service::color_service::{FormError, PageState};
use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Name of the form field carrying the submitted color.
pub const COLOR_FIELD: &str = "color";

const STYLESHEET: &str = r#"
body { font-family: system-ui, -apple-system, "Segoe UI", Roboto, "Helvetica Neue", Arial; padding: 1rem; }
#color-field { background: var(--color); padding: 1rem; border-radius: 6px; max-width: 480px; }
#color-legend { background: #000; color: #fff; padding: 0.25rem 0.5rem; display: inline-block; border-radius: 4px; }
.controls { margin-top: 0.75rem; display: flex; gap: 0.5rem; align-items: center; flex-wrap: wrap; }
.msg { margin-top: 0.75rem; }
.error { color: #b00020; }
.success { color: #006400; }
input[type="color"] { width: 3rem; height: 2.25rem; border: none; padding: 0; background: transparent; }
input[type="text"] { padding: 0.35rem; border-radius: 4px; border: 1px solid #ccc; width: 6.5rem; }
button { padding: 0.45rem 0.75rem; border-radius: 4px; border: 1px solid #333; background: #fff; cursor: pointer; }
"#;

// Client-side mirror between picker and text control; the server stays authoritative.
const SYNC_SCRIPT: &str = r#"
(function () {
    const color = document.getElementById('color-picker');
    const text = document.getElementById('color-text');
    if (!color || !text) return;
    color.addEventListener('input', () => { text.value = color.value; });
    text.addEventListener('input', () => {
        if (/^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$/.test(text.value)) {
            color.value = text.value;
        }
    });
})();
"#;

/// Renders the page for one request.
pub fn render_page(state: &PageState, locale: Locale) -> Markup {
    let messages = locale.messages();
    let errors: Vec<String> = state
        .errors
        .iter()
        .map(|error| error_message(error, messages))
        .collect();
    render(&state.current, &errors, state.saved, locale)
}

/// Renders `current` with the given status messages.
///
/// `errors` are shown in order after the success message, if any.
pub fn render(current: &ColorRecord, errors: &[String], saved: bool, locale: Locale) -> Markup {
    let messages = locale.messages();
    let color = current.color.as_str();

    html! {
        (DOCTYPE)
        html lang=(locale.as_str()) {
            head {
                meta charset="utf-8";
                title { (messages.title) }
                meta name="viewport" content="width=device-width,initial-scale=1";
                style { (PreEscaped(STYLESHEET)) }
                style { ":root { --color: " (color) "; }" }
            }
            body {
                form action="" method="post" novalidate {
                    fieldset id="color-field" aria-describedby="status" {
                        legend id="color-legend" { (messages.legend) }
                        div class="controls" {
                            label for="color-picker" { (messages.picker_label) }
                            input id="color-picker" name=(COLOR_FIELD) type="color"
                                value=(color) aria-label=(messages.picker_aria);
                            input id="color-text" type="text" value=(color)
                                pattern="#[A-Fa-f0-9]{3}([A-Fa-f0-9]{3})?"
                                title=(messages.text_hint) aria-hidden="true";
                            button type="submit" { (messages.submit) }
                        }
                        div id="status" class="msg" aria-live="polite" {
                            @if saved {
                                div class="success" {
                                    (messages.saved) " " strong { (color) }
                                }
                            }
                            @for error in errors {
                                div class="error" { (error) }
                            }
                        }
                    }
                }
                script { (PreEscaped(SYNC_SCRIPT)) }
            }
        }
    }
}

/// Localized text for one form error.
pub fn error_message(error: &FormError, messages: &Messages) -> String {
    match error {
        FormError::InvalidColor { input } if input.is_empty() => messages.invalid_color.to_string(),
        FormError::InvalidColor { input } => format!(
            "{} {} {}",
            messages.invalid_color, messages.rejected_value, input
        ),
        FormError::Serialization => messages.serialization_failed.to_string(),
        FormError::Storage => messages.storage_failed.to_string(),
    }
}
