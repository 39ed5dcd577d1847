//! Localized user-facing strings.
//!
//! # Responsibility
//! - Hold every string the page shows, per supported locale.
//! - Pick a locale from an `Accept-Language` header.
//!
//! # Invariants
//! - Messages are plain text; escaping happens in the view.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Supported page languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    De,
    En,
}

impl Locale {
    /// BCP 47 primary language tag, used for `<html lang>`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::De => "de",
            Self::En => "en",
        }
    }

    /// Picks the supported language with the highest `q` weight.
    ///
    /// Ties keep header order. Weights outside `(0, 1]` (including `nan`) drop
    /// the entry. Returns `fallback` when the header is absent or names no
    /// supported language.
    pub fn negotiate(accept_language: Option<&str>, fallback: Locale) -> Locale {
        let Some(header) = accept_language else {
            return fallback;
        };

        let mut best: Option<(Locale, f32)> = None;
        for entry in header.split(',') {
            let mut parts = entry.split(';');
            let tag = parts.next().unwrap_or_default().trim();
            let Some(locale) = primary_language(tag) else {
                continue;
            };
            let weight = parts
                .filter_map(|param| param.trim().strip_prefix("q="))
                .find_map(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);
            if weight == 0.0 || !(0.0..=1.0).contains(&weight) {
                continue;
            }
            if best.is_none_or(|(_, best_weight)| weight > best_weight) {
                best = Some((locale, weight));
            }
        }

        best.map(|(locale, _)| locale).unwrap_or(fallback)
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Self::De => &DE,
            Self::En => &EN,
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unsupported locale configuration values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedLocale(pub String);

impl Display for UnsupportedLocale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported locale `{}`; expected de|en", self.0)
    }
}

impl Error for UnsupportedLocale {}

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        primary_language(value.trim()).ok_or_else(|| UnsupportedLocale(value.to_string()))
    }
}

fn primary_language(tag: &str) -> Option<Locale> {
    let primary = tag.split(['-', '_']).next().unwrap_or_default();
    if primary.eq_ignore_ascii_case("de") {
        Some(Locale::De)
    } else if primary.eq_ignore_ascii_case("en") {
        Some(Locale::En)
    } else {
        None
    }
}

/// String table for one locale.
#[derive(Debug)]
pub struct Messages {
    pub title: &'static str,
    pub legend: &'static str,
    pub picker_label: &'static str,
    pub picker_aria: &'static str,
    pub text_hint: &'static str,
    pub submit: &'static str,
    pub saved: &'static str,
    pub invalid_color: &'static str,
    pub rejected_value: &'static str,
    pub serialization_failed: &'static str,
    pub storage_failed: &'static str,
}

static DE: Messages = Messages {
    title: "Color-Test",
    legend: "Choose your color",
    picker_label: "Farbauswahl:",
    picker_aria: "Farbwähler",
    text_hint: "#rrggbb oder #rgb",
    submit: "Farbe testen",
    saved: "Farbe erfolgreich gespeichert:",
    invalid_color:
        "Ungültiger Farbwert. Bitte ein Hex-Farbformat wie #ff0080 oder #f08 verwenden.",
    rejected_value: "Eingabe:",
    serialization_failed: "Fehler beim Erstellen der JSON-Daten.",
    storage_failed: "Fehler beim Speichern der Datei. Schreibrechte prüfen.",
};

static EN: Messages = Messages {
    title: "Color-Test",
    legend: "Choose your color",
    picker_label: "Color:",
    picker_aria: "Color picker",
    text_hint: "#rrggbb or #rgb",
    submit: "Test color",
    saved: "Color saved successfully:",
    invalid_color: "Invalid color value. Please use a hex color such as #ff0080 or #f08.",
    rejected_value: "Input:",
    serialization_failed: "Failed to encode the color data.",
    storage_failed: "Failed to save the file. Check write permissions.",
};

#[cfg(test)]
mod tests {
    use super::Locale;

    #[test]
    fn negotiate_falls_back_without_header() {
        assert_eq!(Locale::negotiate(None, Locale::De), Locale::De);
        assert_eq!(Locale::negotiate(Some(""), Locale::En), Locale::En);
        assert_eq!(Locale::negotiate(Some("fr-FR, it"), Locale::De), Locale::De);
    }

    #[test]
    fn negotiate_honors_quality_weights() {
        assert_eq!(
            Locale::negotiate(Some("de;q=0.4, en-US;q=0.9"), Locale::De),
            Locale::En
        );
        assert_eq!(
            Locale::negotiate(Some("fr, de-AT, en;q=0.8"), Locale::En),
            Locale::De
        );
        assert_eq!(Locale::negotiate(Some("en;q=0, de"), Locale::En), Locale::De);
    }

    #[test]
    fn negotiate_skips_out_of_range_weights() {
        assert_eq!(Locale::negotiate(Some("en;q=nan, de"), Locale::De), Locale::De);
        assert_eq!(Locale::negotiate(Some("en;q=inf, de;q=0.5"), Locale::En), Locale::De);
        assert_eq!(Locale::negotiate(Some("en;q=2"), Locale::De), Locale::De);
        assert_eq!(Locale::negotiate(Some("de;q=-1, en"), Locale::De), Locale::En);
    }

    #[test]
    fn parse_accepts_region_tags() {
        assert_eq!("EN-gb".parse::<Locale>(), Ok(Locale::En));
        assert_eq!(" de ".parse::<Locale>(), Ok(Locale::De));
        assert!("fr".parse::<Locale>().is_err());
    }
}
