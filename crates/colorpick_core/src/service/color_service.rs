//! Color form use-case service.
//!
//! # Responsibility
//! - Run the per-request flow: load, optionally validate + save, hand the
//!   resulting state to the view.
//!
//! # Invariants
//! - No failure is fatal; every path yields a complete `PageState`.
//! - A rejected submission never reaches the repository.
//! - After a failed save the previously persisted color stays displayed.

use crate::model::color::{ColorRecord, ColorValidationError, HexColor};
use crate::repo::color_repo::{ColorRepository, RepoError};
use log::{info, warn};

const MAX_ECHOED_INPUT_CHARS: usize = 64;

/// User-visible failure attached to a rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Submitted value is not a hex color. `input` is the trimmed submission,
    /// capped in length, kept for an escaped echo.
    InvalidColor { input: String },
    /// Encoding the record failed.
    Serialization,
    /// Writing the record failed.
    Storage,
}

impl From<&RepoError> for FormError {
    fn from(value: &RepoError) -> Self {
        match value {
            RepoError::Serialization(_) => Self::Serialization,
            RepoError::Io { .. } | RepoError::LockTimeout { .. } => Self::Storage,
        }
    }
}

/// Everything the view needs for one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub current: ColorRecord,
    pub errors: Vec<FormError>,
    pub saved: bool,
}

impl PageState {
    fn showing(current: ColorRecord) -> Self {
        Self {
            current,
            errors: Vec::new(),
            saved: false,
        }
    }
}

/// Use-case service for the color form.
pub struct ColorService<R: ColorRepository> {
    repo: R,
}

impl<R: ColorRepository> ColorService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Returns the page state for a plain view request.
    pub fn show(&self) -> PageState {
        PageState::showing(self.repo.load())
    }

    /// Handles one form submission.
    ///
    /// # Contract
    /// - Surrounding whitespace is trimmed before validation.
    /// - On success the new color is persisted and displayed.
    /// - On validation or storage failure the persisted color is displayed
    ///   together with one `FormError`.
    pub fn submit(&self, raw_input: &str) -> PageState {
        let mut state = PageState::showing(self.repo.load());
        let input = raw_input.trim();

        let color = match HexColor::parse(input) {
            Ok(color) => color,
            Err(err) => {
                info!(
                    "event=color_submit module=service status=rejected reason={}",
                    rejection_code(&err)
                );
                state.errors.push(FormError::InvalidColor {
                    input: input.chars().take(MAX_ECHOED_INPUT_CHARS).collect(),
                });
                return state;
            }
        };

        let record = ColorRecord::new(color);
        match self.repo.save(&record) {
            Ok(()) => {
                info!(
                    "event=color_submit module=service status=ok color={}",
                    record.color
                );
                state.current = record;
                state.saved = true;
            }
            Err(err) => {
                warn!(
                    "event=color_submit module=service status=error error={}",
                    err
                );
                state.errors.push(FormError::from(&err));
            }
        }
        state
    }
}

fn rejection_code(err: &ColorValidationError) -> &'static str {
    match err {
        ColorValidationError::Empty => "empty",
        ColorValidationError::MissingHash(_) => "missing_hash",
        ColorValidationError::InvalidLength(_) => "invalid_length",
        ColorValidationError::InvalidDigit(_) => "invalid_digit",
    }
}
