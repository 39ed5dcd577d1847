//! Color repository contract and error types.

use crate::model::color::{ColorRecord, ColorValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

pub type RepoResult<T> = Result<T, RepoError>;

/// Write-path error for color persistence.
#[derive(Debug)]
pub enum RepoError {
    /// Encoding the record as JSON failed.
    Serialization(serde_json::Error),
    /// The underlying file-system operation failed.
    Io { path: PathBuf, source: io::Error },
    /// Another writer held the advisory lock past the deadline.
    LockTimeout { path: PathBuf },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialization(err) => write!(f, "failed to encode color record: {err}"),
            Self::Io { path, source } => write!(f, "failed to write `{}`: {source}", path.display()),
            Self::LockTimeout { path } => {
                write!(f, "timed out waiting for write lock on `{}`", path.display())
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Serialization(err) => Some(err),
            Self::Io { source, .. } => Some(source),
            Self::LockTimeout { .. } => None,
        }
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

/// Reason a persisted record was ignored on load.
///
/// Only ever logged; callers of `load` always receive a usable record.
#[derive(Debug)]
pub enum LoadAnomaly {
    /// The file exists but could not be read (permissions, non-UTF-8, ...).
    Unreadable(io::Error),
    /// The content is not valid JSON.
    Malformed(serde_json::Error),
    /// The JSON value is not an object.
    NotAnObject,
    /// The object has no string color field.
    MissingColor,
    /// The content decoded but the color failed validation.
    InvalidColor(ColorValidationError),
}

impl LoadAnomaly {
    /// Stable code used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unreadable(_) => "unreadable",
            Self::Malformed(_) => "malformed",
            Self::NotAnObject => "not_an_object",
            Self::MissingColor => "missing_color",
            Self::InvalidColor(_) => "invalid_color",
        }
    }
}

impl Display for LoadAnomaly {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreadable(err) => write!(f, "persisted color unreadable: {err}"),
            Self::Malformed(err) => write!(f, "persisted color malformed: {err}"),
            Self::NotAnObject => write!(f, "persisted color is not a JSON object"),
            Self::MissingColor => write!(f, "persisted color field is missing"),
            Self::InvalidColor(err) => write!(f, "persisted color invalid: {err}"),
        }
    }
}

impl Error for LoadAnomaly {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unreadable(err) => Some(err),
            Self::Malformed(err) => Some(err),
            Self::InvalidColor(err) => Some(err),
            Self::NotAnObject | Self::MissingColor => None,
        }
    }
}

/// Storage contract for the single color record.
pub trait ColorRepository: Send + Sync {
    /// Returns the persisted record, or the default when none is usable.
    fn load(&self) -> ColorRecord;

    /// Replaces the persisted record with `record`.
    fn save(&self, record: &ColorRecord) -> RepoResult<()>;
}

impl<R: ColorRepository + ?Sized> ColorRepository for std::sync::Arc<R> {
    fn load(&self) -> ColorRecord {
        (**self).load()
    }

    fn save(&self, record: &ColorRecord) -> RepoResult<()> {
        (**self).save(record)
    }
}
