//! JSON file-backed color repository.
//!
//! # Responsibility
//! - Read the persisted record from one injected file path.
//! - Replace the record atomically under an exclusive advisory lock.
//!
//! # Invariants
//! - `load` never propagates errors; anomalies are logged and the default
//!   record is returned.
//! - Writers serialize on a sidecar `<file>.lock`; the target is replaced by
//!   renaming a fully synced temp file, so readers never need a lock.

use super::color_repo::{ColorRepository, LoadAnomaly, RepoError, RepoResult};
use crate::model::color::{ColorRecord, HexColor};
use log::{debug, error, info, warn};
use serde_json::{Map, Value};
use std::fs::{self, File, OpenOptions, TryLockError};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};
use tempfile::NamedTempFile;

const COLOR_KEY: &str = "color";
const LEGACY_COLOR_KEY: &str = "TestColor";
const LOCK_SUFFIX: &str = ".lock";
const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(2);
const LOCK_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Color repository persisting one JSON object to a file.
#[derive(Debug, Clone)]
pub struct JsonFileColorRepository {
    path: PathBuf,
    lock_timeout: Duration,
}

impl JsonFileColorRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
        }
    }

    /// Overrides how long `save` waits for a concurrent writer.
    pub fn with_lock_timeout(mut self, lock_timeout: Duration) -> Self {
        self.lock_timeout = lock_timeout;
        self
    }

    /// Path of the sidecar file writers lock.
    pub fn lock_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(LOCK_SUFFIX);
        self.path.with_file_name(name)
    }

    /// Reads the persisted record without falling back.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn read_record(&self) -> Result<Option<ColorRecord>, LoadAnomaly> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(LoadAnomaly::Unreadable(err)),
        };
        decode_record(&raw).map(Some)
    }

    fn write_record(&self, bytes: &[u8]) -> RepoResult<()> {
        let dir = parent_dir(&self.path);
        fs::create_dir_all(dir).map_err(|source| self.io_error(source))?;

        let _lock = self.acquire_lock()?;

        let mut temp = NamedTempFile::new_in(dir).map_err(|source| self.io_error(source))?;
        temp.write_all(bytes)
            .map_err(|source| self.io_error(source))?;
        temp.as_file()
            .sync_all()
            .map_err(|source| self.io_error(source))?;
        temp.persist(&self.path)
            .map_err(|err| self.io_error(err.error))?;

        #[cfg(unix)]
        {
            if let Err(err) = File::open(dir).and_then(|handle| handle.sync_all()) {
                debug!(
                    "event=color_save module=repo status=dir_sync_failed dir={} error={}",
                    dir.display(),
                    err
                );
            }
        }
        Ok(())
    }

    fn acquire_lock(&self) -> RepoResult<File> {
        let lock_path = self.lock_path();
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|source| RepoError::Io {
                path: lock_path.clone(),
                source,
            })?;

        let deadline = Instant::now() + self.lock_timeout;
        loop {
            match file.try_lock() {
                Ok(()) => return Ok(file),
                Err(TryLockError::WouldBlock) if Instant::now() < deadline => {
                    thread::sleep(LOCK_POLL_INTERVAL);
                }
                Err(TryLockError::WouldBlock) => {
                    return Err(RepoError::LockTimeout { path: lock_path });
                }
                Err(TryLockError::Error(source)) => {
                    return Err(RepoError::Io {
                        path: lock_path,
                        source,
                    });
                }
            }
        }
    }

    fn io_error(&self, source: io::Error) -> RepoError {
        RepoError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ColorRepository for JsonFileColorRepository {
    fn load(&self) -> ColorRecord {
        match self.read_record() {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!("event=color_load module=repo status=missing fallback=default");
                ColorRecord::default()
            }
            Err(anomaly) => {
                warn!(
                    "event=color_load module=repo status=anomaly fallback=default error_code={} error={}",
                    anomaly.code(),
                    anomaly
                );
                ColorRecord::default()
            }
        }
    }

    fn save(&self, record: &ColorRecord) -> RepoResult<()> {
        let started_at = Instant::now();
        let bytes = serde_json::to_vec(record)?;

        match self.write_record(&bytes) {
            Ok(()) => {
                info!(
                    "event=color_save module=repo status=ok duration_ms={} bytes={}",
                    started_at.elapsed().as_millis(),
                    bytes.len()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=color_save module=repo status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}

fn decode_record(raw: &str) -> Result<ColorRecord, LoadAnomaly> {
    let value: Value = serde_json::from_str(raw).map_err(LoadAnomaly::Malformed)?;
    let Value::Object(object) = value else {
        return Err(LoadAnomaly::NotAnObject);
    };
    let color = color_field(&object).ok_or(LoadAnomaly::MissingColor)?;
    let color = HexColor::parse(color).map_err(LoadAnomaly::InvalidColor)?;
    Ok(ColorRecord::new(color))
}

fn color_field(object: &Map<String, Value>) -> Option<&str> {
    object
        .get(COLOR_KEY)
        .and_then(Value::as_str)
        .or_else(|| object.get(LEGACY_COLOR_KEY).and_then(Value::as_str))
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
