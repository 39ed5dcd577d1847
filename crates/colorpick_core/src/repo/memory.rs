//! In-memory color repository for tests and embedding.

use super::color_repo::{ColorRepository, RepoError, RepoResult};
use crate::model::color::ColorRecord;
use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Mutex-guarded repository holding at most one record.
#[derive(Debug, Default)]
pub struct InMemoryColorRepository {
    state: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    record: Option<ColorRecord>,
    fail_writes: bool,
}

impl InMemoryColorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository that already holds `record`.
    pub fn with_record(record: ColorRecord) -> Self {
        Self {
            state: Mutex::new(MemoryState {
                record: Some(record),
                fail_writes: false,
            }),
        }
    }

    /// Makes every subsequent `save` fail with a permission error.
    pub fn fail_writes(&self, fail: bool) {
        self.lock_state().fail_writes = fail;
    }

    /// Returns the stored record without default fallback.
    pub fn stored(&self) -> Option<ColorRecord> {
        self.lock_state().record.clone()
    }

    fn lock_state(&self) -> MutexGuard<'_, MemoryState> {
        // The state is replaced wholesale, so a poisoned guard is still coherent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ColorRepository for InMemoryColorRepository {
    fn load(&self) -> ColorRecord {
        self.lock_state().record.clone().unwrap_or_default()
    }

    fn save(&self, record: &ColorRecord) -> RepoResult<()> {
        let mut state = self.lock_state();
        if state.fail_writes {
            return Err(RepoError::Io {
                path: PathBuf::from("memory"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "writes disabled"),
            });
        }
        state.record = Some(record.clone());
        Ok(())
    }
}
