//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the load/save contract for the single color record.
//! - Isolate file-system details from service orchestration.
//!
//! # Invariants
//! - `load` never fails; anomalies fall back to the default record.
//! - `save` replaces the whole record; readers never observe a partial write.

pub mod color_repo;
pub mod json_file;
pub mod memory;
