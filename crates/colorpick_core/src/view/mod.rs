//! HTML rendering.
//!
//! # Responsibility
//! - Turn a `PageState` into the response document.
//!
//! # Invariants
//! - Dynamic content goes through `maud` interpolation and is escaped; only
//!   static, compiled-in markup is emitted pre-escaped.

pub mod page;
