//! Domain model for the color form.
//!
//! # Responsibility
//! - Define the persisted record and the hex color value type.
//!
//! # Invariants
//! - Every `ColorRecord` holds a color that matches the hex grammar.

pub mod color;
