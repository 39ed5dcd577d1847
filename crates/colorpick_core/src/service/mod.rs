//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into request-level APIs.
//! - Keep the HTTP layer decoupled from storage details.

pub mod color_service;
