//! HTTP surface for the color form.
//!
//! # Responsibility
//! - Build the single-path router (`GET /`, `POST /`).
//! - Load process configuration from the environment.
//!
//! # Invariants
//! - Every request is answered with a complete HTML document; store and
//!   validation failures are rendered, never turned into error statuses.

pub mod config;
mod handlers;

use axum::routing::get;
use axum::Router;
use colorpick_core::{ColorRepository, ColorService, Locale};
use std::sync::Arc;

pub use config::ServerConfig;

/// Shared per-process state handed to every request.
#[derive(Clone)]
pub struct AppState {
    service: Arc<ColorService<Arc<dyn ColorRepository>>>,
    default_locale: Locale,
}

impl AppState {
    pub fn new(repo: Arc<dyn ColorRepository>, default_locale: Locale) -> Self {
        Self {
            service: Arc::new(ColorService::new(repo)),
            default_locale,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::show_color).post(handlers::submit_color))
        .with_state(state)
}
