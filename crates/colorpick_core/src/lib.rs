//! Core logic for the color form.
//! Validation, persistence, localized messages and page rendering live here;
//! the HTTP layer only wires requests to `ColorService` and `render_page`.

pub mod i18n;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use i18n::{Locale, Messages, UnsupportedLocale};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::color::{ColorRecord, ColorValidationError, HexColor, DEFAULT_COLOR};
pub use repo::color_repo::{ColorRepository, LoadAnomaly, RepoError, RepoResult};
pub use repo::json_file::JsonFileColorRepository;
pub use repo::memory::InMemoryColorRepository;
pub use service::color_service::{ColorService, FormError, PageState};
pub use view::page::{render, render_page, COLOR_FIELD};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
