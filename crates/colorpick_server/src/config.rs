//! Server configuration from environment variables.
//!
//! | Variable              | Default            |
//! |-----------------------|--------------------|
//! | `COLORPICK_BIND`      | `127.0.0.1:8080`   |
//! | `COLORPICK_DATA_FILE` | `color.json`       |
//! | `COLORPICK_LOCALE`    | `de`               |
//! | `COLORPICK_LOG_LEVEL` | build-mode default |
//! | `COLORPICK_LOG_DIR`   | `<cwd>/logs`       |

use colorpick_core::{default_log_level, Locale};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_BIND: &str = "127.0.0.1:8080";
const DEFAULT_DATA_FILE: &str = "color.json";
const DEFAULT_LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub data_file: PathBuf,
    pub default_locale: Locale,
    pub log_level: String,
    pub log_dir: String,
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads configuration through `lookup`; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let bind = var("COLORPICK_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind
            .parse::<SocketAddr>()
            .map_err(|err| format!("invalid COLORPICK_BIND `{bind}`: {err}"))?;

        let data_file = var("COLORPICK_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        let default_locale = match var("COLORPICK_LOCALE") {
            Some(value) => value
                .parse::<Locale>()
                .map_err(|err| format!("invalid COLORPICK_LOCALE: {err}"))?,
            None => Locale::default(),
        };

        let log_level =
            var("COLORPICK_LOG_LEVEL").unwrap_or_else(|| default_log_level().to_string());

        let log_dir = match var("COLORPICK_LOG_DIR") {
            Some(dir) => dir,
            None => default_log_dir()?,
        };

        Ok(Self {
            bind_addr,
            data_file,
            default_locale,
            log_level,
            log_dir,
        })
    }
}

fn default_log_dir() -> Result<String, String> {
    let cwd = env::current_dir()
        .map_err(|err| format!("cannot resolve working directory for logs: {err}"))?;
    cwd.join(DEFAULT_LOG_DIR_NAME)
        .into_os_string()
        .into_string()
        .map_err(|path| format!("log directory `{}` is not valid UTF-8", path.to_string_lossy()))
}
