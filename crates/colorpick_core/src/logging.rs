//! Process-wide logging for the color server.
//!
//! # Responsibility
//! - Write `event=... module=... status=...` lines to a rolling file under
//!   the configured directory; warnings and errors also go to stderr so a
//!   supervisor sees storage failures without tailing files.
//! - Turn panics inside request handling into a single flattened log line.
//!
//! # Invariants
//! - The logger starts at most once; asking again with the same level and
//!   directory succeeds, asking with different ones fails.
//! - Submitted form text never reaches the log unbounded: panic payloads are
//!   cut to `PANIC_PAYLOAD_LIMIT` chars with control characters blanked.

use flexi_logger::{
    Cleanup, Criterion, Duplicate, FileSpec, LogSpecification, Logger, LoggerHandle, Naming,
    WriteMode,
};
use log::{error, info, LevelFilter};
use once_cell::sync::OnceCell;
use std::panic::PanicHookInfo;
use std::path::{Path, PathBuf};

const FILE_BASENAME: &str = "colorpick";
const ROTATE_AT_BYTES: u64 = 10 * 1024 * 1024;
const KEEP_ROTATED_FILES: usize = 5;
const PANIC_PAYLOAD_LIMIT: usize = 160;

static ACTIVE: OnceCell<ActiveLogger> = OnceCell::new();

struct ActiveLogger {
    level: LevelFilter,
    dir: PathBuf,
    _handle: LoggerHandle,
}

impl ActiveLogger {
    fn ensure_same(&self, level: LevelFilter, dir: &Path) -> Result<(), String> {
        if self.level == level && self.dir == dir {
            return Ok(());
        }
        Err(format!(
            "logging already running with level={} dir={}; cannot restart with level={} dir={}",
            self.level,
            self.dir.display(),
            level,
            dir.display()
        ))
    }
}

/// Starts file logging for the server.
///
/// `log_dir` must be absolute and is created when missing. Accepted levels
/// are `trace|debug|info|warn|error` (case-insensitive, `warning` allowed).
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let level = parse_level(level)?;
    let dir = absolute_dir(log_dir)?;

    match ACTIVE.get() {
        Some(active) => active.ensure_same(level, &dir),
        None => ACTIVE
            .get_or_try_init(|| start(level, &dir))?
            .ensure_same(level, &dir),
    }
}

/// Level and directory of the running logger, if any.
pub fn logging_status() -> Option<(LevelFilter, PathBuf)> {
    ACTIVE.get().map(|active| (active.level, active.dir.clone()))
}

/// Level used when `COLORPICK_LOG_LEVEL` is unset.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start(level: LevelFilter, dir: &Path) -> Result<ActiveLogger, String> {
    std::fs::create_dir_all(dir)
        .map_err(|err| format!("cannot create log dir {}: {err}", dir.display()))?;

    let filter = LogSpecification::builder().default(level).build();
    let handle = Logger::with(filter)
        .log_to_file(FileSpec::default().directory(dir).basename(FILE_BASENAME))
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_ROTATED_FILES),
        )
        .append()
        .write_mode(WriteMode::BufferAndFlush)
        .format_for_files(flexi_logger::detailed_format)
        .duplicate_to_stderr(Duplicate::Warn)
        .start()
        .map_err(|err| format!("cannot start logger: {err}"))?;

    std::panic::set_hook(Box::new(log_panic));
    info!(
        "event=logging_init module=core status=ok level={} log_dir={}",
        level,
        dir.display()
    );

    Ok(ActiveLogger {
        level,
        dir: dir.to_path_buf(),
        _handle: handle,
    })
}

fn parse_level(raw: &str) -> Result<LevelFilter, String> {
    let raw = raw.trim();
    let level = if raw.eq_ignore_ascii_case("warning") {
        LevelFilter::Warn
    } else {
        raw.parse::<LevelFilter>()
            .map_err(|_| format!("unknown log level `{raw}`"))?
    };
    if level == LevelFilter::Off {
        return Err("log level `off` is not allowed".to_string());
    }
    Ok(level)
}

fn absolute_dir(raw: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(raw.trim());
    if path.as_os_str().is_empty() || !path.is_absolute() {
        return Err(format!("log dir must be an absolute path, got `{raw}`"));
    }
    Ok(path)
}

fn log_panic(info: &PanicHookInfo<'_>) {
    let location = info
        .location()
        .map(|loc| format!("{}:{}", loc.file(), loc.line()))
        .unwrap_or_else(|| "unknown".to_string());
    error!(
        "event=panic module=core status=error location={} payload={}",
        location,
        flatten_payload(panic_text(info), PANIC_PAYLOAD_LIMIT)
    );
}

fn panic_text<'a>(info: &'a PanicHookInfo<'_>) -> &'a str {
    let payload = info.payload();
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string payload>")
}

fn flatten_payload(text: &str, limit: usize) -> String {
    let mut out: String = text
        .chars()
        .take(limit)
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect();
    if text.chars().nth(limit).is_some() {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{absolute_dir, flatten_payload, init_logging, logging_status, parse_level};
    use log::LevelFilter;

    #[test]
    fn levels_parse_case_insensitively() {
        assert_eq!(parse_level(" INFO "), Ok(LevelFilter::Info));
        assert_eq!(parse_level("Warning"), Ok(LevelFilter::Warn));
        assert!(parse_level("off").is_err());
        assert!(parse_level("verbose").is_err());
    }

    #[test]
    fn log_dir_must_be_absolute() {
        assert!(absolute_dir("").is_err());
        assert!(absolute_dir("logs").is_err());
    }

    #[test]
    fn panic_payload_is_single_line_and_bounded() {
        assert_eq!(flatten_payload("bad\n#fff\tinput", 64), "bad #fff input");
        assert_eq!(flatten_payload("abcdefghij", 4), "abcd...");
        assert_eq!(flatten_payload("abcd", 4), "abcd");
    }

    #[test]
    fn second_init_must_match_first() {
        let first = tempfile::tempdir().unwrap();
        let other = tempfile::tempdir().unwrap();
        let dir = first.path().join("logs");
        let dir_str = dir.to_str().unwrap();

        init_logging("info", dir_str).unwrap();
        init_logging("INFO", dir_str).unwrap();
        assert!(init_logging("debug", dir_str).is_err());
        assert!(init_logging("info", other.path().to_str().unwrap()).is_err());

        assert_eq!(logging_status(), Some((LevelFilter::Info, dir.clone())));
        assert!(dir.is_dir());
    }
}
