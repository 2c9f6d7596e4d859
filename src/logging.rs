//! Log file setup for the bsmotion binary.
//!
//! The terminal is owned by the UI, so events go to a file only.
//!
//! ## Environment Variables
//!
//! 1. **`BSMOTION_LOG`** (highest priority)
//! 2. **`RUST_LOG`**
//! 3. **Default** - `warn`
//!
//! ## Log File Location
//!
//! Default: `<data_local_dir>/bsmotion/bsmotion.log`
//! - Linux: `~/.local/share/bsmotion/bsmotion.log`
//! - macOS: `~/Library/Application Support/bsmotion/bsmotion.log`
//!
//! Override with `--log-file <path>`.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "bsmotion.log";

/// Returned from [`init`]; dropping it flushes and stops the file writer.
pub struct LogGuard {
    _file_guard: WorkerGuard,
    pub log_file: PathBuf,
}

/// Installs the global subscriber writing to `log_file`, or to
/// [`default_log_path`] when none is given.
///
/// # Errors
///
/// Fails if the log directory can't be created, the filter directive is
/// invalid, or a global subscriber is already installed.
pub fn init(log_file: Option<PathBuf>) -> Result<LogGuard> {
    let log_file = log_file.unwrap_or_else(default_log_path);
    let (dir, name) = split_log_path(&log_file);

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&dir, &name);
    let (non_blocking, file_guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(create_filter()?)
        .with_writer(non_blocking)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("Failed to install logger: {err}"))?;

    Ok(LogGuard {
        _file_guard: file_guard,
        log_file: dir.join(name),
    })
}

/// `<data_local_dir>/bsmotion/bsmotion.log`, falling back to the current
/// directory.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bsmotion")
        .join(LOG_FILE_NAME)
}

/// Splits a log path into directory and file name. A path without an
/// extension is taken as a directory.
fn split_log_path(path: &Path) -> (PathBuf, String) {
    if path.extension().is_none() {
        return (path.to_path_buf(), LOG_FILE_NAME.to_string());
    }
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| LOG_FILE_NAME.to_string());
    (dir.to_path_buf(), name)
}

/// Builds the filter: `BSMOTION_LOG` > `RUST_LOG` > `warn`.
fn create_filter() -> Result<EnvFilter> {
    let directives = env::var("BSMOTION_LOG")
        .or_else(|_| env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());
    EnvFilter::try_new(&directives).with_context(|| format!("Invalid log filter '{directives}'"))
}
