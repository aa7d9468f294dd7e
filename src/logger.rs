// src/logger.rs
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::{fmt, EnvFilter};

static LOGGER_INIT: OnceLock<()> = OnceLock::new();

/// Where log lines go.
pub enum LogTarget {
    /// Terminal frontends: keep stdout clean for the report.
    Stderr,
    /// The GUI has no console on some platforms.
    File(PathBuf),
}

/// Install the global subscriber once. Later calls are no-ops.
/// `RUST_LOG` overrides the default `info` filter.
pub fn init(target: LogTarget) {
    LOGGER_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info"));

        match target {
            LogTarget::Stderr => {
                let _ = fmt()
                    .with_env_filter(filter)
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .try_init();
            }
            LogTarget::File(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        let _ = fs::create_dir_all(parent);
                    }
                }
                match OpenOptions::new().create(true).append(true).open(&path) {
                    Ok(file) => {
                        let _ = fmt()
                            .with_env_filter(filter)
                            .with_target(true)
                            .with_line_number(true)
                            .with_ansi(false)
                            .with_writer(Mutex::new(file))
                            .try_init();
                    }
                    Err(_) => {
                        // log file unavailable: fall back to stderr
                        let _ = fmt()
                            .with_env_filter(filter)
                            .with_writer(std::io::stderr)
                            .try_init();
                    }
                }
            }
        }

        tracing::debug!("logger initialized");
    });
}
