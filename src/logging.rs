//! Subscriber setup shared by the console and the dev server.
//!
//! Library code only emits `tracing` events; binaries call one of the `init_*`
//! functions exactly once at startup.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::metadata::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Checked before `RUST_LOG`.
pub const LOG_ENV: &str = "SJ_LOG";

/// Builds the filter: `SJ_LOG`, then `RUST_LOG`, then `warn` (`debug` with `-v`).
pub fn env_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let directives = std::env::var(LOG_ENV)
        .ok()
        .or_else(|| std::env::var(EnvFilter::DEFAULT_ENV).ok())
        .filter(|d| !d.trim().is_empty());
    match directives {
        Some(d) => EnvFilter::builder()
            .with_default_directive(fallback.into())
            .parse_lossy(d),
        None => EnvFilter::default().add_directive(fallback.into()),
    }
}

/// Logs to stderr.
pub fn init_stderr(verbose: bool) {
    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Logs to `path` (appending). Used by the terminal UI, which owns stderr.
pub fn init_file(path: &Path, verbose: bool) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
