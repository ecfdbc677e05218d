//! Tracing setup.
//!
//! The TUI owns stdout, so events go to a log file instead of the terminal.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::eyre::{eyre, Result, WrapErr};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Filter directive env var; `RUST_LOG` is consulted when it is unset or blank.
pub const ENV_LOG_FILTER: &str = "CREDITSCORE_LOG";

/// Filter used when neither env var is set.
pub const DEFAULT_FILTER: &str = "creditscore=info";

const LOG_DIR_NAME: &str = "creditscore";
const LOG_FILE_NAME: &str = "creditscore.log";

/// Pick the filter directive from `CREDITSCORE_LOG`, then `RUST_LOG`.
pub fn filter_directive<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |key: &str| lookup(key).filter(|directive| !directive.trim().is_empty());

    non_blank(ENV_LOG_FILTER)
        .or_else(|| non_blank("RUST_LOG"))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Where the log file goes: the configured path, else the user cache dir.
pub fn log_file_path(config: &AppConfig) -> Option<PathBuf> {
    config.log_file.clone().or_else(|| {
        dirs::cache_dir().map(|dir| dir.join(LOG_DIR_NAME).join(LOG_FILE_NAME))
    })
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("creating log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("opening log file {}", path.display()))
}

/// Install the global subscriber writing to the log file.
///
/// Returns the path being written to. An invalid filter directive falls back
/// to [`DEFAULT_FILTER`].
pub fn init_logging(config: &AppConfig) -> Result<PathBuf> {
    let path = log_file_path(config).ok_or_else(|| eyre!("no cache directory for the log file"))?;
    let file = open_log_file(&path)?;

    let directive = filter_directive(|key| std::env::var(key).ok());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!("installing tracing subscriber: {}", err))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_filter_prefers_own_variable() {
        let directive = filter_directive(lookup(&[
            ("CREDITSCORE_LOG", "creditscore=debug"),
            ("RUST_LOG", "warn"),
        ]));
        assert_eq!(directive, "creditscore=debug");
    }

    #[test]
    fn test_filter_falls_back_to_rust_log() {
        assert_eq!(filter_directive(lookup(&[("RUST_LOG", "warn")])), "warn");
    }

    #[test]
    fn test_filter_default() {
        assert_eq!(filter_directive(lookup(&[])), DEFAULT_FILTER);
        assert_eq!(
            filter_directive(lookup(&[("CREDITSCORE_LOG", "  ")])),
            DEFAULT_FILTER
        );
    }

    #[test]
    fn test_blank_filter_falls_through_to_rust_log() {
        let directive = filter_directive(lookup(&[("CREDITSCORE_LOG", ""), ("RUST_LOG", "warn")]));
        assert_eq!(directive, "warn");
    }

    #[test]
    fn test_configured_log_file_wins() {
        let config = AppConfig::default().with_log_file("/tmp/custom.log");
        assert_eq!(log_file_path(&config), Some(PathBuf::from("/tmp/custom.log")));
    }

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("app.log");

        open_log_file(&path).unwrap();

        assert!(path.exists());
    }
}
