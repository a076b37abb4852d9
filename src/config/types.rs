//! Core configuration types for booklet exports
//!
//! `ExportConfig` is deserialised straight from the YAML config file; the
//! key names are those of the file format, not of the Rust fields.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::remote::BookId;
use crate::utils::{DEFAULT_SAVE_DIR_NAME, executable_dir};

/// Main configuration struct for an export run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Session token, combined with `cookie` into the auth header
    #[serde(rename = "sessionid")]
    pub(crate) session_id: String,

    /// Raw cookie string, passed through verbatim
    pub(crate) cookie: String,

    /// Replace `book_ids` with the remote shelf listing
    #[serde(default)]
    pub(crate) fetch_book_ids_online: bool,

    /// Books to export, in index order
    #[serde(default)]
    pub(crate) book_ids: Vec<BookId>,

    /// Root of the exported tree
    ///
    /// Default: `book/` next to the executable
    #[serde(default = "default_save_dir")]
    pub(crate) save_dir: PathBuf,

    /// Re-export books whose directory already exists
    #[serde(default)]
    pub(crate) overwrite_existing: bool,

    /// Pause after every API call, in milliseconds
    ///
    /// Default: 1000
    #[serde(default)]
    pub(crate) request_delay_ms: Option<u64>,

    /// Books processed at the same time
    ///
    /// Default: number of CPUs
    #[serde(default)]
    pub(crate) max_concurrent_books: Option<usize>,

    /// API origin, overridable for staging and tests
    #[serde(default)]
    pub(crate) api_base_url: Option<String>,

    /// Directory holding `error.log`, `success.log` and `all.log`
    #[serde(default)]
    pub(crate) log_dir: Option<PathBuf>,
}

pub(crate) fn default_save_dir() -> PathBuf {
    executable_dir()
        .map(|dir| dir.join(DEFAULT_SAVE_DIR_NAME))
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_SAVE_DIR_NAME))
}

/// Errors raised while loading or validating configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("`book_ids` is empty and `fetch_book_ids_online` is disabled")]
    MissingBookIds,

    #[error("Invalid config: {0}")]
    Invalid(String),
}
