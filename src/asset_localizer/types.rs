//! Type definitions for asset localization

use std::path::PathBuf;

/// Failure to fetch or store a single image.
///
/// Always contained to the one reference that caused it.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("not an absolute http(s) URL: {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server answered HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("image exceeds {limit} bytes")]
    TooLarge { limit: usize },

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Context recorded for an image that stayed remote
#[derive(Debug)]
pub struct AssetFailure {
    /// URL as fetched (line breaks removed)
    pub url: String,
    /// 1-based position of the reference in the document
    pub index: usize,
    /// Directory the file should have landed in
    pub target_dir: PathBuf,
    pub error: AssetError,
}

impl std::fmt::Display for AssetFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Failed to localize image #{} url={} dir={}: {}",
            self.index,
            self.url,
            self.target_dir.display(),
            self.error
        )
    }
}

/// A section document after localization, with success and failure tracking
#[derive(Debug)]
pub struct LocalizedDocument {
    pub text: String,
    /// Images downloaded and rewritten
    pub localized: usize,
    /// Images left pointing at their remote URL
    pub failures: Vec<AssetFailure>,
}

impl LocalizedDocument {
    /// Total number of image references processed
    #[must_use]
    pub fn total(&self) -> usize {
        self.localized + self.failures.len()
    }

    /// Check if any reference stayed remote
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
