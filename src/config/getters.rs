//! Getter methods for `ExportConfig`
//!
//! Optional settings resolve to their defaults here, so callers never see
//! an unset value.

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::types::ExportConfig;
use crate::remote::BookId;
use crate::utils::{DEFAULT_API_BASE_URL, DEFAULT_LOG_DIR, DEFAULT_REQUEST_DELAY};

impl ExportConfig {
    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    #[must_use]
    pub fn cookie(&self) -> &str {
        &self.cookie
    }

    #[must_use]
    pub fn fetch_book_ids_online(&self) -> bool {
        self.fetch_book_ids_online
    }

    #[must_use]
    pub fn book_ids(&self) -> &[BookId] {
        &self.book_ids
    }

    #[must_use]
    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }

    #[must_use]
    pub fn overwrite_existing(&self) -> bool {
        self.overwrite_existing
    }

    #[must_use]
    pub fn request_delay(&self) -> Duration {
        self.request_delay_ms
            .map_or(DEFAULT_REQUEST_DELAY, Duration::from_millis)
    }

    /// Worker pool size, bounded by available CPUs unless configured
    #[must_use]
    pub fn max_concurrent_books(&self) -> usize {
        self.max_concurrent_books
            .unwrap_or_else(num_cpus::get)
            .max(1)
    }

    #[must_use]
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    #[must_use]
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR))
    }
}
