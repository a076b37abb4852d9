//! Type-safe builder for `ExportConfig` using the typestate pattern
//!
//! The session token and the cookie are both required; `build()` only
//! exists once both have been supplied.

use std::marker::PhantomData;
use std::path::PathBuf;

use super::types::{ConfigError, ExportConfig, default_save_dir};
use crate::remote::BookId;

// Type states for the builder
pub struct WithSession;
pub struct Complete;

pub struct ExportConfigBuilder<State = ()> {
    session_id: Option<String>,
    cookie: Option<String>,
    fetch_book_ids_online: bool,
    book_ids: Vec<BookId>,
    save_dir: Option<PathBuf>,
    overwrite_existing: bool,
    request_delay_ms: Option<u64>,
    max_concurrent_books: Option<usize>,
    api_base_url: Option<String>,
    log_dir: Option<PathBuf>,
    _phantom: PhantomData<State>,
}

impl Default for ExportConfigBuilder<()> {
    fn default() -> Self {
        Self {
            session_id: None,
            cookie: None,
            fetch_book_ids_online: false,
            book_ids: Vec::new(),
            save_dir: None,
            overwrite_existing: false,
            request_delay_ms: None,
            max_concurrent_books: None,
            api_base_url: None,
            log_dir: None,
            _phantom: PhantomData,
        }
    }
}

impl ExportConfig {
    /// Create a builder for configuring an `ExportConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ExportConfigBuilder<()> {
        ExportConfigBuilder::default()
    }
}

impl<S> ExportConfigBuilder<S> {
    fn transition<T>(self) -> ExportConfigBuilder<T> {
        ExportConfigBuilder {
            session_id: self.session_id,
            cookie: self.cookie,
            fetch_book_ids_online: self.fetch_book_ids_online,
            book_ids: self.book_ids,
            save_dir: self.save_dir,
            overwrite_existing: self.overwrite_existing,
            request_delay_ms: self.request_delay_ms,
            max_concurrent_books: self.max_concurrent_books,
            api_base_url: self.api_base_url,
            log_dir: self.log_dir,
            _phantom: PhantomData,
        }
    }

    #[must_use]
    pub fn fetch_book_ids_online(mut self, enabled: bool) -> Self {
        self.fetch_book_ids_online = enabled;
        self
    }

    #[must_use]
    pub fn book_ids<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<BookId>,
    {
        self.book_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = Some(dir.into());
        self
    }

    #[must_use]
    pub fn overwrite_existing(mut self, overwrite: bool) -> Self {
        self.overwrite_existing = overwrite;
        self
    }

    #[must_use]
    pub fn request_delay_ms(mut self, millis: u64) -> Self {
        self.request_delay_ms = Some(millis);
        self
    }

    #[must_use]
    pub fn max_concurrent_books(mut self, workers: usize) -> Self {
        self.max_concurrent_books = Some(workers);
        self
    }

    #[must_use]
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }
}

impl ExportConfigBuilder<()> {
    pub fn session_id(mut self, session_id: impl Into<String>) -> ExportConfigBuilder<WithSession> {
        self.session_id = Some(session_id.into());
        self.transition()
    }
}

impl ExportConfigBuilder<WithSession> {
    pub fn cookie(mut self, cookie: impl Into<String>) -> ExportConfigBuilder<Complete> {
        self.cookie = Some(cookie.into());
        self.transition()
    }
}

impl ExportConfigBuilder<Complete> {
    /// Build and validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if no book can be resolved or a limit is zero.
    pub fn build(self) -> Result<ExportConfig, ConfigError> {
        let config = ExportConfig {
            session_id: self.session_id.unwrap_or_default(),
            cookie: self.cookie.unwrap_or_default(),
            fetch_book_ids_online: self.fetch_book_ids_online,
            book_ids: self.book_ids,
            save_dir: self.save_dir.unwrap_or_else(default_save_dir),
            overwrite_existing: self.overwrite_existing,
            request_delay_ms: self.request_delay_ms,
            max_concurrent_books: self.max_concurrent_books,
            api_base_url: self.api_base_url,
            log_dir: self.log_dir,
        };
        config.validate()?;
        Ok(config)
    }
}
