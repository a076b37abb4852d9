//! Core types for export runs.
//!
//! Book workers never propagate errors across the pool boundary; each one
//! resolves to a tagged [`BookOutcome`] instead.

use std::path::PathBuf;

use crate::remote::{ApiError, BookId};

/// Anything that aborts a single book attempt
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Failed to {action} {path}: {source}")]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    pub(crate) fn fs(
        action: &'static str,
        path: impl Into<PathBuf>,
    ) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Filesystem {
            action,
            path,
            source,
        }
    }
}

/// Why a book produced no new output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The service knows the book but has nothing published
    NotYetAvailable { reason: Option<String> },
    /// The output directory is already there and overwrite is off
    AlreadyExists { dir: PathBuf },
}

/// Terminal state of one book
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookOutcome {
    Done {
        title: String,
        sections: usize,
        /// Images left pointing at their remote URL
        images_failed: usize,
    },
    Skipped(SkipReason),
    Failed { error: String },
}

impl BookOutcome {
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done { .. })
    }

    #[must_use]
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Outcome of one identifier of the run
#[derive(Debug, Clone)]
pub struct BookReport {
    pub id: BookId,
    pub outcome: BookOutcome,
}

/// Everything an export run did, reports in identifier order
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub reports: Vec<BookReport>,
    /// Path of the generated top-level index
    pub index_path: PathBuf,
}

impl RunSummary {
    #[must_use]
    pub fn done(&self) -> usize {
        self.reports.iter().filter(|r| r.outcome.is_done()).count()
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.reports.iter().filter(|r| r.outcome.is_skipped()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.reports.iter().filter(|r| r.outcome.is_failed()).count()
    }
}
