//! Progress reporting abstraction for export runs
//!
//! Defines the `ProgressReporter` trait for lifecycle event reporting, a
//! no-op implementation for tests and library use, and a console
//! implementation drawing `indicatif` bars.

use std::collections::HashMap;
use std::time::Duration;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use parking_lot::Mutex;

use super::export_types::BookOutcome;
use crate::remote::BookId;

/// Trait for reporting export progress at key lifecycle events
///
/// Called concurrently from every book worker.
pub trait ProgressReporter: Send + Sync {
    /// The working set of books is known
    fn report_run_started(&self, total_books: usize);

    /// A book passed its checks and its sections are about to be fetched
    fn report_book_started(&self, id: &BookId, title: &str, sections: usize);

    /// One section of a book has been written
    fn report_section_written(&self, id: &BookId);

    /// A book reached a terminal state
    fn report_book_finished(&self, id: &BookId, outcome: &BookOutcome);

    /// All books are done and the top-level index is written
    fn report_run_finished(&self);
}

/// Progress reporter that does nothing
#[derive(Debug, Clone, Copy)]
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    #[inline(always)]
    fn report_run_started(&self, _total_books: usize) {}

    #[inline(always)]
    fn report_book_started(&self, _id: &BookId, _title: &str, _sections: usize) {}

    #[inline(always)]
    fn report_section_written(&self, _id: &BookId) {}

    #[inline(always)]
    fn report_book_finished(&self, _id: &BookId, _outcome: &BookOutcome) {}

    #[inline(always)]
    fn report_run_finished(&self) {}
}

/// Terminal progress bars: one over books, one per active book over sections
pub struct ConsoleProgress {
    multi: MultiProgress,
    books: ProgressBar,
    sections: Mutex<HashMap<BookId, ProgressBar>>,
}

impl ConsoleProgress {
    #[must_use]
    pub fn new() -> Self {
        let multi = MultiProgress::new();
        let books = multi.add(ProgressBar::new(0));
        books.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.blue} Processing books [{bar:40.blue/white}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        books.enable_steady_tick(Duration::from_millis(200));

        Self {
            multi,
            books,
            sections: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for ConsoleProgress {
    fn report_run_started(&self, total_books: usize) {
        self.books.set_length(total_books as u64);
    }

    fn report_book_started(&self, id: &BookId, title: &str, sections: usize) {
        let bar = self.multi.add(ProgressBar::new(sections as u64));
        bar.set_style(
            ProgressStyle::default_bar()
                .template("  {msg} [{bar:30.green/white}] {pos}/{len} sections")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        bar.set_message(title.to_string());
        self.sections.lock().insert(id.clone(), bar);
    }

    fn report_section_written(&self, id: &BookId) {
        if let Some(bar) = self.sections.lock().get(id) {
            bar.inc(1);
        }
    }

    fn report_book_finished(&self, id: &BookId, outcome: &BookOutcome) {
        if let Some(bar) = self.sections.lock().remove(id) {
            bar.finish_and_clear();
            self.multi.remove(&bar);
        }
        if outcome.is_failed() {
            self.books.set_message(format!("(last failure: {id})"));
        }
        self.books.inc(1);
    }

    fn report_run_finished(&self) {
        self.books.finish();
    }
}
