//! Export Engine Module
//!
//! The concurrent fetch-and-materialize pipeline: the orchestrator fans
//! books out to a bounded worker pool, each worker runs one book through
//! the book processor, and the indexes are generated from the results.

// Sub-modules
pub mod book_processor;
pub mod export_types;
pub mod index_writer;
pub mod orchestrator;
pub mod progress;

// Re-exports for public API
pub use book_processor::{BookContext, process_book};
pub use export_types::{BookOutcome, BookReport, ExportError, RunSummary, SkipReason};
pub use index_writer::{IndexEntry, book_dir_name, render_book_index, render_run_index};
pub use orchestrator::export_all;
pub use progress::{ConsoleProgress, NoOpProgress, ProgressReporter};
