//! Generated `README.md` indexes
//!
//! Both indexes are plain HTML anchors under a `# Contents` heading. Link
//! targets are the exact on-disk names, so a title is sanitized the same
//! way here as when its directory or file was created.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use super::export_types::ExportError;
use crate::remote::{BookId, SectionRef};
use crate::utils::{INDEX_FILE_NAME, sanitize_component, section_file_name};

const INDEX_HEADING: &str = "# Contents\n\n";

/// One line of the top-level index
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexEntry {
    /// Link to `{dir_name}/README.md`
    Book { dir_name: String },
    /// The book has no content upstream (or could not be queried)
    Placeholder,
}

/// Directory name of a book: its sanitized title.
///
/// A title that sanitizes to nothing usable (empty, or only dots) falls
/// back to the book identifier so the directory stays inside `save_dir`.
#[must_use]
pub fn book_dir_name(title: &str, id: &BookId) -> String {
    let clean = sanitize_component(title);
    if clean.trim().is_empty() || clean.chars().all(|c| c == '.') {
        sanitize_component(id.as_str())
    } else {
        clean
    }
}

/// Per-book index: one link per section, in remote order
#[must_use]
pub fn render_book_index(sections: &[SectionRef]) -> String {
    let mut out = String::from(INDEX_HEADING);
    for (offset, section) in sections.iter().enumerate() {
        let title = sanitize_component(&section.title);
        let file = section_file_name(offset + 1, &section.title);
        let _ = writeln!(out, "<a href=\"{file}\">{title}</a>");
    }
    out
}

/// Top-level index, one line per identifier in run order
#[must_use]
pub fn render_run_index(entries: &[IndexEntry]) -> String {
    let mut out = String::from(INDEX_HEADING);
    for (offset, entry) in entries.iter().enumerate() {
        match entry {
            IndexEntry::Book { dir_name } => {
                let _ = writeln!(out, "<a href=\"{dir_name}/{INDEX_FILE_NAME}\">{dir_name}</a>");
            }
            IndexEntry::Placeholder => {
                let _ = writeln!(
                    out,
                    "<a href=\"#\" style=\"color: red;\">Book \"{}\" is not yet available</a>",
                    offset + 1
                );
            }
        }
    }
    out
}

/// Write `book_dir/README.md`
pub async fn write_book_index(book_dir: &Path, sections: &[SectionRef]) -> Result<PathBuf, ExportError> {
    let path = book_dir.join(INDEX_FILE_NAME);
    tokio::fs::write(&path, render_book_index(sections))
        .await
        .map_err(ExportError::fs("write", &path))?;
    Ok(path)
}

/// Write `save_dir/README.md`
pub async fn write_run_index(save_dir: &Path, entries: &[IndexEntry]) -> Result<PathBuf, ExportError> {
    let path = save_dir.join(INDEX_FILE_NAME);
    tokio::fs::write(&path, render_run_index(entries))
        .await
        .map_err(ExportError::fs("write", &path))?;
    Ok(path)
}
