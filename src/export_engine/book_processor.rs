//! Single book processing logic
//!
//! Handles the complete lifecycle of exporting one book:
//! - Metadata lookup (not-yet-available books are skipped)
//! - Skip-if-exists check on the book directory
//! - Sequential section fetch, image localization and write
//! - Per-book index generation
//!
//! Errors never leave this module: every path ends in a [`BookOutcome`]
//! that has already been journaled.

use std::path::PathBuf;
use std::sync::Arc;

use super::export_types::{BookOutcome, ExportError, SkipReason};
use super::index_writer::{book_dir_name, write_book_index};
use super::progress::ProgressReporter;
use crate::asset_localizer::AssetLocalizer;
use crate::journal::RunJournal;
use crate::remote::{BookId, BookInfoResult, BookletClient};
use crate::utils::{ASSET_DIR_NAME, sanitize_component, section_file_name};

/// Shared, read-only state for every book worker of a run
pub struct BookContext<P: ProgressReporter> {
    pub client: BookletClient,
    pub localizer: AssetLocalizer,
    pub journal: Arc<RunJournal>,
    pub progress: Arc<P>,
    pub save_dir: PathBuf,
    pub overwrite_existing: bool,
}

/// Export one book and journal its terminal state
pub async fn process_book<P: ProgressReporter>(id: &BookId, ctx: &BookContext<P>) -> BookOutcome {
    match export_book(id, ctx).await {
        Ok(outcome) => outcome,
        Err(e) => {
            ctx.journal
                .failure(&format!("Failed to process book \"{id}\": {e}"));
            BookOutcome::Failed {
                error: e.to_string(),
            }
        }
    }
}

async fn export_book<P: ProgressReporter>(
    id: &BookId,
    ctx: &BookContext<P>,
) -> Result<BookOutcome, ExportError> {
    let info = match ctx.client.get_book_info(id).await? {
        BookInfoResult::Available(info) => info,
        BookInfoResult::NotYetAvailable { reason } => {
            ctx.journal
                .success(&format!("Book \"{id}\" is not yet available, skipping"));
            return Ok(BookOutcome::Skipped(SkipReason::NotYetAvailable { reason }));
        }
    };

    let dir_name = book_dir_name(&info.title, id);
    let book_dir = ctx.save_dir.join(&dir_name);

    let exists = tokio::fs::try_exists(&book_dir)
        .await
        .map_err(ExportError::fs("inspect", &book_dir))?;
    if exists && !ctx.overwrite_existing {
        ctx.journal
            .success(&format!("Book \"{dir_name}\" already exists, skipping"));
        return Ok(BookOutcome::Skipped(SkipReason::AlreadyExists { dir: book_dir }));
    }

    tokio::fs::create_dir_all(&book_dir)
        .await
        .map_err(ExportError::fs("create", &book_dir))?;

    ctx.progress
        .report_book_started(id, &dir_name, info.sections.len());

    let mut images_failed = 0;
    for (offset, section) in info.sections.iter().enumerate() {
        let asset_key = sanitize_component(section.asset_key());
        let relative_asset_dir = format!("{ASSET_DIR_NAME}/{asset_key}");
        let asset_dir = book_dir.join(ASSET_DIR_NAME).join(&asset_key);
        tokio::fs::create_dir_all(&asset_dir)
            .await
            .map_err(ExportError::fs("create", &asset_dir))?;

        let body = ctx.client.get_section_body(&section.section_id).await?;
        let localized = ctx
            .localizer
            .localize(&body, &asset_dir, &relative_asset_dir)
            .await;
        images_failed += localized.failures.len();

        let section_path = book_dir.join(section_file_name(offset + 1, &section.title));
        tokio::fs::write(&section_path, localized.text)
            .await
            .map_err(ExportError::fs("write", &section_path))?;

        log::debug!(
            "Wrote {} ({} of {} images localized)",
            section_path.display(),
            localized.localized,
            localized.localized + localized.failures.len()
        );
        ctx.progress.report_section_written(id);
    }

    write_book_index(&book_dir, &info.sections).await?;

    ctx.journal.success(&format!(
        "Book \"{dir_name}\" exported ({} sections)",
        info.sections.len()
    ));

    Ok(BookOutcome::Done {
        title: dir_name,
        sections: info.sections.len(),
        images_failed,
    })
}
