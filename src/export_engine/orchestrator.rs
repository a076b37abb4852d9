//! Main export orchestration logic
//!
//! Coordinates a whole run:
//! - Working set resolution (configured or discovered identifiers)
//! - Bounded concurrent book workers with per-book failure isolation
//! - Top-level index generation once every worker is done

use std::sync::Arc;

use anyhow::{Context, Result};
use futures::StreamExt;
use futures::stream::FuturesUnordered;
use log::{debug, warn};
use tokio::sync::Semaphore;

use super::book_processor::{BookContext, process_book};
use super::export_types::{BookOutcome, BookReport, RunSummary};
use super::index_writer::{IndexEntry, book_dir_name, write_run_index};
use super::progress::ProgressReporter;
use crate::asset_localizer::AssetLocalizer;
use crate::config::ExportConfig;
use crate::journal::RunJournal;
use crate::remote::{BookId, BookInfoResult, BookletClient};

/// Export every book of the run and write the top-level index
///
/// # Arguments
/// * `config` - Run configuration
/// * `client` - Remote API client (its request delay applies per call)
/// * `journal` - Shared error / success / combined log sinks
/// * `progress` - Progress reporter (`NoOpProgress` or `ConsoleProgress`)
///
/// # Errors
///
/// Only run-level problems are errors: the output root cannot be created,
/// remote discovery fails, or the top-level index cannot be written.
/// Book failures are reported in the returned [`RunSummary`].
pub async fn export_all<P: ProgressReporter + 'static>(
    config: &ExportConfig,
    client: BookletClient,
    journal: Arc<RunJournal>,
    progress: Arc<P>,
) -> Result<RunSummary> {
    tokio::fs::create_dir_all(config.save_dir())
        .await
        .with_context(|| format!("Failed to create {}", config.save_dir().display()))?;

    let book_ids = resolve_book_ids(config, &client, &journal).await?;
    journal.info(&format!(
        "Exporting {} books to {} ({} workers, {}ms request delay, overwrite: {}, logs in {})",
        book_ids.len(),
        config.save_dir().display(),
        config.max_concurrent_books(),
        client.request_delay().as_millis(),
        config.overwrite_existing(),
        journal.dir().display()
    ));
    progress.report_run_started(book_ids.len());

    let ctx = Arc::new(BookContext {
        localizer: AssetLocalizer::new(client.http().clone(), Arc::clone(&journal)),
        client: client.clone(),
        journal: Arc::clone(&journal),
        progress: Arc::clone(&progress),
        save_dir: config.save_dir().to_path_buf(),
        overwrite_existing: config.overwrite_existing(),
    });

    let semaphore = Arc::new(Semaphore::new(config.max_concurrent_books()));
    let mut active_tasks = FuturesUnordered::new();

    for (position, id) in book_ids.iter().enumerate() {
        let ctx = Arc::clone(&ctx);
        let semaphore = Arc::clone(&semaphore);
        let task_id = id.clone();

        let handle = tokio::spawn(async move {
            // The semaphore is never closed
            let _permit = semaphore.acquire_owned().await.ok();
            process_book(&task_id, &ctx).await
        });

        let id = id.clone();
        active_tasks.push(async move { (position, id, handle.await) });
    }

    let mut outcomes: Vec<Option<BookOutcome>> = vec![None; book_ids.len()];
    while let Some((position, id, joined)) = active_tasks.next().await {
        let outcome = match joined {
            Ok(outcome) => outcome,
            Err(e) => {
                journal.failure(&format!("Worker for book \"{id}\" aborted: {e}"));
                BookOutcome::Failed {
                    error: e.to_string(),
                }
            }
        };
        debug!("Book {id} finished: {outcome:?}");
        progress.report_book_finished(&id, &outcome);
        outcomes[position] = Some(outcome);
    }

    let entries = collect_index_entries(&client, &book_ids).await;
    let index_path = write_run_index(config.save_dir(), &entries)
        .await
        .context("Failed to write top-level index")?;

    progress.report_run_finished();

    let reports: Vec<BookReport> = book_ids
        .into_iter()
        .zip(outcomes)
        .map(|(id, outcome)| BookReport {
            id,
            outcome: outcome.unwrap_or(BookOutcome::Failed {
                error: "worker never reported".to_string(),
            }),
        })
        .collect();

    let summary = RunSummary {
        reports,
        index_path,
    };
    journal.info(&format!(
        "Run finished: {} exported, {} skipped, {} failed",
        summary.done(),
        summary.skipped(),
        summary.failed()
    ));

    Ok(summary)
}

/// Configured identifiers, or the remote shelf when discovery is enabled
async fn resolve_book_ids(
    config: &ExportConfig,
    client: &BookletClient,
    journal: &RunJournal,
) -> Result<Vec<BookId>> {
    if !config.fetch_book_ids_online() {
        return Ok(config.book_ids().to_vec());
    }

    let ids = client
        .list_books()
        .await
        .context("Failed to discover books remotely")?;
    journal.info(&format!("Discovered {} books on the remote shelf", ids.len()));
    Ok(ids)
}

/// Re-query every book so the index reflects its final upstream state
async fn collect_index_entries(client: &BookletClient, book_ids: &[BookId]) -> Vec<IndexEntry> {
    let mut entries = Vec::with_capacity(book_ids.len());
    for id in book_ids {
        let entry = match client.get_book_info(id).await {
            Ok(BookInfoResult::Available(info)) => IndexEntry::Book {
                dir_name: book_dir_name(&info.title, id),
            },
            Ok(BookInfoResult::NotYetAvailable { .. }) => IndexEntry::Placeholder,
            Err(e) => {
                warn!("Index lookup for book \"{id}\" failed, writing placeholder: {e}");
                IndexEntry::Placeholder
            }
        };
        entries.push(entry);
    }
    entries
}
