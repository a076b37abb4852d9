//! Document-level image localization
//!
//! Images are fetched one after another in document order. A failed image
//! is journaled and left pointing at its remote URL; the document itself is
//! always returned.

use std::path::Path;
use std::sync::Arc;

use reqwest::Client;

use super::downloader::{DownloadLimits, download_to_file};
use super::naming::asset_file_name;
use super::rewriter::{Replacement, apply_replacements};
use super::scanner::find_image_refs;
use super::types::{AssetFailure, LocalizedDocument};
use crate::journal::RunJournal;

/// Downloads embedded images next to a section and rewrites their links
#[derive(Clone)]
pub struct AssetLocalizer {
    http: Client,
    limits: DownloadLimits,
    journal: Arc<RunJournal>,
}

impl AssetLocalizer {
    #[must_use]
    pub fn new(http: Client, journal: Arc<RunJournal>) -> Self {
        Self {
            http,
            limits: DownloadLimits::default(),
            journal,
        }
    }

    #[must_use]
    pub fn with_limits(mut self, limits: DownloadLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Localize every `![alt](url)` in `document`.
    ///
    /// # Arguments
    /// * `asset_dir` - Existing directory the images are written to
    /// * `relative_asset_dir` - The same directory as seen from the document,
    ///   e.g. `img/42`
    pub async fn localize(
        &self,
        document: &str,
        asset_dir: &Path,
        relative_asset_dir: &str,
    ) -> LocalizedDocument {
        let refs = find_image_refs(document);
        let mut replacements = Vec::with_capacity(refs.len());
        let mut failures = Vec::new();

        for (offset, image) in refs.into_iter().enumerate() {
            let index = offset + 1;
            let url = image.fetch_url();
            let file_name = asset_file_name(index, &url);
            let dest = asset_dir.join(&file_name);

            match download_to_file(&self.http, &url, &dest, &self.limits).await {
                Ok(bytes) => {
                    log::debug!("Saved image #{index} ({bytes} bytes) to {}", dest.display());
                    replacements.push(Replacement {
                        span: image.url_span,
                        local: format!("{relative_asset_dir}/{file_name}"),
                    });
                }
                Err(error) => {
                    let failure = AssetFailure {
                        url,
                        index,
                        target_dir: asset_dir.to_path_buf(),
                        error,
                    };
                    self.journal.failure(&failure.to_string());
                    failures.push(failure);
                }
            }
        }

        LocalizedDocument {
            text: apply_replacements(document, &replacements),
            localized: replacements.len(),
            failures,
        }
    }
}
