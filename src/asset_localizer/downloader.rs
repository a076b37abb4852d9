//! Image download straight to disk
//!
//! Streams the response body into the target file with a size cap checked
//! both against `Content-Length` and while reading. A partially written
//! file is removed when the download fails.

use std::path::Path;
use std::time::Duration;

use futures::StreamExt;
use reqwest::Client;
use tokio::io::AsyncWriteExt;

use super::types::AssetError;
use crate::utils::constants::{IMAGE_DOWNLOAD_TIMEOUT, MAX_IMAGE_SIZE_BYTES};

/// Timeouts and size limits for image downloads
#[derive(Debug, Clone)]
pub struct DownloadLimits {
    pub timeout: Duration,
    pub max_size: usize,
}

impl Default for DownloadLimits {
    fn default() -> Self {
        Self {
            timeout: IMAGE_DOWNLOAD_TIMEOUT,
            max_size: MAX_IMAGE_SIZE_BYTES,
        }
    }
}

/// Only absolute http(s) URLs are fetched
pub fn validate_image_url(url: &str) -> Result<(), AssetError> {
    match url::Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        _ => Err(AssetError::InvalidUrl(url.to_string())),
    }
}

/// Download `url` into `dest`, returning the number of bytes written
pub async fn download_to_file(
    client: &Client,
    url: &str,
    dest: &Path,
    limits: &DownloadLimits,
) -> Result<u64, AssetError> {
    validate_image_url(url)?;

    let response = client
        .get(url)
        .timeout(limits.timeout)
        .header("Accept", "image/avif,image/webp,image/apng,image/*,*/*;q=0.8")
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(AssetError::Status(response.status()));
    }

    // Enforce the limit before reading anything
    if response.content_length().unwrap_or(0) > limits.max_size as u64 {
        return Err(AssetError::TooLarge {
            limit: limits.max_size,
        });
    }

    let io_err = |source: std::io::Error| AssetError::Io {
        path: dest.to_path_buf(),
        source,
    };

    let mut file = tokio::fs::File::create(dest).await.map_err(io_err)?;
    let result = async {
        let mut stream = response.bytes_stream();
        let mut written: u64 = 0;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            written += chunk.len() as u64;
            if written > limits.max_size as u64 {
                return Err(AssetError::TooLarge {
                    limit: limits.max_size,
                });
            }
            file.write_all(&chunk).await.map_err(io_err)?;
        }
        file.flush().await.map_err(io_err)?;
        Ok::<u64, AssetError>(written)
    }
    .await;

    if result.is_err() {
        drop(file);
        if let Err(e) = tokio::fs::remove_file(dest).await {
            log::debug!("Could not remove partial image {}: {e}", dest.display());
        }
    }
    result
}
