//! Image localization for section documents
//!
//! Remote images embedded as `![alt](url)` are downloaded into the
//! section's asset directory and the document is rewritten to point at the
//! local copies. Scanning and rewriting are pure functions; only
//! [`AssetLocalizer`] touches the network and the filesystem.

// Sub-modules
pub mod downloader;
pub mod localizer;
pub mod naming;
pub mod rewriter;
pub mod scanner;
pub mod types;

// Re-exports for public API
pub use downloader::DownloadLimits;
pub use localizer::AssetLocalizer;
pub use naming::asset_file_name;
pub use rewriter::{Replacement, apply_replacements};
pub use scanner::{ImageRef, find_image_refs};
pub use types::{AssetError, AssetFailure, LocalizedDocument};
