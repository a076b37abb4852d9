pub mod asset_localizer;
pub mod config;
pub mod export_engine;
pub mod journal;
pub mod remote;
pub mod utils;

pub use asset_localizer::{AssetLocalizer, LocalizedDocument};
pub use config::{ConfigError, ExportConfig};
pub use export_engine::{
    BookOutcome, BookReport, ConsoleProgress, ExportError, NoOpProgress, ProgressReporter,
    RunSummary, SkipReason, export_all,
};
pub use journal::RunJournal;
pub use remote::{ApiError, BookId, BookInfo, BookInfoResult, BookletClient, SectionRef};

use std::sync::Arc;

/// Run a complete export with the console-less defaults
///
/// Opens the journal from `config.log_dir()`, builds the client from the
/// config and reports no progress.
pub async fn export(config: &ExportConfig) -> anyhow::Result<RunSummary> {
    let journal = Arc::new(RunJournal::open(config.log_dir())?);
    let client = BookletClient::from_config(config)?;
    export_all(config, client, journal, Arc::new(NoOpProgress)).await
}
