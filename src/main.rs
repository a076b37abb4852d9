//! booklet-export - mirror online booklets into local Markdown trees

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use booklet_export::{
    BookletClient, ConsoleProgress, ExportConfig, NoOpProgress, RunJournal, RunSummary,
    export_all,
};

#[derive(Parser)]
#[command(name = "booklet-export")]
#[command(version, about = "Export booklets to Markdown with local images", long_about = None)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config.yml")]
    config: PathBuf,

    /// Re-export books whose directory already exists
    #[arg(long)]
    overwrite: bool,

    /// Ignore `book_ids` and export every book on the remote shelf
    #[arg(long)]
    discover: bool,

    /// Hide progress bars
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<RunSummary> {
    let mut config = ExportConfig::load(&cli.config)
        .await
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    if cli.overwrite {
        config = config.with_overwrite();
    }
    if cli.discover {
        config = config.with_remote_discovery();
    }

    let journal = Arc::new(
        RunJournal::open(config.log_dir())
            .with_context(|| format!("Failed to open journal in {}", config.log_dir().display()))?,
    );
    let client = BookletClient::from_config(&config).context("Failed to create API client")?;

    if cli.quiet {
        export_all(&config, client, journal, Arc::new(NoOpProgress)).await
    } else {
        export_all(&config, client, journal, Arc::new(ConsoleProgress::new())).await
    }
}

fn print_summary(summary: &RunSummary) {
    println!(
        "Exported {}, skipped {}, failed {} (index: {})",
        summary.done(),
        summary.skipped(),
        summary.failed(),
        summary.index_path.display()
    );
    for report in summary.reports.iter().filter(|r| r.outcome.is_failed()) {
        println!("  failed: {}", report.id);
    }
}
