//! Append-only run journal
//!
//! Three line-oriented sinks survive a run: `error.log` (failures only),
//! `success.log` (finished and skipped books) and `all.log` (everything).
//! One `RunJournal` is opened at startup and shared as `Arc<RunJournal>` by
//! every worker. Each entry is rendered to a single line first and written
//! with one `write_all` under the sink's lock, so concurrent workers never
//! interleave partial lines. Every entry is mirrored to the `log` facade.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::Level;
use parking_lot::Mutex;

pub const ERROR_LOG_FILE: &str = "error.log";
pub const SUCCESS_LOG_FILE: &str = "success.log";
pub const ALL_LOG_FILE: &str = "all.log";

struct Sink {
    path: PathBuf,
    file: Mutex<File>,
}

impl Sink {
    fn open(path: PathBuf) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    fn append(&self, line: &str) {
        // Blocking write under the lock keeps each line a single atomic append
        let mut file = self.file.lock();
        if let Err(e) = file.write_all(line.as_bytes()) {
            log::warn!("Failed to append to {}: {e}", self.path.display());
        }
    }
}

/// Shared error / success / combined log files of one run
pub struct RunJournal {
    dir: PathBuf,
    error: Sink,
    success: Sink,
    all: Sink,
}

impl std::fmt::Debug for RunJournal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunJournal").field("dir", &self.dir).finish()
    }
}

impl RunJournal {
    /// Open (creating if needed) the three sinks inside `dir`
    pub fn open(dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            error: Sink::open(dir.join(ERROR_LOG_FILE))?,
            success: Sink::open(dir.join(SUCCESS_LOG_FILE))?,
            all: Sink::open(dir.join(ALL_LOG_FILE))?,
            dir,
        })
    }

    /// Directory holding the three log files
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Run-level information, combined stream only
    pub fn info(&self, message: &str) {
        log::info!("{message}");
        self.all.append(&render(Level::Info, message));
    }

    /// A book finished or was deliberately skipped
    pub fn success(&self, message: &str) {
        log::info!("{message}");
        let line = render(Level::Info, message);
        self.success.append(&line);
        self.all.append(&line);
    }

    /// A book, dispatch or asset failure
    pub fn failure(&self, message: &str) {
        log::error!("{message}");
        let line = render(Level::Error, message);
        self.error.append(&line);
        self.all.append(&line);
    }
}

/// One journal line: `{timestamp} - {LEVEL} - {message}\n`
fn render(level: Level, message: &str) -> String {
    let flat = message.replace(['\r', '\n'], " ");
    format!(
        "{} - {:>5} - {flat}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        level
    )
}
