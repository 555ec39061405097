// ============================================================
// Layer 6 — Trace Log
// ============================================================
// The session trace file named on the command line.
//
// Lifecycle:
//   TraceLog::create(path)  → create or truncate the file
//   record(...)             → one line per message, in order
//   close()                 → flush and drop the handle
//
// The file is written sequentially by a single thread, so a
// RefCell around a buffered writer is all the sharing needed.
// Each message is also mirrored to `tracing` at debug level.
//
// Example log:
//   Where is The Liberty Bell?
//   User asked a 'where' question.
//   Search results of: 'The Liberty Bell'
//   Liberty Bell
//   Searching documents for '(The Liberty Bell|it)\s(.+\s)?(is|was)...'...
//   Found match: The Liberty Bell is located in ...
//
// Reference: Rust Book §9 (Error Handling)
//            std::io::BufWriter

use anyhow::{Context, Result};
use std::{
    cell::RefCell,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::domain::traits::LogSink;

/// Append-only, line-oriented trace file.
pub struct TraceLog {
    /// Where the trace goes, for the startup message
    path:   PathBuf,

    /// LogSink::record takes &self, so the writer sits in a RefCell.
    /// Buffered; flushed by close()
    writer: RefCell<BufWriter<File>>,
}

impl TraceLog {
    /// Create (or overwrite) the log file.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)
            .with_context(|| format!("Cannot create log file '{}'", path.display()))?;

        tracing::info!("Writing trace log to '{}'", path.display());
        Ok(Self {
            path,
            writer: RefCell::new(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush buffered lines and release the file.
    pub fn close(self) -> Result<()> {
        self.writer
            .into_inner()
            .flush()
            .with_context(|| format!("Cannot flush log file '{}'", self.path.display()))
    }
}

impl LogSink for TraceLog {
    fn record(&self, message: &str) {
        tracing::debug!(target: "wiki_qa::trace", "{message}");

        let mut writer = self.writer.borrow_mut();
        if let Err(e) = writeln!(writer, "{message}") {
            tracing::warn!("Cannot write to '{}': {}", self.path.display(), e);
        }
    }
}

/// In-memory sink for tests.
#[cfg(test)]
pub struct MemoryTrace {
    lines: RefCell<Vec<String>>,
}

#[cfg(test)]
impl MemoryTrace {
    pub fn new() -> Self {
        Self { lines: RefCell::new(Vec::new()) }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// True when any recorded line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.borrow().iter().any(|l| l.contains(needle))
    }
}

#[cfg(test)]
impl LogSink for MemoryTrace {
    fn record(&self, message: &str) {
        self.lines.borrow_mut().push(message.to_string());
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_writes_one_line_per_record() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("qa.log");

        let log = TraceLog::create(&path).unwrap();
        log.record("Where is The Liberty Bell?");
        log.record("Answering question with:\nThe Liberty Bell is located in Philadelphia.");
        log.close().unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "Where is The Liberty Bell?\nAnswering question with:\nThe Liberty Bell is located in Philadelphia.\n"
        );
    }

    #[test]
    fn test_create_truncates_existing_file() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("qa.log");
        fs::write(&path, "old session\n").unwrap();

        let log = TraceLog::create(&path).unwrap();
        log.record("new session");
        log.close().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new session\n");
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(TraceLog::create(dir.path().join("nope").join("qa.log")).is_err());
    }
}
