//! # Long-Term-Memory Journal
//!
//! Append-only, newline-delimited hand-off file between working memory and
//! the long-term-memory consumer.
//!
//! - `append` is the durable primitive: one record, one line, synced before return.
//! - `append_entry` writes a `JournalEntry` as a single JSON line.
//! - `JournalReader` is the consumer side: it tails the file by byte offset.
//!
//! The file is opened and closed on every call. No handle is held across
//! calls and no cross-process locking is added; concurrent appenders rely on
//! the platform's append-mode semantics for whole-line writes.

use crate::{CapaError, Metadata};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

// =============================================================================
// WRITER
// =============================================================================

/// Append `record` plus a line terminator to the file at `path`.
///
/// The file is created if missing. Data is flushed and synced to stable
/// storage before this returns. No retry is attempted on failure.
pub fn append(path: impl AsRef<Path>, record: &str) -> Result<(), CapaError> {
    let path = path.as_ref();
    let io_err = |action: &str, e: std::io::Error| {
        CapaError::IoError(format!("Cannot {} journal '{}': {}", action, path.display(), e))
    };

    let mut line = Vec::with_capacity(record.len().saturating_add(1));
    line.extend_from_slice(record.as_bytes());
    line.push(b'\n');

    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| io_err("open", e))?;

    file.write_all(&line).map_err(|e| io_err("write", e))?;
    file.flush().map_err(|e| io_err("flush", e))?;
    file.sync_data().map_err(|e| io_err("sync", e))?;

    tracing::debug!(path = %path.display(), bytes = line.len(), "journal record appended");
    Ok(())
}

/// One event handed to long-term memory.
///
/// Serialized as `{"text": ..., "metadata": {...}}` on a single line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub text: String,
    pub metadata: Metadata,
}

impl JournalEntry {
    /// Create an entry with empty metadata.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metadata: Metadata::new(),
        }
    }

    /// Create an entry with metadata.
    #[must_use]
    pub fn with_metadata(text: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            text: text.into(),
            metadata,
        }
    }

    /// Render this entry as one JSON line (without terminator).
    pub fn to_record(&self) -> Result<String, CapaError> {
        serde_json::to_string(self).map_err(|e| CapaError::SerializationError(e.to_string()))
    }
}

/// Serialize `entry` to JSON and append it to the journal.
pub fn append_entry(path: impl AsRef<Path>, entry: &JournalEntry) -> Result<(), CapaError> {
    append(path, &entry.to_record()?)
}

// =============================================================================
// READER
// =============================================================================

/// Offset-tracking tail reader for a journal file.
///
/// Only complete lines are consumed; a partially written last line is left
/// for the next call.
#[derive(Debug, Clone)]
pub struct JournalReader {
    path: PathBuf,
    offset: u64,
}

impl JournalReader {
    /// Create a reader positioned at the start of the journal.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            offset: 0,
        }
    }

    /// Byte offset of the next unread line.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Path of the journal being read.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every complete entry appended since the previous call.
    ///
    /// A missing file yields no entries. Blank lines are skipped. Lines that
    /// are not valid entries are logged and skipped. If the file shrank
    /// below the stored offset it is read again from the start.
    pub fn read_new(&mut self) -> Result<Vec<JournalEntry>, CapaError> {
        let path = self.path.clone();
        let io_err = |e: std::io::Error| {
            CapaError::IoError(format!("Cannot read journal '{}': {}", path.display(), e))
        };

        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_err(e)),
        };

        let len = file.metadata().map_err(io_err)?.len();
        if len < self.offset {
            tracing::warn!(
                path = %path.display(),
                offset = self.offset,
                len,
                "journal shrank, rereading from start"
            );
            self.offset = 0;
        }

        file.seek(SeekFrom::Start(self.offset)).map_err(io_err)?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf).map_err(io_err)?;

        let Some(last_newline) = buf.iter().rposition(|&b| b == b'\n') else {
            return Ok(Vec::new());
        };
        let complete = &buf[..=last_newline];

        let mut entries = Vec::new();
        for raw in complete.split(|&b| b == b'\n') {
            let line = match std::str::from_utf8(raw) {
                Ok(line) => line.trim(),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping non-UTF-8 journal line");
                    continue;
                }
            };
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<JournalEntry>(line) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    tracing::warn!(error = %e, line, "skipping invalid journal line");
                }
            }
        }

        self.offset = self.offset.saturating_add(complete.len() as u64);
        Ok(entries)
    }
}

// =============================================================================
// TESTS
// =============================================================================
