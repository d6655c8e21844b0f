//! Durable key-value slot backing the identifier registry.
//!
//! The registry persists its committed identifiers in a single named slot
//! that survives process restarts. The slot is read wholesale on first
//! access and rewritten wholesale on every mutation; there is no
//! incremental append.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::{Result, RosterError};

/// A single named slot in durable key-value storage
///
/// Implementations are free to map the slot onto a file, a browser storage
/// key behind a bridge, or a real database row. The registry treats the
/// payload as opaque text.
pub trait SlotStore: std::fmt::Debug {
    /// Read the whole slot
    ///
    /// # Returns
    /// The payload, or `None` if the slot has never been written
    ///
    /// # Errors
    /// Returns an error if the underlying storage is unreadable
    fn read(&self) -> Result<Option<String>>;

    /// Rewrite the whole slot
    ///
    /// # Errors
    /// Returns an error if the underlying storage is unwritable
    fn write(&self, payload: &str) -> Result<()>;

    /// Remove the slot entirely, so a subsequent read returns `None`
    ///
    /// # Errors
    /// Returns an error if the underlying storage refuses the removal
    fn clear(&self) -> Result<()>;
}

/// File-backed slot store
///
/// Writes go through a sibling temp file followed by a rename, so a crash
/// mid-write never leaves a torn payload behind.
#[derive(Debug)]
pub struct FileSlotStore {
    path: PathBuf,
}

impl FileSlotStore {
    /// Create a store backed by the given file path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file path this store reads and writes
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SlotStore for FileSlotStore {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(RosterError::store_error_with_source(
                format!("Failed to read slot file {}", self.path.display()),
                e,
            )),
        }
    }

    fn write(&self, payload: &str) -> Result<()> {
        let tmp_path = self.path.with_extension("tmp");

        let mut tmp = fs::File::create(&tmp_path).map_err(|e| {
            RosterError::store_error_with_source(
                format!("Failed to create temp slot file {}", tmp_path.display()),
                e,
            )
        })?;
        tmp.write_all(payload.as_bytes()).map_err(|e| {
            RosterError::store_error_with_source(
                format!("Failed to write temp slot file {}", tmp_path.display()),
                e,
            )
        })?;
        tmp.sync_all().map_err(|e| {
            RosterError::store_error_with_source(
                format!("Failed to flush temp slot file {}", tmp_path.display()),
                e,
            )
        })?;
        drop(tmp);

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            RosterError::store_error_with_source(
                format!("Failed to move slot file into place at {}", self.path.display()),
                e,
            )
        })
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(RosterError::store_error_with_source(
                format!("Failed to remove slot file {}", self.path.display()),
                e,
            )),
        }
    }
}

/// In-memory slot store
///
/// For tests and for callers that have no durable storage available. Data
/// does not survive the process.
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slot: Mutex<Option<String>>,
}

impl MemorySlotStore {
    /// Create an empty in-memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a payload
    #[must_use]
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(payload.into())),
        }
    }
}

impl SlotStore for MemorySlotStore {
    fn read(&self) -> Result<Option<String>> {
        let slot = self
            .slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(slot.clone())
    }

    fn write(&self, payload: &str) -> Result<()> {
        let mut slot = self
            .slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *slot = Some(payload.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut slot = self
            .slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *slot = None;
        Ok(())
    }
}
