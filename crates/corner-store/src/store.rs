//! # File Store
//!
//! Owns the catalog file on disk: whole-file loads and atomic rewrites.
//!
//! ## Durability Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                The Catalog File Is the Unit of Durability               │
//! │                                                                         │
//! │  load:  read the whole file ──► decode every line ──► Vec<Record>       │
//! │         (missing file = empty catalog, a fresh install)                 │
//! │                                                                         │
//! │  save:  encode every record ──► write temp file in the same dir         │
//! │                                      │                                  │
//! │                                      ▼                                  │
//! │                              rename over the original                   │
//! │                                                                         │
//! │  A crash mid-save leaves either the old file or the new file on disk,   │
//! │  never a torn half-written one. The rename is the commit point.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Concurrent writers from other processes are out of scope; within this
//! process the repository serializes all access (see `inventory`).

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use corner_core::ProductRecord;

use crate::error::{StoreError, StoreResult};
use crate::format;

/// Handle to the catalog file.
///
/// Cheap to clone; holds only the path. All reads and writes go through the
/// codec in [`format`], so anything this type writes it can read back.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store for the given catalog path. The file need not exist
    /// yet; it is created on the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    /// Returns the catalog path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Checks whether the catalog file exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads every record from the catalog file.
    ///
    /// ## Returns
    /// - `Ok(records)` in file order
    /// - `Ok(vec![])` if the file does not exist (fresh install)
    /// - `Err(StoreError::Parse)` on the first malformed line; nothing is
    ///   returned from a partially valid file
    pub fn load(&self) -> StoreResult<Vec<ProductRecord>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No catalog file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::Storage(e)),
        };

        let records = format::deserialize_products(&text)?;
        debug!(path = %self.path.display(), count = records.len(), "Loaded catalog");
        Ok(records)
    }

    /// Rewrites the catalog file with the given records.
    pub fn save(&self, records: &[ProductRecord]) -> StoreResult<()> {
        self.save_as(records, &self.path)
    }

    /// Writes the records to an arbitrary path (export / save-a-copy).
    ///
    /// The write is atomic: content goes to a temp file in the target
    /// directory first, then a rename swaps it into place.
    pub fn save_as(&self, records: &[ProductRecord], path: &Path) -> StoreResult<()> {
        let text = format::serialize_products(records)?;

        // Temp file must live on the same filesystem for the rename to be atomic
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(text.as_bytes())?;
        tmp.flush()?;
        tmp.persist(path).map_err(|e| StoreError::Storage(e.error))?;

        debug!(path = %path.display(), count = records.len(), "Saved catalog");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
