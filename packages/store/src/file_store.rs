//! # Filesystem-backed roster store
//!
//! [`FileStore`] is a [`RosterStore`] implementation that persists the roster
//! document as TOML on the local filesystem. The server uses it so sign-ups
//! survive restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <collection>/
//!     └── <document_id>.toml     # [[users]] tables, one per entry
//! ```
//!
//! Appends are a read-modify-write of the whole file, serialised by a lock shared
//! between clones, and the new contents are written to a sibling temp file and
//! renamed into place.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::StoreError;
use crate::models::{DocumentRef, RosterDocument, UserEntry};
use crate::roster::RosterStore;

/// Filesystem-backed RosterStore.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
    doc_ref: DocumentRef,
    write_lock: Arc<Mutex<()>>,
}

impl FileStore {
    pub fn new(base: PathBuf, doc_ref: DocumentRef) -> Self {
        Self {
            base,
            doc_ref,
            write_lock: Arc::default(),
        }
    }

    /// Path of the roster document file.
    pub fn document_path(&self) -> PathBuf {
        self.base
            .join(&self.doc_ref.collection)
            .join(format!("{}.toml", self.doc_ref.id))
    }

    /// Create an empty roster document unless one exists. Returns `true` if created.
    pub fn create_if_missing(&self) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if self.read()?.is_some() {
            return Ok(false);
        }
        self.write(&RosterDocument::default())?;
        tracing::info!(path = %self.document_path().display(), "created empty roster document");
        Ok(true)
    }

    fn read(&self) -> Result<Option<RosterDocument>, StoreError> {
        match std::fs::read_to_string(self.document_path()) {
            Ok(content) => Ok(Some(toml::from_str(&content)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, doc: &RosterDocument) -> Result<(), StoreError> {
        let path = self.document_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp = temp_path(&path);
        std::fs::write(&tmp, toml::to_string_pretty(doc)?)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

impl RosterStore for FileStore {
    async fn fetch_roster(&self) -> Result<Option<RosterDocument>, StoreError> {
        self.read()
    }

    async fn append_entry(&self, entry: &UserEntry) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut doc = self
            .read()?
            .ok_or_else(|| StoreError::MissingDocument(self.doc_ref.path()))?;
        if doc.union_append(entry) {
            self.write(&doc)?;
        }
        Ok(())
    }
}
