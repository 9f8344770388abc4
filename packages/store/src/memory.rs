use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::StoreError;
use crate::models::{DocumentRef, RosterDocument, UserEntry};
use crate::roster::RosterStore;

/// In-memory RosterStore for testing and single-process use.
///
/// Clones share the same documents, so a clone handed to the form sees appends
/// made through any other clone.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    doc_ref: DocumentRef,
    documents: Arc<Mutex<HashMap<String, RosterDocument>>>,
}

impl MemoryStore {
    /// Empty store: the roster document does not exist yet.
    pub fn new(doc_ref: DocumentRef) -> Self {
        Self {
            doc_ref,
            documents: Arc::default(),
        }
    }

    /// Store whose roster document already holds `users`.
    pub fn with_users(doc_ref: DocumentRef, users: Vec<UserEntry>) -> Self {
        let store = Self::new(doc_ref);
        store
            .lock()
            .insert(store.doc_ref.path(), RosterDocument { users });
        store
    }

    pub fn doc_ref(&self) -> &DocumentRef {
        &self.doc_ref
    }

    /// Create an empty roster document unless one exists. Returns `true` if created.
    pub fn create_if_missing(&self) -> bool {
        let mut documents = self.lock();
        if documents.contains_key(&self.doc_ref.path()) {
            return false;
        }
        documents.insert(self.doc_ref.path(), RosterDocument::default());
        true
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, RosterDocument>> {
        self.documents.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RosterStore for MemoryStore {
    async fn fetch_roster(&self) -> Result<Option<RosterDocument>, StoreError> {
        Ok(self.lock().get(&self.doc_ref.path()).cloned())
    }

    async fn append_entry(&self, entry: &UserEntry) -> Result<(), StoreError> {
        let mut documents = self.lock();
        let doc = documents
            .get_mut(&self.doc_ref.path())
            .ok_or_else(|| StoreError::MissingDocument(self.doc_ref.path()))?;
        doc.union_append(entry);
        Ok(())
    }
}
