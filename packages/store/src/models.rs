//! # Domain models for the sign-up roster
//!
//! The roster is a single stored document holding every accepted sign-up. These
//! types are `Serialize + Deserialize` so they can cross the server/client
//! boundary via Dioxus server functions and be persisted by [`crate::FileStore`].
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserEntry`] | One accepted sign-up: upper-case initials and an email address. |
//! | [`RosterDocument`] | The stored record. Its only field, `users`, is append-only from this system's side. |
//! | [`DocumentRef`] | The `(collection, id)` pair that locates the roster in a store. |

use serde::{Deserialize, Serialize};

/// One accepted sign-up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntry {
    /// Two or three upper-case characters, e.g. "ARV"
    pub initials: String,
    pub email: String,
}

impl UserEntry {
    pub fn new(initials: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            initials: initials.into(),
            email: email.into(),
        }
    }
}

/// The roster document: an ordered list of sign-ups.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterDocument {
    #[serde(default)]
    pub users: Vec<UserEntry>,
}

impl RosterDocument {
    /// Number of entries currently on the roster.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Array-union append: pushes `entry` unless an identical entry is already present.
    ///
    /// Returns `true` when the roster grew.
    pub fn union_append(&mut self, entry: &UserEntry) -> bool {
        if self.users.contains(entry) {
            return false;
        }
        self.users.push(entry.clone());
        true
    }
}

/// Location of a document inside a store.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentRef {
    pub collection: String,
    pub id: String,
}

impl DocumentRef {
    pub fn new(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            id: id.into(),
        }
    }

    /// Slash-joined path: "users/1S4ITBhyECihDjAVkGSh"
    pub fn path(&self) -> String {
        format!("{}/{}", self.collection, self.id)
    }
}

impl std::fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_append_skips_exact_duplicates() {
        let mut doc = RosterDocument::default();
        assert!(doc.union_append(&UserEntry::new("ARV", "a@b.co")));
        assert!(!doc.union_append(&UserEntry::new("ARV", "a@b.co")));
        assert_eq!(doc.len(), 1);

        // Same email, different initials is a different record
        assert!(doc.union_append(&UserEntry::new("AR", "a@b.co")));
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.users[1].initials, "AR");
    }

    #[test]
    fn test_document_ref_path() {
        let doc_ref = DocumentRef::new("users", "abc123");
        assert_eq!(doc_ref.path(), "users/abc123");
        assert_eq!(doc_ref.to_string(), "users/abc123");
    }
}
