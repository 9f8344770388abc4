//! # Roster configuration
//!
//! Where the roster document lives and how many entries it may hold. The server
//! reads it from the `[roster]` table of its settings:
//!
//! ```toml
//! [roster]
//! collection = "users"
//! document_id = "1S4ITBhyECihDjAVkGSh"
//! capacity = 20
//! ```
//!
//! Every field has a default, so a missing table is equivalent to
//! [`RosterConfig::default`].

use serde::{Deserialize, Serialize};

use crate::models::DocumentRef;

/// Maximum number of entries on the roster.
pub const DEFAULT_CAPACITY: usize = 20;

const DEFAULT_COLLECTION: &str = "users";
const DEFAULT_DOCUMENT_ID: &str = "1S4ITBhyECihDjAVkGSh";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default = "default_collection")]
    pub collection: String,
    #[serde(default = "default_document_id")]
    pub document_id: String,
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

fn default_document_id() -> String {
    DEFAULT_DOCUMENT_ID.to_string()
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            collection: default_collection(),
            document_id: default_document_id(),
            capacity: default_capacity(),
        }
    }
}

impl RosterConfig {
    pub fn doc_ref(&self) -> DocumentRef {
        DocumentRef::new(self.collection.clone(), self.document_id.clone())
    }
}
