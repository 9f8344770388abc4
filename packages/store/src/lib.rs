pub mod config;
pub mod error;
pub mod models;
pub mod roster;
pub mod validate;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

pub use config::{RosterConfig, DEFAULT_CAPACITY};
pub use error::StoreError;
pub use models::{DocumentRef, RosterDocument, UserEntry};
pub use roster::RosterStore;
pub use validate::{normalize_initials, validate_email, validate_initials};
