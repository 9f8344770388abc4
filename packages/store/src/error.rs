//! Errors raised by [`crate::RosterStore`] implementations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Appending requires the document to exist already.
    #[error("No document to update: {0}")]
    MissingDocument(String),

    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored roster is malformed: {0}")]
    Decode(#[from] toml::de::Error),

    #[error("Failed to encode roster: {0}")]
    Encode(#[from] toml::ser::Error),

    /// The roster lives behind a server function that returned an error.
    #[error("Remote store error: {0}")]
    Remote(String),
}
