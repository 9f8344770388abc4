//! Server-side failures that are not the caller's fault.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid settings: {0}")]
    Settings(#[from] config::ConfigError),

    #[error(transparent)]
    Store(#[from] store::StoreError),
}
