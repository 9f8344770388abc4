//! # Roster storage for server functions
//!
//! Server functions read and write the roster through one process-wide
//! [`store::FileStore`]. It is entirely gated behind `#[cfg(feature = "server")]`
//! so client (WASM) builds never touch the filesystem.
//!
//! The store is a **lazy singleton** backed by a [`tokio::sync::OnceCell`], as are
//! the settings it is built from ([`get_settings`]). The first call to
//! [`get_store`] loads [`crate::settings::Settings`], points a
//! `FileStore` at `storage.data_dir`, and creates an empty roster document when
//! `storage.create_missing` is set and none exists yet.

#[cfg(feature = "server")]
mod roster;

#[cfg(feature = "server")]
pub use roster::{get_settings, get_store};
