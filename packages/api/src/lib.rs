//! # API crate — shared fullstack server functions for the sign-up roster
//!
//! This crate defines the Dioxus server functions the web frontend calls, the
//! server-side storage they use, and [`RemoteRoster`], the client-side
//! [`store::RosterStore`] that forwards to them.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`db`] | `server` | Process-wide file-backed roster store (lazy `OnceCell` singleton) |
//! | [`settings`] | `server` | Layered settings: defaults, `signup.toml`, `SIGNUP_*` env vars |
//! | [`error`] | `server` | Settings and storage failures raised while serving |
//! | [`remote`] | — | `RemoteRoster`, the storage port implementation used by the form |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated with
//! `#[get(...)]` or `#[post(...)]` and compiled twice: once with full server logic
//! (behind `#[cfg(feature = "server")]`) and once as a thin client stub that simply
//! forwards the call over HTTP.
//!
//! - `fetch_roster` — read the roster document (`None` if it does not exist)
//! - `fetch_capacity` — the configured maximum roster length (`roster.capacity`)
//! - `append_entry` — validate and array-union append one sign-up

use dioxus::prelude::*;

pub mod db;
#[cfg(feature = "server")]
pub mod error;
pub mod remote;
#[cfg(feature = "server")]
pub mod settings;

pub use remote::RemoteRoster;
pub use store::{RosterDocument, UserEntry};

/// Read the roster document.
#[cfg(feature = "server")]
#[get("/api/roster")]
pub async fn fetch_roster() -> Result<Option<RosterDocument>, ServerFnError> {
    use store::RosterStore;

    let store = db::get_store()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let roster = store
        .fetch_roster()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::debug!(users = ?roster.as_ref().map(RosterDocument::len), "roster fetched");
    Ok(roster)
}

#[cfg(not(feature = "server"))]
#[get("/api/roster")]
pub async fn fetch_roster() -> Result<Option<RosterDocument>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Maximum number of entries the roster accepts.
#[cfg(feature = "server")]
#[get("/api/roster/capacity")]
pub async fn fetch_capacity() -> Result<usize, ServerFnError> {
    let settings = db::get_settings()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(settings.roster.capacity)
}

#[cfg(not(feature = "server"))]
#[get("/api/roster/capacity")]
pub async fn fetch_capacity() -> Result<usize, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Build the entry to store, running the same field checks as the form.
#[cfg(feature = "server")]
fn checked_entry(initials: &str, email: String) -> Result<UserEntry, ServerFnError> {
    let initials = store::normalize_initials(initials);

    if !store::validate_email(&email) {
        return Err(ServerFnError::new("Provided email is invalid."));
    }
    if !store::validate_initials(&initials) {
        return Err(ServerFnError::new(
            "Initials must be 2-3 characters in length.",
        ));
    }
    Ok(UserEntry::new(initials, email))
}

/// Append a sign-up to the roster. Both fields are checked again here.
#[cfg(feature = "server")]
#[post("/api/roster/append")]
pub async fn append_entry(initials: String, email: String) -> Result<(), ServerFnError> {
    use store::RosterStore;

    let entry = checked_entry(&initials, email)?;

    let store = db::get_store()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    store
        .append_entry(&entry)
        .await
        .map_err(|e| {
            tracing::error!("Failed to append roster entry: {}", e);
            ServerFnError::new(e.to_string())
        })?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/roster/append")]
pub async fn append_entry(initials: String, email: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
