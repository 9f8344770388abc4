//! # Roster storage port
//!
//! [`RosterStore`] is the only seam between the sign-up form and whatever holds
//! the roster document. It exposes exactly two operations:
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`fetch_roster`](RosterStore::fetch_roster) | Read the roster document. `Ok(None)` means the document does not exist. |
//! | [`append_entry`](RosterStore::append_entry) | Array-union append of one entry. Fails with [`StoreError::MissingDocument`] when there is no document to update. |
//! | [`capacity`](RosterStore::capacity) | Maximum roster length. Defaults to [`DEFAULT_CAPACITY`]. |
//!
//! Implementations: [`crate::MemoryStore`] (tests, single-process fallback),
//! [`crate::FileStore`] (server-side persistence) and `api::RemoteRoster`
//! (browser side, forwarding to the server functions).
//!
//! Each append is atomic in every implementation. Checking capacity and then
//! appending is not: two writers can both observe a free spot and both append.

use crate::config::DEFAULT_CAPACITY;
use crate::error::StoreError;
use crate::models::{RosterDocument, UserEntry};

/// Async storage port for the roster document.
pub trait RosterStore {
    fn fetch_roster(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<RosterDocument>, StoreError>>;
    fn append_entry(
        &self,
        entry: &UserEntry,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;

    fn capacity(&self) -> impl std::future::Future<Output = Result<usize, StoreError>> {
        async { Ok(DEFAULT_CAPACITY) }
    }
}

/// Occupancy derived from a fetch: `None` when the document does not exist.
pub async fn occupancy<S: RosterStore>(store: &S) -> Result<Option<usize>, StoreError> {
    Ok(store.fetch_roster().await?.map(|doc| doc.len()))
}
