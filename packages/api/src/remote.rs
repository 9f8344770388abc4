//! Client-side roster store that talks to the server functions.

use store::{RosterDocument, RosterStore, StoreError, UserEntry};

/// [`RosterStore`] backed by [`crate::fetch_roster`], [`crate::append_entry`] and
/// [`crate::fetch_capacity`].
///
/// Every server-function failure, whatever its cause, becomes [`StoreError::Remote`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RemoteRoster;

impl RemoteRoster {
    pub fn new() -> Self {
        Self
    }
}

impl RosterStore for RemoteRoster {
    async fn fetch_roster(&self) -> Result<Option<RosterDocument>, StoreError> {
        crate::fetch_roster()
            .await
            .map_err(|e| StoreError::Remote(e.to_string()))
    }

    async fn append_entry(&self, entry: &UserEntry) -> Result<(), StoreError> {
        crate::append_entry(entry.initials.clone(), entry.email.clone())
            .await
            .map_err(|e| StoreError::Remote(e.to_string()))
    }

    async fn capacity(&self) -> Result<usize, StoreError> {
        crate::fetch_capacity()
            .await
            .map_err(|e| StoreError::Remote(e.to_string()))
    }
}
