//! The network half of the form: fetching occupancy and appending entries.

use store::roster::occupancy;
use store::{RosterStore, UserEntry};

use super::error::SignupError;
use super::state::{FormCell, FormState};

/// Drives a [`FormState`] against a [`RosterStore`].
#[derive(Clone, Copy, Debug)]
pub struct Signup<S> {
    store: S,
}

impl<S: RosterStore> Signup<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current roster length, or `None` if the document is missing or the fetch failed.
    ///
    /// Failures are logged and otherwise swallowed.
    pub async fn load_count(&self) -> Option<usize> {
        match occupancy(&self.store).await {
            Ok(Some(count)) => {
                tracing::debug!(users = count, "roster fetched");
                Some(count)
            }
            Ok(None) => {
                tracing::warn!("roster document does not exist");
                None
            }
            Err(e) => {
                tracing::warn!("Failed to fetch roster: {}", e);
                None
            }
        }
    }

    /// Configured capacity, or `None` if the store could not say.
    pub async fn load_capacity(&self) -> Option<usize> {
        match self.store.capacity().await {
            Ok(capacity) => Some(capacity),
            Err(e) => {
                tracing::warn!("Failed to fetch roster capacity: {}", e);
                None
            }
        }
    }

    /// Refresh the occupancy and capacity from the store. The form is left
    /// untouched, and so still "full", when the roster cannot be read.
    pub async fn init_db(&self, mut form: impl FormCell) {
        let Some(count) = self.load_count().await else {
            return;
        };
        let capacity = self.load_capacity().await;
        form.update(|state| {
            if let Some(capacity) = capacity {
                state.set_capacity(capacity);
            }
            state.set_user_count(count);
        });
    }

    /// Append `entry`, then re-fetch the occupancy.
    pub async fn append(&self, entry: &UserEntry) -> Result<Option<usize>, SignupError> {
        if let Err(e) = self.store.append_entry(entry).await {
            tracing::error!("Failed to append roster entry: {}", e);
            return Err(SignupError::RemoteWriteFailure(e));
        }
        Ok(self.load_count().await)
    }

    /// Validate, append, and record the outcome on the form.
    pub async fn submit(&self, mut form: impl FormCell) {
        let Some(entry) = form.update(FormState::prepare_submit) else {
            return;
        };
        let outcome = self.append(&entry).await;
        form.update(|state| state.finish(outcome));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signup::Phase;
    use store::{DocumentRef, MemoryStore, RosterDocument, StoreError, DEFAULT_CAPACITY};

    /// Store whose reads succeed and whose writes always fail.
    struct ReadOnlyStore(MemoryStore);

    impl RosterStore for ReadOnlyStore {
        async fn fetch_roster(&self) -> Result<Option<RosterDocument>, StoreError> {
            self.0.fetch_roster().await
        }

        async fn append_entry(&self, _entry: &UserEntry) -> Result<(), StoreError> {
            Err(StoreError::Remote("PERMISSION_DENIED".to_string()))
        }
    }

    /// Store that cannot be reached at all.
    struct OfflineStore;

    impl RosterStore for OfflineStore {
        async fn fetch_roster(&self) -> Result<Option<RosterDocument>, StoreError> {
            Err(StoreError::Remote("network unreachable".to_string()))
        }

        async fn append_entry(&self, _entry: &UserEntry) -> Result<(), StoreError> {
            Err(StoreError::Remote("network unreachable".to_string()))
        }
    }

    /// Store configured with a capacity other than the default.
    struct CappedStore(MemoryStore, usize);

    impl RosterStore for CappedStore {
        async fn fetch_roster(&self) -> Result<Option<RosterDocument>, StoreError> {
            self.0.fetch_roster().await
        }

        async fn append_entry(&self, entry: &UserEntry) -> Result<(), StoreError> {
            self.0.append_entry(entry).await
        }

        async fn capacity(&self) -> Result<usize, StoreError> {
            Ok(self.1)
        }
    }

    fn roster_with(count: usize) -> MemoryStore {
        let users = (0..count)
            .map(|i| UserEntry::new("AB", format!("user{i}@example.com")))
            .collect();
        MemoryStore::with_users(DocumentRef::new("users", "roster"), users)
    }

    fn filled_form(initials: &str, email: &str) -> FormState {
        let mut form = FormState::new(DEFAULT_CAPACITY);
        form.set_initials(initials);
        form.set_email(email.to_string());
        form
    }

    #[tokio::test]
    async fn test_init_db_sets_count() {
        let signup = Signup::new(roster_with(7));
        let mut form = FormState::new(DEFAULT_CAPACITY);

        signup.init_db(&mut form).await;

        assert_eq!(form.user_count, 7);
        assert_eq!(form.remaining(), 13);
    }

    #[tokio::test]
    async fn test_init_db_missing_document_keeps_full() {
        let signup = Signup::new(MemoryStore::new(DocumentRef::new("users", "roster")));
        let mut form = FormState::new(DEFAULT_CAPACITY);

        signup.init_db(&mut form).await;

        assert_eq!(form.user_count, DEFAULT_CAPACITY);
        assert!(form.is_full());
        assert_eq!(form.error, None);
    }

    #[tokio::test]
    async fn test_init_db_failure_is_swallowed() {
        let signup = Signup::new(OfflineStore);
        let mut form = FormState::new(DEFAULT_CAPACITY);

        signup.init_db(&mut form).await;

        assert_eq!(form.user_count, DEFAULT_CAPACITY);
        assert_eq!(form.error, None);
        assert_eq!(form.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn test_init_db_applies_configured_capacity() {
        let signup = Signup::new(CappedStore(roster_with(DEFAULT_CAPACITY), 30));
        let mut form = filled_form("ARV", "a@b.co");

        signup.init_db(&mut form).await;
        assert_eq!(form.capacity, 30);
        assert_eq!(form.remaining(), 10);
        assert!(!form.submit_disabled());

        signup.submit(&mut form).await;
        assert_eq!(form.phase(), Phase::Succeeded);
        assert_eq!(form.user_count, DEFAULT_CAPACITY + 1);
    }

    #[tokio::test]
    async fn test_init_db_without_roster_ignores_capacity() {
        let empty = MemoryStore::new(DocumentRef::new("users", "roster"));
        let signup = Signup::new(CappedStore(empty, 30));
        let mut form = FormState::new(DEFAULT_CAPACITY);

        signup.init_db(&mut form).await;

        assert_eq!(form.capacity, DEFAULT_CAPACITY);
        assert!(form.is_full());
    }

    #[tokio::test]
    async fn test_refetch_is_idempotent() {
        let signup = Signup::new(roster_with(4));
        let mut form = FormState::new(DEFAULT_CAPACITY);

        signup.init_db(&mut form).await;
        let first = form.user_count;
        signup.init_db(&mut form).await;

        assert_eq!(form.user_count, first);
    }

    #[tokio::test]
    async fn test_successful_submit() {
        let store = roster_with(5);
        let signup = Signup::new(store.clone());
        let mut form = filled_form("arv", "a@b.co");
        signup.init_db(&mut form).await;

        signup.submit(&mut form).await;

        assert_eq!(form.phase(), Phase::Succeeded);
        assert!(form.success);
        assert!(!form.loading);
        assert_eq!(form.user_count, 6);
        assert!(form.confirmation().contains("a@b.co"));

        let roster = store.fetch_roster().await.unwrap().unwrap();
        assert_eq!(roster.users.last(), Some(&UserEntry::new("ARV", "a@b.co")));
    }

    #[tokio::test]
    async fn test_full_roster_never_writes() {
        let store = roster_with(DEFAULT_CAPACITY);
        let signup = Signup::new(store.clone());
        let mut form = filled_form("ARV", "a@b.co");
        signup.init_db(&mut form).await;

        assert!(form.submit_disabled());
        signup.submit(&mut form).await;

        assert_eq!(form.phase(), Phase::Failed);
        assert_eq!(
            form.error.as_deref(),
            Some("There are no more spots available.")
        );
        assert_eq!(
            store.fetch_roster().await.unwrap().unwrap().len(),
            DEFAULT_CAPACITY
        );
    }

    #[tokio::test]
    async fn test_write_failure_is_generic() {
        let signup = Signup::new(ReadOnlyStore(roster_with(5)));
        let mut form = filled_form("ARV", "a@b.co");
        signup.init_db(&mut form).await;

        signup.submit(&mut form).await;

        assert_eq!(form.phase(), Phase::Failed);
        assert!(!form.loading);
        assert!(!form.success);
        assert_eq!(
            form.error.as_deref(),
            Some("Something went wrong, please contact the maintainer to fix this.")
        );
        // No optimistic increment
        assert_eq!(form.user_count, 5);
    }

    #[tokio::test]
    async fn test_last_spot_goes_once() {
        let store = roster_with(DEFAULT_CAPACITY - 1);

        let first = Signup::new(store.clone());
        let mut form = filled_form("AB", "ab@example.com");
        first.init_db(&mut form).await;
        first.submit(&mut form).await;
        assert!(form.success);
        assert!(form.is_full());

        // A later visitor sees the roster full
        let second = Signup::new(store.clone());
        let mut late = filled_form("CD", "cd@example.com");
        second.init_db(&mut late).await;
        second.submit(&mut late).await;
        assert_eq!(late.phase(), Phase::Failed);
        assert_eq!(
            store.fetch_roster().await.unwrap().unwrap().len(),
            DEFAULT_CAPACITY
        );
    }

    #[tokio::test]
    async fn test_stale_count_can_overfill() {
        let store = roster_with(DEFAULT_CAPACITY - 1);
        let signup = Signup::new(store.clone());

        // Both visitors load the page before either submits
        let mut a = filled_form("AB", "ab@example.com");
        let mut b = filled_form("CD", "cd@example.com");
        signup.init_db(&mut a).await;
        signup.init_db(&mut b).await;

        signup.submit(&mut a).await;
        signup.submit(&mut b).await;

        assert!(a.success && b.success);
        assert_eq!(
            store.fetch_roster().await.unwrap().unwrap().len(),
            DEFAULT_CAPACITY + 1
        );
        assert_eq!(b.remaining(), 0);
    }
}
