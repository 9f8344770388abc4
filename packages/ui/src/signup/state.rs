//! # Form state for the sign-up card
//!
//! [`FormState`] is the one mutable object behind the form. The view owns it in a
//! single signal and changes it only through the transition methods below, which
//! walk the [`Phase`] machine:
//!
//! ```text
//! Idle ──► Validating ──► Submitting ──► Succeeded   (terminal)
//!              │               │
//!              └──────────────►└────────► Failed ──► Validating (resubmit)
//! ```
//!
//! | Method | Transition |
//! |--------|------------|
//! | [`begin_validation`](FormState::begin_validation) | `Idle` or `Failed` → `Validating` |
//! | [`reject`](FormState::reject) | `Validating` → `Failed` |
//! | [`begin_submit`](FormState::begin_submit) | `Validating` → `Submitting`, sets `loading` |
//! | [`succeed`](FormState::succeed) | `Submitting` → `Succeeded`, clears `loading` |
//! | [`fail`](FormState::fail) | `Submitting` → `Failed`, clears `loading` |
//!
//! [`prepare_submit`](FormState::prepare_submit) and [`finish`](FormState::finish)
//! bundle these into the two synchronous halves around the network round trip.
//!
//! [`FormCell`] is whatever holds the state while the controller works on it: a
//! `Signal` in the component, a plain `&mut FormState` in tests.

use dioxus::prelude::*;
use store::{normalize_initials, validate_email, validate_initials, UserEntry};

use super::error::SignupError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    pub initials: String,
    pub email: String,
    pub loading: bool,
    /// Last failure message; overwritten by every failed attempt.
    pub error: Option<String>,
    pub success: bool,
    /// Roster length as of the last successful fetch.
    pub user_count: usize,
    pub capacity: usize,
    phase: Phase,
}

impl FormState {
    /// Fresh form. The roster is assumed full until a fetch says otherwise.
    pub fn new(capacity: usize) -> Self {
        Self {
            initials: String::new(),
            email: String::new(),
            loading: false,
            error: None,
            success: false,
            user_count: capacity,
            capacity,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn set_initials(&mut self, raw: &str) {
        self.initials = normalize_initials(raw);
    }

    pub fn set_email(&mut self, raw: String) {
        self.email = raw;
    }

    pub fn set_user_count(&mut self, count: usize) {
        self.user_count = count;
    }

    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
    }

    pub fn is_full(&self) -> bool {
        self.capacity <= self.user_count
    }

    /// Spots left; zero once the roster is at or over capacity.
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.user_count)
    }

    pub fn submit_disabled(&self) -> bool {
        self.is_full() || self.loading
    }

    /// Text shown once the entry is saved.
    pub fn confirmation(&self) -> String {
        format!(
            "You will now start receiving calendar invites on Sundays to the email {}.",
            self.email
        )
    }

    /// Run the gates in order: email, initials, capacity.
    pub fn validate(&self) -> Result<UserEntry, SignupError> {
        if !validate_email(&self.email) {
            return Err(SignupError::InvalidEmail);
        }
        if !validate_initials(&self.initials) {
            return Err(SignupError::InvalidInitials);
        }
        if self.is_full() {
            return Err(SignupError::CapacityExceeded);
        }
        Ok(UserEntry::new(self.initials.clone(), self.email.clone()))
    }

    pub fn begin_validation(&mut self) {
        self.phase = Phase::Validating;
    }

    pub fn reject(&mut self, err: &SignupError) {
        self.error = Some(err.to_string());
        self.phase = Phase::Failed;
    }

    pub fn begin_submit(&mut self) {
        self.loading = true;
        self.phase = Phase::Submitting;
    }

    pub fn succeed(&mut self) {
        self.loading = false;
        self.success = true;
        self.error = None;
        self.phase = Phase::Succeeded;
    }

    pub fn fail(&mut self, err: &SignupError) {
        self.loading = false;
        self.error = Some(err.to_string());
        self.phase = Phase::Failed;
    }

    /// Validate and, if every gate passes, enter `Submitting`.
    ///
    /// Returns the entry to append, or `None` when the submission stops here:
    /// a gate failed (the error is recorded), a submit is already in flight, or
    /// the form has already succeeded.
    pub fn prepare_submit(&mut self) -> Option<UserEntry> {
        if self.loading || self.success {
            return None;
        }
        self.begin_validation();
        match self.validate() {
            Ok(entry) => {
                self.begin_submit();
                Some(entry)
            }
            Err(err) => {
                self.reject(&err);
                None
            }
        }
    }

    /// Apply the outcome of the append. `Ok(Some(n))` carries the re-fetched
    /// roster length; `Ok(None)` means the re-fetch gave nothing to go on.
    pub fn finish(&mut self, outcome: Result<Option<usize>, SignupError>) {
        match outcome {
            Ok(count) => {
                if let Some(count) = count {
                    self.set_user_count(count);
                }
                self.succeed();
            }
            Err(err) => self.fail(&err),
        }
    }
}

/// Short, synchronous access to a [`FormState`]. Never held across an await.
pub trait FormCell {
    fn update<R>(&mut self, f: impl FnOnce(&mut FormState) -> R) -> R;
}

impl FormCell for &mut FormState {
    fn update<R>(&mut self, f: impl FnOnce(&mut FormState) -> R) -> R {
        f(&mut **self)
    }
}

impl FormCell for Signal<FormState> {
    fn update<R>(&mut self, f: impl FnOnce(&mut FormState) -> R) -> R {
        f(&mut *self.write())
    }
}
