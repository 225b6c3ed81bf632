// SPDX-FileCopyrightText: 2026 Turnstile Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock host reporter for deterministic testing.
//!
//! `RecordingReporter` implements `AuthReporter` by appending every report to
//! an in-memory list, so tests can assert on what a strategy reported and how
//! many times.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::Notify;
use turnstile_core::{AuthInfo, AuthOutcome, AuthReporter, OutcomeKind, TurnstileError};

/// A host reporter that records outcomes instead of acting on them.
pub struct RecordingReporter<U> {
    outcomes: Mutex<Vec<AuthOutcome<U>>>,
    notify: Notify,
}

impl<U> RecordingReporter<U> {
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(Vec::new()),
            notify: Notify::new(),
        }
    }

    fn outcomes(&self) -> MutexGuard<'_, Vec<AuthOutcome<U>>> {
        self.outcomes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, outcome: AuthOutcome<U>) {
        tracing::trace!(kind = %outcome.kind(), "recorded outcome");
        self.outcomes().push(outcome);
        self.notify.notify_one();
    }

    /// Number of outcomes reported so far.
    pub fn count(&self) -> usize {
        self.outcomes().len()
    }

    /// Channels reported on, in order.
    pub fn kinds(&self) -> Vec<OutcomeKind> {
        self.outcomes().iter().map(AuthOutcome::kind).collect()
    }

    /// Remove and return everything recorded so far.
    pub fn take(&self) -> Vec<AuthOutcome<U>> {
        std::mem::take(&mut *self.outcomes())
    }

    /// Remove and return the only recorded outcome.
    ///
    /// # Panics
    ///
    /// Panics unless exactly one outcome was recorded.
    pub fn take_single(&self) -> AuthOutcome<U> {
        let mut outcomes = self.take();
        assert_eq!(
            outcomes.len(),
            1,
            "expected exactly one reported outcome, got {:?}",
            outcomes.iter().map(AuthOutcome::kind).collect::<Vec<_>>()
        );
        outcomes.remove(0)
    }

    /// Wait until at least one outcome has been recorded.
    pub async fn wait_for_outcome(&self) {
        loop {
            if self.count() > 0 {
                return;
            }
            self.notify.notified().await;
        }
    }
}

impl<U> Default for RecordingReporter<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: Send> AuthReporter<U> for RecordingReporter<U> {
    fn success(&self, user: U, info: Option<AuthInfo>) {
        self.record(AuthOutcome::Success { user, info });
    }

    fn fail(&self, info: Option<AuthInfo>, status: Option<u16>) {
        self.record(AuthOutcome::Fail { info, status });
    }

    fn error(&self, err: TurnstileError) {
        self.record(AuthOutcome::Error(err));
    }
}
