// SPDX-FileCopyrightText: 2026 Turnstile Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-shot result handler passed to the verify callback.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};
use turnstile_core::{AuthInfo, AuthOutcome, AuthReporter, TurnstileError};

use crate::STRATEGY_NAME;

/// Per-request reporting slot shared by the strategy and its [`Verified`] handle.
///
/// Delivers at most one outcome to the host reporter; later deliveries are
/// dropped and logged.
pub(crate) struct ReportSlot<U> {
    reporter: Arc<dyn AuthReporter<U>>,
    reported: AtomicBool,
}

impl<U> ReportSlot<U> {
    pub(crate) fn new(reporter: Arc<dyn AuthReporter<U>>) -> Arc<Self> {
        Arc::new(Self {
            reporter,
            reported: AtomicBool::new(false),
        })
    }

    /// Deliver `outcome` unless one was already delivered. Returns whether it was.
    pub(crate) fn deliver(&self, outcome: AuthOutcome<U>) -> bool {
        let kind = outcome.kind();
        if self.reported.swap(true, Ordering::AcqRel) {
            warn!(
                strategy = STRATEGY_NAME,
                %kind,
                "outcome already reported for this request, dropping"
            );
            return false;
        }
        debug!(strategy = STRATEGY_NAME, %kind, "reporting outcome");
        self.reporter.report(outcome);
        true
    }

    pub(crate) fn is_reported(&self) -> bool {
        self.reported.load(Ordering::Acquire)
    }
}

/// Result handler for a single `authenticate` call.
///
/// The verify callback receives one of these and completes it exactly once,
/// either before returning or later from another task. Consuming methods make
/// a second completion through the same handle impossible.
///
/// Dropping the handle without completing it leaves the request without an
/// outcome; the host is never told.
pub struct Verified<U> {
    slot: Option<Arc<ReportSlot<U>>>,
}

impl<U> Verified<U> {
    pub(crate) fn new(slot: Arc<ReportSlot<U>>) -> Self {
        Self { slot: Some(slot) }
    }

    /// Complete with an `(err, user, info)` style result.
    ///
    /// - `Err(e)` reports an error; `info` is discarded.
    /// - `Ok(None)` reports a failure carrying `info`.
    /// - `Ok(Some(user))` reports a success carrying `user` and `info`.
    pub fn done(mut self, result: Result<Option<U>, TurnstileError>, info: Option<AuthInfo>) {
        let outcome = match result {
            Err(err) => AuthOutcome::Error(err),
            Ok(None) => AuthOutcome::Fail { info, status: None },
            Ok(Some(user)) => AuthOutcome::Success { user, info },
        };
        if let Some(slot) = self.slot.take() {
            slot.deliver(outcome);
        }
    }

    /// Accept the credentials as `user`.
    pub fn success(self, user: U, info: Option<AuthInfo>) {
        self.done(Ok(Some(user)), info);
    }

    /// Reject the credentials.
    pub fn fail(self, info: Option<AuthInfo>) {
        self.done(Ok(None), info);
    }

    /// Report that verification could not be completed.
    pub fn error(self, err: TurnstileError) {
        self.done(Err(err), None);
    }

    /// Whether an outcome has been reported for this request, by any path.
    pub fn is_reported(&self) -> bool {
        self.slot.as_ref().is_none_or(|slot| slot.is_reported())
    }
}

impl<U> fmt::Debug for Verified<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verified")
            .field("reported", &self.is_reported())
            .finish()
    }
}

impl<U> Drop for Verified<U> {
    fn drop(&mut self) {
        // While `authenticate` is still on the stack it holds the other
        // reference and does its own check once the callback returns.
        if let Some(slot) = self.slot.take()
            && !slot.is_reported()
            && Arc::strong_count(&slot) == 1
        {
            warn!(
                strategy = STRATEGY_NAME,
                "result handler dropped without reporting, request will not complete"
            );
        }
    }
}
