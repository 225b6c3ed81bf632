// SPDX-FileCopyrightText: 2026 Turnstile Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host-side reporting channel for strategy outcomes.

use crate::error::TurnstileError;
use crate::types::{AuthInfo, AuthOutcome};

/// The capability set the host framework hands to a strategy.
///
/// A strategy reports exactly one of `success`, `fail` or `error` per
/// `authenticate` call. Reports may arrive from a different task than the
/// one that called `authenticate`, so implementations must be `Send + Sync`.
pub trait AuthReporter<U>: Send + Sync {
    /// Credentials were accepted and resolved to `user`.
    fn success(&self, user: U, info: Option<AuthInfo>);

    /// Credentials were missing or rejected.
    fn fail(&self, info: Option<AuthInfo>, status: Option<u16>);

    /// Verification could not be completed.
    fn error(&self, err: TurnstileError);

    /// Dispatch an [`AuthOutcome`] to the matching channel.
    fn report(&self, outcome: AuthOutcome<U>) {
        match outcome {
            AuthOutcome::Success { user, info } => self.success(user, info),
            AuthOutcome::Fail { info, status } => self.fail(info, status),
            AuthOutcome::Error(err) => self.error(err),
        }
    }
}
