// SPDX-FileCopyrightText: 2026 Turnstile Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base trait implemented by every authentication strategy.

use std::sync::Arc;

use crate::traits::reporter::AuthReporter;
use crate::types::{AuthRequest, AuthenticateOptions};

/// An authentication strategy the host framework can invoke.
///
/// `U` is the application's user type carried by success reports.
pub trait Strategy<U>: Send + Sync + 'static {
    /// Returns the name the host registers this strategy under.
    fn name(&self) -> &str;

    /// Returns the semantic version of this strategy.
    fn version(&self) -> semver::Version;

    /// Authenticates `request`, reporting the result through `reporter`.
    ///
    /// The report may happen before this returns or later, from whatever
    /// task the strategy handed its completion to.
    fn authenticate(
        &self,
        request: &AuthRequest,
        options: &AuthenticateOptions,
        reporter: Arc<dyn AuthReporter<U>>,
    );
}
