// SPDX-FileCopyrightText: 2026 Turnstile Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness that plays the host framework.
//!
//! `StrategyHarness` invokes a strategy with a fresh [`RecordingReporter`],
//! waits (bounded) for the first outcome, and hands the reporter back so the
//! test can assert on what arrived.

use std::sync::Arc;
use std::time::Duration;

use turnstile_core::{AuthRequest, AuthenticateOptions, Strategy};

use crate::recording_reporter::RecordingReporter;

const DEFAULT_WAIT: Duration = Duration::from_secs(2);

/// Drives strategies the way a host framework would.
#[derive(Debug, Clone)]
pub struct StrategyHarness {
    options: AuthenticateOptions,
    wait: Duration,
}

impl StrategyHarness {
    pub fn new() -> Self {
        Self {
            options: AuthenticateOptions::default(),
            wait: DEFAULT_WAIT,
        }
    }

    /// Options passed to every `authenticate` call.
    pub fn with_options(mut self, options: AuthenticateOptions) -> Self {
        self.options = options;
        self
    }

    /// How long to wait for an outcome that is reported asynchronously.
    pub fn with_wait(mut self, wait: Duration) -> Self {
        self.wait = wait;
        self
    }

    /// Authenticate `request` and wait for the first outcome.
    ///
    /// Returns the reporter whether or not anything arrived within the wait;
    /// an empty reporter means the strategy never reported.
    pub async fn run<U, S>(&self, strategy: &S, request: &AuthRequest) -> Arc<RecordingReporter<U>>
    where
        U: Send + 'static,
        S: Strategy<U> + ?Sized,
    {
        let reporter = Arc::new(RecordingReporter::new());
        strategy.authenticate(request, &self.options, reporter.clone());

        if tokio::time::timeout(self.wait, reporter.wait_for_outcome())
            .await
            .is_err()
        {
            tracing::debug!(
                strategy = strategy.name(),
                wait = ?self.wait,
                "no outcome reported within wait"
            );
        }
        reporter
    }
}

impl Default for StrategyHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use turnstile_core::{AuthReporter, OutcomeKind};

    use super::*;

    /// Reports success for any request whose body carries `ok: true`.
    struct BodyFlag;

    impl Strategy<String> for BodyFlag {
        fn name(&self) -> &str {
            "body-flag"
        }

        fn version(&self) -> semver::Version {
            semver::Version::new(0, 0, 1)
        }

        fn authenticate(
            &self,
            request: &AuthRequest,
            _options: &AuthenticateOptions,
            reporter: Arc<dyn AuthReporter<String>>,
        ) {
            if request.body["ok"] == json!(true) {
                reporter.success("flagged".into(), None);
            }
        }
    }

    #[tokio::test]
    async fn run_collects_synchronous_outcome() {
        let harness = StrategyHarness::new();
        let request = AuthRequest::new().with_body(json!({"ok": true}));
        let reporter = harness.run(&BodyFlag, &request).await;
        assert_eq!(reporter.kinds(), vec![OutcomeKind::Success]);
    }

    #[tokio::test(start_paused = true)]
    async fn run_returns_empty_reporter_when_nothing_reported() {
        let harness = StrategyHarness::new().with_wait(Duration::from_millis(100));
        let reporter = harness.run(&BodyFlag, &AuthRequest::new()).await;
        assert_eq!(reporter.count(), 0);
    }
}
