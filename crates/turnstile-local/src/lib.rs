// SPDX-FileCopyrightText: 2026 Turnstile Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local credential strategy.
//!
//! Reads an identity field (and optional extra fields) from the request body,
//! falling back to the query, and hands them to an application-supplied
//! verify callback. The callback decides; the strategy translates its answer
//! into exactly one `success`, `fail` or `error` report to the host.
//!
//! ```
//! use serde_json::Value;
//! use turnstile_local::LocalStrategy;
//!
//! let strategy = LocalStrategy::<Value>::builder()
//!     .extra_field("password")
//!     .verify(|_req, creds, done| {
//!         let accepted = creds.get_str("password") == Some("hunter2");
//!         done.done(Ok(accepted.then(|| creds.identity.clone())), None);
//!         Ok(())
//!     })
//!     .build()
//!     .expect("valid strategy");
//! assert_eq!(strategy.identity_field().as_str(), "username");
//! ```

pub mod builder;
pub mod credentials;
pub mod verified;

pub use builder::LocalStrategyBuilder;
pub use credentials::{resolve_field, Credentials};
pub use verified::Verified;

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tracing::{debug, warn};
use turnstile_config::LocalSettings;
use turnstile_core::{
    is_truthy, AuthInfo, AuthOutcome, AuthReporter, AuthRequest, AuthenticateOptions, FieldPath,
    Strategy, TurnstileError,
};

use crate::verified::ReportSlot;

/// Name the strategy is registered under.
pub const STRATEGY_NAME: &str = "local";

/// Failure message when the request carries no identity and nothing overrides it.
pub const DEFAULT_BAD_REQUEST_MESSAGE: &str = "Missing credentials";

/// Status attached to the missing-credentials failure.
pub const MISSING_CREDENTIALS_STATUS: u16 = 400;

/// The application's verify callback.
///
/// Returning `Err` reports an error for the request, as does panicking, but
/// only while the callback itself is running. Once it has returned, the
/// [`Verified`] handle is the only way to report.
pub type VerifyFn<U> =
    dyn Fn(&AuthRequest, Credentials, Verified<U>) -> Result<(), TurnstileError> + Send + Sync;

/// Strategy authenticating requests by fields submitted in the body or query.
pub struct LocalStrategy<U> {
    identity_field: FieldPath,
    extra_fields: Vec<FieldPath>,
    bad_request_message: Option<String>,
    verify: Arc<VerifyFn<U>>,
}

impl<U: Send + 'static> LocalStrategy<U> {
    /// Create a strategy with default settings: identity in `username`, no extras.
    pub fn new<F>(verify: F) -> Self
    where
        F: Fn(&AuthRequest, Credentials, Verified<U>) -> Result<(), TurnstileError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            identity_field: FieldPath::key(turnstile_config::DEFAULT_IDENTITY_FIELD),
            extra_fields: Vec::new(),
            bad_request_message: None,
            verify: Arc::new(verify),
        }
    }

    /// Create a strategy from loaded configuration.
    pub fn with_settings<F>(settings: &LocalSettings, verify: F) -> Result<Self, TurnstileError>
    where
        F: Fn(&AuthRequest, Credentials, Verified<U>) -> Result<(), TurnstileError>
            + Send
            + Sync
            + 'static,
    {
        Self::builder().settings(settings).verify(verify).build()
    }

    pub fn builder() -> LocalStrategyBuilder<U> {
        LocalStrategyBuilder::default()
    }
}

impl<U> LocalStrategy<U> {
    pub fn identity_field(&self) -> &FieldPath {
        &self.identity_field
    }

    pub fn extra_fields(&self) -> &[FieldPath] {
        &self.extra_fields
    }

    /// Credentials this strategy would hand to the verify callback for `request`.
    pub fn credentials(&self, request: &AuthRequest) -> Credentials {
        credentials::extract(request, &self.identity_field, &self.extra_fields)
    }

    fn missing_credentials_message(&self, options: &AuthenticateOptions) -> String {
        options
            .bad_request_message
            .as_deref()
            .or(self.bad_request_message.as_deref())
            .unwrap_or(DEFAULT_BAD_REQUEST_MESSAGE)
            .to_string()
    }
}

impl<U: Send + 'static> Strategy<U> for LocalStrategy<U> {
    fn name(&self) -> &str {
        STRATEGY_NAME
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn authenticate(
        &self,
        request: &AuthRequest,
        options: &AuthenticateOptions,
        reporter: Arc<dyn AuthReporter<U>>,
    ) {
        let credentials = self.credentials(request);
        let slot = ReportSlot::new(reporter);

        if !is_truthy(&credentials.identity) {
            debug!(
                strategy = STRATEGY_NAME,
                field = %self.identity_field,
                "identity missing from body and query"
            );
            slot.deliver(AuthOutcome::Fail {
                info: Some(AuthInfo::message(self.missing_credentials_message(options))),
                status: Some(MISSING_CREDENTIALS_STATUS),
            });
            return;
        }

        debug!(
            strategy = STRATEGY_NAME,
            field = %self.identity_field,
            extra_fields = self.extra_fields.len(),
            "invoking verify callback"
        );

        let verified = Verified::new(Arc::clone(&slot));
        let verify = &self.verify;
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            verify(request, credentials, verified)
        }));

        let sync_error = match result {
            Ok(Ok(())) => None,
            Ok(Err(err)) => Some(err),
            Err(payload) => Some(TurnstileError::Panicked(panic_message(payload.as_ref()))),
        };

        match sync_error {
            Some(err) => {
                warn!(strategy = STRATEGY_NAME, error = %err, "verify callback failed");
                slot.deliver(AuthOutcome::Error(err));
            }
            // The handle is gone and nothing was reported: nobody can finish this request.
            None if !slot.is_reported() && Arc::strong_count(&slot) == 1 => {
                warn!(
                    strategy = STRATEGY_NAME,
                    "verify callback returned without reporting or keeping its result handler"
                );
            }
            None => {}
        }
    }
}

impl<U> Clone for LocalStrategy<U> {
    fn clone(&self) -> Self {
        Self {
            identity_field: self.identity_field.clone(),
            extra_fields: self.extra_fields.clone(),
            bad_request_message: self.bad_request_message.clone(),
            verify: Arc::clone(&self.verify),
        }
    }
}

impl<U> fmt::Debug for LocalStrategy<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalStrategy")
            .field("identity_field", &self.identity_field.as_str())
            .field("extra_fields", &self.extra_fields)
            .field("bad_request_message", &self.bad_request_message)
            .finish_non_exhaustive()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
