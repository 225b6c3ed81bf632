// SPDX-FileCopyrightText: 2026 Turnstile Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Turnstile authentication framework.
//!
//! This crate provides the seam between the host framework and the
//! strategies it drives: the [`Strategy`] and [`AuthReporter`] traits,
//! the request and outcome types, field path lookup, and the shared
//! error type.

pub mod error;
pub mod field_path;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::TurnstileError;
pub use field_path::{is_truthy, FieldPath, FieldPathError};
pub use types::{AuthInfo, AuthOutcome, AuthRequest, AuthenticateOptions, OutcomeKind};

pub use traits::{AuthReporter, Strategy};

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Default)]
    struct Collect(Mutex<Vec<OutcomeKind>>);

    impl AuthReporter<String> for Collect {
        fn success(&self, _user: String, _info: Option<AuthInfo>) {
            self.0.lock().unwrap().push(OutcomeKind::Success);
        }

        fn fail(&self, _info: Option<AuthInfo>, _status: Option<u16>) {
            self.0.lock().unwrap().push(OutcomeKind::Fail);
        }

        fn error(&self, _err: TurnstileError) {
            self.0.lock().unwrap().push(OutcomeKind::Error);
        }
    }

    #[test]
    fn report_dispatches_to_matching_channel() {
        let collect = Collect::default();
        collect.report(AuthOutcome::Success {
            user: "alice".into(),
            info: None,
        });
        collect.report(AuthOutcome::Fail {
            info: None,
            status: Some(400),
        });
        collect.report(AuthOutcome::Error(TurnstileError::Internal("x".into())));

        assert_eq!(
            *collect.0.lock().unwrap(),
            vec![OutcomeKind::Success, OutcomeKind::Fail, OutcomeKind::Error]
        );
    }

    #[test]
    fn traits_are_object_safe() {
        fn _assert_reporter(_: Arc<dyn AuthReporter<String>>) {}
        fn _assert_strategy(_: Box<dyn Strategy<String>>) {}
    }
}
