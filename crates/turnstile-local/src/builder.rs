// SPDX-FileCopyrightText: 2026 Turnstile Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builder for [`LocalStrategy`].

use std::sync::Arc;

use turnstile_config::{LocalSettings, DEFAULT_IDENTITY_FIELD};
use turnstile_core::{AuthRequest, FieldPath, TurnstileError};

use crate::credentials::Credentials;
use crate::verified::Verified;
use crate::{LocalStrategy, VerifyFn};

/// Collects settings and the verify callback, validating them in [`build`](Self::build).
pub struct LocalStrategyBuilder<U> {
    identity_field: String,
    extra_fields: Vec<String>,
    bad_request_message: Option<String>,
    verify: Option<Arc<VerifyFn<U>>>,
}

impl<U> Default for LocalStrategyBuilder<U> {
    fn default() -> Self {
        Self {
            identity_field: DEFAULT_IDENTITY_FIELD.to_string(),
            extra_fields: Vec::new(),
            bad_request_message: None,
            verify: None,
        }
    }
}

impl<U: Send + 'static> LocalStrategyBuilder<U> {
    /// Field holding the identity. Defaults to `username`.
    pub fn identity_field(mut self, name: impl Into<String>) -> Self {
        self.identity_field = name.into();
        self
    }

    pub fn extra_field(mut self, name: impl Into<String>) -> Self {
        self.extra_fields.push(name.into());
        self
    }

    pub fn extra_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_fields.extend(names.into_iter().map(Into::into));
        self
    }

    /// Default message for requests without an identity.
    pub fn bad_request_message(mut self, message: impl Into<String>) -> Self {
        self.bad_request_message = Some(message.into());
        self
    }

    /// Replace identity field, extra fields and message with `settings`.
    pub fn settings(mut self, settings: &LocalSettings) -> Self {
        self.identity_field = settings.identity_field.clone();
        self.extra_fields = settings.extra_fields.clone();
        self.bad_request_message = settings.bad_request_message.clone();
        self
    }

    /// The application's verify callback.
    pub fn verify<F>(mut self, verify: F) -> Self
    where
        F: Fn(&AuthRequest, Credentials, Verified<U>) -> Result<(), TurnstileError>
            + Send
            + Sync
            + 'static,
    {
        self.verify = Some(Arc::new(verify));
        self
    }

    /// Validate and build the strategy.
    ///
    /// Fails with [`TurnstileError::Config`] when no verify callback was
    /// given or a field name is not a valid path. Duplicate extra fields
    /// are collapsed, keeping the first occurrence.
    pub fn build(self) -> Result<LocalStrategy<U>, TurnstileError> {
        let verify = self.verify.ok_or_else(|| {
            TurnstileError::Config("local strategy requires a verify callback".to_string())
        })?;

        let identity_field = parse_field("identity field", &self.identity_field)?;

        let mut extra_fields: Vec<FieldPath> = Vec::with_capacity(self.extra_fields.len());
        for name in &self.extra_fields {
            let field = parse_field("extra field", name)?;
            if !extra_fields.contains(&field) {
                extra_fields.push(field);
            }
        }

        Ok(LocalStrategy {
            identity_field,
            extra_fields,
            bad_request_message: self.bad_request_message,
            verify,
        })
    }
}

fn parse_field(role: &str, name: &str) -> Result<FieldPath, TurnstileError> {
    FieldPath::parse(name)
        .map_err(|e| TurnstileError::Config(format!("invalid {role} `{name}`: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accept_all() -> LocalStrategyBuilder<String> {
        LocalStrategyBuilder::default().verify(|_req, creds, done| {
            done.success(creds.identity_str().unwrap_or_default().to_string(), None);
            Ok(())
        })
    }

    #[test]
    fn missing_verify_callback_is_a_config_error() {
        let err = LocalStrategyBuilder::<String>::default()
            .build()
            .expect_err("should require a verify callback");
        assert!(err.is_config());
        assert!(err.to_string().contains("requires a verify callback"));
    }

    #[test]
    fn defaults_to_username_and_no_extras() {
        let strategy = accept_all().build().unwrap();
        assert_eq!(strategy.identity_field().as_str(), "username");
        assert!(strategy.extra_fields().is_empty());
    }

    #[test]
    fn malformed_identity_field_is_rejected() {
        let err = accept_all().identity_field("user[").build().unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("identity field `user[`"));
    }

    #[test]
    fn empty_extra_field_is_rejected() {
        let err = accept_all().extra_field("").build().unwrap_err();
        assert!(err.to_string().contains("extra field"));
    }

    #[test]
    fn duplicate_extras_collapse_in_order() {
        let strategy = accept_all()
            .extra_fields(["password", "otp", "password"])
            .build()
            .unwrap();
        let names: Vec<&str> = strategy.extra_fields().iter().map(|f| f.as_str()).collect();
        assert_eq!(names, vec!["password", "otp"]);
    }

    #[test]
    fn settings_replace_builder_fields() {
        let settings = LocalSettings {
            identity_field: "email".into(),
            extra_fields: vec!["password".into()],
            bad_request_message: Some("Email required".into()),
        };
        let strategy = accept_all()
            .identity_field("ignored")
            .settings(&settings)
            .build()
            .unwrap();
        assert_eq!(strategy.identity_field().as_str(), "email");
        assert_eq!(strategy.extra_fields().len(), 1);
    }
}
