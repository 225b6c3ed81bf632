// SPDX-FileCopyrightText: 2026 Turnstile Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks what serde attributes cannot express: field names must be
//! well-formed paths, extra fields must be unique, messages non-empty.

use std::collections::HashSet;

use turnstile_core::FieldPath;

use crate::diagnostic::ConfigError;
use crate::model::{LocalSettings, TurnstileConfig};

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &TurnstileConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    validate_local(&config.local, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_local(local: &LocalSettings, errors: &mut Vec<ConfigError>) {
    if let Err(source) = FieldPath::parse(&local.identity_field) {
        errors.push(ConfigError::InvalidFieldName {
            key: "local.identity_field".to_string(),
            source,
        });
    }

    let mut seen = HashSet::new();
    for (i, field) in local.extra_fields.iter().enumerate() {
        if let Err(source) = FieldPath::parse(field) {
            errors.push(ConfigError::InvalidFieldName {
                key: format!("local.extra_fields[{i}]"),
                source,
            });
            continue;
        }
        if !seen.insert(field.as_str()) {
            errors.push(ConfigError::Validation {
                message: format!("duplicate extra field `{field}` in local.extra_fields"),
            });
        }
    }

    if let Some(message) = &local.bad_request_message
        && message.trim().is_empty()
    {
        errors.push(ConfigError::Validation {
            message: "local.bad_request_message must not be empty when set".to_string(),
        });
    }
}
