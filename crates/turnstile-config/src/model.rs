// SPDX-FileCopyrightText: 2026 Turnstile Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for Turnstile strategies.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Field name the local strategy reads the identity from when unconfigured.
pub const DEFAULT_IDENTITY_FIELD: &str = "username";

/// Top-level Turnstile configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TurnstileConfig {
    /// Local (form/query field) strategy settings.
    #[serde(default)]
    pub local: LocalSettings,
}

/// Settings for the local strategy.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LocalSettings {
    /// Field holding the identity, in dot or bracket notation.
    #[serde(default = "default_identity_field")]
    pub identity_field: String,

    /// Additional fields collected and handed to the verify callback.
    #[serde(default)]
    pub extra_fields: Vec<String>,

    /// Default message for requests that carry no identity.
    /// Per-call options take precedence.
    #[serde(default)]
    pub bad_request_message: Option<String>,
}

impl Default for LocalSettings {
    fn default() -> Self {
        Self {
            identity_field: default_identity_field(),
            extra_fields: Vec::new(),
            bad_request_message: None,
        }
    }
}

fn default_identity_field() -> String {
    DEFAULT_IDENTITY_FIELD.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_settings_defaults() {
        let settings = LocalSettings::default();
        assert_eq!(settings.identity_field, "username");
        assert!(settings.extra_fields.is_empty());
        assert!(settings.bad_request_message.is_none());
    }

    #[test]
    fn partial_local_section_fills_defaults() {
        let toml_str = r#"
[local]
extra_fields = ["password"]
"#;
        let config: TurnstileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.local.identity_field, "username");
        assert_eq!(config.local.extra_fields, vec!["password"]);
    }

    #[test]
    fn local_deny_unknown_fields() {
        let toml_str = r#"
[local]
identity_feild = "email"
"#;
        let result = toml::from_str::<TurnstileConfig>(toml_str);
        assert!(result.is_err());
    }
}
