// SPDX-FileCopyrightText: 2026 Turnstile Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./turnstile.toml` > `~/.config/turnstile/turnstile.toml` >
//! `/etc/turnstile/turnstile.toml` with environment variable overrides via `TURNSTILE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::TurnstileConfig;

pub(crate) const LOCAL_CONFIG_FILE: &str = "turnstile.toml";
pub(crate) const SYSTEM_CONFIG_FILE: &str = "/etc/turnstile/turnstile.toml";

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/turnstile/turnstile.toml` (system-wide)
/// 3. `~/.config/turnstile/turnstile.toml` (user XDG config)
/// 4. `./turnstile.toml` (local directory)
/// 5. `TURNSTILE_*` environment variables
pub fn load_config() -> Result<TurnstileConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<TurnstileConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TurnstileConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<TurnstileConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TurnstileConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(TurnstileConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_FILE))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// `~/.config/turnstile/turnstile.toml`, when the platform has a config dir.
pub(crate) fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("turnstile").join(LOCAL_CONFIG_FILE))
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `TURNSTILE_LOCAL_IDENTITY_FIELD` must map to
/// `local.identity_field`, not `local.identity.field`.
fn env_provider() -> Env {
    Env::prefixed("TURNSTILE_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        key.as_str().replacen("local_", "local.", 1).into()
    })
}
