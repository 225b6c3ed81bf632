// SPDX-FileCopyrightText: 2026 Turnstile Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Turnstile authentication framework.

use thiserror::Error;

/// The primary error type used by strategies and the host reporting channel.
#[derive(Debug, Error)]
pub enum TurnstileError {
    /// Construction-time configuration errors (missing verify callback, malformed field names).
    #[error("configuration error: {0}")]
    Config(String),

    /// The application's verify callback reported or returned an error.
    #[error("verification error: {message}")]
    Verify {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The verify callback panicked while it was being invoked.
    #[error("verify callback panicked: {0}")]
    Panicked(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl TurnstileError {
    /// Build a [`TurnstileError::Verify`] without an underlying source.
    pub fn verify(message: impl Into<String>) -> Self {
        Self::Verify {
            message: message.into(),
            source: None,
        }
    }

    /// Build a [`TurnstileError::Verify`] wrapping the error that caused it.
    pub fn verify_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Verify {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns `true` for errors raised while constructing a strategy.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
