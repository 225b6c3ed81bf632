// SPDX-FileCopyrightText: 2026 Turnstile Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared between strategies and the host framework.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumString};

use crate::error::TurnstileError;

/// An incoming request as seen by a strategy.
///
/// The host framework parses the request upstream; strategies only get
/// read access to the decoded body and query trees. Either tree may be
/// `Value::Null` when the request carried nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthRequest {
    /// Decoded request body fields.
    #[serde(default)]
    pub body: Value,

    /// Decoded query-string fields.
    #[serde(default)]
    pub query: Value,
}

impl AuthRequest {
    /// Create a request with empty body and query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the body tree.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    /// Replace the query tree.
    pub fn with_query(mut self, query: Value) -> Self {
        self.query = query;
        self
    }
}

/// Per-call options supplied by the host when it invokes a strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticateOptions {
    /// Message reported when the request carries no credentials.
    #[serde(default)]
    pub bad_request_message: Option<String>,
}

impl AuthenticateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bad_request_message(mut self, message: impl Into<String>) -> Self {
        self.bad_request_message = Some(message.into());
        self
    }
}

/// Diagnostic information attached to a success or failure report.
///
/// `message` is the conventional human-readable part; anything else the
/// application wants to hand back to the host goes in `details`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl AuthInfo {
    /// Info carrying only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            details: Map::new(),
        }
    }

    /// Attach an extra detail entry.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

/// Which of the three host channels an outcome was reported on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    Success,
    Fail,
    Error,
}

/// A single authentication result as delivered to the host.
#[derive(Debug)]
pub enum AuthOutcome<U> {
    /// Credentials were accepted.
    Success { user: U, info: Option<AuthInfo> },
    /// Credentials were missing or rejected. `status` carries an HTTP-style
    /// status code when the strategy has an opinion about it.
    Fail {
        info: Option<AuthInfo>,
        status: Option<u16>,
    },
    /// Verification could not be completed.
    Error(TurnstileError),
}

impl<U> AuthOutcome<U> {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            AuthOutcome::Success { .. } => OutcomeKind::Success,
            AuthOutcome::Fail { .. } => OutcomeKind::Fail,
            AuthOutcome::Error(_) => OutcomeKind::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Success { .. })
    }

    /// The info attached to a success or failure, if any.
    pub fn info(&self) -> Option<&AuthInfo> {
        match self {
            AuthOutcome::Success { info, .. } | AuthOutcome::Fail { info, .. } => info.as_ref(),
            AuthOutcome::Error(_) => None,
        }
    }
}
