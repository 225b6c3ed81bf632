// SPDX-FileCopyrightText: 2026 Turnstile Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Credential extraction from the request body and query.

use serde::Serialize;
use serde_json::{Map, Value};
use turnstile_core::{is_truthy, AuthRequest, FieldPath};

/// Credentials handed to the verify callback.
///
/// `user` maps every configured field name (identity and extras) to the
/// value found for it, `null` when nothing was found. `identity` repeats the
/// identity field's value for convenience.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub user: Map<String, Value>,
    pub identity: Value,
}

impl Credentials {
    /// Value collected for `field`, treating `null` as absent.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.user.get(field).filter(|v| !v.is_null())
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    pub fn identity_str(&self) -> Option<&str> {
        self.identity.as_str()
    }
}

/// Resolve one field: the body wins when it holds a truthy value, otherwise
/// whatever the query holds (possibly nothing).
pub fn resolve_field(request: &AuthRequest, field: &FieldPath) -> Value {
    match field.lookup(&request.body) {
        Some(value) if is_truthy(value) => value.clone(),
        _ => field.lookup(&request.query).cloned().unwrap_or(Value::Null),
    }
}

/// Build the credentials for one request.
///
/// Extras are collected first; the identity is written last so it wins
/// when an extra field shares its name.
pub(crate) fn extract(
    request: &AuthRequest,
    identity_field: &FieldPath,
    extra_fields: &[FieldPath],
) -> Credentials {
    let mut user: Map<String, Value> = extra_fields
        .iter()
        .map(|field| (field.as_str().to_string(), resolve_field(request, field)))
        .collect();

    let identity = resolve_field(request, identity_field);
    user.insert(identity_field.as_str().to_string(), identity.clone());

    Credentials { user, identity }
}
