// SPDX-FileCopyrightText: 2026 Turnstile Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Field paths addressing values inside decoded request trees.
//!
//! A field name may address a nested value using dot or bracket notation:
//!
//! - `username` is a single top-level key
//! - `user[name]` and `user.name` both address `{"user": {"name": ..}}`
//! - `emails[0]` addresses the first element of an array
//!
//! Numeric segments index arrays; on objects they are ordinary keys.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Error returned when a field name is not a well-formed path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldPathError {
    #[error("field name must not be empty")]
    Empty,

    #[error("field name `{path}` has an empty segment at byte {offset}")]
    EmptySegment { path: String, offset: usize },

    #[error("field name `{path}` has an unclosed `[`")]
    UnclosedBracket { path: String },

    #[error("field name `{path}` has an unexpected `{found}` at byte {offset}")]
    Unexpected {
        path: String,
        found: char,
        offset: usize,
    },
}

/// A parsed field path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    raw: String,
    segments: Vec<String>,
}

impl FieldPath {
    /// Parse a field name in dot/bracket notation.
    pub fn parse(raw: &str) -> Result<Self, FieldPathError> {
        if raw.is_empty() {
            return Err(FieldPathError::Empty);
        }

        let mut segments = Vec::new();
        let mut current = String::new();
        let mut chars = raw.char_indices().peekable();
        // Set right after `]`: only `.`, `[` or end of input may follow.
        let mut after_bracket = false;

        while let Some((offset, c)) = chars.next() {
            match c {
                '.' => {
                    if after_bracket {
                        after_bracket = false;
                        // `a[0].` leaves nothing to address.
                        if chars.peek().is_none() {
                            return Err(empty_segment(raw, offset + 1));
                        }
                        continue;
                    }
                    if current.is_empty() {
                        return Err(empty_segment(raw, offset));
                    }
                    segments.push(std::mem::take(&mut current));
                    if chars.peek().is_none() {
                        return Err(empty_segment(raw, offset + 1));
                    }
                }
                '[' => {
                    if !after_bracket {
                        if current.is_empty() {
                            return Err(empty_segment(raw, offset));
                        }
                        segments.push(std::mem::take(&mut current));
                    }
                    let mut key = String::new();
                    let mut closed = false;
                    for (inner_offset, inner) in chars.by_ref() {
                        match inner {
                            ']' => {
                                closed = true;
                                break;
                            }
                            '[' => {
                                return Err(FieldPathError::Unexpected {
                                    path: raw.to_string(),
                                    found: '[',
                                    offset: inner_offset,
                                });
                            }
                            other => key.push(other),
                        }
                    }
                    if !closed {
                        return Err(FieldPathError::UnclosedBracket {
                            path: raw.to_string(),
                        });
                    }
                    if key.is_empty() {
                        return Err(empty_segment(raw, offset + 1));
                    }
                    segments.push(key);
                    after_bracket = true;
                }
                ']' => {
                    return Err(FieldPathError::Unexpected {
                        path: raw.to_string(),
                        found: ']',
                        offset,
                    });
                }
                other => {
                    if after_bracket {
                        return Err(FieldPathError::Unexpected {
                            path: raw.to_string(),
                            found: other,
                            offset,
                        });
                    }
                    current.push(other);
                }
            }
        }

        if !after_bracket {
            segments.push(current);
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// A single-segment path for a plain key. No notation is interpreted.
    pub fn key(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            segments: vec![name.clone()],
            raw: name,
        }
    }

    /// The field name exactly as it was written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Walk `tree` along this path.
    ///
    /// Returns `None` when any segment is missing, when a scalar is reached
    /// before the path is exhausted, or when the addressed value is `null`.
    pub fn lookup<'a>(&self, tree: &'a Value) -> Option<&'a Value> {
        let mut current = tree;
        for segment in &self.segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        match current {
            Value::Null => None,
            value => Some(value),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for FieldPath {
    type Err = FieldPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn empty_segment(raw: &str, offset: usize) -> FieldPathError {
    FieldPathError::EmptySegment {
        path: raw.to_string(),
        offset,
    }
}

/// Loose truthiness used when deciding whether a field "has a value".
///
/// `null`, `false`, `0` and `""` are falsy; everything else, including
/// empty arrays and objects, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
