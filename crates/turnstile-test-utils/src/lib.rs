// SPDX-FileCopyrightText: 2026 Turnstile Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Turnstile strategy tests.
//!
//! Provides a mock host and a small harness for driving strategies in
//! fast, deterministic tests.
//!
//! # Components
//!
//! - [`RecordingReporter`] - Mock host reporter capturing every outcome
//! - [`StrategyHarness`] - Runs a strategy against a fresh reporter and waits for its outcome

pub mod harness;
pub mod recording_reporter;

pub use harness::StrategyHarness;
pub use recording_reporter::RecordingReporter;
