// SPDX-FileCopyrightText: 2026 Turnstile Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions at the seam between strategies and the host framework.

pub mod reporter;
pub mod strategy;

pub use reporter::AuthReporter;
pub use strategy::Strategy;
