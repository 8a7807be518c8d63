// Copyright 2026 the Laminate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and JSON export for laminate layout
//! diagnostics.
//!
//! This crate provides [`TraceSink`](laminate_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`] — in-memory recording of every event as a
//!   [`recorder::RecordedEvent`].
//! - [`json::export`] — writes recorded events as a JSON array.

pub mod json;
pub mod pretty;
pub mod recorder;
