// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and Chrome trace export for reveal
//! diagnostics.
//!
//! This crate provides [`TraceSink`](reveal_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`] — in-memory event list for assertions and
//!   export.
//! - [`chrome::export`] — writes Chrome Trace Event Format JSON from recorded
//!   events, one track per section.

pub mod chrome;
pub mod pretty;
pub mod recorder;
