// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Timestamps
//! are converted to milliseconds using a [`Timebase`].

use std::io::Write;

use reveal_core::section::SectionId;
use reveal_core::time::{HostTime, Timebase};
use reveal_core::trace::{
    FailOpenEvent, RevealCancelledEvent, RevealFinishedEvent, RevealScheduledEvent,
    RevealStartedEvent, SectionMountedEvent, SectionUnmountedEvent, TraceSink, VisibilityEvent,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    timebase: Timebase,
    /// Skip visibility observations that did not schedule anything.
    quiet_visibility: bool,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("timebase", &self.timebase)
            .field("quiet_visibility", &self.quiet_visibility)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr(timebase: Timebase) -> Self {
        Self::new(Box::new(std::io::stderr()), timebase)
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>, timebase: Timebase) -> Self {
        Self::with_writer(writer, timebase)
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W, timebase: Timebase) -> Self {
        Self {
            writer,
            timebase,
            quiet_visibility: false,
        }
    }

    /// Omits visibility observations that were ignored. A scrolling page
    /// reports many of them.
    #[must_use]
    pub fn quiet_visibility(mut self, quiet: bool) -> Self {
        self.quiet_visibility = quiet;
        self
    }

    /// Consumes the sink and returns the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn ticks_to_ms(&self, ticks: u64) -> f64 {
        self.timebase.ticks_to_nanos(ticks) as f64 / 1e6
    }

    fn host_ms(&self, t: HostTime) -> f64 {
        self.ticks_to_ms(t.ticks())
    }
}

fn section(id: SectionId) -> String {
    format!("#{}.{}", id.index(), id.generation())
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_section_mounted(&mut self, e: &SectionMountedEvent) {
        let _ = writeln!(
            self.writer,
            "[mount] {} at {:.1}ms trigger={:?}",
            section(e.section),
            self.host_ms(e.time),
            e.trigger,
        );
    }

    fn on_visibility(&mut self, e: &VisibilityEvent) {
        if self.quiet_visibility && !e.accepted {
            return;
        }
        let seen = if e.is_intersecting { "in" } else { "out" };
        let outcome = if e.accepted { "accepted" } else { "ignored" };
        let _ = writeln!(
            self.writer,
            "[visibility] {} {seen} at {:.1}ms {outcome}",
            section(e.section),
            self.host_ms(e.time),
        );
    }

    fn on_reveal_scheduled(&mut self, e: &RevealScheduledEvent) {
        let _ = writeln!(
            self.writer,
            "[scheduled] {} at {:.1}ms deadline={:.1}ms",
            section(e.section),
            self.host_ms(e.triggered_at),
            self.host_ms(e.deadline),
        );
    }

    fn on_reveal_started(&mut self, e: &RevealStartedEvent) {
        let _ = writeln!(
            self.writer,
            "[reveal] {} at {:.1}ms late={:.2}ms",
            section(e.section),
            self.host_ms(e.time),
            self.ticks_to_ms(e.late_by.ticks()),
        );
    }

    fn on_reveal_finished(&mut self, e: &RevealFinishedEvent) {
        let _ = writeln!(
            self.writer,
            "[finished] {} at {:.1}ms",
            section(e.section),
            self.host_ms(e.time),
        );
    }

    fn on_reveal_cancelled(&mut self, e: &RevealCancelledEvent) {
        let _ = writeln!(
            self.writer,
            "[cancelled] {} deadline={:.1}ms",
            section(e.section),
            self.host_ms(e.deadline),
        );
    }

    fn on_section_unmounted(&mut self, e: &SectionUnmountedEvent) {
        let state = if e.revealed { "revealed" } else { "hidden" };
        let _ = writeln!(self.writer, "[unmount] {} {state}", section(e.section));
    }

    fn on_fail_open(&mut self, e: &FailOpenEvent) {
        let _ = writeln!(
            self.writer,
            "[fail-open] {} at {:.1}ms",
            section(e.section),
            self.host_ms(e.time),
        );
    }
}
