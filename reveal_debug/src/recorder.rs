// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps every event, in
//! arrival order, as a [`RecordedEvent`].

use reveal_core::section::SectionId;
use reveal_core::trace::{
    FailOpenEvent, RevealCancelledEvent, RevealFinishedEvent, RevealScheduledEvent,
    RevealStartedEvent, SectionMountedEvent, SectionUnmountedEvent, TraceSink, VisibilityEvent,
};

/// One recorded trace event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecordedEvent {
    /// See [`TraceSink::on_section_mounted`].
    SectionMounted(SectionMountedEvent),
    /// See [`TraceSink::on_visibility`].
    Visibility(VisibilityEvent),
    /// See [`TraceSink::on_reveal_scheduled`].
    RevealScheduled(RevealScheduledEvent),
    /// See [`TraceSink::on_reveal_started`].
    RevealStarted(RevealStartedEvent),
    /// See [`TraceSink::on_reveal_finished`].
    RevealFinished(RevealFinishedEvent),
    /// See [`TraceSink::on_reveal_cancelled`].
    RevealCancelled(RevealCancelledEvent),
    /// See [`TraceSink::on_section_unmounted`].
    SectionUnmounted(SectionUnmountedEvent),
    /// See [`TraceSink::on_fail_open`].
    FailOpen(FailOpenEvent),
}

impl RecordedEvent {
    /// The section the event is about.
    #[must_use]
    pub fn section(&self) -> SectionId {
        match self {
            Self::SectionMounted(e) => e.section,
            Self::Visibility(e) => e.section,
            Self::RevealScheduled(e) => e.section,
            Self::RevealStarted(e) => e.section,
            Self::RevealFinished(e) => e.section,
            Self::RevealCancelled(e) => e.section,
            Self::SectionUnmounted(e) => e.section,
            Self::FailOpen(e) => e.section,
        }
    }
}

/// A [`TraceSink`] that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events in arrival order.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Events about one section, in arrival order.
    pub fn for_section(&self, section: SectionId) -> impl Iterator<Item = &RecordedEvent> + '_ {
        self.events.iter().filter(move |e| e.section() == section)
    }

    /// Sections whose reveal started, in start order.
    #[must_use]
    pub fn reveal_order(&self) -> Vec<SectionId> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RecordedEvent::RevealStarted(s) => Some(s.section),
                _ => None,
            })
            .collect()
    }

    /// Discards all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TraceSink for RecorderSink {
    fn on_section_mounted(&mut self, e: &SectionMountedEvent) {
        self.events.push(RecordedEvent::SectionMounted(*e));
    }

    fn on_visibility(&mut self, e: &VisibilityEvent) {
        self.events.push(RecordedEvent::Visibility(*e));
    }

    fn on_reveal_scheduled(&mut self, e: &RevealScheduledEvent) {
        self.events.push(RecordedEvent::RevealScheduled(*e));
    }

    fn on_reveal_started(&mut self, e: &RevealStartedEvent) {
        self.events.push(RecordedEvent::RevealStarted(*e));
    }

    fn on_reveal_finished(&mut self, e: &RevealFinishedEvent) {
        self.events.push(RecordedEvent::RevealFinished(*e));
    }

    fn on_reveal_cancelled(&mut self, e: &RevealCancelledEvent) {
        self.events.push(RecordedEvent::RevealCancelled(*e));
    }

    fn on_section_unmounted(&mut self, e: &SectionUnmountedEvent) {
        self.events.push(RecordedEvent::SectionUnmounted(*e));
    }

    fn on_fail_open(&mut self, e: &FailOpenEvent) {
        self.events.push(RecordedEvent::FailOpen(*e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reveal_core::config::RevealConfig;
    use reveal_core::controller::RevealController;
    use reveal_core::section::{RevealOptions, Trigger};
    use reveal_core::time::{HostTime, Timebase};
    use reveal_core::trace::Tracer;
    use reveal_core::visibility::VisibilitySupport;

    const TB: Timebase = Timebase::NANOS;

    #[test]
    fn records_a_full_lifecycle() {
        let mut rec = RecorderSink::new();
        let mut c = RevealController::new(RevealConfig::standard(TB), VisibilitySupport::Available);
        let id = {
            let mut t = Tracer::new(&mut rec);
            let id = c.mount(RevealOptions::new(), HostTime(0), &mut t);
            c.observe(id, true, HostTime(10), &mut t);
            let _ = c.tick(HostTime(10), &mut t);
            let _ = c.tick(HostTime(10 + 600_000_000), &mut t);
            c.unmount(id, &mut t);
            id
        };

        let kinds: Vec<&str> = rec
            .for_section(id)
            .map(|e| match e {
                RecordedEvent::SectionMounted(_) => "mounted",
                RecordedEvent::Visibility(_) => "visibility",
                RecordedEvent::RevealScheduled(_) => "scheduled",
                RecordedEvent::RevealStarted(_) => "started",
                RecordedEvent::RevealFinished(_) => "finished",
                RecordedEvent::RevealCancelled(_) => "cancelled",
                RecordedEvent::SectionUnmounted(_) => "unmounted",
                RecordedEvent::FailOpen(_) => "fail_open",
            })
            .collect();
        assert_eq!(
            kinds,
            [
                "mounted",
                "visibility",
                "scheduled",
                "started",
                "finished",
                "unmounted"
            ]
        );
        assert_eq!(rec.reveal_order(), [id]);
        assert_eq!(
            rec.events()[0],
            RecordedEvent::SectionMounted(SectionMountedEvent {
                section: id,
                time: HostTime(0),
                trigger: Trigger::Viewport,
            })
        );
    }

    #[test]
    fn fail_open_is_recorded_without_reveal_events() {
        let mut rec = RecorderSink::new();
        let mut c =
            RevealController::new(RevealConfig::standard(TB), VisibilitySupport::Unavailable);
        {
            let mut t = Tracer::new(&mut rec);
            c.mount(RevealOptions::new(), HostTime(5), &mut t);
            let _ = c.tick(HostTime(5), &mut t);
        }
        assert!(matches!(rec.events()[1], RecordedEvent::FailOpen(_)));
        assert!(rec.reveal_order().is_empty());

        rec.clear();
        assert!(rec.events().is_empty());
    }
}
