// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-section reveal history and latency metrics.

use alloc::vec::Vec;

use reveal_core::controller::RevealChanges;
use reveal_core::section::SectionId;
use reveal_core::time::{Duration, HostTime};

/// What happened to one section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineEntry {
    /// The section.
    pub section: SectionId,
    /// Mount time.
    pub mounted_at: HostTime,
    /// First frame the section was inside the effective viewport.
    pub first_in_view: Option<HostTime>,
    /// When the reveal was due.
    pub deadline: Option<HostTime>,
    /// Tick on which the transition started (or mount time when failing
    /// open).
    pub revealed_at: Option<HostTime>,
    /// Tick on which the transition completed.
    pub finished_at: Option<HostTime>,
    /// Unmount time.
    pub unmounted_at: Option<HostTime>,
    /// Revealed at mount because visibility was unavailable.
    pub failed_open: bool,
}

/// Summary counts over a [`RevealTimeline`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimelineReport {
    /// Sections ever mounted.
    pub mounted: usize,
    /// Sections whose transition started.
    pub revealed: usize,
    /// Sections still waiting for their deadline.
    pub pending: usize,
    /// Sections never seen in view (and still mounted).
    pub unseen: usize,
    /// Sections unmounted with a reveal still pending.
    pub cancelled: usize,
    /// Sections revealed at mount without animation.
    pub failed_open: usize,
    /// Worst delay between a deadline and the tick that honoured it.
    pub max_lateness: Duration,
}

/// Reveal history for every section a harness has mounted.
#[derive(Clone, Debug, Default)]
pub struct RevealTimeline {
    entries: Vec<TimelineEntry>,
    /// Sections in the order their transitions started.
    order: Vec<SectionId>,
}

impl RevealTimeline {
    /// All entries in mount order.
    #[must_use]
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// The entry for `section`.
    #[must_use]
    pub fn entry(&self, section: SectionId) -> Option<&TimelineEntry> {
        self.entries.iter().find(|e| e.section == section)
    }

    /// Sections in the order their transitions started. Fail-open sections
    /// are not included.
    #[must_use]
    pub fn reveal_order(&self) -> Vec<SectionId> {
        self.order.clone()
    }

    /// Time from first being in view to the transition starting. Includes
    /// the section's delay.
    #[must_use]
    pub fn reveal_latency(&self, section: SectionId) -> Option<Duration> {
        let e = self.entry(section)?;
        Some(e.revealed_at?.saturating_duration_since(e.first_in_view?))
    }

    /// Time from the deadline to the tick that started the transition.
    #[must_use]
    pub fn lateness(&self, section: SectionId) -> Option<Duration> {
        let e = self.entry(section)?;
        Some(e.revealed_at?.saturating_duration_since(e.deadline?))
    }

    /// Summary counts.
    #[must_use]
    pub fn report(&self) -> TimelineReport {
        let mut report = TimelineReport {
            mounted: self.entries.len(),
            ..TimelineReport::default()
        };
        for e in &self.entries {
            if e.failed_open {
                report.failed_open += 1;
                continue;
            }
            match (e.revealed_at, e.deadline, e.unmounted_at) {
                (Some(revealed), Some(deadline), _) => {
                    report.revealed += 1;
                    report.max_lateness = report
                        .max_lateness
                        .max(revealed.saturating_duration_since(deadline));
                }
                (Some(_), None, _) => report.revealed += 1,
                (None, Some(_), Some(_)) => report.cancelled += 1,
                (None, Some(_), None) => report.pending += 1,
                (None, None, None) => report.unseen += 1,
                (None, None, Some(_)) => {}
            }
        }
        report
    }

    pub(crate) fn on_mount(
        &mut self,
        section: SectionId,
        now: HostTime,
        deadline: Option<HostTime>,
        revealed: bool,
    ) {
        self.entries.push(TimelineEntry {
            section,
            mounted_at: now,
            first_in_view: None,
            deadline,
            revealed_at: revealed.then_some(now),
            finished_at: None,
            unmounted_at: None,
            failed_open: revealed,
        });
    }

    pub(crate) fn on_in_view(
        &mut self,
        section: SectionId,
        now: HostTime,
        deadline: Option<HostTime>,
    ) {
        if let Some(e) = self.entry_mut(section)
            && e.first_in_view.is_none()
        {
            e.first_in_view = Some(now);
            if e.deadline.is_none() {
                e.deadline = deadline;
            }
        }
    }

    pub(crate) fn on_changes(&mut self, changes: &RevealChanges, now: HostTime) {
        for &id in &changes.revealed {
            if let Some(e) = self.entry_mut(id) {
                e.revealed_at = Some(now);
            }
            self.order.push(id);
        }
        for &id in &changes.finished {
            if let Some(e) = self.entry_mut(id) {
                e.finished_at = Some(now);
            }
        }
    }

    pub(crate) fn on_unmount(&mut self, section: SectionId, now: HostTime) {
        if let Some(e) = self.entry_mut(section) {
            e.unmounted_at = Some(now);
        }
    }

    fn entry_mut(&mut self, section: SectionId) -> Option<&mut TimelineEntry> {
        self.entries.iter_mut().find(|e| e.section == section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reveal_core::config::RevealConfig;
    use reveal_core::controller::RevealController;
    use reveal_core::section::RevealOptions;
    use reveal_core::time::Timebase;
    use reveal_core::trace::Tracer;
    use reveal_core::visibility::VisibilitySupport;

    #[test]
    fn report_classifies_sections() {
        let tb = Timebase::NANOS;
        let mut c = RevealController::new(RevealConfig::standard(tb), VisibilitySupport::Available);
        let mut t = Tracer::none();
        let mut timeline = RevealTimeline::default();

        let shown = c.mount(RevealOptions::new(), HostTime(0), &mut t);
        let waiting = c.mount(RevealOptions::new().delay_secs(1.0, tb), HostTime(0), &mut t);
        let unseen = c.mount(RevealOptions::new(), HostTime(0), &mut t);
        for id in [shown, waiting, unseen] {
            timeline.on_mount(id, HostTime(0), None, false);
        }

        for id in [shown, waiting] {
            c.observe(id, true, HostTime(10), &mut t);
            timeline.on_in_view(id, HostTime(10), c.pending_deadline(id));
        }
        let changes = c.tick(HostTime(20), &mut t);
        timeline.on_changes(&changes, HostTime(20));

        let report = timeline.report();
        assert_eq!(report.mounted, 3);
        assert_eq!(report.revealed, 1);
        assert_eq!(report.pending, 1);
        assert_eq!(report.unseen, 1);
        assert_eq!(report.max_lateness, Duration(10));
        assert_eq!(timeline.reveal_latency(shown), Some(Duration(10)));
        assert_eq!(timeline.reveal_latency(waiting), None);

        timeline.on_unmount(waiting, HostTime(30));
        assert_eq!(timeline.report().cancelled, 1);
    }
}
