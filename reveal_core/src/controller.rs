// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reveal controller: per-section state machine, pending deadlines, and
//! animation sampling.
//!
//! Each section moves through
//!
//! ```text
//!   Hidden ──(trigger)──► Hidden + deadline ──(tick ≥ deadline)──► Revealed
//! ```
//!
//! where the trigger is the first in-view observation ([`Trigger::Viewport`])
//! or the mount itself ([`Trigger::Mount`]). The deadline is the section's
//! timer handle: it lives inside the section's slot, so unmounting the
//! section drops it and the transition can never fire against a destroyed
//! block. `Revealed` is terminal.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::config::{ResolvedOptions, RevealConfig};
use crate::motion::Presentation;
use crate::section::{RevealOptions, RevealState, SectionId, Trigger};
use crate::time::HostTime;
use crate::trace::{
    FailOpenEvent, RevealCancelledEvent, RevealFinishedEvent, RevealScheduledEvent,
    RevealStartedEvent, SectionMountedEvent, SectionUnmountedEvent, Tracer, VisibilityEvent,
};
use crate::visibility::{VisibilityEntry, VisibilitySupport, is_in_view};

/// Per-tick output of [`RevealController::tick`], consumed by a
/// [`Presenter`](crate::backend::Presenter).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealChanges {
    /// Sections mounted since the previous tick, in mount order. Their
    /// current presentation is the initial one (hidden, or revealed when
    /// failing open).
    pub mounted: Vec<SectionId>,
    /// Sections whose transition started on this tick, in deadline order.
    pub revealed: Vec<SectionId>,
    /// Sections whose presentation changed on this tick.
    pub updated: Vec<SectionId>,
    /// Sections whose transition completed on this tick.
    pub finished: Vec<SectionId>,
    /// Sections unmounted since the previous tick. These handles are stale.
    pub removed: Vec<SectionId>,
}

impl RevealChanges {
    /// Returns `true` if nothing happened.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mounted.is_empty()
            && self.revealed.is_empty()
            && self.updated.is_empty()
            && self.finished.is_empty()
            && self.removed.is_empty()
    }
}

#[derive(Clone, Debug)]
struct Section {
    settings: ResolvedOptions,
    trigger: Trigger,
    state: RevealState,
    deadline: Option<HostTime>,
    started_at: Option<HostTime>,
    animating: bool,
    presentation: Presentation,
}

/// Owns every section on a page and decides when each one reveals.
///
/// The controller is platform-independent: backends feed it visibility
/// observations ([`observe`](Self::observe),
/// [`observe_bounds`](Self::observe_bounds)) and frame times
/// ([`tick`](Self::tick)), and apply the resulting [`RevealChanges`].
///
/// # Usage
///
/// ```rust,ignore
/// let id = controller.mount(RevealOptions::new().delay_secs(0.2, tb), now, &mut tracer);
/// // ... platform reports that the block scrolled into view ...
/// controller.observe(id, true, now, &mut tracer);
/// // ... every frame ...
/// let changes = controller.tick(now, &mut tracer);
/// presenter.apply(&controller, &changes);
/// ```
#[derive(Debug)]
pub struct RevealController {
    config: RevealConfig,
    support: VisibilitySupport,
    sections: Vec<Option<Section>>,
    generation: Vec<u32>,
    free_list: Vec<u32>,
    live: usize,
    pending_mounted: Vec<SectionId>,
    pending_removed: Vec<SectionId>,
}

impl RevealController {
    /// Creates an empty controller.
    ///
    /// With [`VisibilitySupport::Unavailable`] every section mounts already
    /// revealed (fail-open).
    #[must_use]
    pub fn new(config: RevealConfig, support: VisibilitySupport) -> Self {
        Self {
            config,
            support,
            sections: Vec::new(),
            generation: Vec::new(),
            free_list: Vec::new(),
            live: 0,
            pending_mounted: Vec::new(),
            pending_removed: Vec::new(),
        }
    }

    /// Returns the controller-wide defaults.
    #[must_use]
    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Returns the visibility support this controller was created with.
    #[must_use]
    pub fn support(&self) -> VisibilitySupport {
        self.support
    }

    // -- Lifecycle --

    /// Mounts a section and returns its handle.
    pub fn mount(
        &mut self,
        options: RevealOptions,
        now: HostTime,
        tracer: &mut Tracer<'_>,
    ) -> SectionId {
        let settings = self.config.resolve(&options);
        let mut section = Section {
            settings,
            trigger: options.trigger,
            state: RevealState::Hidden,
            deadline: None,
            started_at: None,
            animating: false,
            presentation: settings.motion.hidden(),
        };

        let fail_open = self.support == VisibilitySupport::Unavailable;
        if fail_open {
            section.state = RevealState::Revealed;
            section.presentation = Presentation::REVEALED;
        } else if options.trigger == Trigger::Mount {
            section.deadline = Some(now.saturating_add(settings.delay));
        }
        let deadline = section.deadline;

        let id = self.allocate(section);
        self.pending_mounted.push(id);

        tracer.section_mounted(&SectionMountedEvent {
            section: id,
            time: now,
            trigger: options.trigger,
        });
        if fail_open {
            tracer.fail_open(&FailOpenEvent {
                section: id,
                time: now,
            });
        } else if let Some(deadline) = deadline {
            tracer.reveal_scheduled(&RevealScheduledEvent {
                section: id,
                triggered_at: now,
                deadline,
            });
        }
        id
    }

    /// Unmounts a section, dropping any pending reveal.
    ///
    /// Returns `false` (and does nothing) if the handle is stale.
    pub fn unmount(&mut self, id: SectionId, tracer: &mut Tracer<'_>) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        let slot = id.idx as usize;
        let Some(section) = self.sections[slot].take() else {
            return false;
        };

        if let Some(deadline) = section.deadline {
            tracer.reveal_cancelled(&RevealCancelledEvent {
                section: id,
                deadline,
            });
        }
        tracer.section_unmounted(&SectionUnmountedEvent {
            section: id,
            revealed: section.state == RevealState::Revealed,
        });

        // Bump generation so old handles immediately fail validation.
        self.generation[slot] = self.generation[slot].wrapping_add(1);
        self.free_list.push(id.idx);
        self.live -= 1;

        // A section that never reached a presenter is simply forgotten.
        if let Some(pos) = self.pending_mounted.iter().position(|&m| m == id) {
            self.pending_mounted.remove(pos);
        } else {
            self.pending_removed.push(id);
        }
        true
    }

    /// Unmounts every section (page navigation).
    pub fn clear(&mut self, tracer: &mut Tracer<'_>) {
        let ids: Vec<SectionId> = self.sections().collect();
        for id in ids {
            self.unmount(id, tracer);
        }
    }

    // -- Observation --

    /// Records a visibility observation for a section.
    ///
    /// The first in-view observation of a hidden, viewport-triggered section
    /// schedules its reveal `delay` after `now`. Everything else is ignored:
    /// later observations, out-of-view observations, observations of
    /// mount-triggered sections, and stale handles.
    pub fn observe(
        &mut self,
        id: SectionId,
        is_intersecting: bool,
        now: HostTime,
        tracer: &mut Tracer<'_>,
    ) {
        let Some(section) = self.section_mut(id) else {
            return;
        };
        let accepted = is_intersecting
            && section.state == RevealState::Hidden
            && section.deadline.is_none()
            && section.trigger == Trigger::Viewport;
        let deadline = now.saturating_add(section.settings.delay);
        if accepted {
            section.deadline = Some(deadline);
        }

        tracer.visibility(&VisibilityEvent {
            section: id,
            time: now,
            is_intersecting,
            accepted,
        });
        if accepted {
            tracer.reveal_scheduled(&RevealScheduledEvent {
                section: id,
                triggered_at: now,
                deadline,
            });
        }
    }

    /// Records a push-style [`VisibilityEntry`].
    pub fn observe_entry(&mut self, entry: &VisibilityEntry, tracer: &mut Tracer<'_>) {
        self.observe(entry.section, entry.is_intersecting, entry.time, tracer);
    }

    /// Tests `bounds` against `viewport` using the section's margin and
    /// amount, then records the result with [`observe`](Self::observe).
    ///
    /// Both rectangles must be in the same coordinate space.
    pub fn observe_bounds(
        &mut self,
        id: SectionId,
        viewport: Rect,
        bounds: Rect,
        now: HostTime,
        tracer: &mut Tracer<'_>,
    ) {
        let Some(settings) = self.settings(id) else {
            return;
        };
        let visible = is_in_view(viewport, &settings.margin, settings.amount, bounds);
        self.observe(id, visible, now, tracer);
    }

    // -- Frame --

    /// Fires due reveals and advances running transitions to `now`.
    #[must_use]
    pub fn tick(&mut self, now: HostTime, tracer: &mut Tracer<'_>) -> RevealChanges {
        let mut changes = RevealChanges {
            mounted: core::mem::take(&mut self.pending_mounted),
            removed: core::mem::take(&mut self.pending_removed),
            ..RevealChanges::default()
        };

        // 1. Due deadlines, earliest first.
        let mut due: Vec<(HostTime, usize)> = self
            .sections
            .iter()
            .enumerate()
            .filter_map(|(slot, s)| {
                let deadline = s.as_ref()?.deadline?;
                (deadline <= now).then_some((deadline, slot))
            })
            .collect();
        due.sort_unstable();

        for (deadline, slot) in due {
            let id = handle(&self.generation, slot);
            let Some(section) = self.sections[slot].as_mut() else {
                continue;
            };
            section.deadline = None;
            section.state = RevealState::Revealed;
            section.started_at = Some(now);
            section.animating = true;
            changes.revealed.push(id);
            tracer.reveal_started(&RevealStartedEvent {
                section: id,
                time: now,
                late_by: now.saturating_duration_since(deadline),
            });
        }

        // 2. Running transitions.
        for (slot, entry) in self.sections.iter_mut().enumerate() {
            let Some(section) = entry.as_mut() else {
                continue;
            };
            if !section.animating {
                continue;
            }
            let id = handle(&self.generation, slot);
            let motion = section.settings.motion;
            let elapsed = now.saturating_duration_since(section.started_at.unwrap_or(now));
            let next = motion.sample(elapsed);
            if next != section.presentation {
                section.presentation = next;
                changes.updated.push(id);
            }
            if motion.is_complete(elapsed) {
                section.animating = false;
                changes.finished.push(id);
                tracer.reveal_finished(&RevealFinishedEvent {
                    section: id,
                    time: now,
                });
            }
        }

        changes
    }

    // -- Queries --

    /// Returns whether the handle refers to a mounted section.
    #[must_use]
    pub fn is_alive(&self, id: SectionId) -> bool {
        let slot = id.idx as usize;
        slot < self.sections.len()
            && self.generation[slot] == id.generation
            && self.sections[slot].is_some()
    }

    /// Returns the section's reveal state.
    #[must_use]
    pub fn state(&self, id: SectionId) -> Option<RevealState> {
        self.section(id).map(|s| s.state)
    }

    /// Returns `true` once the section has revealed. Monotonic for the
    /// lifetime of the section; `false` for stale handles.
    #[must_use]
    pub fn has_revealed(&self, id: SectionId) -> bool {
        self.state(id) == Some(RevealState::Revealed)
    }

    /// Returns the section's current presentation.
    #[must_use]
    pub fn presentation(&self, id: SectionId) -> Option<Presentation> {
        self.section(id).map(|s| s.presentation)
    }

    /// Returns the section's effective settings.
    #[must_use]
    pub fn settings(&self, id: SectionId) -> Option<ResolvedOptions> {
        self.section(id).map(|s| s.settings)
    }

    /// Returns what starts the section's countdown.
    #[must_use]
    pub fn trigger(&self, id: SectionId) -> Option<Trigger> {
        self.section(id).map(|s| s.trigger)
    }

    /// Returns the section's pending reveal deadline, if one is scheduled.
    #[must_use]
    pub fn pending_deadline(&self, id: SectionId) -> Option<HostTime> {
        self.section(id).and_then(|s| s.deadline)
    }

    /// Returns the earliest pending reveal deadline across all sections.
    #[must_use]
    pub fn next_deadline(&self) -> Option<HostTime> {
        self.sections
            .iter()
            .filter_map(|s| s.as_ref()?.deadline)
            .min()
    }

    /// Returns `true` when no reveal is pending, no transition is running,
    /// and no lifecycle change awaits the next tick. A frame loop may sleep
    /// until the next observation.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending_mounted.is_empty()
            && self.pending_removed.is_empty()
            && self
                .sections
                .iter()
                .flatten()
                .all(|s| s.deadline.is_none() && !s.animating)
    }

    /// Iterates over live section handles in slot order.
    pub fn sections(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.sections
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_some())
            .map(|(slot, _)| handle(&self.generation, slot))
    }

    /// Number of mounted sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns `true` if no section is mounted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    // -- Internals --

    fn allocate(&mut self, section: Section) -> SectionId {
        let idx = if let Some(idx) = self.free_list.pop() {
            self.sections[idx as usize] = Some(section);
            idx
        } else {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "section counts stay far below u32::MAX"
            )]
            let idx = self.sections.len() as u32;
            self.sections.push(Some(section));
            self.generation.push(0);
            idx
        };
        self.live += 1;
        SectionId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    fn section(&self, id: SectionId) -> Option<&Section> {
        if !self.is_alive(id) {
            return None;
        }
        self.sections[id.idx as usize].as_ref()
    }

    fn section_mut(&mut self, id: SectionId) -> Option<&mut Section> {
        if !self.is_alive(id) {
            return None;
        }
        self.sections[id.idx as usize].as_mut()
    }
}

fn handle(generation: &[u32], slot: usize) -> SectionId {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "slots are allocated as u32 indices"
    )]
    let idx = slot as u32;
    SectionId {
        idx,
        generation: generation[slot],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::margin::ViewportMargin;
    use crate::time::{Duration, Timebase};

    const TB: Timebase = Timebase::NANOS;

    fn ms(v: u64) -> HostTime {
        HostTime(Duration::from_millis(v, TB).ticks())
    }

    fn controller() -> RevealController {
        RevealController::new(RevealConfig::standard(TB), VisibilitySupport::Available)
    }

    fn tracer() -> Tracer<'static> {
        Tracer::none()
    }

    #[test]
    fn starts_hidden_with_offset() {
        let mut c = controller();
        let id = c.mount(RevealOptions::new(), ms(0), &mut tracer());
        assert_eq!(c.state(id), Some(RevealState::Hidden));
        assert!(!c.has_revealed(id));
        assert_eq!(c.presentation(id), Some(Presentation::hidden(30.0)));

        let changes = c.tick(ms(16), &mut tracer());
        assert_eq!(changes.mounted, &[id]);
        assert!(changes.revealed.is_empty());
        assert!(c.is_idle());
    }

    #[test]
    fn never_observed_never_reveals() {
        let mut c = controller();
        let id = c.mount(RevealOptions::new(), ms(0), &mut tracer());
        for t in 1..100 {
            c.observe(id, false, ms(t * 16), &mut tracer());
            let _ = c.tick(ms(t * 16), &mut tracer());
        }
        assert!(!c.has_revealed(id));
        assert_eq!(c.next_deadline(), None);
    }

    #[test]
    fn reveals_after_delay() {
        let mut c = controller();
        let id = c.mount(RevealOptions::new().delay_secs(0.2, TB), ms(0), &mut tracer());
        c.observe(id, true, ms(1000), &mut tracer());
        assert_eq!(c.pending_deadline(id), Some(ms(1200)));

        let early = c.tick(ms(1199), &mut tracer());
        assert!(early.revealed.is_empty());
        assert!(!c.has_revealed(id));

        let fired = c.tick(ms(1200), &mut tracer());
        assert_eq!(fired.revealed, &[id]);
        assert!(c.has_revealed(id));
        assert_eq!(c.pending_deadline(id), None);
    }

    #[test]
    fn reveal_is_monotonic() {
        let mut c = controller();
        let id = c.mount(RevealOptions::new(), ms(0), &mut tracer());
        c.observe(id, true, ms(10), &mut tracer());
        let _ = c.tick(ms(10), &mut tracer());
        assert!(c.has_revealed(id));

        // Scrolling away and back changes nothing.
        c.observe(id, false, ms(20), &mut tracer());
        c.observe(id, true, ms(30), &mut tracer());
        assert_eq!(c.pending_deadline(id), None);
        for t in 2..100 {
            let changes = c.tick(ms(t * 16), &mut tracer());
            assert!(changes.revealed.is_empty());
            assert!(c.has_revealed(id));
        }
        assert_eq!(c.presentation(id), Some(Presentation::REVEALED));
    }

    #[test]
    fn later_intersections_do_not_reschedule() {
        let mut c = controller();
        let id = c.mount(RevealOptions::new().delay_secs(0.5, TB), ms(0), &mut tracer());
        c.observe(id, true, ms(100), &mut tracer());
        c.observe(id, false, ms(200), &mut tracer());
        c.observe(id, true, ms(300), &mut tracer());
        assert_eq!(c.pending_deadline(id), Some(ms(600)));
    }

    #[test]
    fn unmount_cancels_pending_reveal() {
        let mut c = controller();
        let id = c.mount(RevealOptions::new().delay_secs(0.3, TB), ms(0), &mut tracer());
        let _ = c.tick(ms(0), &mut tracer());
        c.observe(id, true, ms(100), &mut tracer());
        assert!(!c.is_idle());

        assert!(c.unmount(id, &mut tracer()));
        assert!(!c.is_alive(id));
        assert!(c.is_empty());

        let changes = c.tick(ms(1000), &mut tracer());
        assert_eq!(changes.removed, &[id]);
        assert!(changes.revealed.is_empty());
        assert!(changes.updated.is_empty());
        assert_eq!(c.next_deadline(), None);
        assert!(c.is_idle());

        // Second unmount is a no-op.
        assert!(!c.unmount(id, &mut tracer()));
    }

    #[test]
    fn stale_handle_does_not_alias_recycled_slot() {
        let mut c = controller();
        let old = c.mount(RevealOptions::new(), ms(0), &mut tracer());
        assert!(c.unmount(old, &mut tracer()));
        let new = c.mount(RevealOptions::new(), ms(0), &mut tracer());
        assert_eq!(old.index(), new.index(), "slot is reused");
        assert_ne!(old, new);

        c.observe(old, true, ms(5), &mut tracer());
        assert_eq!(c.pending_deadline(new), None, "stale observation ignored");
        assert_eq!(c.state(old), None);

        // Mounted and unmounted between ticks: never reported at all.
        let changes = c.tick(ms(10), &mut tracer());
        assert_eq!(changes.mounted, &[new]);
        assert!(changes.removed.is_empty());
    }

    #[test]
    fn siblings_reveal_in_delay_order() {
        let mut c = controller();
        let slow = c.mount(RevealOptions::new().delay_secs(0.3, TB), ms(0), &mut tracer());
        let fast = c.mount(RevealOptions::new(), ms(0), &mut tracer());
        c.observe(slow, true, ms(100), &mut tracer());
        c.observe(fast, true, ms(100), &mut tracer());

        let first = c.tick(ms(100), &mut tracer());
        assert_eq!(first.revealed, &[fast]);
        assert!(!c.has_revealed(slow));

        let second = c.tick(ms(400), &mut tracer());
        assert_eq!(second.revealed, &[slow]);
    }

    #[test]
    fn simultaneous_deadlines_fire_earliest_first() {
        let mut c = controller();
        let late = c.mount(RevealOptions::new().delay_secs(0.3, TB), ms(0), &mut tracer());
        let early = c.mount(RevealOptions::new().delay_secs(0.1, TB), ms(0), &mut tracer());
        c.observe(late, true, ms(0), &mut tracer());
        c.observe(early, true, ms(0), &mut tracer());
        // A long frame covers both deadlines.
        let changes = c.tick(ms(500), &mut tracer());
        assert_eq!(changes.revealed, &[early, late]);
    }

    #[test]
    fn transition_animates_then_finishes() {
        let mut c = controller();
        let id = c.mount(RevealOptions::new(), ms(0), &mut tracer());
        c.observe(id, true, ms(0), &mut tracer());
        let start = c.tick(ms(0), &mut tracer());
        assert_eq!(start.revealed, &[id]);
        assert!(start.updated.is_empty(), "elapsed zero keeps hidden pose");

        let mid = c.tick(ms(300), &mut tracer());
        assert_eq!(mid.updated, &[id]);
        let p = c.presentation(id).unwrap();
        assert!(p.opacity > 0.0 && p.opacity < 1.0);

        let end = c.tick(ms(600), &mut tracer());
        assert_eq!(end.finished, &[id]);
        assert_eq!(c.presentation(id), Some(Presentation::REVEALED));
        assert!(c.is_idle());
    }

    #[test]
    fn mount_trigger_ignores_visibility() {
        let mut c = controller();
        let id = c.mount(
            RevealOptions::new().delay_secs(0.4, TB).on_mount(),
            ms(50),
            &mut tracer(),
        );
        assert_eq!(c.pending_deadline(id), Some(ms(450)));
        c.observe(id, true, ms(60), &mut tracer());
        assert_eq!(c.pending_deadline(id), Some(ms(450)));

        let changes = c.tick(ms(450), &mut tracer());
        assert_eq!(changes.revealed, &[id]);
    }

    #[test]
    fn unavailable_support_fails_open() {
        let mut c = RevealController::new(
            RevealConfig::standard(TB),
            VisibilitySupport::Unavailable,
        );
        let id = c.mount(RevealOptions::new().delay_secs(1.0, TB), ms(0), &mut tracer());
        assert!(c.has_revealed(id));
        assert_eq!(c.presentation(id), Some(Presentation::REVEALED));
        assert_eq!(c.pending_deadline(id), None);

        let changes = c.tick(ms(0), &mut tracer());
        assert_eq!(changes.mounted, &[id]);
        assert!(changes.revealed.is_empty());
        assert!(c.is_idle());
    }

    #[test]
    fn observe_bounds_applies_section_margin() {
        let mut c = controller();
        let id = c.mount(RevealOptions::new(), ms(0), &mut tracer());
        let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);

        // 40 units of overlap: inside the viewport, outside the -60px region.
        let shallow = Rect::new(0.0, 760.0, 1280.0, 1160.0);
        c.observe_bounds(id, viewport, shallow, ms(10), &mut tracer());
        assert_eq!(c.pending_deadline(id), None);

        let deep = Rect::new(0.0, 720.0, 1280.0, 1120.0);
        c.observe_bounds(id, viewport, deep, ms(20), &mut tracer());
        assert_eq!(c.pending_deadline(id), Some(ms(20)));

        // A section with no margin counts the shallow overlap.
        let loose = c.mount(
            RevealOptions::new().margin(ViewportMargin::ZERO),
            ms(0),
            &mut tracer(),
        );
        c.observe_bounds(loose, viewport, shallow, ms(30), &mut tracer());
        assert_eq!(c.pending_deadline(loose), Some(ms(30)));
    }

    #[test]
    fn clear_unmounts_everything() {
        let mut c = controller();
        let a = c.mount(RevealOptions::new(), ms(0), &mut tracer());
        let b = c.mount(RevealOptions::new().on_mount(), ms(0), &mut tracer());
        let _ = c.tick(ms(0), &mut tracer());
        c.clear(&mut tracer());
        assert!(c.is_empty());
        assert!(!c.is_alive(a) && !c.is_alive(b));
        let changes = c.tick(ms(16), &mut tracer());
        assert_eq!(changes.removed.len(), 2);
        assert!(changes.revealed.is_empty());
    }

    #[cfg(feature = "trace")]
    #[test]
    fn cancellation_is_traced() {
        use crate::trace::TraceSink;

        #[derive(Default)]
        struct Counts {
            scheduled: usize,
            cancelled: usize,
            started: usize,
        }
        impl TraceSink for Counts {
            fn on_reveal_scheduled(&mut self, _: &RevealScheduledEvent) {
                self.scheduled += 1;
            }
            fn on_reveal_cancelled(&mut self, _: &RevealCancelledEvent) {
                self.cancelled += 1;
            }
            fn on_reveal_started(&mut self, _: &RevealStartedEvent) {
                self.started += 1;
            }
        }

        let mut counts = Counts::default();
        let mut c = controller();
        {
            let mut t = Tracer::new(&mut counts);
            let id = c.mount(RevealOptions::new().delay_secs(0.2, TB), ms(0), &mut t);
            c.observe(id, true, ms(0), &mut t);
            c.unmount(id, &mut t);
            let _ = c.tick(ms(500), &mut t);
        }
        assert_eq!(counts.scheduled, 1);
        assert_eq!(counts.cancelled, 1);
        assert_eq!(counts.started, 0);
    }
}
