// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic scroll simulation and reveal metrics.
//!
//! [`ScrollHarness`] plays the role of a browser backend without a browser:
//! it owns a [`RevealController`], a viewport of fixed size, a scroll offset
//! and a frame clock. Every [`step`](ScrollHarness::step) advances the clock
//! by one frame, tests each section's document-space bounds against the
//! scrolled viewport, and ticks the controller.
//!
//! [`RevealTimeline`] records what happened to each section so tests can
//! assert on latency and ordering.

#![no_std]

extern crate alloc;

mod timeline;

pub use timeline::{RevealTimeline, TimelineEntry, TimelineReport};

use alloc::vec::Vec;

use kurbo::{Rect, Size, Vec2};
use reveal_core::config::RevealConfig;
use reveal_core::controller::{RevealChanges, RevealController};
use reveal_core::frame::FrameTick;
use reveal_core::section::{RevealOptions, SectionId, Trigger};
use reveal_core::time::{Duration, HostTime};
use reveal_core::trace::Tracer;
use reveal_core::visibility::{VisibilitySupport, is_in_view};

/// Nanoseconds per frame at 60 Hz.
const FRAME_NANOS_60HZ: u64 = 16_666_667;

/// A simulated page: viewport, scroll position, clock and sections.
#[derive(Debug)]
pub struct ScrollHarness {
    controller: RevealController,
    viewport: Size,
    scroll_y: f64,
    now: HostTime,
    frame_interval: Duration,
    frame_index: u64,
    /// Document-space bounds of each live section.
    bounds: Vec<(SectionId, Rect)>,
    timeline: RevealTimeline,
}

impl ScrollHarness {
    /// Creates a harness at time zero, scrolled to the top, ticking at
    /// 60 Hz in `config.timebase`.
    #[must_use]
    pub fn new(config: RevealConfig, support: VisibilitySupport, viewport: Size) -> Self {
        let frame_interval = Duration::from_nanos(FRAME_NANOS_60HZ, config.timebase);
        Self {
            controller: RevealController::new(config, support),
            viewport,
            scroll_y: 0.0,
            now: HostTime(0),
            frame_interval,
            frame_index: 0,
            bounds: Vec::new(),
            timeline: RevealTimeline::default(),
        }
    }

    /// Overrides the frame interval.
    #[must_use]
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    /// Mounts a section occupying `bounds` in document coordinates.
    pub fn mount(
        &mut self,
        options: RevealOptions,
        bounds: Rect,
        tracer: &mut Tracer<'_>,
    ) -> SectionId {
        let id = self.controller.mount(options, self.now, tracer);
        self.bounds.push((id, bounds));
        self.timeline.on_mount(
            id,
            self.now,
            self.controller.pending_deadline(id),
            self.controller.has_revealed(id),
        );
        id
    }

    /// Unmounts a section.
    pub fn unmount(&mut self, id: SectionId, tracer: &mut Tracer<'_>) -> bool {
        self.bounds.retain(|(b, _)| *b != id);
        let removed = self.controller.unmount(id, tracer);
        if removed {
            self.timeline.on_unmount(id, self.now);
        }
        removed
    }

    /// Unmounts everything (page navigation) and scrolls back to the top.
    pub fn navigate(&mut self, tracer: &mut Tracer<'_>) {
        let ids: Vec<SectionId> = self.bounds.iter().map(|(id, _)| *id).collect();
        for id in ids {
            self.unmount(id, tracer);
        }
        self.scroll_y = 0.0;
    }

    /// Sets the scroll offset (clamped at zero).
    pub fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y.max(0.0);
    }

    /// Moves the scroll offset by `dy`.
    pub fn scroll_by(&mut self, dy: f64) {
        self.scroll_to(self.scroll_y + dy);
    }

    /// Current scroll offset.
    #[must_use]
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// The visible region in document coordinates.
    #[must_use]
    pub fn viewport_rect(&self) -> Rect {
        Rect::from_origin_size((0.0, self.scroll_y), self.viewport)
    }

    /// Current simulated time.
    #[must_use]
    pub fn now(&self) -> HostTime {
        self.now
    }

    /// Time between frames.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// The controller under test.
    #[must_use]
    pub fn controller(&self) -> &RevealController {
        &self.controller
    }

    /// What has happened so far.
    #[must_use]
    pub fn timeline(&self) -> &RevealTimeline {
        &self.timeline
    }

    /// Advances one frame: observe every section against the current
    /// viewport, then tick.
    pub fn step(&mut self, tracer: &mut Tracer<'_>) -> RevealChanges {
        self.now = self.now.saturating_add(self.frame_interval);
        let tick = FrameTick {
            now: self.now,
            frame_index: self.frame_index,
        };
        self.frame_index += 1;

        // Work in viewport coordinates, the way a browser reports them.
        let viewport = Rect::from_origin_size((0.0, 0.0), self.viewport);
        let offset = Vec2::new(0.0, -self.scroll_y);
        for &(id, doc_bounds) in &self.bounds {
            let (Some(settings), Some(trigger)) =
                (self.controller.settings(id), self.controller.trigger(id))
            else {
                continue;
            };
            if trigger != Trigger::Viewport || self.controller.has_revealed(id) {
                continue;
            }
            let bounds = doc_bounds + offset;
            let visible = is_in_view(viewport, &settings.margin, settings.amount, bounds);
            self.controller.observe(id, visible, tick.now, tracer);
            if visible {
                self.timeline
                    .on_in_view(id, tick.now, self.controller.pending_deadline(id));
            }
        }

        let changes = self.controller.tick(tick.now, tracer);
        self.timeline.on_changes(&changes, tick.now);
        changes
    }

    /// Steps until at least `duration` has elapsed.
    pub fn run_for(&mut self, duration: Duration, tracer: &mut Tracer<'_>) {
        let end = self.now.saturating_add(duration);
        while self.now < end {
            let _ = self.step(tracer);
        }
    }

    /// Steps until the controller is idle, at most `max_frames` times.
    /// Returns the number of frames stepped.
    pub fn run_until_idle(&mut self, max_frames: u64, tracer: &mut Tracer<'_>) -> u64 {
        let mut frames = 0;
        while frames < max_frames {
            let _ = self.step(tracer);
            frames += 1;
            if self.controller.is_idle() {
                break;
            }
        }
        frames
    }

    /// Scrolls from the current offset to `target` in steps of `per_frame`,
    /// stepping one frame after each move, then holds for `settle`.
    pub fn scroll_smoothly(
        &mut self,
        target: f64,
        per_frame: f64,
        settle: Duration,
        tracer: &mut Tracer<'_>,
    ) {
        let per_frame = per_frame.abs().max(f64::EPSILON);
        while (target - self.scroll_y).abs() > per_frame {
            let dy = if target > self.scroll_y {
                per_frame
            } else {
                -per_frame
            };
            self.scroll_by(dy);
            let _ = self.step(tracer);
        }
        self.scroll_to(target);
        let _ = self.step(tracer);
        self.run_for(settle, tracer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reveal_core::margin::ViewportMargin;
    use reveal_core::motion::Presentation;
    use reveal_core::section::RevealState;
    use reveal_core::time::Timebase;

    const TB: Timebase = Timebase::NANOS;
    const VIEWPORT: Size = Size::new(1280.0, 800.0);

    fn harness() -> ScrollHarness {
        ScrollHarness::new(
            RevealConfig::standard(TB),
            VisibilitySupport::Available,
            VIEWPORT,
        )
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v, TB)
    }

    /// A full-width block of height 400 whose top edge is at `top`.
    fn block(top: f64) -> Rect {
        Rect::new(0.0, top, 1280.0, top + 400.0)
    }

    #[test]
    fn above_the_fold_reveals_on_first_frame() {
        let mut h = harness();
        let mut t = Tracer::none();
        let id = h.mount(RevealOptions::new(), block(100.0), &mut t);
        let changes = h.step(&mut t);
        assert_eq!(changes.revealed, &[id]);
    }

    #[test]
    fn never_scrolled_into_view_never_reveals() {
        let mut h = harness();
        let mut t = Tracer::none();
        let id = h.mount(RevealOptions::new(), block(3000.0), &mut t);
        h.run_for(ms(5000), &mut t);
        assert!(!h.controller().has_revealed(id));
        assert_eq!(h.timeline().entry(id).and_then(|e| e.first_in_view), None);
    }

    #[test]
    fn negative_margin_waits_for_sixty_units_of_overlap() {
        let mut h = harness();
        let mut t = Tracer::none();
        // Top edge 200 below the fold.
        let id = h.mount(RevealOptions::new(), block(1000.0), &mut t);

        // Overlap 50: visible in the raw viewport, not past the margin.
        h.scroll_to(250.0);
        h.run_for(ms(500), &mut t);
        assert!(!h.controller().has_revealed(id));

        // Overlap 80: reveals (delay 0).
        h.scroll_to(280.0);
        let changes = h.step(&mut t);
        assert_eq!(changes.revealed, &[id]);
    }

    #[test]
    fn zero_margin_reveals_on_any_overlap() {
        let mut h = harness();
        let mut t = Tracer::none();
        let id = h.mount(
            RevealOptions::new().margin(ViewportMargin::ZERO),
            block(1000.0),
            &mut t,
        );
        h.scroll_to(205.0);
        let changes = h.step(&mut t);
        assert_eq!(changes.revealed, &[id]);
    }

    #[test]
    fn delay_is_honored_within_one_frame() {
        let mut h = harness();
        let mut t = Tracer::none();
        let id = h.mount(RevealOptions::new().delay_secs(0.2, TB), block(1000.0), &mut t);
        h.scroll_smoothly(400.0, 25.0, ms(1000), &mut t);

        let latency = h.timeline().reveal_latency(id).unwrap();
        assert!(latency >= ms(200), "revealed early: {latency:?}");
        assert!(
            latency < ms(200) + h.frame_interval(),
            "revealed late: {latency:?}"
        );
        assert!(h.timeline().lateness(id).unwrap() < h.frame_interval());
    }

    #[test]
    fn siblings_reveal_in_delay_order() {
        let mut h = harness();
        let mut t = Tracer::none();
        let row = Rect::new(0.0, 1000.0, 600.0, 1400.0);
        let second = h.mount(RevealOptions::new().delay_secs(0.3, TB), row, &mut t);
        let first = h.mount(RevealOptions::new(), row + Vec2::new(640.0, 0.0), &mut t);
        h.scroll_to(600.0);
        h.run_for(ms(1500), &mut t);

        assert_eq!(h.timeline().reveal_order(), [first, second]);
        let gap = h.timeline().entry(second).unwrap().revealed_at.unwrap()
            - h.timeline().entry(first).unwrap().revealed_at.unwrap();
        assert!(gap >= ms(300) && gap < ms(300) + h.frame_interval(), "{gap:?}");
    }

    #[test]
    fn unmount_before_delay_never_reveals() {
        let mut h = harness();
        let mut t = Tracer::none();
        let id = h.mount(RevealOptions::new().delay_secs(0.5, TB), block(100.0), &mut t);
        let _ = h.step(&mut t);
        assert!(h.controller().pending_deadline(id).is_some());

        h.run_for(ms(200), &mut t);
        assert!(h.unmount(id, &mut t));
        h.run_for(ms(1000), &mut t);

        let entry = h.timeline().entry(id).unwrap();
        assert_eq!(entry.revealed_at, None);
        assert!(entry.unmounted_at.is_some());
        assert!(h.controller().is_idle());
    }

    #[test]
    fn revealed_stays_revealed_after_scrolling_away() {
        let mut h = harness();
        let mut t = Tracer::none();
        let id = h.mount(RevealOptions::new(), block(1000.0), &mut t);
        h.scroll_smoothly(600.0, 40.0, ms(800), &mut t);
        assert_eq!(h.controller().state(id), Some(RevealState::Revealed));

        h.scroll_smoothly(0.0, 40.0, ms(800), &mut t);
        assert_eq!(h.controller().state(id), Some(RevealState::Revealed));
        assert_eq!(h.controller().presentation(id), Some(Presentation::REVEALED));
        assert_eq!(h.timeline().reveal_order(), [id]);
    }

    #[test]
    fn hero_intro_staggers_without_scrolling() {
        let mut h = ScrollHarness::new(
            RevealConfig::hero_intro(TB),
            VisibilitySupport::Available,
            VIEWPORT,
        );
        let mut t = Tracer::none();
        let ids: Vec<SectionId> = [0.2, 0.4, 0.6]
            .iter()
            .map(|&d| {
                h.mount(
                    RevealOptions::new().delay_secs(d, TB).on_mount(),
                    block(5000.0),
                    &mut t,
                )
            })
            .collect();
        h.run_until_idle(200, &mut t);
        assert_eq!(h.timeline().reveal_order(), ids);
        assert!(h.controller().is_idle());
    }

    #[test]
    fn unavailable_support_shows_everything() {
        let mut h = ScrollHarness::new(
            RevealConfig::standard(TB),
            VisibilitySupport::Unavailable,
            VIEWPORT,
        );
        let mut t = Tracer::none();
        let id = h.mount(RevealOptions::new(), block(9000.0), &mut t);
        let changes = h.step(&mut t);
        assert_eq!(changes.mounted, &[id]);
        assert!(h.controller().has_revealed(id));
        assert_eq!(h.controller().presentation(id), Some(Presentation::REVEALED));
        let report = h.timeline().report();
        assert_eq!(report.failed_open, 1);
        assert_eq!(report.pending, 0);
    }
}
