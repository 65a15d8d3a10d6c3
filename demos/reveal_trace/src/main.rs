// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated landing page that exercises the tracing and diagnostics
//! pipeline.
//!
//! Lays out a hero with a staggered intro and a column of content sections
//! with per-item delays, scrolls through it at a steady pace, then navigates
//! away. Events go to both a
//! [`PrettyPrintSink`](reveal_debug::pretty::PrettyPrintSink) and a
//! [`RecorderSink`](reveal_debug::recorder::RecorderSink), and the recording
//! is exported as a Chrome trace JSON file.
//!
//! Usage: `reveal_trace [OUTPUT.json]`

use std::fs::File;
use std::io::{self, BufWriter};

use kurbo::{Rect, Size};
use reveal_core::config::RevealConfig;
use reveal_core::section::RevealOptions;
use reveal_core::time::{Duration, Timebase};
use reveal_core::trace::{
    FailOpenEvent, RevealCancelledEvent, RevealFinishedEvent, RevealScheduledEvent,
    RevealStartedEvent, SectionMountedEvent, SectionUnmountedEvent, TraceSink, Tracer,
    VisibilityEvent,
};
use reveal_core::visibility::VisibilitySupport;
use reveal_scroll_harness::ScrollHarness;

use reveal_debug::pretty::PrettyPrintSink;
use reveal_debug::recorder::RecorderSink;

const VIEWPORT: Size = Size::new(1280.0, 800.0);
const PAGE_WIDTH: f64 = 1200.0;
/// Scroll speed in layout units per frame.
const SCROLL_STEP: f64 = 24.0;

/// Forwards every event to two sinks.
struct Fanout<'a> {
    a: &'a mut dyn TraceSink,
    b: &'a mut dyn TraceSink,
}

impl TraceSink for Fanout<'_> {
    fn on_section_mounted(&mut self, e: &SectionMountedEvent) {
        self.a.on_section_mounted(e);
        self.b.on_section_mounted(e);
    }

    fn on_visibility(&mut self, e: &VisibilityEvent) {
        self.a.on_visibility(e);
        self.b.on_visibility(e);
    }

    fn on_reveal_scheduled(&mut self, e: &RevealScheduledEvent) {
        self.a.on_reveal_scheduled(e);
        self.b.on_reveal_scheduled(e);
    }

    fn on_reveal_started(&mut self, e: &RevealStartedEvent) {
        self.a.on_reveal_started(e);
        self.b.on_reveal_started(e);
    }

    fn on_reveal_finished(&mut self, e: &RevealFinishedEvent) {
        self.a.on_reveal_finished(e);
        self.b.on_reveal_finished(e);
    }

    fn on_reveal_cancelled(&mut self, e: &RevealCancelledEvent) {
        self.a.on_reveal_cancelled(e);
        self.b.on_reveal_cancelled(e);
    }

    fn on_section_unmounted(&mut self, e: &SectionUnmountedEvent) {
        self.a.on_section_unmounted(e);
        self.b.on_section_unmounted(e);
    }

    fn on_fail_open(&mut self, e: &FailOpenEvent) {
        self.a.on_fail_open(e);
        self.b.on_fail_open(e);
    }
}

/// A row of `count` equal cells starting at `top`, with per-item delay
/// `stagger` seconds.
fn row(
    harness: &mut ScrollHarness,
    tracer: &mut Tracer<'_>,
    top: f64,
    height: f64,
    count: u32,
    stagger: f64,
    timebase: Timebase,
) {
    let width = PAGE_WIDTH / f64::from(count);
    for i in 0..count {
        let left = 40.0 + f64::from(i) * width;
        let bounds = Rect::new(left, top, left + width - 24.0, top + height);
        let options = RevealOptions::new().delay_secs(f64::from(i) * stagger, timebase);
        harness.mount(options, bounds, tracer);
    }
}

/// Lays out the page: hero intro, then stats, use cases, features,
/// devices, team and contact.
fn build_page(harness: &mut ScrollHarness, tracer: &mut Tracer<'_>, timebase: Timebase) {
    // Hero: title, subtitle, call to action and scroll hint animate on load.
    let hero = RevealConfig::hero_intro(timebase).motion;
    for (i, delay) in [0.2, 0.4, 0.6, 1.2].into_iter().enumerate() {
        let top = 200.0 + 90.0 * i as f64;
        let options = RevealOptions::new()
            .delay_secs(delay, timebase)
            .motion(hero)
            .on_mount();
        harness.mount(options, Rect::new(240.0, top, 1040.0, top + 70.0), tracer);
    }

    row(harness, tracer, 1000.0, 180.0, 4, 0.1, timebase);
    row(harness, tracer, 1500.0, 320.0, 3, 0.08, timebase);
    row(harness, tracer, 1860.0, 320.0, 3, 0.08, timebase);

    for (i, delay) in [0.2, 0.3, 0.4].into_iter().enumerate() {
        let top = 2500.0 + 520.0 * i as f64;
        let options = RevealOptions::new().delay_secs(delay, timebase);
        harness.mount(options, Rect::new(40.0, top, 1240.0, top + 460.0), tracer);
    }

    row(harness, tracer, 4200.0, 260.0, 5, 0.05, timebase);
    row(harness, tracer, 4800.0, 360.0, 4, 0.08, timebase);

    let contact = RevealOptions::new().delay_secs(0.2, timebase);
    harness.mount(contact, Rect::new(40.0, 5500.0, 1240.0, 6100.0), tracer);
}

fn main() -> io::Result<()> {
    let timebase = Timebase::NANOS;
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("reveal_trace.json"));

    // -- sinks -------------------------------------------------------------
    let mut pretty =
        PrettyPrintSink::new(Box::new(io::stdout()), timebase).quiet_visibility(true);
    let mut recorder = RecorderSink::new();

    // -- simulated page ----------------------------------------------------
    let mut harness = ScrollHarness::new(
        RevealConfig::standard(timebase),
        VisibilitySupport::Available,
        VIEWPORT,
    );
    {
        let mut fanout = Fanout {
            a: &mut pretty,
            b: &mut recorder,
        };
        let mut tracer = Tracer::new(&mut fanout);

        build_page(&mut harness, &mut tracer, timebase);

        // Let the hero intro play, then read down the page.
        harness.run_for(Duration::from_millis(1500, timebase), &mut tracer);
        harness.scroll_smoothly(
            5400.0,
            SCROLL_STEP,
            Duration::from_millis(1000, timebase),
            &mut tracer,
        );
        harness.navigate(&mut tracer);
        let _ = harness.step(&mut tracer);
    }

    // -- report ------------------------------------------------------------
    let report = harness.timeline().report();
    let frame_ms = harness.frame_interval().to_nanos(timebase) as f64 / 1e6;
    println!(
        "sections={} revealed={} unseen={} cancelled={} max_lateness={:.2}ms (frame {:.2}ms)",
        report.mounted,
        report.revealed,
        report.unseen,
        report.cancelled,
        report.max_lateness.to_nanos(timebase) as f64 / 1e6,
        frame_ms,
    );

    // -- export Chrome trace -----------------------------------------------
    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    reveal_debug::chrome::export(recorder.events(), timebase, &mut writer)?;

    println!("Wrote {path} ({} events)", recorder.events().len());
    Ok(())
}
