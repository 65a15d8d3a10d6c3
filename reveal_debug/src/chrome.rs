// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] turns events from a [`RecorderSink`](super::recorder::RecorderSink)
//! into [Chrome Trace Event Format][format] JSON. Each section gets its own
//! track (`tid` = slot index): the delay shows as a `Pending` slice and the
//! transition as a `Transition` slice, so staggered reveals line up visually.
//!
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use reveal_core::time::{HostTime, Timebase};

use crate::recorder::RecordedEvent;

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
///
/// Timestamps are converted to microseconds using the provided [`Timebase`].
/// Events that carry no time of their own (unmount, cancellation) are
/// placed at the latest time seen so far.
pub fn export(events: &[RecordedEvent], timebase: Timebase, writer: &mut dyn Write) -> io::Result<()> {
    let mut out: Vec<Value> = Vec::new();
    let mut last = HostTime(0);
    let us = |t: HostTime| timebase.ticks_to_nanos(t.ticks()) as f64 / 1000.0;

    for recorded in events {
        let tid = recorded.section().index();
        match recorded {
            RecordedEvent::SectionMounted(e) => {
                last = last.max(e.time);
                out.push(json!({
                    "ph": "i",
                    "name": "Mounted",
                    "cat": "Lifecycle",
                    "ts": us(e.time),
                    "pid": 0,
                    "tid": tid,
                    "s": "t",
                    "args": {
                        "section": format!("{:?}", e.section),
                        "trigger": format!("{:?}", e.trigger),
                    }
                }));
            }
            RecordedEvent::Visibility(e) => {
                last = last.max(e.time);
                // Only observations that changed something are worth a mark.
                if e.accepted {
                    out.push(json!({
                        "ph": "i",
                        "name": "InView",
                        "cat": "Visibility",
                        "ts": us(e.time),
                        "pid": 0,
                        "tid": tid,
                        "s": "t",
                    }));
                }
            }
            RecordedEvent::RevealScheduled(e) => {
                last = last.max(e.triggered_at);
                out.push(json!({
                    "ph": "X",
                    "name": "Pending",
                    "cat": "Reveal",
                    "ts": us(e.triggered_at),
                    "dur": us(e.deadline) - us(e.triggered_at),
                    "pid": 0,
                    "tid": tid,
                }));
            }
            RecordedEvent::RevealStarted(e) => {
                last = last.max(e.time);
                out.push(json!({
                    "ph": "B",
                    "name": "Transition",
                    "cat": "Reveal",
                    "ts": us(e.time),
                    "pid": 0,
                    "tid": tid,
                    "args": {
                        "late_us": timebase.ticks_to_nanos(e.late_by.ticks()) as f64 / 1000.0,
                    }
                }));
            }
            RecordedEvent::RevealFinished(e) => {
                last = last.max(e.time);
                out.push(json!({
                    "ph": "E",
                    "name": "Transition",
                    "cat": "Reveal",
                    "ts": us(e.time),
                    "pid": 0,
                    "tid": tid,
                }));
            }
            RecordedEvent::RevealCancelled(e) => {
                out.push(json!({
                    "ph": "i",
                    "name": "Cancelled",
                    "cat": "Reveal",
                    "ts": us(last),
                    "pid": 0,
                    "tid": tid,
                    "s": "t",
                    "args": {
                        "deadline_us": us(e.deadline),
                    }
                }));
            }
            RecordedEvent::SectionUnmounted(e) => {
                out.push(json!({
                    "ph": "i",
                    "name": "Unmounted",
                    "cat": "Lifecycle",
                    "ts": us(last),
                    "pid": 0,
                    "tid": tid,
                    "s": "t",
                    "args": {
                        "revealed": e.revealed,
                    }
                }));
            }
            RecordedEvent::FailOpen(e) => {
                last = last.max(e.time);
                out.push(json!({
                    "ph": "i",
                    "name": "FailOpen",
                    "cat": "Reveal",
                    "ts": us(e.time),
                    "pid": 0,
                    "tid": tid,
                    "s": "t",
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use reveal_core::config::RevealConfig;
    use reveal_core::controller::RevealController;
    use reveal_core::section::RevealOptions;
    use reveal_core::trace::Tracer;
    use reveal_core::visibility::VisibilitySupport;

    #[test]
    fn export_produces_valid_json() {
        let tb = Timebase::NANOS;
        let mut rec = RecorderSink::new();
        let mut c = RevealController::new(RevealConfig::standard(tb), VisibilitySupport::Available);
        {
            let mut t = Tracer::new(&mut rec);
            let a = c.mount(RevealOptions::new(), HostTime(0), &mut t);
            let b = c.mount(RevealOptions::new().delay_secs(0.8, tb), HostTime(0), &mut t);
            c.observe(a, true, HostTime(1_000_000), &mut t);
            c.observe(b, true, HostTime(1_000_000), &mut t);
            let _ = c.tick(HostTime(1_000_000), &mut t);
            let _ = c.tick(HostTime(601_000_000), &mut t);
            c.unmount(b, &mut t);
        }

        let mut out = Vec::new();
        export(rec.events(), tb, &mut out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&String::from_utf8(out).unwrap()).unwrap();

        let names: Vec<&str> = parsed.iter().map(|v| v["name"].as_str().unwrap()).collect();
        assert_eq!(
            names,
            [
                "Mounted",
                "Mounted",
                "InView",
                "Pending",
                "InView",
                "Pending",
                "Transition",
                "Transition",
                "Cancelled",
                "Unmounted",
            ]
        );

        // b's delay is an 800ms slice on its own track.
        assert_eq!(parsed[5]["ph"], "X");
        assert_eq!(parsed[5]["tid"], 1);
        assert_eq!(parsed[5]["dur"], 800_000.0);
        // a's transition ran from the 1ms tick to the 601ms tick.
        assert_eq!(parsed[6]["ph"], "B");
        assert_eq!(parsed[6]["ts"], 1000.0);
        assert_eq!(parsed[7]["ph"], "E");
        assert_eq!(parsed[7]["ts"], 601_000.0);
        // b never revealed; timeless events land at the latest known time.
        assert_eq!(parsed[8]["ts"], 601_000.0);
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], Timebase::NANOS, &mut out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&String::from_utf8(out).unwrap()).unwrap();
        assert!(parsed.is_empty());
    }
}
