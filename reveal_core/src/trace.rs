// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for section lifecycles.
//!
//! This module provides a [`TraceSink`] trait with one method per lifecycle
//! event. All method bodies default to no-ops, so implementing only the
//! events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink` and is what the
//! [`RevealController`](crate::controller::RevealController) takes on every
//! mutating call. When the `trace` feature is **off**, every `Tracer` method
//! compiles to nothing. When **on**, each method performs a single `Option`
//! branch before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use crate::section::{SectionId, Trigger};
use crate::time::{Duration, HostTime};

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// A section was mounted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionMountedEvent {
    /// The new section.
    pub section: SectionId,
    /// Mount time.
    pub time: HostTime,
    /// What will start the countdown.
    pub trigger: Trigger,
}

/// A visibility observation reached the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityEvent {
    /// Observed section.
    pub section: SectionId,
    /// Observation time.
    pub time: HostTime,
    /// Whether the section was in view.
    pub is_intersecting: bool,
    /// Whether the observation scheduled a reveal.
    pub accepted: bool,
}

/// A reveal was scheduled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealScheduledEvent {
    /// Section to reveal.
    pub section: SectionId,
    /// When the trigger happened.
    pub triggered_at: HostTime,
    /// When the transition may start.
    pub deadline: HostTime,
}

/// A scheduled reveal fired; the section is now `Revealed`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStartedEvent {
    /// Revealed section.
    pub section: SectionId,
    /// The tick that fired it.
    pub time: HostTime,
    /// How long after the deadline the tick arrived.
    pub late_by: Duration,
}

/// A section's transition completed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealFinishedEvent {
    /// Section.
    pub section: SectionId,
    /// Completion tick.
    pub time: HostTime,
}

/// A pending reveal was dropped because its section unmounted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealCancelledEvent {
    /// Section.
    pub section: SectionId,
    /// The deadline that will never fire.
    pub deadline: HostTime,
}

/// A section was unmounted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionUnmountedEvent {
    /// Section.
    pub section: SectionId,
    /// Whether it had been revealed.
    pub revealed: bool,
}

/// A section skipped its animation because visibility detection is
/// unavailable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FailOpenEvent {
    /// Section.
    pub section: SectionId,
    /// Mount time.
    pub time: HostTime,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the controller.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a section mounts.
    fn on_section_mounted(&mut self, e: &SectionMountedEvent) {
        _ = e;
    }

    /// Called for every visibility observation on a live section.
    fn on_visibility(&mut self, e: &VisibilityEvent) {
        _ = e;
    }

    /// Called when a reveal is scheduled.
    fn on_reveal_scheduled(&mut self, e: &RevealScheduledEvent) {
        _ = e;
    }

    /// Called when a scheduled reveal fires.
    fn on_reveal_started(&mut self, e: &RevealStartedEvent) {
        _ = e;
    }

    /// Called when a transition completes.
    fn on_reveal_finished(&mut self, e: &RevealFinishedEvent) {
        _ = e;
    }

    /// Called when unmounting drops a pending reveal.
    fn on_reveal_cancelled(&mut self, e: &RevealCancelledEvent) {
        _ = e;
    }

    /// Called when a section unmounts.
    fn on_section_unmounted(&mut self, e: &SectionUnmountedEvent) {
        _ = e;
    }

    /// Called when a section is revealed at mount because visibility is
    /// unavailable.
    fn on_fail_open(&mut self, e: &FailOpenEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

/// Generates a `Tracer` method that forwards one event to the sink.
macro_rules! forward {
    ($(#[$doc:meta])* $name:ident => $sink_fn:ident($ty:ty)) => {
        $(#[$doc])*
        #[inline]
        pub fn $name(&mut self, e: &$ty) {
            #[cfg(feature = "trace")]
            if let Some(s) = &mut self.sink {
                s.$sink_fn(e);
            }
            #[cfg(not(feature = "trace"))]
            {
                _ = e;
            }
        }
    };
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    forward!(
        /// Emits a [`SectionMountedEvent`].
        section_mounted => on_section_mounted(SectionMountedEvent)
    );
    forward!(
        /// Emits a [`VisibilityEvent`].
        visibility => on_visibility(VisibilityEvent)
    );
    forward!(
        /// Emits a [`RevealScheduledEvent`].
        reveal_scheduled => on_reveal_scheduled(RevealScheduledEvent)
    );
    forward!(
        /// Emits a [`RevealStartedEvent`].
        reveal_started => on_reveal_started(RevealStartedEvent)
    );
    forward!(
        /// Emits a [`RevealFinishedEvent`].
        reveal_finished => on_reveal_finished(RevealFinishedEvent)
    );
    forward!(
        /// Emits a [`RevealCancelledEvent`].
        reveal_cancelled => on_reveal_cancelled(RevealCancelledEvent)
    );
    forward!(
        /// Emits a [`SectionUnmountedEvent`].
        section_unmounted => on_section_unmounted(SectionUnmountedEvent)
    );
    forward!(
        /// Emits a [`FailOpenEvent`].
        fail_open => on_fail_open(FailOpenEvent)
    );
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
