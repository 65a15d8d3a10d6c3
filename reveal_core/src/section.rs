// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Section identity, state, and per-section options.

use core::fmt;

use crate::margin::ViewportMargin;
use crate::motion::RevealMotion;
use crate::time::{Duration, Timebase};
use crate::visibility::Amount;

/// A handle to a section in a [`RevealController`](crate::controller::RevealController).
///
/// Contains both a slot index and a generation counter so that handles held
/// past an unmount are detected once the slot is reused by a later mount.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionId {
    pub(crate) idx: u32,
    pub(crate) generation: u32,
}

impl SectionId {
    /// Returns the raw slot index (for diagnostics and DOM bookkeeping).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }

    /// Returns the generation counter.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SectionId({}@gen{})", self.idx, self.generation)
    }
}

/// Reveal state of a section. `Revealed` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealState {
    /// Offset and transparent; waiting for visibility and delay.
    Hidden,
    /// Transition started (or finished); never returns to `Hidden`.
    Revealed,
}

/// What starts a section's reveal countdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// The first observation that the section is in view.
    #[default]
    Viewport,
    /// Mounting the section (page-load intro animations).
    Mount,
}

/// Per-section overrides supplied by the page composition layer.
///
/// Unset fields fall back to the controller's
/// [`RevealConfig`](crate::config::RevealConfig).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RevealOptions {
    /// Time between the trigger and the start of the transition.
    pub delay: Option<Duration>,
    /// Viewport margin for this section.
    pub margin: Option<ViewportMargin>,
    /// Required visible amount for this section.
    pub amount: Option<Amount>,
    /// Motion for this section.
    pub motion: Option<RevealMotion>,
    /// What starts the countdown.
    pub trigger: Trigger,
}

impl RevealOptions {
    /// Options with every field defaulted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the delay.
    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Sets the delay from fractional seconds.
    #[must_use]
    pub fn delay_secs(self, secs: f64, timebase: Timebase) -> Self {
        self.delay(Duration::from_secs_f64(secs, timebase))
    }

    /// Sets the viewport margin.
    #[must_use]
    pub fn margin(mut self, margin: ViewportMargin) -> Self {
        self.margin = Some(margin);
        self
    }

    /// Sets the required visible amount.
    #[must_use]
    pub fn amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Sets the motion.
    #[must_use]
    pub fn motion(mut self, motion: RevealMotion) -> Self {
        self.motion = Some(motion);
        self
    }

    /// Starts the countdown at mount instead of on first visibility.
    #[must_use]
    pub fn on_mount(mut self) -> Self {
        self.trigger = Trigger::Mount;
        self
    }
}
