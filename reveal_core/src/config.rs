// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller-wide reveal defaults.

use crate::easing::CubicBezier;
use crate::margin::ViewportMargin;
use crate::motion::RevealMotion;
use crate::section::RevealOptions;
use crate::time::{Duration, Timebase};
use crate::visibility::Amount;

/// Defaults applied to every section that does not override them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    /// Viewport margin; the standard value is `-60px`.
    pub margin: ViewportMargin,
    /// Required visible amount.
    pub amount: Amount,
    /// Transition from hidden to revealed.
    pub motion: RevealMotion,
    /// Delay for sections without their own.
    pub default_delay: Duration,
    /// Timebase the durations above are expressed in.
    pub timebase: Timebase,
}

impl RevealConfig {
    /// Scroll reveal: 60 units inside the viewport, rise 30 units over 0.6 s
    /// on the reveal curve, no delay.
    #[must_use]
    pub const fn standard(timebase: Timebase) -> Self {
        Self {
            margin: ViewportMargin::px(-60.0),
            amount: Amount::Some,
            motion: RevealMotion {
                offset_y: 30.0,
                duration: Duration::from_millis(600, timebase),
                easing: CubicBezier::REVEAL,
            },
            default_delay: Duration::ZERO,
            timebase,
        }
    }

    /// Hero intro: a shorter 20 unit rise on `ease-out`, for elements
    /// revealed on mount.
    #[must_use]
    pub const fn hero_intro(timebase: Timebase) -> Self {
        let standard = Self::standard(timebase);
        Self {
            motion: RevealMotion {
                offset_y: 20.0,
                easing: CubicBezier::EASE_OUT,
                ..standard.motion
            },
            ..standard
        }
    }

    /// Settings for one section after applying its overrides.
    #[must_use]
    pub fn resolve(&self, options: &RevealOptions) -> ResolvedOptions {
        ResolvedOptions {
            delay: options.delay.unwrap_or(self.default_delay),
            margin: options.margin.unwrap_or(self.margin),
            amount: options.amount.unwrap_or(self.amount),
            motion: options.motion.unwrap_or(self.motion),
        }
    }
}

/// A section's effective settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedOptions {
    /// Delay between trigger and transition.
    pub delay: Duration,
    /// Effective viewport margin.
    pub margin: ViewportMargin,
    /// Required visible amount.
    pub amount: Amount,
    /// Transition.
    pub motion: RevealMotion,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_defaults() {
        let cfg = RevealConfig::standard(Timebase::MICROS);
        assert_eq!(cfg.margin, ViewportMargin::px(-60.0));
        assert_eq!(cfg.motion.offset_y, 30.0);
        assert_eq!(cfg.motion.duration, Duration(600_000));
        assert_eq!(cfg.default_delay, Duration::ZERO);
    }

    #[test]
    fn overrides_win() {
        let tb = Timebase::NANOS;
        let cfg = RevealConfig::standard(tb);
        let opts = RevealOptions::new()
            .delay_secs(0.3, tb)
            .amount(Amount::All);
        let resolved = cfg.resolve(&opts);
        assert_eq!(resolved.delay, Duration(300_000_000));
        assert_eq!(resolved.amount, Amount::All);
        assert_eq!(resolved.margin, cfg.margin);
        assert_eq!(resolved.motion, cfg.motion);
    }

    #[test]
    fn hero_intro_shortens_rise() {
        let cfg = RevealConfig::hero_intro(Timebase::NANOS);
        assert_eq!(cfg.motion.offset_y, 20.0);
        assert_eq!(cfg.motion.easing, CubicBezier::EASE_OUT);
        assert_eq!(cfg.motion.duration, Duration::from_millis(600, Timebase::NANOS));
    }
}
