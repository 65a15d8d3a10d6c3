// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reveal motion: hidden and revealed presentations and the eased path
//! between them.

use kurbo::{Affine, Vec2};

use crate::easing::CubicBezier;
use crate::time::Duration;

/// Visual state of a section at one instant.
///
/// The revealed presentation is `opacity = 1, translate_y = 0`; a hidden
/// section sits below its natural position and is fully transparent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Presentation {
    /// Opacity in `0.0..=1.0`.
    pub opacity: f64,
    /// Vertical displacement from the natural position, in layout units.
    pub translate_y: f64,
}

impl Presentation {
    /// Natural position, fully opaque.
    pub const REVEALED: Self = Self {
        opacity: 1.0,
        translate_y: 0.0,
    };

    /// Hidden presentation for a motion with the given vertical offset.
    #[must_use]
    pub const fn hidden(offset_y: f64) -> Self {
        Self {
            opacity: 0.0,
            translate_y: offset_y,
        }
    }

    /// The displacement as a 2D affine transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(Vec2::new(0.0, self.translate_y))
    }

    /// Linear blend from `self` to `to` at eased progress `p`.
    #[must_use]
    pub fn lerp(&self, to: &Self, p: f64) -> Self {
        Self {
            opacity: self.opacity + (to.opacity - self.opacity) * p,
            translate_y: self.translate_y + (to.translate_y - self.translate_y) * p,
        }
    }
}

/// How a section moves from hidden to revealed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealMotion {
    /// Initial downward offset of the hidden presentation.
    pub offset_y: f64,
    /// Length of the transition.
    pub duration: Duration,
    /// Timing function applied to linear progress.
    pub easing: CubicBezier,
}

impl RevealMotion {
    /// The presentation before the transition starts.
    #[must_use]
    pub const fn hidden(&self) -> Presentation {
        Presentation::hidden(self.offset_y)
    }

    /// Samples the presentation `elapsed` after the transition started.
    ///
    /// A zero-length motion is revealed immediately.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> Presentation {
        if self.is_complete(elapsed) {
            return Presentation::REVEALED;
        }
        let linear = elapsed.ticks() as f64 / self.duration.ticks() as f64;
        self.hidden()
            .lerp(&Presentation::REVEALED, self.easing.sample(linear))
    }

    /// Returns `true` once `elapsed` covers the full duration.
    #[must_use]
    pub fn is_complete(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Timebase;

    fn motion() -> RevealMotion {
        RevealMotion {
            offset_y: 30.0,
            duration: Duration::from_millis(600, Timebase::NANOS),
            easing: CubicBezier::REVEAL,
        }
    }

    #[test]
    fn starts_hidden_and_ends_revealed() {
        let m = motion();
        assert_eq!(m.sample(Duration::ZERO), Presentation::hidden(30.0));
        assert_eq!(m.sample(m.duration), Presentation::REVEALED);
        assert!(m.is_complete(Duration::from_millis(700, Timebase::NANOS)));
    }

    #[test]
    fn midway_is_between_endpoints() {
        let m = motion();
        let mid = m.sample(Duration::from_millis(300, Timebase::NANOS));
        assert!(mid.opacity > 0.5 && mid.opacity < 1.0, "{mid:?}");
        assert!(mid.translate_y > 0.0 && mid.translate_y < 30.0, "{mid:?}");
        // Opacity and offset move on the same eased progress.
        assert!((mid.opacity - (1.0 - mid.translate_y / 30.0)).abs() < 1e-9);
    }

    #[test]
    fn zero_duration_snaps() {
        let m = RevealMotion {
            duration: Duration::ZERO,
            ..motion()
        };
        assert_eq!(m.sample(Duration::ZERO), Presentation::REVEALED);
    }

    #[test]
    fn transform_translates_vertically() {
        let coeffs = Presentation::hidden(30.0).transform().as_coeffs();
        assert_eq!(coeffs, [1.0, 0.0, 0.0, 1.0, 0.0, 30.0]);
    }
}
