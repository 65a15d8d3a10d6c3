// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility primitive: does a block overlap the effective viewport?
//!
//! Platforms answer this question in one of two ways:
//!
//! - **Push** — the platform observes the block and reports a
//!   [`VisibilityEntry`] when its intersection state changes (browser
//!   `IntersectionObserver`). Margin and amount are handed to the platform.
//! - **Pull** — the caller knows the viewport and the block bounds and asks
//!   [`is_in_view`] directly (simulation, custom layout engines).
//!
//! Both paths follow the same rules: the viewport is adjusted by a
//! [`ViewportMargin`] and the block must cover at least [`Amount`] of its own
//! area inside it. Touching edges count as intersecting for
//! [`Amount::Some`], matching `IntersectionObserver`.

use kurbo::Rect;

use crate::margin::ViewportMargin;
use crate::section::SectionId;
use crate::time::HostTime;

/// Whether the platform can detect visibility at all.
///
/// [`Unavailable`](Self::Unavailable) makes the controller fail open: every
/// section mounts directly in its revealed presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VisibilitySupport {
    /// Visibility observations will be delivered.
    Available,
    /// No visibility primitive exists in this environment.
    Unavailable,
}

/// How much of a block must lie inside the effective viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Amount {
    /// Any overlap, including touching edges.
    #[default]
    Some,
    /// The whole block.
    All,
    /// At least this fraction of the block's area, clamped to `0.0..=1.0`.
    Fraction(f64),
}

impl Amount {
    /// Returns the minimum intersection ratio this amount requires.
    ///
    /// [`Amount::Some`] is `0.0`, interpreted as "touching is enough".
    #[must_use]
    pub fn threshold(self) -> f64 {
        match self {
            Self::Some => 0.0,
            Self::All => 1.0,
            Self::Fraction(f) if f.is_nan() => 0.0,
            Self::Fraction(f) => f.clamp(0.0, 1.0),
        }
    }
}

/// A visibility observation reported by a push-style platform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityEntry {
    /// The observed section.
    pub section: SectionId,
    /// Whether the section currently meets its margin and amount.
    pub is_intersecting: bool,
    /// When the platform made the observation.
    pub time: HostTime,
}

/// Returns `true` if the two rectangles overlap or share an edge.
fn touches(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && a.x1 >= b.x0 && a.y0 <= b.y1 && a.y1 >= b.y0
}

/// Fraction of `bounds` that lies inside `region`, in `0.0..=1.0`.
///
/// Blocks with zero area report `1.0` when they touch the region and `0.0`
/// otherwise, so a collapsed block can still be revealed.
#[must_use]
pub fn intersection_ratio(region: Rect, bounds: Rect) -> f64 {
    if !touches(region, bounds) {
        return 0.0;
    }
    let area = bounds.width() * bounds.height();
    if area <= 0.0 {
        return 1.0;
    }
    let w = bounds.x1.min(region.x1) - bounds.x0.max(region.x0);
    let h = bounds.y1.min(region.y1) - bounds.y0.max(region.y0);
    ((w.max(0.0) * h.max(0.0)) / area).clamp(0.0, 1.0)
}

/// Tests whether `bounds` is in view of `viewport` after applying `margin`,
/// with at least `amount` of the block inside.
///
/// Both rectangles must be in the same coordinate space (typically
/// viewport-relative client coordinates).
#[must_use]
pub fn is_in_view(viewport: Rect, margin: &ViewportMargin, amount: Amount, bounds: Rect) -> bool {
    let region = margin.apply(viewport);
    if !touches(region, bounds) {
        return false;
    }
    let threshold = amount.threshold();
    threshold <= 0.0 || intersection_ratio(region, bounds) >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1280.0, 800.0);

    /// A 400-unit tall block whose top edge sits `overlap` units above the
    /// viewport bottom.
    fn block_overlapping(overlap: f64) -> Rect {
        let top = VIEWPORT.y1 - overlap;
        Rect::new(100.0, top, 1180.0, top + 400.0)
    }

    #[test]
    fn negative_margin_requires_depth() {
        let margin = ViewportMargin::px(-60.0);
        assert!(!is_in_view(VIEWPORT, &margin, Amount::Some, block_overlapping(0.0)));
        assert!(!is_in_view(VIEWPORT, &margin, Amount::Some, block_overlapping(59.0)));
        assert!(is_in_view(VIEWPORT, &margin, Amount::Some, block_overlapping(60.0)));
        assert!(is_in_view(VIEWPORT, &margin, Amount::Some, block_overlapping(80.0)));
    }

    #[test]
    fn block_above_viewport_is_not_in_view() {
        let above = Rect::new(0.0, -500.0, 100.0, -10.0);
        assert!(!is_in_view(VIEWPORT, &ViewportMargin::ZERO, Amount::Some, above));
    }

    #[test]
    fn amount_all_needs_full_containment() {
        let margin = ViewportMargin::ZERO;
        let partly = block_overlapping(200.0);
        assert!(!is_in_view(VIEWPORT, &margin, Amount::All, partly));
        let inside = Rect::new(10.0, 10.0, 200.0, 200.0);
        assert!(is_in_view(VIEWPORT, &margin, Amount::All, inside));
    }

    #[test]
    fn fraction_threshold() {
        let margin = ViewportMargin::ZERO;
        // 200 of 400 rows visible → ratio 0.5.
        let half = block_overlapping(200.0);
        assert!((intersection_ratio(VIEWPORT, half) - 0.5).abs() < 1e-9);
        assert!(is_in_view(VIEWPORT, &margin, Amount::Fraction(0.5), half));
        assert!(!is_in_view(VIEWPORT, &margin, Amount::Fraction(0.6), half));
    }

    #[test]
    fn fraction_is_clamped() {
        assert_eq!(Amount::Fraction(3.0).threshold(), 1.0);
        assert_eq!(Amount::Fraction(-1.0).threshold(), 0.0);
        assert_eq!(Amount::Fraction(f64::NAN).threshold(), 0.0);
    }

    #[test]
    fn zero_area_block_reveals_when_touching() {
        let line = Rect::new(0.0, 300.0, 1280.0, 300.0);
        assert_eq!(intersection_ratio(VIEWPORT, line), 1.0);
        assert!(is_in_view(VIEWPORT, &ViewportMargin::ZERO, Amount::All, line));
    }
}
