// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport margins in CSS `rootMargin` syntax.
//!
//! A [`ViewportMargin`] grows (positive) or shrinks (negative) the viewport
//! before the overlap test. The reveal default is `-60px`: a block has to be
//! 60 units inside the viewport edge before it counts as visible.
//!
//! Parsing follows the shorthand rules of CSS `margin`:
//!
//! | Values | Meaning |
//! |---|---|
//! | `a` | all four sides |
//! | `a b` | top/bottom, left/right |
//! | `a b c` | top, left/right, bottom |
//! | `a b c d` | top, right, bottom, left |

use alloc::format;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use kurbo::Rect;

/// A single margin length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarginLength {
    /// Absolute length in CSS pixels (layout units).
    Px(f64),
    /// Percentage of the viewport extent along the same axis.
    Percent(f64),
}

impl MarginLength {
    /// Zero length.
    pub const ZERO: Self = Self::Px(0.0);

    /// Resolves this length against the viewport extent on its axis.
    #[must_use]
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            Self::Px(v) => v,
            Self::Percent(p) => extent * p / 100.0,
        }
    }

    fn to_css(self) -> String {
        match self {
            Self::Px(v) => format!("{v}px"),
            Self::Percent(p) => format!("{p}%"),
        }
    }
}

impl FromStr for MarginLength {
    type Err = MarginParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MarginParseError::InvalidLength(String::from(s));
        if let Some(num) = s.strip_suffix("px") {
            num.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(Self::Px)
                .ok_or_else(invalid)
        } else if let Some(num) = s.strip_suffix('%') {
            num.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(Self::Percent)
                .ok_or_else(invalid)
        } else {
            // Unitless lengths are only valid when zero, as in CSS.
            match s.parse::<f64>() {
                Ok(v) if v == 0.0 => Ok(Self::ZERO),
                _ => Err(invalid()),
            }
        }
    }
}

/// Error produced when parsing a [`ViewportMargin`] or [`MarginLength`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MarginParseError {
    /// The input contained no lengths.
    Empty,
    /// More than four lengths were given.
    TooManyValues(usize),
    /// A length was not `<number>px`, `<number>%`, or `0`.
    InvalidLength(String),
}

impl fmt::Display for MarginParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("viewport margin is empty"),
            Self::TooManyValues(n) => {
                write!(f, "viewport margin takes 1 to 4 values, got {n}")
            }
            Self::InvalidLength(s) => {
                write!(f, "invalid margin length {s:?} (expected px, % or 0)")
            }
        }
    }
}

impl core::error::Error for MarginParseError {}

/// Per-side adjustment applied to the viewport before the overlap test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportMargin {
    /// Top edge adjustment.
    pub top: MarginLength,
    /// Right edge adjustment.
    pub right: MarginLength,
    /// Bottom edge adjustment.
    pub bottom: MarginLength,
    /// Left edge adjustment.
    pub left: MarginLength,
}

impl Default for ViewportMargin {
    fn default() -> Self {
        Self::ZERO
    }
}

impl ViewportMargin {
    /// No adjustment; the effective viewport is the viewport.
    pub const ZERO: Self = Self::uniform(MarginLength::ZERO);

    /// The same length on all four sides.
    #[must_use]
    pub const fn uniform(length: MarginLength) -> Self {
        Self {
            top: length,
            right: length,
            bottom: length,
            left: length,
        }
    }

    /// The same pixel length on all four sides.
    #[must_use]
    pub const fn px(value: f64) -> Self {
        Self::uniform(MarginLength::Px(value))
    }

    /// Computes the effective viewport region.
    ///
    /// Each side moves outward by its resolved length, so negative margins
    /// shrink the region. A region shrunk past zero size collapses to a
    /// degenerate rectangle at its center and cannot intersect anything with
    /// positive area.
    #[must_use]
    pub fn apply(&self, viewport: Rect) -> Rect {
        let w = viewport.width();
        let h = viewport.height();
        let mut r = Rect::new(
            viewport.x0 - self.left.resolve(w),
            viewport.y0 - self.top.resolve(h),
            viewport.x1 + self.right.resolve(w),
            viewport.y1 + self.bottom.resolve(h),
        );
        if r.x0 > r.x1 {
            let mid = (r.x0 + r.x1) * 0.5;
            r.x0 = mid;
            r.x1 = mid;
        }
        if r.y0 > r.y1 {
            let mid = (r.y0 + r.y1) * 0.5;
            r.y0 = mid;
            r.y1 = mid;
        }
        r
    }

    /// Formats the margin as a canonical four-value CSS string, suitable for
    /// `IntersectionObserverInit.rootMargin`.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "{} {} {} {}",
            self.top.to_css(),
            self.right.to_css(),
            self.bottom.to_css(),
            self.left.to_css()
        )
    }
}

impl FromStr for ViewportMargin {
    type Err = MarginParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = [MarginLength::ZERO; 4];
        let mut count = 0;
        for part in s.split_whitespace() {
            if count == 4 {
                return Err(MarginParseError::TooManyValues(
                    s.split_whitespace().count(),
                ));
            }
            values[count] = part.parse()?;
            count += 1;
        }
        let [a, b, c, d] = values;
        match count {
            0 => Err(MarginParseError::Empty),
            1 => Ok(Self::uniform(a)),
            2 => Ok(Self {
                top: a,
                right: b,
                bottom: a,
                left: b,
            }),
            3 => Ok(Self {
                top: a,
                right: b,
                bottom: c,
                left: b,
            }),
            _ => Ok(Self {
                top: a,
                right: b,
                bottom: c,
                left: d,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_value_applies_to_all_sides() {
        let m: ViewportMargin = "-60px".parse().unwrap();
        assert_eq!(m, ViewportMargin::px(-60.0));
        assert_eq!(m.to_css(), "-60px -60px -60px -60px");
    }

    #[test]
    fn shorthand_expansion() {
        let two: ViewportMargin = "10px 5%".parse().unwrap();
        assert_eq!(two.top, MarginLength::Px(10.0));
        assert_eq!(two.left, MarginLength::Percent(5.0));
        assert_eq!(two.bottom, MarginLength::Px(10.0));

        let three: ViewportMargin = "1px 2px 3px".parse().unwrap();
        assert_eq!(three.right, MarginLength::Px(2.0));
        assert_eq!(three.left, MarginLength::Px(2.0));
        assert_eq!(three.bottom, MarginLength::Px(3.0));

        let four: ViewportMargin = "0px 0px -50px 0".parse().unwrap();
        assert_eq!(four.bottom, MarginLength::Px(-50.0));
        assert_eq!(four.left, MarginLength::ZERO);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!("".parse::<ViewportMargin>(), Err(MarginParseError::Empty));
        assert_eq!(
            "1px 2px 3px 4px 5px".parse::<ViewportMargin>(),
            Err(MarginParseError::TooManyValues(5))
        );
        assert!(matches!(
            "12em".parse::<ViewportMargin>(),
            Err(MarginParseError::InvalidLength(_))
        ));
        assert!(matches!(
            "7".parse::<ViewportMargin>(),
            Err(MarginParseError::InvalidLength(_))
        ));
    }

    #[test]
    fn negative_margin_shrinks_viewport() {
        let vp = Rect::new(0.0, 0.0, 1280.0, 800.0);
        let eff = ViewportMargin::px(-60.0).apply(vp);
        assert_eq!(eff, Rect::new(60.0, 60.0, 1220.0, 740.0));
    }

    #[test]
    fn percent_resolves_per_axis() {
        let vp = Rect::new(0.0, 100.0, 1000.0, 600.0);
        let m: ViewportMargin = "10% 0px".parse().unwrap();
        let eff = m.apply(vp);
        // 10% of the 500 unit height on top and bottom.
        assert_eq!(eff, Rect::new(0.0, 50.0, 1000.0, 650.0));
    }

    #[test]
    fn over_shrunk_viewport_collapses() {
        let vp = Rect::new(0.0, 0.0, 100.0, 100.0);
        let eff = ViewportMargin::px(-80.0).apply(vp);
        assert_eq!(eff.width(), 0.0);
        assert_eq!(eff.height(), 0.0);
        assert_eq!(eff.x0, 50.0);
    }
}
