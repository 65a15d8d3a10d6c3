// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS `cubic-bezier()` timing functions.
//!
//! The curve runs from `(0, 0)` to `(1, 1)` with two control points. Sampling
//! at progress `x` means finding the curve parameter `t` with `bx(t) = x`
//! (Newton–Raphson, falling back to bisection when the slope flattens) and
//! returning `by(t)`.

/// A cubic Bézier timing function with fixed endpoints `(0,0)` and `(1,1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 32;
const EPSILON: f64 = 1e-7;

impl CubicBezier {
    /// `linear`.
    pub const LINEAR: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    /// CSS `ease-out`.
    pub const EASE_OUT: Self = Self::new(0.0, 0.0, 0.58, 1.0);

    /// The reveal curve, `cubic-bezier(0.22, 1, 0.36, 1)`: a steep start that
    /// settles gently.
    pub const REVEAL: Self = Self::new(0.22, 1.0, 0.36, 1.0);

    /// Creates a timing function from its two control points.
    ///
    /// # Panics
    ///
    /// Panics if an `x` coordinate lies outside `0.0..=1.0`, which would make
    /// the curve non-monotonic in time.
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        assert!(
            x1 >= 0.0 && x1 <= 1.0 && x2 >= 0.0 && x2 <= 1.0,
            "cubic-bezier x coordinates must lie in [0, 1]"
        );
        Self { x1, y1, x2, y2 }
    }

    /// Returns the control points as `[x1, y1, x2, y2]`.
    #[must_use]
    pub const fn control_points(&self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// Evaluates the eased value at linear progress `x` (clamped to `[0, 1]`).
    #[must_use]
    pub fn sample(&self, x: f64) -> f64 {
        if !(x > 0.0) {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let t = self.solve_t(x);
        bezier(t, self.y1, self.y2)
    }

    fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = bezier(t, self.x1, self.x2) - x;
            if err.abs() < EPSILON {
                return t;
            }
            let slope = bezier_slope(t, self.x1, self.x2);
            if slope.abs() < EPSILON {
                break;
            }
            t -= err / slope;
        }

        let mut lo = 0.0;
        let mut hi = 1.0;
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let v = bezier(t, self.x1, self.x2);
            if (v - x).abs() < EPSILON {
                break;
            }
            if v < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) * 0.5;
        }
        t
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        Self::REVEAL
    }
}

/// One coordinate of the curve at parameter `t`, for control values `p1`, `p2`.
fn bezier(t: f64, p1: f64, p2: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    ((a * t + b) * t + c) * t
}

fn bezier_slope(t: f64, p1: f64, p2: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (3.0 * a * t + 2.0 * b) * t + c
}
