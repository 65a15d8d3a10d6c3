// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame opportunities delivered by a backend tick source.

use crate::time::HostTime;

/// A frame opportunity.
///
/// Backends produce one `FrameTick` per platform frame callback (e.g.
/// `requestAnimationFrame`) and pass `now` to
/// [`RevealController::tick`](crate::controller::RevealController::tick).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameTick {
    /// Host time when the tick was generated.
    pub now: HostTime,
    /// Monotonically increasing frame counter.
    pub frame_index: u64,
}
