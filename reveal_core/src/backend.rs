// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! Platform-specific work lives in *backend* crates. Each backend provides:
//!
//! - **Tick source** — Produces [`FrameTick`] values via a platform mechanism
//!   (e.g. `requestAnimationFrame`). Not abstracted by a trait because setup
//!   and lifecycle differ across platforms.
//!
//! - **Time** — `now() -> HostTime` and `timebase() -> Timebase` free
//!   functions that read the platform's monotonic clock.
//!
//! - **Visibility source** — Reports [`VisibilityEntry`] values for observed
//!   sections, or reports [`VisibilitySupport::Unavailable`] so the
//!   controller fails open.
//!
//! - **Presenter** — Implements the [`Presenter`] trait to write section
//!   presentations to a platform-native tree (e.g. DOM element styles).
//!
//! [`FrameTick`]: crate::frame::FrameTick
//! [`VisibilityEntry`]: crate::visibility::VisibilityEntry
//! [`VisibilitySupport::Unavailable`]: crate::visibility::VisibilitySupport::Unavailable

use crate::controller::{RevealChanges, RevealController};

/// Applies a tick's [`RevealChanges`] to a platform-native presentation tree.
///
/// # Frame loop pseudocode
///
/// ```rust,ignore
/// fn on_frame(tick: FrameTick) {
///     // Visibility: feed queued observer entries.
///     for entry in observer.drain() {
///         controller.observe_entry(&entry, &mut tracer);
///     }
///
///     // Advance: fire due reveals and sample running transitions.
///     let changes = controller.tick(tick.now, &mut tracer);
///
///     // Present: write changed presentations to the native tree.
///     presenter.apply(&controller, &changes);
///
///     if controller.is_idle() {
///         raf.stop();
///     }
/// }
/// ```
pub trait Presenter {
    /// Applies `changes`, reading current presentations from `controller`.
    fn apply(&mut self, controller: &RevealController, changes: &RevealChanges);
}
