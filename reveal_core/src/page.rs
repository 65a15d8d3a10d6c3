// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-local state: the sections of the current page and the navigation
//! bar.
//!
//! Everything here lives exactly as long as one page. [`PageScope::navigate`]
//! drops it all, cancelling pending reveals.

use crate::controller::RevealController;
use crate::trace::Tracer;

/// Navigation bar state: whether the page has scrolled past a threshold and
/// whether the mobile menu is open.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavState {
    threshold: f64,
    scrolled: bool,
    menu_open: bool,
}

impl NavState {
    /// Scroll offset past which the bar switches to its scrolled style.
    pub const DEFAULT_THRESHOLD: f64 = 50.0;

    /// Creates a state at the top of the page with the menu closed.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
            menu_open: false,
        }
    }

    /// Scroll threshold.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns `true` while the scroll offset is strictly past the threshold.
    #[must_use]
    pub const fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Returns `true` while the mobile menu is open.
    #[must_use]
    pub const fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Records a scroll offset. Returns `true` if [`scrolled`](Self::scrolled)
    /// changed, so callers only restyle on crossings.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// Opens or closes the mobile menu; returns the new state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Closes the mobile menu (a menu link was followed).
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    fn reset(&mut self) {
        *self = Self::new(self.threshold);
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

/// One page's worth of reveal sections and navigation state.
#[derive(Debug)]
pub struct PageScope {
    /// Sections of the current page.
    pub controller: RevealController,
    /// Navigation bar state.
    pub nav: NavState,
}

impl PageScope {
    /// Wraps a controller with a fresh navigation state.
    #[must_use]
    pub fn new(controller: RevealController) -> Self {
        Self {
            controller,
            nav: NavState::default(),
        }
    }

    /// Leaves the current page: unmounts every section (cancelling pending
    /// reveals), scrolls the nav state back to the top and closes the menu.
    pub fn navigate(&mut self, tracer: &mut Tracer<'_>) {
        self.controller.clear(tracer);
        self.nav.reset();
    }
}
