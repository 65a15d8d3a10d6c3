// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window scroll listener.

use alloc::boxed::Box;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Event, Window};

type ScrollClosure = Closure<dyn FnMut(Event)>;

/// Calls back with `window.scrollY` on every scroll event.
///
/// The listener is removed when the watcher is dropped.
pub struct ScrollWatcher {
    window: Window,
    closure: ScrollClosure,
}

impl ScrollWatcher {
    /// Registers `on_scroll` and calls it once with the current offset, so
    /// a page restored mid-scroll starts in the right state.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no window or the listener cannot be
    /// added.
    pub fn new(mut on_scroll: impl FnMut(f64) + 'static) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        on_scroll(window.scroll_y()?);

        let target = window.clone();
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            if let Ok(y) = target.scroll_y() {
                on_scroll(y);
            }
        }) as Box<dyn FnMut(Event)>);
        window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;

        Ok(Self { window, closure })
    }
}

impl Drop for ScrollWatcher {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.closure.as_ref().unchecked_ref());
    }
}

impl core::fmt::Debug for ScrollWatcher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollWatcher").finish_non_exhaustive()
    }
}
