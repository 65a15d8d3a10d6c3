// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for reveal.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`RevealHost`]: owns the page's sections and wires everything below
//!   together
//! - [`ViewportObserver`]: `IntersectionObserver` visibility source
//! - [`RafLoop`]: `requestAnimationFrame` tick source
//! - [`DomPresenter`]: writes section presentations to element styles
//! - [`ScrollWatcher`]: window scroll listener feeding
//!   [`NavState`](reveal_core::page::NavState)

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "browser glue is only reachable on wasm32")
)]

extern crate alloc;

mod attributes;
mod host;
mod observer;
mod presenter;
mod raf;
mod scroll;

pub use attributes::{AttributeError, parse_reveal_attributes};
pub use host::RevealHost;
pub use observer::ViewportObserver;
pub use presenter::DomPresenter;
pub use raf::RafLoop;
pub use reveal_core::backend::Presenter;
pub use scroll::ScrollWatcher;

use reveal_core::time::{HostTime, Timebase};
use reveal_core::visibility::VisibilitySupport;

/// Returns the current host time from `performance.now()`.
///
/// The returned [`HostTime`] is in microsecond ticks. Use [`timebase`] to
/// convert to nanoseconds.
#[must_use]
pub fn now() -> HostTime {
    millis_to_host(raf::performance_now())
}

/// Returns the web [`Timebase`]: 1 tick = 1 µs = 1000 ns.
#[must_use]
pub fn timebase() -> Timebase {
    Timebase::MICROS
}

/// Reports whether the browser provides `IntersectionObserver`.
///
/// Without it, sections are revealed at mount.
#[must_use]
pub fn visibility_support() -> VisibilitySupport {
    let Some(window) = web_sys::window() else {
        return VisibilitySupport::Unavailable;
    };
    let key = wasm_bindgen::JsValue::from_str("IntersectionObserver");
    match js_sys::Reflect::has(&window, &key) {
        Ok(true) => VisibilitySupport::Available,
        _ => VisibilitySupport::Unavailable,
    }
}

/// Converts a `DOMHighResTimeStamp` (milliseconds) to microsecond ticks.
pub(crate) fn millis_to_host(ms: f64) -> HostTime {
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "DOMHighResTimeStamp is a small positive f64; µs fits in u64"
    )]
    let us = (ms * 1000.0) as u64;
    HostTime(us)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timebase_is_microsecond() {
        let tb = timebase();
        // 1 tick = 1 µs = 1000 ns
        assert_eq!(tb.ticks_to_nanos(1), 1000);
        assert_eq!(tb.ticks_to_nanos(1_000_000), 1_000_000_000);
    }

    #[test]
    fn timestamps_convert_to_micros() {
        assert_eq!(millis_to_host(16.5), HostTime(16_500));
        assert_eq!(millis_to_host(0.0), HostTime(0));
        // Negative timestamps saturate rather than wrap.
        assert_eq!(millis_to_host(-3.0), HostTime(0));
    }
}
