// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `IntersectionObserver` visibility source.
//!
//! Each observed section gets its own observer configured with the
//! section's `rootMargin` and threshold, so sections with different margins
//! can share a page. Entries are converted to [`VisibilityEntry`] values and
//! handed to a callback; the observer never touches the controller itself.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use reveal_core::config::ResolvedOptions;
use reveal_core::section::SectionId;
use reveal_core::visibility::VisibilityEntry;

use crate::millis_to_host;

type EntriesClosure = Closure<dyn FnMut(Array)>;

struct Observation {
    section: SectionId,
    observer: IntersectionObserver,
    // Kept alive for as long as the observer may call it.
    _closure: EntriesClosure,
}

/// Watches section elements and reports when they enter the viewport.
pub struct ViewportObserver {
    on_entry: Rc<RefCell<dyn FnMut(VisibilityEntry)>>,
    observations: Vec<Observation>,
}

impl ViewportObserver {
    /// Creates an observer that reports every entry to `on_entry`.
    ///
    /// `on_entry` runs from the browser's observer task, never re-entrantly
    /// from [`observe`](Self::observe).
    pub fn new(on_entry: impl FnMut(VisibilityEntry) + 'static) -> Self {
        Self {
            on_entry: Rc::new(RefCell::new(on_entry)),
            observations: Vec::new(),
        }
    }

    /// Starts observing `element` for `section` with the section's margin
    /// and amount.
    ///
    /// # Errors
    ///
    /// Returns the browser's exception if the observer cannot be created
    /// (e.g. the margin is rejected).
    pub fn observe(
        &mut self,
        section: SectionId,
        element: &Element,
        settings: &ResolvedOptions,
    ) -> Result<(), JsValue> {
        let threshold = settings.amount.threshold();
        let on_entry = Rc::clone(&self.on_entry);
        let closure = Closure::wrap(Box::new(move |entries: Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                // `isIntersecting` alone is true for any overlap; partial
                // amounts also need the ratio.
                let is_intersecting =
                    entry.is_intersecting() && entry.intersection_ratio() >= threshold;
                (on_entry.borrow_mut())(VisibilityEntry {
                    section,
                    is_intersecting,
                    time: millis_to_host(entry.time()),
                });
            }
        }) as Box<dyn FnMut(Array)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&settings.margin.to_css());
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)?;
        observer.observe(element);

        self.observations.push(Observation {
            section,
            observer,
            _closure: closure,
        });
        Ok(())
    }

    /// Stops observing `section`. Returns `false` if it was not observed.
    pub fn unobserve(&mut self, section: SectionId) -> bool {
        let Some(pos) = self
            .observations
            .iter()
            .position(|o| o.section == section)
        else {
            return false;
        };
        let observation = self.observations.swap_remove(pos);
        observation.observer.disconnect();
        true
    }

    /// Stops observing every section.
    pub fn disconnect_all(&mut self) {
        for observation in self.observations.drain(..) {
            observation.observer.disconnect();
        }
    }

    /// Number of observed sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Returns `true` if no section is observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.disconnect_all();
    }
}

impl core::fmt::Debug for ViewportObserver {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViewportObserver")
            .field("observed", &self.observations.len())
            .finish_non_exhaustive()
    }
}
