// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM style writer.
//!
//! Translates section presentations held by a [`RevealController`] into
//! inline `opacity` and `transform` styles on the page's own elements,
//! applying incremental updates from [`RevealChanges`].
//!
//! [`RevealController`]: reveal_core::controller::RevealController
//! [`RevealChanges`]: reveal_core::controller::RevealChanges

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use reveal_core::backend::Presenter;
use reveal_core::controller::{RevealChanges, RevealController};
use reveal_core::motion::Presentation;
use reveal_core::section::SectionId;
use web_sys::HtmlElement;

/// Maps section handles to the elements they animate.
///
/// Unlike a scene presenter, the elements belong to the page: the presenter
/// never creates or removes nodes, it only styles the elements passed to
/// [`bind`](Self::bind).
pub struct DomPresenter {
    elements: Vec<Option<(SectionId, HtmlElement)>>,
}

impl core::fmt::Debug for DomPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomPresenter")
            .field("elements_len", &self.elements.len())
            .finish_non_exhaustive()
    }
}

impl Default for DomPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl DomPresenter {
    /// Creates a presenter with no bound elements.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Binds `element` to `section` and writes `initial` immediately, so a
    /// hidden section never flashes in its natural state before the first
    /// frame.
    pub fn bind(&mut self, section: SectionId, element: HtmlElement, initial: Presentation) {
        write_presentation(&element, &initial);
        if initial != Presentation::REVEALED {
            let _ = element.style().set_property("will-change", "opacity, transform");
        }
        let slot = section.index() as usize;
        if self.elements.len() <= slot {
            self.elements.resize_with(slot + 1, || None);
        }
        self.elements[slot] = Some((section, element));
    }

    /// Returns the element bound to `section`, if any.
    #[must_use]
    pub fn get_element(&self, section: SectionId) -> Option<&HtmlElement> {
        match self.elements.get(section.index() as usize)? {
            Some((bound, el)) if *bound == section => Some(el),
            _ => None,
        }
    }

    /// Forgets the element bound to `section`. A slot already rebound to a
    /// newer section is left alone.
    fn unbind(&mut self, section: SectionId) -> Option<HtmlElement> {
        let slot = self.elements.get_mut(section.index() as usize)?;
        if slot.as_ref().is_some_and(|(bound, _)| *bound == section) {
            slot.take().map(|(_, el)| el)
        } else {
            None
        }
    }
}

impl Presenter for DomPresenter {
    fn apply(&mut self, controller: &RevealController, changes: &RevealChanges) {
        // 1. Removals. The element stays in the page with whatever style it
        // last had.
        for &id in &changes.removed {
            self.unbind(id);
        }

        // 2. Newly mounted and animating sections.
        for &id in changes.mounted.iter().chain(&changes.updated) {
            if let (Some(el), Some(p)) = (self.get_element(id), controller.presentation(id)) {
                write_presentation(el, &p);
            }
        }

        // 3. Finished transitions release their compositor hint.
        for &id in &changes.finished {
            if let Some(el) = self.get_element(id) {
                let _ = el.style().remove_property("will-change");
            }
        }
    }
}

/// Writes opacity and the vertical offset as CSS.
fn write_presentation(el: &HtmlElement, p: &Presentation) {
    let s = el.style();
    let _ = s.set_property("opacity", &format!("{}", p.opacity));
    let _ = s.set_property("transform", &css_transform(p));
}

/// Formats the presentation's affine transform as a CSS `matrix()`.
fn css_transform(p: &Presentation) -> String {
    let [a, b, c, d, e, f] = p.transform().as_coeffs();
    format!("matrix({a},{b},{c},{d},{e},{f})")
}
