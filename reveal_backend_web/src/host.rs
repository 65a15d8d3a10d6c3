// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-level wiring of controller, observer, frame loop and presenter.

use alloc::rc::{Rc, Weak};
use alloc::string::ToString as _;
use alloc::vec::Vec;
use core::cell::RefCell;

use reveal_core::backend::Presenter as _;
use reveal_core::config::RevealConfig;
use reveal_core::controller::RevealController;
use reveal_core::frame::FrameTick;
use reveal_core::motion::Presentation;
use reveal_core::page::{NavState, PageScope};
use reveal_core::section::{RevealOptions, SectionId, Trigger};
use reveal_core::trace::Tracer;
use reveal_core::visibility::{VisibilityEntry, VisibilitySupport};
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

use crate::attributes::{self, parse_reveal_attributes};
use crate::observer::ViewportObserver;
use crate::presenter::DomPresenter;
use crate::raf::RafLoop;
use crate::scroll::ScrollWatcher;

struct HostState {
    page: PageScope,
    presenter: DomPresenter,
    observer: ViewportObserver,
}

struct Shared {
    state: RefCell<HostState>,
    /// Observer entries waiting for the next frame.
    queue: RefCell<Vec<VisibilityEntry>>,
    raf: RafLoop,
}

impl Shared {
    fn wake(&self) {
        self.raf.start();
    }

    /// One frame: feed queued observations, advance, present. Returns
    /// whether another frame is needed.
    fn on_frame(&self, tick: FrameTick) -> bool {
        let entries = core::mem::take(&mut *self.queue.borrow_mut());
        let mut state = self.state.borrow_mut();
        let state = &mut *state;
        let mut tracer = Tracer::none();
        let controller = &mut state.page.controller;

        for entry in &entries {
            controller.observe_entry(entry, &mut tracer);
        }
        let changes = controller.tick(tick.now, &mut tracer);
        state.presenter.apply(controller, &changes);

        // Revealed sections never look at visibility again.
        for &id in &changes.revealed {
            state.observer.unobserve(id);
        }

        !controller.is_idle()
    }
}

/// Reveals the sections of one page as they scroll into view.
///
/// The host owns a [`RevealController`] and drives it from an
/// `IntersectionObserver` per section and a `requestAnimationFrame` loop that
/// only runs while something is pending or animating.
///
/// ```rust,ignore
/// let host = RevealHost::new(RevealConfig::standard(timebase()));
/// host.attach_all(&document.document_element().unwrap())?;
/// ```
pub struct RevealHost {
    shared: Rc<Shared>,
}

impl RevealHost {
    /// Creates a host using the browser's visibility support.
    #[must_use]
    pub fn new(config: RevealConfig) -> Self {
        Self::with_support(config, crate::visibility_support())
    }

    /// Creates a host with explicit visibility support.
    ///
    /// With [`VisibilitySupport::Unavailable`] every attached section is
    /// shown immediately.
    #[must_use]
    pub fn with_support(config: RevealConfig, support: VisibilitySupport) -> Self {
        let shared = Rc::new_cyclic(|weak: &Weak<Shared>| {
            let observer_weak = weak.clone();
            let observer = ViewportObserver::new(move |entry| {
                if let Some(shared) = observer_weak.upgrade() {
                    shared.queue.borrow_mut().push(entry);
                    shared.wake();
                }
            });
            let raf_weak = weak.clone();
            let raf = RafLoop::new(move |tick| {
                raf_weak
                    .upgrade()
                    .is_some_and(|shared| shared.on_frame(tick))
            });
            Shared {
                state: RefCell::new(HostState {
                    page: PageScope::new(RevealController::new(config, support)),
                    presenter: DomPresenter::new(),
                    observer,
                }),
                queue: RefCell::new(Vec::new()),
                raf,
            }
        });
        Self { shared }
    }

    /// Mounts `element` as a reveal section.
    ///
    /// The element is hidden immediately (unless visibility support is
    /// unavailable). If the browser refuses to observe it, the section is
    /// treated as already in view, so it still reveals after its delay.
    pub fn attach(&self, element: &HtmlElement, options: RevealOptions) -> SectionId {
        let now = crate::now();
        let mut tracer = Tracer::none();
        let id = {
            let mut state = self.shared.state.borrow_mut();
            let state = &mut *state;
            let controller = &mut state.page.controller;

            let id = controller.mount(options, now, &mut tracer);
            let initial = controller
                .presentation(id)
                .unwrap_or(Presentation::REVEALED);
            state.presenter.bind(id, element.clone(), initial);

            let wants_observer = controller.support() == VisibilitySupport::Available
                && controller.trigger(id) == Some(Trigger::Viewport);
            if wants_observer
                && let Some(settings) = controller.settings(id)
                && state.observer.observe(id, element, &settings).is_err()
            {
                controller.observe(id, true, now, &mut tracer);
            }
            id
        };
        self.shared.wake();
        id
    }

    /// Mounts every `[data-reveal]` element under `root`, in document order.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector query fails or an element carries an
    /// unusable `data-reveal-*` value. Elements before the bad one stay
    /// attached; the rest are left untouched (and visible).
    pub fn attach_all(&self, root: &Element) -> Result<Vec<SectionId>, JsValue> {
        let timebase = self.shared.state.borrow().page.controller.config().timebase;
        let nodes = root.query_selector_all(attributes::SELECTOR)?;
        let mut ids = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            let Some(element) = nodes
                .item(i)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };
            let options = parse_reveal_attributes(
                element.get_attribute(attributes::DELAY).as_deref(),
                element.get_attribute(attributes::MARGIN).as_deref(),
                element.get_attribute(attributes::TRIGGER).as_deref(),
                timebase,
            )
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
            ids.push(self.attach(&element, options));
        }
        Ok(ids)
    }

    /// Unmounts a section, cancelling its pending reveal. Returns `false`
    /// for stale handles.
    pub fn detach(&self, id: SectionId) -> bool {
        let removed = {
            let mut state = self.shared.state.borrow_mut();
            state.observer.unobserve(id);
            state.page.controller.unmount(id, &mut Tracer::none())
        };
        if removed {
            self.shared.wake();
        }
        removed
    }

    /// Leaves the page: unmounts every section and resets navigation state.
    pub fn navigate(&self) {
        {
            let mut state = self.shared.state.borrow_mut();
            state.observer.disconnect_all();
            state.page.navigate(&mut Tracer::none());
        }
        self.shared.wake();
    }

    /// Returns `true` once the section has revealed.
    #[must_use]
    pub fn has_revealed(&self, id: SectionId) -> bool {
        self.shared.state.borrow().page.controller.has_revealed(id)
    }

    /// Number of attached sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.state.borrow().page.controller.len()
    }

    /// Returns `true` if no section is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current navigation bar state.
    #[must_use]
    pub fn nav(&self) -> NavState {
        self.shared.state.borrow().page.nav
    }

    /// Opens or closes the mobile menu; returns the new state.
    pub fn toggle_menu(&self) -> bool {
        self.shared.state.borrow_mut().page.nav.toggle_menu()
    }

    /// Closes the mobile menu.
    pub fn close_menu(&self) {
        self.shared.state.borrow_mut().page.nav.close_menu();
    }

    /// Tracks the window scroll offset in the page's [`NavState`] and calls
    /// `on_change` whenever `scrolled` flips.
    ///
    /// # Errors
    ///
    /// Returns an error if the scroll listener cannot be registered.
    pub fn watch_scroll(
        &self,
        mut on_change: impl FnMut(&NavState) + 'static,
    ) -> Result<ScrollWatcher, JsValue> {
        let weak = Rc::downgrade(&self.shared);
        ScrollWatcher::new(move |scroll_y| {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            let nav = {
                let mut state = shared.state.borrow_mut();
                if !state.page.nav.on_scroll(scroll_y) {
                    return;
                }
                state.page.nav
            };
            on_change(&nav);
        })
    }
}

impl core::fmt::Debug for RevealHost {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let state = self.shared.state.borrow();
        f.debug_struct("RevealHost")
            .field("sections", &state.page.controller.len())
            .field("observer", &state.observer)
            .field("raf", &self.shared.raf)
            .finish_non_exhaustive()
    }
}
