// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types and controller for scroll-triggered reveal animations.
//!
//! `reveal_core` decides when each content section of a page animates from
//! hidden (offset and transparent) to revealed (natural position and
//! opaque). Each section reveals at most once, `delay` after it is first
//! seen inside the viewport shrunk by a margin. The crate is `no_std`
//! compatible (with `alloc`) and stores sections in slots addressed by
//! generational handles.
//!
//! # Architecture
//!
//! The crate is organized around a frame loop fed by two platform inputs:
//!
//! ```text
//!   Backend (visibility source)
//!       │
//!       ▼
//!   VisibilityEntry ──► RevealController::observe() ──► pending deadline
//!                                                           │
//!                 ┌─────────────────────────────────────────┘
//!                 ▼
//!   FrameTick ──► RevealController::tick() ──► RevealChanges ──► Presenter::apply()
//! ```
//!
//! **[`controller`]** — Per-section state machine (`Hidden` → `Revealed`),
//! pending deadlines, and animation sampling.
//!
//! **[`section`]** — Generational [`SectionId`](section::SectionId) handles
//! and per-section [`RevealOptions`](section::RevealOptions).
//!
//! **[`config`]** — Controller-wide defaults with named presets.
//!
//! **[`visibility`]** — Intersection tests against a margin-adjusted
//! viewport, and the fail-open switch for platforms without a visibility
//! primitive.
//!
//! **[`margin`]** — CSS `rootMargin`-style viewport margins.
//!
//! **[`motion`]** and **[`easing`]** — Hidden/revealed presentations and the
//! cubic Bézier timing curve between them.
//!
//! **[`page`]** — Page-scoped state reset on navigation.
//!
//! **[`backend`]** — The [`Presenter`](backend::Presenter) trait that
//! platform backends implement.
//!
//! **[`frame`]** and **[`time`]** — Frame ticks and monotonic host time.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! section lifecycle instrumentation, with zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod config;
pub mod controller;
pub mod easing;
pub mod frame;
pub mod margin;
pub mod motion;
pub mod page;
pub mod section;
pub mod time;
pub mod trace;
pub mod visibility;
