// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `data-reveal-*` attribute parsing.
//!
//! | Attribute | Value |
//! |---|---|
//! | `data-reveal` | marks the element; value ignored |
//! | `data-reveal-delay` | seconds, e.g. `0.3` |
//! | `data-reveal-margin` | `rootMargin` syntax, e.g. `-60px` |
//! | `data-reveal-trigger` | `viewport` (default) or `mount` |

use alloc::string::String;
use core::fmt;

use reveal_core::margin::{MarginParseError, ViewportMargin};
use reveal_core::section::RevealOptions;
use reveal_core::time::Timebase;

/// Marker attribute selecting reveal sections.
pub(crate) const SELECTOR: &str = "[data-reveal]";
pub(crate) const DELAY: &str = "data-reveal-delay";
pub(crate) const MARGIN: &str = "data-reveal-margin";
pub(crate) const TRIGGER: &str = "data-reveal-trigger";

/// A `data-reveal-*` attribute had an unusable value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttributeError {
    /// `data-reveal-delay` is not a finite, non-negative number.
    InvalidDelay(String),
    /// `data-reveal-margin` is not valid `rootMargin` syntax.
    InvalidMargin(MarginParseError),
    /// `data-reveal-trigger` is neither `viewport` nor `mount`.
    UnknownTrigger(String),
}

impl fmt::Display for AttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDelay(v) => write!(f, "invalid {DELAY} value {v:?}"),
            Self::InvalidMargin(e) => write!(f, "invalid {MARGIN} value: {e}"),
            Self::UnknownTrigger(v) => write!(f, "unknown {TRIGGER} value {v:?}"),
        }
    }
}

impl core::error::Error for AttributeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidMargin(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MarginParseError> for AttributeError {
    fn from(e: MarginParseError) -> Self {
        Self::InvalidMargin(e)
    }
}

/// Builds [`RevealOptions`] from raw attribute values. Absent attributes
/// leave the controller defaults in place.
///
/// # Errors
///
/// Returns an [`AttributeError`] naming the first unusable attribute.
pub fn parse_reveal_attributes(
    delay: Option<&str>,
    margin: Option<&str>,
    trigger: Option<&str>,
    timebase: Timebase,
) -> Result<RevealOptions, AttributeError> {
    let mut options = RevealOptions::new();

    if let Some(raw) = delay {
        let secs: f64 = raw
            .trim()
            .parse()
            .map_err(|_| AttributeError::InvalidDelay(String::from(raw)))?;
        if !secs.is_finite() || secs < 0.0 {
            return Err(AttributeError::InvalidDelay(String::from(raw)));
        }
        options = options.delay_secs(secs, timebase);
    }

    if let Some(raw) = margin {
        options = options.margin(raw.parse::<ViewportMargin>()?);
    }

    match trigger.map(str::trim) {
        None | Some("" | "viewport") => {}
        Some("mount") => options = options.on_mount(),
        Some(other) => return Err(AttributeError::UnknownTrigger(String::from(other))),
    }

    Ok(options)
}
