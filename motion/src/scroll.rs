//! Scroll-position helpers: the navbar's "scrolled" flag and anchor-jump math.
//!
//! [`ScrollThreshold`] is fed by a scroll subscription the navbar registers on
//! mount and removes on teardown; it only reports transitions so the caller
//! can skip redundant signal writes.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::NAV_SCROLL_OFFSET;

/// Derived "scrolled past `offset`" flag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollThreshold {
    offset: f64,
    past: bool,
}

impl Default for ScrollThreshold {
    fn default() -> Self {
        Self::new(NAV_SCROLL_OFFSET)
    }
}

impl ScrollThreshold {
    #[must_use]
    pub fn new(offset: f64) -> Self {
        Self { offset, past: false }
    }

    /// Feed the current vertical scroll position.
    ///
    /// Returns the new flag only when it changed.
    pub fn update(&mut self, scroll_y: f64) -> Option<bool> {
        let past = scroll_y > self.offset;
        if past == self.past {
            return None;
        }
        self.past = past;
        Some(past)
    }

    #[must_use]
    pub fn is_past(&self) -> bool {
        self.past
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }
}

/// Section id for an in-page `#anchor` href.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Absolute scroll position that puts an element's top `header_offset` below
/// the viewport top.
///
/// `element_top` is the element's viewport-relative top, `scroll_y` the
/// current document scroll. Never negative.
#[must_use]
pub fn scroll_target_top(element_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    (element_top + scroll_y - header_offset).max(0.0)
}
