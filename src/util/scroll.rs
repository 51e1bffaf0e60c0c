//! Window scrolling: anchor jumps below the fixed header, scroll position,
//! and page-top resets. Requires a browser environment; natively every call
//! is a no-op that reports nothing happened.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use motion::scroll::anchor_target;

/// Smoothly scroll to the section named by an in-page `#anchor` href.
///
/// Returns `true` when a matching element was found and a scroll was issued.
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(id) = anchor_target(href) else {
        log::debug!("scroll: `{href}` is not an in-page anchor");
        return false;
    };

    #[cfg(feature = "csr")]
    {
        use motion::consts::HEADER_OFFSET;
        use motion::scroll::scroll_target_top;

        let Some(window) = web_sys::window() else {
            return false;
        };
        let Some(element) = window.document().and_then(|doc| doc.get_element_by_id(id)) else {
            log::debug!("scroll: no section with id `{id}`");
            return false;
        };
        let element_top = element.get_bounding_client_rect().top();
        let scroll_y = window.scroll_y().unwrap_or_default();

        let options = web_sys::ScrollToOptions::new();
        options.set_top(scroll_target_top(element_top, scroll_y, HEADER_OFFSET));
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("scroll: no browser; skipping jump to `{id}`");
        false
    }
}

/// Jump to the top of the page without animation.
pub fn scroll_to_top() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// Current vertical scroll offset of the window, `0.0` when unknown.
pub fn window_scroll_y() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().map_err(|err| log::warn!("scroll: scrollY unavailable: {err:?}")).ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Step back one entry in the browser history.
pub fn history_back() {
    #[cfg(feature = "csr")]
    {
        let history = web_sys::window().map(|w| w.history());
        match history {
            Some(Ok(history)) => {
                if let Err(err) = history.back() {
                    log::warn!("history: back failed: {err:?}");
                }
            }
            Some(Err(err)) => log::warn!("history: unavailable: {err:?}"),
            None => {}
        }
    }
}

/// Query string of the current URL (`?a=b`), empty when unavailable.
pub fn location_query() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().search().map_err(|err| log::warn!("location: search unavailable: {err:?}")).ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
