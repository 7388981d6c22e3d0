//! Scroll-position arithmetic shared by the nav bar, hero and anchor links.

use crate::config;

pub fn navbar_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAVBAR_SCROLLED_AFTER_PX
}

/// Vertical offset of the hero gradient, or `None` once the hero has
/// scrolled out of view (the last offset stays in place).
pub fn parallax_offset(scroll_y: f64, viewport_height: f64) -> Option<f64> {
    (scroll_y < viewport_height).then(|| scroll_y * config::PARALLAX_FACTOR)
}

/// The element id an in-page link points at. Bare `#` and external links
/// are left to the browser.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Page offset that puts an element just below the fixed header.
pub fn smooth_scroll_top(element_top: f64, page_offset: f64) -> f64 {
    element_top + page_offset - config::HEADER_OFFSET_PX
}

/// Initial pose of a reveal-on-scroll element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    Rise,
    SlideIn,
}

impl Reveal {
    pub fn class(self) -> &'static str {
        match self {
            Reveal::Rise => "reveal reveal-rise",
            Reveal::SlideIn => "reveal reveal-slide",
        }
    }
}

/// Inline transition for the `index`-th item of a staggered group.
pub fn stagger_style(index: usize) -> String {
    format!(
        "transition: all {}s ease {:.1}s;",
        config::REVEAL_DURATION_S,
        index as f64 * config::REVEAL_STAGGER_S
    )
}
