use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};
use yew::NodeRef;

use super::error::DomError;
use crate::motion::scroll::{anchor_target, smooth_scroll_top};
use crate::motion::view::ViewHandle;

impl ViewHandle for Element {
    fn set_flag(&self, flag: &str, on: bool) {
        let classes = self.class_list();
        let result = if on {
            classes.add_1(flag)
        } else {
            classes.remove_1(flag)
        };
        if let Err(e) = result {
            warn!("could not toggle class {flag}: {:?}", e);
        }
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn body() -> Result<HtmlElement, DomError> {
    document()?.body().ok_or(DomError::NotMounted("body"))
}

/// The element behind `node_ref`, once Yew has rendered it.
pub fn mounted(node_ref: &NodeRef, what: &'static str) -> Result<Element, DomError> {
    node_ref.cast::<Element>().ok_or(DomError::NotMounted(what))
}

/// Descendants of `root` matching `selector`, in document order.
pub fn select_all(root: &Element, selector: &str) -> Result<Vec<Element>, DomError> {
    let nodes = root.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Smoothly scrolls to the element an in-page link points at.
///
/// Returns `false` when `href` is not an in-page link or its target is
/// missing, in which case the click should be left to the browser.
pub fn scroll_to_anchor(href: &str) -> Result<bool, DomError> {
    let Some(id) = anchor_target(href) else {
        return Ok(false);
    };
    let window = window()?;
    let Some(target) = document()?.get_element_by_id(id) else {
        return Ok(false);
    };

    let top = smooth_scroll_top(target.get_bounding_client_rect().top(), window.page_y_offset()?);
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(true)
}
