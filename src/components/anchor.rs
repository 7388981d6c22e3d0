use log::warn;
use yew::prelude::*;

use crate::dom::element::scroll_to_anchor;

/// Click handler that smooth-scrolls in-page links below the fixed header.
pub fn anchor_click(href: AttrValue) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| match scroll_to_anchor(&href) {
        Ok(true) => e.prevent_default(),
        Ok(false) => {}
        Err(err) => warn!("smooth scroll to {} failed: {}", href, err),
    })
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub class: AttrValue,
    /// Runs after the scroll, e.g. to close the mobile menu.
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let scroll = anchor_click(props.href.clone());
        let extra = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            scroll.emit(e.clone());
            if let Some(extra) = &extra {
                extra.emit(e);
            }
        })
    };

    html! {
        <a class={props.class.to_string()} href={props.href.clone()} {onclick}>
            { props.label.clone() }
        </a>
    }
}
