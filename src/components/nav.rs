use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;
use yew_hooks::prelude::*;

use super::anchor::AnchorLink;
use super::keyboard::{key_intent, KeyIntent};
use crate::content::Link;
use crate::motion::scroll::navbar_is_scrolled;

/// Whether a document click should close the open mobile menu.
pub fn click_closes_menu(menu_open: bool, on_button: bool, in_menu: bool) -> bool {
    menu_open && !on_button && !in_menu
}

fn contains(node_ref: &NodeRef, target: Option<&Node>) -> bool {
    node_ref
        .cast::<Node>()
        .map_or(false, |node| node.contains(target))
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub company: AttrValue,
    pub links: Vec<Link>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let menu_button = use_node_ref();
    let mobile_nav = use_node_ref();

    {
        let menu_open = menu_open.clone();
        let menu_button = menu_button.clone();
        let mobile_nav = mobile_nav.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            let on_button = contains(&menu_button, target.as_ref());
            let in_menu = contains(&mobile_nav, target.as_ref());
            if click_closes_menu(*menu_open, on_button, in_menu) {
                menu_open.set(false);
            }
        });
    }
    {
        let menu_open = menu_open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if *menu_open && key_intent(&e.key()) == KeyIntent::CloseMenu {
                menu_open.set(false);
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let active = (*menu_open).then_some("active");

    html! {
        <nav class={classes!("navbar", navbar_is_scrolled(scroll_y).then_some("scrolled"))}>
            <div class="nav-container">
                <AnchorLink href="#home" label={props.company.clone()} class="nav-logo" />
                <div class="nav-links">
                    { for props.links.iter().map(|link| html! {
                        <AnchorLink
                            href={link.href.clone()}
                            label={link.label.clone()}
                            class="nav-link"
                        />
                    }) }
                </div>
                <button
                    ref={menu_button}
                    class={classes!("mobile-menu-btn", active)}
                    aria-label="Toggle navigation"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <div ref={mobile_nav} class={classes!("mobile-nav", active)}>
                { for props.links.iter().map(|link| html! {
                    <AnchorLink
                        href={link.href.clone()}
                        label={link.label.clone()}
                        class="nav-link"
                        onclick={close_menu.clone()}
                    />
                }) }
            </div>
        </nav>
    }
}
