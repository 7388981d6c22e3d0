use log::warn;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::dom::element::body;
use crate::motion::view::ViewHandle;

/// Set on `<body>` while the visitor is navigating with the keyboard, so
/// focus rings only show up for them.
pub const KEYBOARD_NAV: &str = "keyboard-nav";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    CloseMenu,
    KeyboardNav,
    Other,
}

pub fn key_intent(key: &str) -> KeyIntent {
    match key {
        "Escape" => KeyIntent::CloseMenu,
        "Tab" => KeyIntent::KeyboardNav,
        _ => KeyIntent::Other,
    }
}

fn set_keyboard_nav(on: bool) {
    match body() {
        Ok(body) => body.set_flag(KEYBOARD_NAV, on),
        Err(e) => warn!("cannot toggle {}: {}", KEYBOARD_NAV, e),
    }
}

/// Tab turns keyboard navigation styling on, any mouse press turns it off.
#[hook]
pub fn use_keyboard_nav() {
    use_event_with_window("keydown", |e: KeyboardEvent| {
        if key_intent(&e.key()) == KeyIntent::KeyboardNav {
            set_keyboard_nav(true);
        }
    });
    use_event_with_window("mousedown", |_: MouseEvent| set_keyboard_nav(false));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_intents() {
        assert_eq!(key_intent("Escape"), KeyIntent::CloseMenu);
        assert_eq!(key_intent("Tab"), KeyIntent::KeyboardNav);
        assert_eq!(key_intent("Enter"), KeyIntent::Other);
        assert_eq!(key_intent("escape"), KeyIntent::Other);
    }
}
