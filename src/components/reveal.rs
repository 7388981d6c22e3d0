use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::dom::element::{mounted, select_all};
use crate::dom::error::DomError;
use crate::dom::observer::VisibilityWatcher;
use crate::motion::view::ViewHandle;
use crate::motion::visibility::{TriggerMode, VisibilityTrigger};

/// Added to a `.reveal` element once it has scrolled into view.
pub const REVEALED: &str = "revealed";

fn watch_reveals(container: &NodeRef) -> Result<VisibilityWatcher, DomError> {
    let root = mounted(container, "reveal container")?;
    let items = select_all(&root, ".reveal")?;
    // Re-entering the viewport reveals again, which is harmless.
    let trigger = VisibilityTrigger::observe(
        items,
        config::REVEAL_VISIBILITY,
        TriggerMode::Repeating,
        |item: &Element| item.set_flag(REVEALED, true),
    );
    VisibilityWatcher::start(trigger)
}

/// Fades in every `.reveal` element under `container` as it is scrolled to.
#[hook]
pub fn use_reveal(container: NodeRef) {
    use_effect_with_deps(
        move |container: &NodeRef| {
            let watcher = match watch_reveals(container) {
                Ok(watcher) => Some(watcher),
                Err(e) => {
                    warn!("reveal animations disabled: {}", e);
                    None
                }
            };
            move || drop(watcher)
        },
        container,
    );
}
