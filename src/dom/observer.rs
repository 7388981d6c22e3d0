use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::error::DomError;
use crate::motion::visibility::{Sighting, VisibilityTrigger};

/// Feeds `IntersectionObserver` reports into a [`VisibilityTrigger`].
///
/// The observer is disconnected when the watcher is dropped, or as soon as
/// a one-shot trigger has fired for every element.
pub struct VisibilityWatcher {
    observer: IntersectionObserver,
    trigger: Rc<RefCell<VisibilityTrigger<Element>>>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityWatcher {
    pub fn start(trigger: VisibilityTrigger<Element>) -> Result<Self, DomError> {
        let config = trigger.config().clone();
        let trigger = Rc::new(RefCell::new(trigger));

        let callback = {
            let trigger = trigger.clone();
            Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, observer: IntersectionObserver| {
                    let sightings: Vec<Sighting<Element>> = entries
                        .iter()
                        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                        .map(|entry| Sighting {
                            target: entry.target(),
                            ratio: entry.intersection_ratio(),
                            intersecting: entry.is_intersecting(),
                        })
                        .collect();

                    let mut trigger = trigger.borrow_mut();
                    trigger.check(sightings);
                    if trigger.is_spent() {
                        observer.disconnect();
                    }
                },
            )
        };

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config.threshold));
        init.set_root_margin(config.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        for element in trigger.borrow().elements() {
            observer.observe(element);
        }
        log::debug!(
            "watching {} elements at threshold {}",
            trigger.borrow().watched_count(),
            config.threshold
        );

        Ok(Self {
            observer,
            trigger,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
        self.trigger.borrow_mut().unobserve_all();
    }
}
