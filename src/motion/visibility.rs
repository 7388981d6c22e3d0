/// Browsers report the crossing ratio with float noise around the threshold.
const RATIO_TOLERANCE: f64 = 1e-3;

/// How much of an element must be inside the (inset) viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdConfig {
    /// Fraction of the element's area, in `[0, 1]`.
    pub threshold: f64,
    /// CSS margin applied to the viewport, e.g. `"0px 0px -100px 0px"`.
    pub root_margin: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerMode {
    /// At most one callback per element for the page view.
    Once,
    /// One callback each time the element goes from hidden to visible.
    Repeating,
}

/// One visibility report for one element.
#[derive(Debug, Clone)]
pub struct Sighting<H> {
    pub target: H,
    pub ratio: f64,
    pub intersecting: bool,
}

struct Watched<H> {
    element: H,
    has_fired: bool,
    visible: bool,
}

/// Calls back when watched elements scroll into view.
pub struct VisibilityTrigger<H> {
    config: ThresholdConfig,
    mode: TriggerMode,
    watched: Vec<Watched<H>>,
    on_visible: Box<dyn FnMut(&H)>,
}

impl<H: PartialEq> VisibilityTrigger<H> {
    pub fn observe(
        elements: impl IntoIterator<Item = H>,
        config: ThresholdConfig,
        mode: TriggerMode,
        on_visible: impl FnMut(&H) + 'static,
    ) -> Self {
        let mut trigger = Self {
            config,
            mode,
            watched: Vec::new(),
            on_visible: Box::new(on_visible),
        };
        trigger.watch(elements);
        trigger
    }

    /// Adds elements; ones already watched keep their record.
    pub fn watch(&mut self, elements: impl IntoIterator<Item = H>) {
        for element in elements {
            if self.watched.iter().any(|w| w.element == element) {
                continue;
            }
            self.watched.push(Watched {
                element,
                has_fired: false,
                visible: false,
            });
        }
    }

    /// Applies a batch of reports. Reports for unknown elements are ignored.
    pub fn check(&mut self, sightings: impl IntoIterator<Item = Sighting<H>>) {
        for sighting in sightings {
            let visible = sighting.intersecting
                && sighting.ratio + RATIO_TOLERANCE >= self.config.threshold;
            let Some(watched) = self
                .watched
                .iter_mut()
                .find(|w| w.element == sighting.target)
            else {
                continue;
            };

            let fire = match self.mode {
                TriggerMode::Once => visible && !watched.has_fired,
                TriggerMode::Repeating => visible && !watched.visible,
            };
            watched.visible = visible;
            if fire {
                watched.has_fired = true;
                (self.on_visible)(&watched.element);
            }
        }
    }

    pub fn unobserve_all(&mut self) {
        self.watched.clear();
    }

    /// A one-shot trigger whose elements have all fired can stop watching.
    pub fn is_spent(&self) -> bool {
        self.mode == TriggerMode::Once && self.watched.iter().all(|w| w.has_fired)
    }

    pub fn elements(&self) -> impl Iterator<Item = &H> {
        self.watched.iter().map(|w| &w.element)
    }

    pub fn config(&self) -> &ThresholdConfig {
        &self.config
    }

    pub fn watched_count(&self) -> usize {
        self.watched.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::view::fake::{elements, FakeElement};
    use std::cell::RefCell;
    use std::rc::Rc;

    const HALF: ThresholdConfig = ThresholdConfig {
        threshold: 0.5,
        root_margin: "0px",
    };

    fn recording(
        els: &[FakeElement],
        mode: TriggerMode,
    ) -> (VisibilityTrigger<FakeElement>, Rc<RefCell<Vec<FakeElement>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let trigger = VisibilityTrigger::observe(els.to_vec(), HALF, mode, move |el: &FakeElement| {
            sink.borrow_mut().push(el.clone())
        });
        (trigger, seen)
    }

    fn seen_at(target: &FakeElement, ratio: f64) -> Sighting<FakeElement> {
        Sighting {
            target: target.clone(),
            ratio,
            intersecting: ratio > 0.0,
        }
    }

    #[test]
    fn once_mode_fires_a_single_time() {
        let els = elements("stats", 1);
        let (mut trigger, seen) = recording(&els, TriggerMode::Once);

        trigger.check([seen_at(&els[0], 0.8)]);
        trigger.check([seen_at(&els[0], 0.9)]);
        assert_eq!(seen.borrow().len(), 1);

        trigger.check([seen_at(&els[0], 0.0)]);
        trigger.check([seen_at(&els[0], 1.0)]);
        assert_eq!(seen.borrow().len(), 1);
        assert!(trigger.is_spent());
    }

    #[test]
    fn repeating_mode_fires_per_transition() {
        let els = elements("card", 1);
        let (mut trigger, seen) = recording(&els, TriggerMode::Repeating);

        trigger.check([seen_at(&els[0], 0.6)]);
        trigger.check([seen_at(&els[0], 0.7)]);
        assert_eq!(seen.borrow().len(), 1);

        trigger.check([seen_at(&els[0], 0.0)]);
        trigger.check([seen_at(&els[0], 0.6)]);
        assert_eq!(seen.borrow().len(), 2);
        assert!(!trigger.is_spent());
    }

    #[test]
    fn below_threshold_does_not_count() {
        let els = elements("stats", 1);
        let (mut trigger, seen) = recording(&els, TriggerMode::Once);

        trigger.check([seen_at(&els[0], 0.2)]);
        assert!(seen.borrow().is_empty());
        trigger.check([seen_at(&els[0], 0.4999)]);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn elements_are_tracked_independently() {
        let els = elements("item", 3);
        let (mut trigger, seen) = recording(&els, TriggerMode::Once);

        trigger.check([seen_at(&els[2], 1.0), seen_at(&els[0], 1.0)]);
        assert_eq!(*seen.borrow(), vec![els[2].clone(), els[0].clone()]);
        assert!(!trigger.is_spent());

        trigger.check([seen_at(&els[1], 1.0), seen_at(&els[2], 1.0)]);
        assert_eq!(seen.borrow().len(), 3);
        assert!(trigger.is_spent());
    }

    #[test]
    fn unknown_and_unobserved_elements_are_ignored() {
        let els = elements("item", 1);
        let stranger = FakeElement::named("stranger");
        let (mut trigger, seen) = recording(&els, TriggerMode::Repeating);

        trigger.check([seen_at(&stranger, 1.0)]);
        trigger.unobserve_all();
        trigger.check([seen_at(&els[0], 1.0)]);
        assert!(seen.borrow().is_empty());
        assert_eq!(trigger.watched_count(), 0);
    }

    #[test]
    fn watching_twice_keeps_one_record() {
        let els = elements("item", 2);
        let (mut trigger, seen) = recording(&els, TriggerMode::Once);

        trigger.watch(els.clone());
        assert_eq!(trigger.watched_count(), 2);
        trigger.check([seen_at(&els[0], 1.0)]);
        assert_eq!(seen.borrow().len(), 1);
    }
}
