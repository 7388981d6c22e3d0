use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, warn};

use super::clock::Scheduler;
use super::view::{ViewHandle, ACTIVE};

/// Slides, their indicators and which pair is active.
struct SlideDeck<H> {
    slides: Vec<H>,
    indicators: Vec<H>,
    active: usize,
}

impl<H: ViewHandle> SlideDeck<H> {
    fn mark(&self, index: usize, on: bool) {
        self.slides[index].set_flag(ACTIVE, on);
        // A missing indicator only loses its dot.
        if let Some(indicator) = self.indicators.get(index) {
            indicator.set_flag(ACTIVE, on);
        }
    }

    fn go_to(&mut self, index: usize) {
        if index >= self.slides.len() {
            warn!(
                "ignoring slide index {} for carousel of {}",
                index,
                self.slides.len()
            );
            return;
        }
        self.mark(self.active, false);
        self.active = index;
        self.mark(self.active, true);
    }

    fn advance(&mut self) {
        let next = (self.active + 1) % self.slides.len();
        self.go_to(next);
    }
}

/// Keeps exactly one testimonial active and rotates through them.
///
/// Auto-play is an owned timer: it exists between `start_auto_play` and
/// `stop_auto_play`, and dropping the controller cancels it. With no
/// slides the controller is inert and every operation is a no-op.
pub struct CarouselController<H: ViewHandle + 'static, S: Scheduler> {
    deck: Option<Rc<RefCell<SlideDeck<H>>>>,
    scheduler: S,
    period_ms: u32,
    auto_play: Option<S::Timer>,
}

impl<H: ViewHandle + 'static, S: Scheduler> CarouselController<H, S> {
    pub fn initialize(slides: Vec<H>, indicators: Vec<H>, scheduler: S, period_ms: u32) -> Self {
        let mut controller = Self {
            deck: None,
            scheduler,
            period_ms,
            auto_play: None,
        };

        if slides.is_empty() {
            debug!("carousel has no slides, staying inert");
            return controller;
        }
        if indicators.len() != slides.len() {
            warn!(
                "carousel has {} slides but {} indicators",
                slides.len(),
                indicators.len()
            );
        }

        let deck = SlideDeck {
            slides,
            indicators,
            active: 0,
        };
        deck.mark(0, true);
        controller.deck = Some(Rc::new(RefCell::new(deck)));
        controller.start_auto_play();
        controller
    }

    pub fn go_to_slide(&self, index: usize) {
        if let Some(deck) = &self.deck {
            deck.borrow_mut().go_to(index);
        }
    }

    pub fn advance(&self) {
        if let Some(deck) = &self.deck {
            deck.borrow_mut().advance();
        }
    }

    /// Starts rotating unless a timer is already running.
    pub fn start_auto_play(&mut self) {
        if self.auto_play.is_some() {
            return;
        }
        let Some(deck) = &self.deck else {
            return;
        };

        let deck: Weak<RefCell<SlideDeck<H>>> = Rc::downgrade(deck);
        let timer = self.scheduler.every(
            self.period_ms,
            Box::new(move || {
                if let Some(deck) = deck.upgrade() {
                    deck.borrow_mut().advance();
                }
            }),
        );
        self.auto_play = Some(timer);
    }

    pub fn stop_auto_play(&mut self) {
        // Dropping the handle cancels the timer.
        self.auto_play.take();
    }

    /// Pointer entered the carousel.
    pub fn pause(&mut self) {
        self.stop_auto_play();
    }

    /// Pointer left the carousel.
    pub fn resume(&mut self) {
        self.start_auto_play();
    }

    pub fn active_index(&self) -> Option<usize> {
        self.deck.as_ref().map(|deck| deck.borrow().active)
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto_play.is_some()
    }

    pub fn len(&self) -> usize {
        self.deck
            .as_ref()
            .map_or(0, |deck| deck.borrow().slides.len())
    }
}
