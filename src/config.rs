use log::Level;

use crate::motion::counter::CounterTiming;
use crate::motion::visibility::ThresholdConfig;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty while developing with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const CAROUSEL_PERIOD_MS: u32 = 5000;

pub const COUNTER_TIMING: CounterTiming = CounterTiming {
    tick_ms: 16,
    duration_ms: 2000,
};

/// Stats start counting once half the section is on screen.
pub const COUNTER_VISIBILITY: ThresholdConfig = ThresholdConfig {
    threshold: 0.5,
    root_margin: "0px",
};

/// Reveals fire a little before the element reaches the bottom edge.
pub const REVEAL_VISIBILITY: ThresholdConfig = ThresholdConfig {
    threshold: 0.1,
    root_margin: "0px 0px -100px 0px",
};

pub const REVEAL_DURATION_S: f64 = 0.6;
pub const REVEAL_STAGGER_S: f64 = 0.1;

pub const NAVBAR_SCROLLED_AFTER_PX: f64 = 100.0;
pub const HEADER_OFFSET_PX: f64 = 80.0;
pub const PARALLAX_FACTOR: f64 = 0.5;

pub const CONTACT_SENDING_MS: u32 = 2000;
pub const CONTACT_RESET_MS: u32 = 3000;
