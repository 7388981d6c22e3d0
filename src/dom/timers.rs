use gloo_timers::callback::{Interval, Timeout};

use crate::motion::clock::Scheduler;

/// `setInterval`/`setTimeout` through gloo. The `Interval` handle clears
/// itself when dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Timer = Interval;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, tick)
    }

    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let _ = Timeout::new(delay_ms, task).forget();
    }
}
