use super::clock::Scheduler;
use super::view::ViewHandle;

/// Parsed statistic such as `"150+"` or `"98%"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterTarget {
    pub magnitude: u64,
    pub suffix: char,
    pub original: String,
}

impl CounterTarget {
    /// Reads the digits of `text` as one number. `None` when there are none.
    pub fn parse(text: &str) -> Option<Self> {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return None;
        }
        let magnitude = digits.parse::<u64>().ok()?;
        let suffix = if text.contains('%') { '%' } else { '+' };
        Some(Self {
            magnitude,
            suffix,
            original: text.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterTiming {
    pub tick_ms: u32,
    pub duration_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterFrame {
    Running(String),
    /// The original text, restored verbatim.
    Finished(String),
}

/// Ramps a number from zero to its target in fixed increments.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: CounterTarget,
    current: f64,
    increment: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: CounterTarget, timing: CounterTiming) -> Self {
        let steps = f64::from(timing.duration_ms) / f64::from(timing.tick_ms.max(1));
        let increment = target.magnitude as f64 / steps;
        Self {
            target,
            current: 0.0,
            increment,
            finished: false,
        }
    }

    /// Next text to display, `None` once finished.
    pub fn step(&mut self) -> Option<CounterFrame> {
        if self.finished {
            return None;
        }
        self.current += self.increment;
        if self.current < self.target.magnitude as f64 {
            let shown = self.current.floor() as u64;
            Some(CounterFrame::Running(format!("{}{}", shown, self.target.suffix)))
        } else {
            self.finished = true;
            Some(CounterFrame::Finished(self.target.original.clone()))
        }
    }
}

/// Counts `element` up from zero to the number it currently shows.
///
/// The first frame is written immediately, the rest every `tick_ms`.
/// Elements without digits are left alone.
pub fn start_counter<H, S>(element: H, scheduler: S, timing: CounterTiming)
where
    H: ViewHandle + 'static,
    S: Scheduler,
{
    let Some(target) = CounterTarget::parse(&element.text()) else {
        log::debug!("counter text {:?} has no digits", element.text());
        return;
    };
    run_frame(element, CounterAnimation::new(target, timing), scheduler, timing.tick_ms);
}

fn run_frame<H, S>(element: H, mut animation: CounterAnimation, scheduler: S, tick_ms: u32)
where
    H: ViewHandle + 'static,
    S: Scheduler,
{
    match animation.step() {
        Some(CounterFrame::Running(text)) => {
            element.set_text(&text);
            let next = scheduler.clone();
            scheduler.after(
                tick_ms,
                Box::new(move || run_frame(element, animation, next, tick_ms)),
            );
        }
        Some(CounterFrame::Finished(text)) => element.set_text(&text),
        None => {}
    }
}
