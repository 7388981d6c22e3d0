/// Source of deferred execution for the animation code.
///
/// Recurring timers come back as owned handles: dropping the handle cancels
/// the timer, so a controller that owns its handle cannot leak it.
pub trait Scheduler: Clone + 'static {
    type Timer;

    /// Runs `tick` every `period_ms` until the returned timer is dropped.
    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Timer;

    /// Runs `task` once after `delay_ms`. Detached: it cannot be cancelled.
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

#[cfg(test)]
pub mod virtual_clock {
    use super::Scheduler;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::{Rc, Weak};

    enum Task {
        Repeat { period: u64, tick: Box<dyn FnMut()> },
        Once(Box<dyn FnOnce()>),
    }

    struct Entry {
        id: u64,
        due: u64,
        task: Task,
    }

    #[derive(Default)]
    struct State {
        now: u64,
        next_id: u64,
        pending: Vec<Entry>,
        cancelled: HashSet<u64>,
    }

    impl State {
        fn schedule(&mut self, due: u64, task: Task) -> u64 {
            let id = self.next_id;
            self.next_id += 1;
            self.pending.push(Entry { id, due, task });
            id
        }
    }

    /// Deterministic scheduler: nothing runs until a test calls [`advance`].
    ///
    /// [`advance`]: VirtualClock::advance
    #[derive(Clone, Default)]
    pub struct VirtualClock(Rc<RefCell<State>>);

    pub struct VirtualTimer {
        id: u64,
        clock: Weak<RefCell<State>>,
    }

    impl Drop for VirtualTimer {
        fn drop(&mut self) {
            let Some(state) = self.clock.upgrade() else {
                return;
            };
            // Removed entries are dropped after the borrow ends; their
            // closures may own timers of their own.
            let _removed: Vec<Entry> = {
                let mut state = state.borrow_mut();
                state.cancelled.insert(self.id);
                let (gone, keep) = std::mem::take(&mut state.pending)
                    .into_iter()
                    .partition(|e| e.id == self.id);
                state.pending = keep;
                gone
            };
        }
    }

    impl VirtualClock {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u64 {
            self.0.borrow().now
        }

        /// Recurring timers that are still scheduled.
        pub fn live_timers(&self) -> usize {
            self.0
                .borrow()
                .pending
                .iter()
                .filter(|e| matches!(e.task, Task::Repeat { .. }))
                .count()
        }

        /// Moves time forward by `ms`, running every task that falls due in
        /// order. Tasks may schedule or cancel other tasks while running.
        pub fn advance(&self, ms: u64) {
            let target = self.now() + ms;
            loop {
                let entry = {
                    let mut state = self.0.borrow_mut();
                    let next = state
                        .pending
                        .iter()
                        .enumerate()
                        .filter(|(_, e)| e.due <= target)
                        .min_by_key(|(_, e)| (e.due, e.id))
                        .map(|(i, _)| i);
                    match next {
                        Some(i) => {
                            let entry = state.pending.remove(i);
                            state.now = entry.due;
                            entry
                        }
                        None => {
                            state.now = target;
                            break;
                        }
                    }
                };

                match entry.task {
                    Task::Once(task) => task(),
                    Task::Repeat { period, mut tick } => {
                        tick();
                        let mut state = self.0.borrow_mut();
                        if !state.cancelled.contains(&entry.id) {
                            state.pending.push(Entry {
                                id: entry.id,
                                due: entry.due + period,
                                task: Task::Repeat { period, tick },
                            });
                        }
                    }
                }
            }
        }
    }

    impl Scheduler for VirtualClock {
        type Timer = VirtualTimer;

        fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> VirtualTimer {
            let mut state = self.0.borrow_mut();
            let period = u64::from(period_ms.max(1));
            let due = state.now + period;
            let id = state.schedule(due, Task::Repeat { period, tick });
            VirtualTimer {
                id,
                clock: Rc::downgrade(&self.0),
            }
        }

        fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
            let mut state = self.0.borrow_mut();
            let due = state.now + u64::from(delay_ms);
            state.schedule(due, Task::Once(task));
        }
    }

    mod tests {
        use super::*;
        use std::cell::Cell;

        #[test]
        fn repeating_timer_fires_once_per_period() {
            let clock = VirtualClock::new();
            let hits = Rc::new(Cell::new(0));
            let counter = hits.clone();
            let _timer = clock.every(100, Box::new(move || counter.set(counter.get() + 1)));

            clock.advance(99);
            assert_eq!(hits.get(), 0);
            clock.advance(1);
            assert_eq!(hits.get(), 1);
            clock.advance(250);
            assert_eq!(hits.get(), 3);
            assert_eq!(clock.now(), 350);
        }

        #[test]
        fn dropping_the_timer_cancels_it() {
            let clock = VirtualClock::new();
            let hits = Rc::new(Cell::new(0));
            let counter = hits.clone();
            let timer = clock.every(10, Box::new(move || counter.set(counter.get() + 1)));
            clock.advance(30);
            drop(timer);

            assert_eq!(clock.live_timers(), 0);
            clock.advance(100);
            assert_eq!(hits.get(), 3);
        }

        #[test]
        fn one_shot_tasks_can_chain() {
            let clock = VirtualClock::new();
            let log = Rc::new(RefCell::new(Vec::new()));

            let inner_log = log.clone();
            let inner_clock = clock.clone();
            clock.after(
                5,
                Box::new(move || {
                    inner_log.borrow_mut().push(inner_clock.now());
                    let log = inner_log.clone();
                    let clock = inner_clock.clone();
                    inner_clock.after(5, Box::new(move || log.borrow_mut().push(clock.now())));
                }),
            );

            clock.advance(20);
            assert_eq!(*log.borrow(), vec![5, 10]);
        }
    }
}
