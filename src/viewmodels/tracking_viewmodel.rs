// ============================================================================
// TRACKING VIEWMODEL - Drives the status timeline from a ticker
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use chrono::NaiveTime;

use crate::models::{StatusTimeline, Transition};
use crate::services::ticker::{TickHandle, Ticker};

pub type Clock = Rc<dyn Fn() -> NaiveTime>;

/// Wall-clock time of day in the browser's zone
pub fn local_clock() -> Clock {
    Rc::new(|| chrono::Local::now().time())
}

struct SimulatorInner {
    timeline: RefCell<StatusTimeline>,
    disposed: Cell<bool>,
    handle: RefCell<Option<TickHandle>>,
    clock: Clock,
    on_change: Box<dyn Fn(&StatusTimeline)>,
}

impl SimulatorInner {
    fn notify(&self) {
        (self.on_change)(&self.timeline.borrow());
    }

    fn stop(&self) {
        if let Some(mut handle) = self.handle.borrow_mut().take() {
            handle.cancel();
        }
    }

    fn tick(&self) {
        if self.disposed.get() {
            return;
        }
        let transition = self.timeline.borrow_mut().advance((self.clock)());
        match transition {
            Transition::Advanced(phase) => {
                log::debug!("⏱️ Order status -> {}", phase.title());
                self.notify();
            }
            Transition::Finished => {
                log::debug!("✅ Order delivered, status timer stopped");
                self.notify();
                self.stop();
            }
            Transition::Idle => {}
            Transition::AlreadyTerminal => self.stop(),
        }
    }
}

/// Owns the timeline and its timer; after `dispose` nothing mutates it
pub struct StatusSimulator {
    inner: Rc<SimulatorInner>,
}

impl StatusSimulator {
    pub fn new(clock: Clock, on_change: impl Fn(&StatusTimeline) + 'static) -> Self {
        Self {
            inner: Rc::new(SimulatorInner {
                timeline: RefCell::new(StatusTimeline::new()),
                disposed: Cell::new(false),
                handle: RefCell::new(None),
                clock,
                on_change: Box::new(on_change),
            }),
        }
    }

    /// Step 0 becomes current now; later steps follow every `period_ms`
    pub fn start(&self, ticker: &dyn Ticker, period_ms: u32) {
        let inner = &self.inner;
        if inner.disposed.get() || inner.timeline.borrow().is_started() {
            return;
        }
        inner.timeline.borrow_mut().start((inner.clock)());
        inner.notify();

        let weak: Weak<SimulatorInner> = Rc::downgrade(inner);
        let handle = ticker.every(
            period_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.tick();
                }
            }),
        );
        *inner.handle.borrow_mut() = Some(handle);
    }

    pub fn dispose(&self) {
        self.inner.disposed.set(true);
        self.inner.stop();
    }

    pub fn snapshot(&self) -> StatusTimeline {
        self.inner.timeline.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        self.inner.handle.borrow().is_some()
    }
}

impl Drop for StatusSimulator {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DeliveryPhase;
    use crate::services::ticker::ManualTicker;

    fn fixed_clock() -> Clock {
        Rc::new(|| NaiveTime::from_hms_opt(10, 30, 0).unwrap())
    }

    fn simulator() -> (StatusSimulator, Rc<Cell<usize>>) {
        let changes = Rc::new(Cell::new(0));
        let counter = changes.clone();
        let sim = StatusSimulator::new(fixed_clock(), move |_| counter.set(counter.get() + 1));
        (sim, changes)
    }

    #[test]
    fn test_start_marks_step_zero() {
        let ticker = ManualTicker::new();
        let (sim, changes) = simulator();
        sim.start(&ticker, 7_000);

        let timeline = sim.snapshot();
        assert_eq!(timeline.current_index(), Some(0));
        assert_eq!(changes.get(), 1);
        assert!(sim.is_running());
    }

    #[test]
    fn test_runs_to_terminal_then_stops() {
        let ticker = ManualTicker::new();
        let (sim, changes) = simulator();
        sim.start(&ticker, 7_000);
        let steps = DeliveryPhase::ALL.len();

        for n in 1..steps - 1 {
            ticker.tick();
            assert_eq!(sim.snapshot().current_index(), Some(n));
        }
        ticker.tick();

        let timeline = sim.snapshot();
        assert!(timeline.is_terminal());
        assert!(timeline.steps().last().map_or(false, |s| s.completed && s.is_current));
        assert!(!sim.is_running());
        assert_eq!(ticker.active_count(), 0);
        assert_eq!(changes.get(), steps);

        ticker.tick();
        assert_eq!(sim.snapshot(), timeline);
    }

    #[test]
    fn test_no_change_after_dispose() {
        let ticker = ManualTicker::new();
        let (sim, changes) = simulator();
        sim.start(&ticker, 7_000);
        ticker.tick();
        sim.dispose();

        let before = sim.snapshot();
        ticker.tick();
        ticker.tick();
        assert_eq!(sim.snapshot(), before);
        assert_eq!(changes.get(), 2);

        sim.start(&ticker, 7_000);
        assert_eq!(ticker.active_count(), 0);
    }

    #[test]
    fn test_drop_releases_timer() {
        let ticker = ManualTicker::new();
        let (sim, _) = simulator();
        sim.start(&ticker, 7_000);
        drop(sim);
        assert_eq!(ticker.active_count(), 0);
        ticker.tick();
    }
}
