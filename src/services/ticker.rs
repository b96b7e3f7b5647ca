// ============================================================================
// TICKER - Cancellable periodic callbacks
// ============================================================================
// Browser implementation on top of gloo Interval; tests drive a manual one.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};

/// Source of periodic ticks
pub trait Ticker {
    fn every(&self, period_ms: u32, on_tick: Box<dyn FnMut()>) -> TickHandle;
}

/// Stops the schedule on `cancel` or drop
pub struct TickHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TickHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// `setInterval` ticker
#[derive(Clone, Copy, Debug, Default)]
pub struct IntervalTicker;

impl Ticker for IntervalTicker {
    fn every(&self, period_ms: u32, mut on_tick: Box<dyn FnMut()>) -> TickHandle {
        let slot = Rc::new(RefCell::new(Some(Interval::new(period_ms, move || on_tick()))));

        TickHandle::new(move || {
            if let Some(interval) = slot.borrow_mut().take() {
                // The cancel may run inside the interval's own callback; the
                // closure must outlive that call, so the drop is deferred.
                Timeout::new(0, move || drop(interval)).forget();
            }
        })
    }
}

#[cfg(test)]
pub use manual::ManualTicker;

#[cfg(test)]
mod manual {
    use super::*;
    use std::cell::Cell;

    struct Registration {
        on_tick: Rc<RefCell<Box<dyn FnMut()>>>,
        active: Rc<Cell<bool>>,
    }

    /// Fires every active registration on `tick()`
    #[derive(Clone, Default)]
    pub struct ManualTicker {
        registrations: Rc<RefCell<Vec<Registration>>>,
    }

    impl ManualTicker {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn tick(&self) {
            let due: Vec<_> = self
                .registrations
                .borrow()
                .iter()
                .filter(|r| r.active.get())
                .map(|r| (r.on_tick.clone(), r.active.clone()))
                .collect();
            for (on_tick, active) in due {
                if active.get() {
                    (on_tick.borrow_mut())();
                }
            }
        }

        pub fn active_count(&self) -> usize {
            self.registrations.borrow().iter().filter(|r| r.active.get()).count()
        }
    }

    impl Ticker for ManualTicker {
        fn every(&self, _period_ms: u32, on_tick: Box<dyn FnMut()>) -> TickHandle {
            let active = Rc::new(Cell::new(true));
            self.registrations.borrow_mut().push(Registration {
                on_tick: Rc::new(RefCell::new(on_tick)),
                active: active.clone(),
            });
            TickHandle::new(move || active.set(false))
        }
    }

    #[test]
    fn test_cancel_stops_ticks() {
        let ticker = ManualTicker::new();
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let mut handle = ticker.every(10, Box::new(move || counter.set(counter.get() + 1)));

        ticker.tick();
        ticker.tick();
        handle.cancel();
        ticker.tick();

        assert_eq!(count.get(), 2);
        assert!(!handle.is_active());
        assert_eq!(ticker.active_count(), 0);
    }

    #[test]
    fn test_drop_cancels() {
        let ticker = ManualTicker::new();
        drop(ticker.every(10, Box::new(|| {})));
        assert_eq!(ticker.active_count(), 0);
    }
}
