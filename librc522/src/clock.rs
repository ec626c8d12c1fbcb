// librc522/src/clock.rs

//! Time sources consumed by the driver.
//!
//! [`Delay`] is the millisecond sleep used between power-up and reset.
//! [`Clock`] is optional and only needed for wall-clock poll deadlines.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Blocking millisecond delay.
pub trait Delay {
    fn delay_ms(&mut self, ms: u32);
}

/// Monotonic time since an arbitrary origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

impl<D: Delay + ?Sized> Delay for Box<D> {
    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }
}

/// `std::thread::sleep` backed delay.
#[cfg(feature = "std")]
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

#[cfg(feature = "std")]
impl Delay for StdDelay {
    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}

/// `std::time::Instant` backed clock, measuring from construction.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Delay that only records the requested durations.
#[derive(Debug, Default, Clone)]
pub struct MockDelay {
    calls: Rc<RefCell<Vec<u32>>>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every delay requested so far, in order.
    pub fn calls(&self) -> Vec<u32> {
        self.calls.borrow().clone()
    }
}

impl Delay for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.calls.borrow_mut().push(ms);
    }
}

/// Clock that advances by a fixed step on every `now()` call.
///
/// Clones share the same time, so a test can keep one handle while the
/// device owns another.
#[derive(Debug, Clone)]
pub struct MockClock {
    now: Rc<Cell<Duration>>,
    step: Duration,
}

impl MockClock {
    pub fn new(step: Duration) -> Self {
        Self {
            now: Rc::new(Cell::new(Duration::ZERO)),
            step,
        }
    }

    /// Current time without advancing.
    pub fn peek(&self) -> Duration {
        self.now.get()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for MockClock {
    fn now(&self) -> Duration {
        let t = self.now.get();
        self.now.set(t + self.step);
        t
    }
}
