//! Poll budgets for busy-wait loops.
//!
//! Every wait on the peripheral is bounded by a number of register polls.
//! When a clock is available, an additional wall-clock deadline can cut the
//! loop short; the failure classification stays the same either way.

use std::time::Duration;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Bounded poll counter with an optional deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollBudget {
    limit: u32,
    used: u32,
    deadline: Option<Duration>,
}

impl PollBudget {
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            used: 0,
            deadline: None,
        }
    }

    /// Stop polling once `now` passes `start + limit`.
    pub fn with_deadline(mut self, start: Duration, limit: Duration) -> Self {
        self.deadline = Some(start.saturating_add(limit));
        self
    }

    /// Claim one poll. Returns `false` once the count or the deadline is spent.
    pub fn tick(&mut self, now: Option<Duration>) -> bool {
        if self.used >= self.limit {
            return false;
        }
        if let (Some(deadline), Some(now)) = (self.deadline, now) {
            if now > deadline {
                return false;
            }
        }
        self.used += 1;
        true
    }

    /// Polls claimed so far.
    pub fn used(&self) -> u32 {
        self.used
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}
