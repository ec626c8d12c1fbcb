// librc522/src/device/handle.rs

use std::marker::PhantomData;
use std::time::Duration;

use crate::clock::{Clock, Delay};
use crate::device::config::DriverConfig;
use crate::transport::Transport;
use crate::utils::PollBudget;

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// Reader handle that enforces initialization state at compile time.
///
/// The handle owns the register transport and is the only user of the
/// peripheral; every operation takes `&mut self`.
pub struct Device<State = Uninitialized> {
    pub(crate) transport: Box<dyn Transport>,
    pub(crate) delay: Box<dyn Delay>,
    pub(crate) clock: Option<Box<dyn Clock>>,
    pub(crate) config: DriverConfig,
    pub(crate) crc_timed_out: bool,
    _state: PhantomData<State>,
}

impl Device<Uninitialized> {
    /// Create a device from a transport and delay with the default config.
    pub fn new_with_transport(transport: Box<dyn Transport>, delay: Box<dyn Delay>) -> Self {
        Self::with_parts(transport, delay, None, DriverConfig::default())
    }

    pub(crate) fn with_parts(
        transport: Box<dyn Transport>,
        delay: Box<dyn Delay>,
        clock: Option<Box<dyn Clock>>,
        config: DriverConfig,
    ) -> Self {
        Self {
            transport,
            delay,
            clock,
            config,
            crc_timed_out: false,
            _state: PhantomData,
        }
    }
}

impl<State> Device<State> {
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Whether the most recent CRC computation ran out of polls. The CRC
    /// bytes returned in that case are whatever the result registers held.
    pub fn crc_timed_out(&self) -> bool {
        self.crc_timed_out
    }

    /// Give back the transport.
    pub fn into_transport(self) -> Box<dyn Transport> {
        self.transport
    }

    pub(crate) fn now(&self) -> Option<Duration> {
        self.clock.as_ref().map(|c| c.now())
    }

    pub(crate) fn poll_budget(&self, polls: u32, deadline: Option<Duration>) -> PollBudget {
        let budget = PollBudget::new(polls);
        match (deadline, self.now()) {
            (Some(limit), Some(start)) => budget.with_deadline(start, limit),
            _ => budget,
        }
    }

    pub(crate) fn into_state<Next>(self) -> Device<Next> {
        Device {
            transport: self.transport,
            delay: self.delay,
            clock: self.clock,
            config: self.config,
            crc_timed_out: self.crc_timed_out,
            _state: PhantomData,
        }
    }
}
