// librc522/src/device/builder.rs

use crate::clock::{Clock, Delay};
use crate::device::config::DriverConfig;
use crate::device::handle::{Device, Initialized, Uninitialized};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
#[derive(Default)]
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    delay: Option<Box<dyn Delay>>,
    clock: Option<Box<dyn Clock>>,
    config: DriverConfig,
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Millisecond delay used for the power-up wait. Defaults to a sleeping
    /// delay when the `std` feature is on.
    pub fn with_delay(mut self, delay: Box<dyn Delay>) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Monotonic clock enabling the wall-clock executor deadline.
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn with_config(mut self, config: DriverConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder and return an uninitialized Device.
    pub fn build_uninitialized(self) -> Result<Device<Uninitialized>> {
        let transport = self
            .transport
            .ok_or_else(|| Error::Transport("no transport configured".into()))?;
        let delay = match self.delay {
            Some(d) => d,
            None => default_delay()?,
        };
        Ok(Device::with_parts(transport, delay, self.clock, self.config))
    }

    /// Build and run the initialization sequence.
    pub fn build(self) -> Result<Device<Initialized>> {
        self.build_uninitialized()?.initialize()
    }
}

#[cfg(feature = "std")]
fn default_delay() -> Result<Box<dyn Delay>> {
    Ok(Box::new(crate::clock::StdDelay))
}

#[cfg(not(feature = "std"))]
fn default_delay() -> Result<Box<dyn Delay>> {
    Err(Error::Transport("no delay configured".into()))
}
