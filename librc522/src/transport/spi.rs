// librc522/src/transport/spi.rs

use crate::registers::Register;
use crate::transport::traits::{Bus, Transport};
use crate::Result;

/// Register transport over an SPI-style [`Bus`].
///
/// A read clocks out the read address and then a dummy byte, keeping the
/// byte clocked in during the second transfer. A write clocks out the write
/// address and the value. Chip select is released even when a transfer fails.
#[derive(Debug)]
pub struct SpiTransport<B> {
    bus: B,
}

impl<B: Bus> SpiTransport<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn into_inner(self) -> B {
        self.bus
    }

    fn transaction<T>(&mut self, f: impl FnOnce(&mut B) -> Result<T>) -> Result<T> {
        self.bus.select()?;
        let result = f(&mut self.bus);
        let released = self.bus.deselect();
        let value = result?;
        released?;
        Ok(value)
    }
}

impl<B: Bus> Transport for SpiTransport<B> {
    fn read_register(&mut self, reg: Register) -> Result<u8> {
        self.transaction(|bus| {
            bus.transfer(reg.read_address())?;
            bus.transfer(0x00)
        })
    }

    fn write_register(&mut self, reg: Register, value: u8) -> Result<()> {
        self.transaction(|bus| {
            bus.transfer(reg.write_address())?;
            bus.transfer(value)?;
            Ok(())
        })
    }
}
