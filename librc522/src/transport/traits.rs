// librc522/src/transport/traits.rs

use crate::registers::Register;
use crate::Result;

/// Register-level access to the peripheral. Each call is one bus
/// transaction; there are no retries at this layer.
pub trait Transport {
    /// Read one register.
    fn read_register(&mut self, reg: Register) -> Result<u8>;

    /// Write one register.
    fn write_register(&mut self, reg: Register, value: u8) -> Result<()>;

    /// Transport-level reset (reset line, bus re-init). Called once before
    /// the peripheral is configured. Default is a no-op.
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn read_register(&mut self, reg: Register) -> Result<u8> {
        (**self).read_register(reg)
    }

    fn write_register(&mut self, reg: Register, value: u8) -> Result<()> {
        (**self).write_register(reg, value)
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }
}

/// Byte-level duplex bus with a chip-select line.
pub trait Bus {
    /// Assert chip select.
    fn select(&mut self) -> Result<()>;

    /// Release chip select.
    fn deselect(&mut self) -> Result<()>;

    /// Clock one byte out and return the byte clocked in.
    fn transfer(&mut self, byte: u8) -> Result<u8>;
}
