// librc522/src/device/io.rs

use crate::device::Device;
use crate::registers::Register;
use crate::Result;

impl<State> Device<State> {
    pub fn read_register(&mut self, reg: Register) -> Result<u8> {
        self.transport.read_register(reg)
    }

    pub fn write_register(&mut self, reg: Register, value: u8) -> Result<()> {
        self.transport.write_register(reg, value)
    }

    /// Read-modify-write: OR `mask` into `reg`.
    pub fn set_bits(&mut self, reg: Register, mask: u8) -> Result<()> {
        let value = self.read_register(reg)?;
        self.write_register(reg, value | mask)
    }

    /// Read-modify-write: clear `mask` in `reg`.
    pub fn clear_bits(&mut self, reg: Register, mask: u8) -> Result<()> {
        let value = self.read_register(reg)?;
        self.write_register(reg, value & !mask)
    }
}
