// librc522/src/diagnostics.rs

//! Register dump and a write/read-back self test. Neither touches the FIFO
//! data register, so reading does not consume queued bytes.

use log::{debug, warn};

use crate::device::Device;
use crate::registers::Register;
use crate::Result;

impl<State> Device<State> {
    /// Value of every register except `FIFODataReg`, in address order.
    pub fn dump_registers(&mut self) -> Result<Vec<(Register, u8)>> {
        let mut out = Vec::with_capacity(Register::ALL.len() - 1);
        for reg in Register::ALL {
            if reg == Register::FifoData {
                continue;
            }
            out.push((reg, self.read_register(reg)?));
        }
        debug!("dumped {} registers", out.len());
        Ok(out)
    }

    /// Write `value` to `reg` and read it back. `Ok(false)` when the value
    /// did not stick; the previous content is restored either way.
    pub fn register_self_test(&mut self, reg: Register, value: u8) -> Result<bool> {
        let saved = self.read_register(reg)?;
        self.write_register(reg, value)?;
        let back = self.read_register(reg)?;
        self.write_register(reg, saved)?;
        if back != value {
            warn!(
                "self test {:?}: wrote {:#04x}, read {:#04x}",
                reg, value, back
            );
        }
        Ok(back == value)
    }
}
