// librc522/src/device/crc.rs

use log::trace;

use crate::constants::FIFO_SIZE;
use crate::device::Device;
use crate::registers::{DivIrq, FifoLevel, PcdCommand, Register};
use crate::{Error, Result};

impl<State> Device<State> {
    /// CRC_A of `data` from the peripheral's coprocessor, low byte first.
    ///
    /// Fail-soft: when the done flag never shows within `crc_polls` reads the
    /// result registers are returned as they are and [`Device::crc_timed_out`]
    /// reports `true` until the next computation.
    pub fn calculate_crc(&mut self, data: &[u8]) -> Result<[u8; 2]> {
        if data.len() > FIFO_SIZE {
            return Err(Error::FrameTooLong {
                max: FIFO_SIZE,
                actual: data.len(),
            });
        }

        // Set bit low: the written 1-bit clears CRCIRq.
        self.write_register(Register::DivIrq, DivIrq::CRC.bits())?;
        self.set_bits(Register::FifoLevel, FifoLevel::FLUSH_BUFFER.bits())?;
        for &byte in data {
            self.write_register(Register::FifoData, byte)?;
        }
        self.write_register(Register::Command, PcdCommand::CalcCrc as u8)?;

        let mut budget = self.poll_budget(self.config.crc_polls, None);
        let mut done = false;
        while budget.tick(None) {
            let irq = DivIrq::from_bits_retain(self.read_register(Register::DivIrq)?);
            if irq.contains(DivIrq::CRC) {
                done = true;
                break;
            }
        }
        self.crc_timed_out = !done;

        let low = self.read_register(Register::CrcResultLow)?;
        let high = self.read_register(Register::CrcResultHigh)?;
        if !done {
            trace!("crc: coprocessor idle after {} polls", budget.used());
        }
        Ok([low, high])
    }

    /// `data` followed by its CRC_A, honouring `strict_crc`.
    pub(crate) fn with_crc(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        let crc = self.calculate_crc(data)?;
        if self.crc_timed_out && self.config.strict_crc {
            return Err(Error::CrcTimeout);
        }
        let mut framed = Vec::with_capacity(data.len() + 2);
        framed.extend_from_slice(data);
        framed.extend_from_slice(&crc);
        Ok(framed)
    }
}
