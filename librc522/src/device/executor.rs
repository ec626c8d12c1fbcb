// librc522/src/device/executor.rs

use log::trace;

use crate::constants::FIFO_SIZE;
use crate::device::Device;
use crate::protocol::Frame;
use crate::registers::{
    BitFraming, ComIEn, ComIrq, ErrorFlags, FifoLevel, PcdCommand, Register, RX_LAST_BITS_MASK,
};
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Interrupt enable and wait-for masks per peripheral command.
pub(crate) fn irq_masks(command: PcdCommand) -> (ComIEn, ComIrq) {
    match command {
        PcdCommand::Authent => (ComIEn::ERR | ComIEn::IDLE, ComIrq::IDLE),
        PcdCommand::Transceive => (
            ComIEn::TX
                | ComIEn::RX
                | ComIEn::IDLE
                | ComIEn::LO_ALERT
                | ComIEn::ERR
                | ComIEn::TIMER,
            ComIrq::RX | ComIrq::IDLE,
        ),
        _ => (ComIEn::empty(), ComIrq::empty()),
    }
}

impl<State> Device<State> {
    /// Run one peripheral command against the card.
    ///
    /// `send` is pushed through the FIFO; for [`PcdCommand::Transceive`] the
    /// answer is drained into `out` together with its bit length. `out` is
    /// cleared first and left empty for every other command.
    ///
    /// Errors: [`Error::Timeout`] when neither the timer nor the wait-for IRQ
    /// shows within the poll budget, [`Error::Peripheral`] for fatal bits in
    /// `ErrorReg`, [`Error::NoTag`] when the receive timer fired.
    pub fn to_card(&mut self, command: PcdCommand, send: &[u8], out: &mut Frame) -> Result<()> {
        if send.len() > FIFO_SIZE {
            return Err(Error::FrameTooLong {
                max: FIFO_SIZE,
                actual: send.len(),
            });
        }
        out.reset();
        let (irq_en, wait_irq) = irq_masks(command);

        self.write_register(Register::ComIEn, (irq_en | ComIEn::IRQ_INV).bits())?;
        // Set1 low: every written 1-bit clears a pending flag.
        self.write_register(Register::ComIrq, !ComIrq::SET1.bits())?;
        self.set_bits(Register::FifoLevel, FifoLevel::FLUSH_BUFFER.bits())?;
        self.write_register(Register::Command, PcdCommand::Idle as u8)?;

        for &byte in send {
            self.write_register(Register::FifoData, byte)?;
        }
        self.write_register(Register::Command, command as u8)?;
        if command == PcdCommand::Transceive {
            self.set_bits(Register::BitFraming, BitFraming::START_SEND.bits())?;
        }

        let mut budget = self.poll_budget(self.config.executor_polls, self.config.executor_deadline);
        let mut irq = None;
        while budget.tick(self.now()) {
            let n = ComIrq::from_bits_retain(self.read_register(Register::ComIrq)?);
            if n.intersects(ComIrq::TIMER | wait_irq) {
                irq = Some(n);
                break;
            }
        }

        self.clear_bits(Register::BitFraming, BitFraming::START_SEND.bits())?;

        let Some(irq) = irq else {
            return Err(Error::Timeout {
                polls: budget.used(),
            });
        };

        let errors =
            ErrorFlags::from_bits_retain(self.read_register(Register::Error)?) & ErrorFlags::FATAL;
        if !errors.is_empty() {
            return Err(Error::Peripheral(errors));
        }

        if irq.contains(ComIrq::TIMER) && irq_en.contains(ComIEn::TIMER) {
            trace!("{:?}: [{}] -> no tag", command, bytes_to_hex_spaced(send));
            return Err(Error::NoTag);
        }

        if command == PcdCommand::Transceive {
            let level = usize::from(self.read_register(Register::FifoLevel)? & 0x7F);
            let last_bits = self.read_register(Register::Control)? & RX_LAST_BITS_MASK;
            out.set_bit_len(Frame::bit_count(level, last_bits));
            for _ in 0..Frame::drain_len(level) {
                let byte = self.read_register(Register::FifoData)?;
                out.push(byte);
            }
        }

        trace!(
            "{:?}: [{}] -> [{}] ({} bits, {} polls)",
            command,
            bytes_to_hex_spaced(send),
            bytes_to_hex_spaced(out.as_bytes()),
            out.bit_len(),
            budget.used()
        );
        Ok(())
    }
}
