// librc522/src/device/operations.rs

//! Card protocol operations. Each builds its frame, appends CRC_A where the
//! card expects it, runs the command executor once and validates the answer
//! against the exact length it must have.

use log::debug;

use crate::card::Card;
use crate::constants::{ACK_BITS, BLOCK_BITS, SAK_BITS, SERIAL_BITS};
use crate::device::{Device, Initialized};
use crate::protocol::{self, Command, Frame};
use crate::registers::{PcdCommand, Register, Status2};
use crate::types::{AuthMode, BlockData, CardType, RequestMode, SectorKey, SerialNumber};
use crate::{Error, Result};

impl Device<Initialized> {
    /// Frame, send and collect the answer of one card command.
    pub fn execute(&mut self, cmd: &Command) -> Result<Frame> {
        let body = cmd.encode();
        let send = if cmd.needs_crc() {
            self.with_crc(&body)?
        } else {
            body
        };
        if cmd.pcd_command() == PcdCommand::Transceive {
            self.write_register(Register::BitFraming, cmd.tx_last_bits())?;
        }
        let mut frame = Frame::new();
        self.to_card(cmd.pcd_command(), &send, &mut frame)?;
        Ok(frame)
    }

    /// Like [`Device::execute`] for exchanges where only Request may report
    /// a missing card: a timer expiry reads as an empty answer.
    fn execute_expecting(&mut self, cmd: &Command, bits: usize) -> Result<Frame> {
        self.execute(cmd).map_err(|e| match e {
            Error::NoTag => Error::BitLength {
                expected: bits,
                actual: 0,
            },
            other => other,
        })
    }

    /// Probe for a card. Returns the 2-byte answer to request.
    ///
    /// [`Error::NoTag`] when nothing answered before the timer expired.
    pub fn request(&mut self, mode: RequestMode) -> Result<[u8; 2]> {
        let frame = self.execute(&Command::Request(mode))?;
        let atqa = protocol::decode_atqa(&frame)?;
        debug!("request: {} ({:02x?})", CardType::from_atqa(atqa), atqa);
        Ok(atqa)
    }

    /// Single anticollision round at cascade level 1.
    pub fn anticoll(&mut self) -> Result<SerialNumber> {
        let frame = self.execute_expecting(&Command::Anticoll, SERIAL_BITS)?;
        let serial = protocol::decode_serial(&frame)?;
        debug!("anticoll: serial {}", serial);
        Ok(serial)
    }

    /// Select the card with `serial`. Returns its size code (SAK).
    pub fn select(&mut self, serial: &SerialNumber) -> Result<u8> {
        let frame = self.execute_expecting(&Command::Select(*serial), SAK_BITS)?;
        let sak = protocol::decode_sak(&frame)?;
        debug!("select: {} size code {:#04x}", serial, sak);
        Ok(sak)
    }

    /// Authenticate the sector holding `block`. Succeeds only when the
    /// peripheral reports Crypto1 engaged afterwards.
    pub fn authenticate(
        &mut self,
        mode: AuthMode,
        block: u8,
        key: &SectorKey,
        serial: &SerialNumber,
    ) -> Result<()> {
        let cmd = Command::Authenticate {
            mode,
            block,
            key: *key,
            serial: *serial,
        };
        self.execute(&cmd).map_err(|e| match e {
            Error::NoTag => Error::AuthenticationFailed,
            other => other,
        })?;
        let status = Status2::from_bits_retain(self.read_register(Register::Status2)?);
        if !status.contains(Status2::MF_CRYPTO1_ON) {
            return Err(Error::AuthenticationFailed);
        }
        debug!("authenticated block {} with {:?}", block, mode);
        Ok(())
    }

    /// Read one 16-byte block. The two trailing CRC bytes of the answer are
    /// not checked.
    pub fn read_block(&mut self, block: u8) -> Result<BlockData> {
        let frame = self.execute_expecting(&Command::Read { block }, BLOCK_BITS)?;
        protocol::decode_block(&frame)
    }

    /// Two-phase write. The payload is only sent after the card acknowledged
    /// the block address.
    pub fn write_block(&mut self, block: u8, data: &BlockData) -> Result<()> {
        let frame = self.execute_expecting(&Command::Write { block }, ACK_BITS)?;
        protocol::expect_ack(&frame)?;

        let frame = self.execute_expecting(&Command::WriteData(*data), ACK_BITS)?;
        protocol::expect_ack(&frame)?;
        debug!("wrote block {}", block);
        Ok(())
    }

    /// Put the selected card into the halt state. The card does not answer a
    /// successful halt, so only bus failures and a strict CRC timeout (frame
    /// never sent) are reported.
    pub fn halt(&mut self) -> Result<()> {
        match self.execute(&Command::Halt) {
            Err(e @ (Error::Transport(_) | Error::CrcTimeout)) => Err(e),
            _ => Ok(()),
        }
    }

    /// Request, anticollision and select in one go.
    pub fn poll_card(&mut self, mode: RequestMode) -> Result<Card> {
        let atqa = self.request(mode)?;
        let serial = self.anticoll()?;
        let sak = self.select(&serial)?;
        Ok(Card::new(serial, CardType::from_atqa(atqa), sak))
    }
}
