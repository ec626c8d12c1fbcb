// librc522/src/transport/mock.rs

//! Register-file simulator of the peripheral for tests.
//!
//! The simulator models what the driver relies on: the FIFO and its level
//! register, IRQ registers with Set-bit semantics, the CRC coprocessor
//! (computing a real CRC_A), the command register, bit framing and the
//! crypto flag in `Status2Reg`. Card answers are scripted as [`CardReply`]
//! values, consumed one per transceive or authenticate.
//!
//! `MockTransport` is a cheap handle around shared state: clone it before
//! handing it to a device and keep the clone to inspect what was sent.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::constants::FIFO_SIZE;
use crate::protocol::checksum::crc_a;
use crate::registers::{
    ComIrq, DivIrq, ErrorFlags, FifoLevel, PcdCommand, Register, Status2, TxControl,
    RX_LAST_BITS_MASK,
};
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Scripted card behaviour for one exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardReply {
    /// Card answers `bytes`; `last_bits` valid bits in the final byte (0 = whole).
    Data { bytes: Vec<u8>, last_bits: u8 },
    /// No card: the peripheral timer fires.
    Silent,
    /// Nothing ever completes.
    Hang,
    /// The exchange completes with these error flags.
    Error(ErrorFlags),
    /// Authentication succeeds and Crypto1 is switched on.
    Authenticated,
    /// Authentication command completes but Crypto1 stays off.
    AuthRejected,
}

impl CardReply {
    /// Whole-byte answer.
    pub fn bytes(bytes: &[u8]) -> Self {
        Self::Data {
            bytes: bytes.to_vec(),
            last_bits: 0,
        }
    }

    /// Answer ending on a partial byte.
    pub fn bits(bytes: &[u8], last_bits: u8) -> Self {
        Self::Data {
            bytes: bytes.to_vec(),
            last_bits,
        }
    }

    /// 4-bit Mifare ACK.
    pub fn ack() -> Self {
        Self::bits(&[0x0A], 4)
    }

    /// 4-bit Mifare NAK with the given nibble.
    pub fn nak(nibble: u8) -> Self {
        Self::bits(&[nibble & 0x0F], 4)
    }
}

/// One frame the driver pushed to the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentFrame {
    pub command: PcdCommand,
    pub data: Vec<u8>,
    /// TxLastBits of `BitFramingReg` at the moment of sending.
    pub tx_last_bits: u8,
}

#[derive(Debug)]
struct MockState {
    regs: [u8; 64],
    fifo: VecDeque<u8>,
    replies: VecDeque<CardReply>,
    sent: Vec<SentFrame>,
    writes: Vec<(Register, u8)>,
    pending: Option<PcdCommand>,
    crc_stall: bool,
    antenna_fault: bool,
    fail_after: Option<usize>,
    resets: usize,
    soft_resets: usize,
}

impl Default for MockState {
    fn default() -> Self {
        let mut state = Self {
            regs: [0u8; 64],
            fifo: VecDeque::new(),
            replies: VecDeque::new(),
            sent: Vec::new(),
            writes: Vec::new(),
            pending: None,
            crc_stall: false,
            antenna_fault: false,
            fail_after: None,
            resets: 0,
            soft_resets: 0,
        };
        state.power_on();
        state
    }
}

impl MockState {
    fn power_on(&mut self) {
        self.regs = [0u8; 64];
        self.set(Register::Command, 0x20);
        self.set(Register::ComIEn, 0x80);
        self.set(Register::ComIrq, 0x14);
        self.set(Register::Control, 0x10);
        self.set(Register::Mode, 0x3F);
        self.set(Register::TxControl, 0x80);
        self.set(Register::RfCfg, 0x48);
        self.set(Register::Version, 0x92);
        self.fifo.clear();
        self.pending = None;
    }

    fn get(&self, reg: Register) -> u8 {
        self.regs[reg.addr() as usize]
    }

    fn set(&mut self, reg: Register, value: u8) {
        self.regs[reg.addr() as usize] = value;
    }

    fn raise_com_irq(&mut self, flags: ComIrq) {
        let v = self.get(Register::ComIrq) | flags.bits();
        self.set(Register::ComIrq, v);
    }

    fn check_access(&mut self) -> Result<()> {
        match self.fail_after {
            Some(0) => Err(Error::Transport("injected bus failure".into())),
            Some(ref mut n) => {
                *n -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn read(&mut self, reg: Register) -> u8 {
        match reg {
            Register::FifoData => self.fifo.pop_front().unwrap_or(0),
            Register::FifoLevel => (self.fifo.len() as u8) & 0x7F,
            _ => self.get(reg),
        }
    }

    fn write(&mut self, reg: Register, value: u8) {
        self.writes.push((reg, value));
        match reg {
            // Bit 7 selects whether the written 1-bits are set or cleared.
            Register::ComIrq | Register::DivIrq => {
                let bits = value & 0x7F;
                let current = self.get(reg);
                let next = if value & 0x80 != 0 {
                    current | bits
                } else {
                    current & !bits
                };
                self.set(reg, next);
            }
            Register::FifoLevel => {
                if FifoLevel::from_bits_retain(value).contains(FifoLevel::FLUSH_BUFFER) {
                    self.fifo.clear();
                }
            }
            Register::FifoData => {
                if self.fifo.len() < FIFO_SIZE {
                    self.fifo.push_back(value);
                }
            }
            Register::Command => {
                self.set(reg, value);
                self.command(value);
            }
            Register::BitFraming => {
                self.set(reg, value);
                if value & 0x80 != 0 && self.pending == Some(PcdCommand::Transceive) {
                    self.pending = None;
                    self.transceive(value & 0x07);
                }
            }
            Register::TxControl if self.antenna_fault => {
                self.set(reg, value & !TxControl::ANTENNA.bits());
            }
            _ => self.set(reg, value),
        }
    }

    fn command(&mut self, value: u8) {
        match PcdCommand::from_u8(value) {
            Some(PcdCommand::Idle) => self.pending = None,
            Some(PcdCommand::CalcCrc) => {
                if self.crc_stall {
                    return;
                }
                let data: Vec<u8> = self.fifo.drain(..).collect();
                let [low, high] = crc_a(&data);
                self.set(Register::CrcResultLow, low);
                self.set(Register::CrcResultHigh, high);
                let div = self.get(Register::DivIrq) | DivIrq::CRC.bits();
                self.set(Register::DivIrq, div);
            }
            Some(PcdCommand::Transceive) => self.pending = Some(PcdCommand::Transceive),
            Some(PcdCommand::Authent) => self.authenticate(),
            Some(PcdCommand::SoftReset) => {
                self.soft_resets += 1;
                self.power_on();
            }
            Some(PcdCommand::Transmit) | Some(PcdCommand::Receive) | None => {}
        }
    }

    fn next_reply(&mut self, command: PcdCommand, tx_last_bits: u8) -> CardReply {
        let data = self.fifo.drain(..).collect();
        self.sent.push(SentFrame {
            command,
            data,
            tx_last_bits,
        });
        self.set(Register::Error, 0);
        self.replies.pop_front().unwrap_or(CardReply::Silent)
    }

    fn transceive(&mut self, tx_last_bits: u8) {
        match self.next_reply(PcdCommand::Transceive, tx_last_bits) {
            CardReply::Data { bytes, last_bits } => {
                self.fifo.extend(bytes.iter().take(FIFO_SIZE));
                let control = (self.get(Register::Control) & !RX_LAST_BITS_MASK)
                    | (last_bits & RX_LAST_BITS_MASK);
                self.set(Register::Control, control);
                self.raise_com_irq(ComIrq::RX | ComIrq::IDLE);
            }
            CardReply::Error(flags) => {
                self.set(Register::Error, flags.bits());
                self.raise_com_irq(ComIrq::ERR | ComIrq::RX | ComIrq::IDLE);
            }
            CardReply::Hang => {}
            CardReply::Silent | CardReply::Authenticated | CardReply::AuthRejected => {
                self.raise_com_irq(ComIrq::TIMER);
            }
        }
    }

    fn authenticate(&mut self) {
        match self.next_reply(PcdCommand::Authent, 0) {
            CardReply::Authenticated => {
                let s2 = self.get(Register::Status2) | Status2::MF_CRYPTO1_ON.bits();
                self.set(Register::Status2, s2);
                self.raise_com_irq(ComIrq::IDLE);
            }
            CardReply::AuthRejected | CardReply::Data { .. } => {
                self.raise_com_irq(ComIrq::IDLE);
            }
            CardReply::Error(flags) => {
                self.set(Register::Error, flags.bits());
                self.raise_com_irq(ComIrq::ERR | ComIrq::IDLE);
            }
            CardReply::Hang => {}
            CardReply::Silent => self.raise_com_irq(ComIrq::TIMER),
        }
    }
}

/// Shared handle to a simulated peripheral.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    inner: Rc<RefCell<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the card's behaviour for the next exchange.
    pub fn push_reply(&self, reply: CardReply) {
        self.inner.borrow_mut().replies.push_back(reply);
    }

    pub fn push_replies(&self, replies: impl IntoIterator<Item = CardReply>) {
        self.inner.borrow_mut().replies.extend(replies);
    }

    /// Replies not consumed yet.
    pub fn pending_replies(&self) -> usize {
        self.inner.borrow().replies.len()
    }

    /// Frames pushed to the card, oldest first.
    pub fn sent(&self) -> Vec<SentFrame> {
        self.inner.borrow().sent.clone()
    }

    /// Every register write, in order, excluding FIFO reads.
    pub fn writes(&self) -> Vec<(Register, u8)> {
        self.inner.borrow().writes.clone()
    }

    pub fn clear_log(&self) {
        let mut state = self.inner.borrow_mut();
        state.sent.clear();
        state.writes.clear();
    }

    /// Peek a register without going through the bus.
    pub fn register(&self, reg: Register) -> u8 {
        self.inner.borrow().get(reg)
    }

    /// Poke a register without going through the bus.
    pub fn set_register(&self, reg: Register, value: u8) {
        self.inner.borrow_mut().set(reg, value);
    }

    pub fn fifo(&self) -> Vec<u8> {
        self.inner.borrow().fifo.iter().copied().collect()
    }

    /// Make the CRC coprocessor never finish.
    pub fn set_crc_stall(&self, stall: bool) {
        self.inner.borrow_mut().crc_stall = stall;
    }

    /// Make the antenna driver bits in `TxControlReg` refuse to latch.
    pub fn set_antenna_fault(&self, fault: bool) {
        self.inner.borrow_mut().antenna_fault = fault;
    }

    /// Let `n` more register accesses succeed, then fail every access.
    pub fn fail_after(&self, n: usize) {
        self.inner.borrow_mut().fail_after = Some(n);
    }

    /// Transport-level resets seen.
    pub fn reset_count(&self) -> usize {
        self.inner.borrow().resets
    }

    /// `SoftReset` commands executed.
    pub fn soft_reset_count(&self) -> usize {
        self.inner.borrow().soft_resets
    }
}

impl Transport for MockTransport {
    fn read_register(&mut self, reg: Register) -> Result<u8> {
        let mut state = self.inner.borrow_mut();
        state.check_access()?;
        Ok(state.read(reg))
    }

    fn write_register(&mut self, reg: Register, value: u8) -> Result<()> {
        let mut state = self.inner.borrow_mut();
        state.check_access()?;
        state.write(reg, value);
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        // Queued replies survive so tests can script them before init.
        let mut state = self.inner.borrow_mut();
        state.check_access()?;
        state.resets += 1;
        Ok(())
    }
}
