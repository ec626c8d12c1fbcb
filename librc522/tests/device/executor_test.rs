use std::cell::Cell;
use std::rc::Rc;

use librc522::clock::MockDelay;
use librc522::device::Device;
use librc522::protocol::Frame;
use librc522::registers::{PcdCommand, Register};
use librc522::transport::{CardReply, MockTransport, Transport};
use librc522::{Error, Result, Status};

/// Peripheral whose status registers never change: every read returns 0.
#[derive(Clone, Default)]
struct StuckTransport {
    reads: Rc<Cell<u32>>,
}

impl Transport for StuckTransport {
    fn read_register(&mut self, _reg: Register) -> Result<u8> {
        self.reads.set(self.reads.get() + 1);
        Ok(0x00)
    }

    fn write_register(&mut self, _reg: Register, _value: u8) -> Result<()> {
        Ok(())
    }
}

#[test]
fn never_set_wait_bit_returns_timeout() {
    let stuck = StuckTransport::default();
    let mut dev = Device::new_with_transport(Box::new(stuck.clone()), Box::new(MockDelay::new()));
    let mut out = Frame::new();
    let result = dev.to_card(PcdCommand::Transceive, &[0x26], &mut out);
    assert_eq!(Status::of(&result), Status::Error);
    assert_eq!(result, Err(Error::Timeout { polls: 2000 }));
    assert!(stuck.reads.get() >= 2000);
}

#[test]
fn hanging_card_through_operation() {
    let mock = MockTransport::new();
    mock.push_reply(CardReply::Hang);
    let mut dev = Device::new_with_transport(Box::new(mock.clone()), Box::new(MockDelay::new()))
        .initialize()
        .unwrap();
    assert!(matches!(
        dev.read_block(0),
        Err(Error::Timeout { polls: 2000 })
    ));
}

#[test]
fn executor_leaves_fifo_flushed_between_commands() {
    let mock = MockTransport::new();
    mock.push_replies([CardReply::bytes(&[0x04, 0x00, 0xFF]), CardReply::bytes(&[0x04, 0x00])]);
    let mut dev = Device::new_with_transport(Box::new(mock.clone()), Box::new(MockDelay::new()));
    let mut out = Frame::new();
    dev.to_card(PcdCommand::Transceive, &[0x26], &mut out).unwrap();
    assert_eq!(out.bit_len(), 24);
    dev.to_card(PcdCommand::Transceive, &[0x26], &mut out).unwrap();
    assert_eq!(out.as_bytes(), &[0x04, 0x00]);
    assert_eq!(mock.sent()[1].data, vec![0x26]);
}
