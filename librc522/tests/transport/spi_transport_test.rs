use librc522::clock::MockDelay;
use librc522::device::DeviceBuilder;
use librc522::registers::Register;
use librc522::transport::{Bus, MockTransport, SpiTransport, Transport};
use librc522::types::RequestMode;
use librc522::Result;

use crate::common::fixtures::{s50_atqa, s50_sak, sample_serial, serial_reply};

/// Byte-level bus in front of the register simulator: decodes the address
/// byte of each chip-select frame the way the peripheral does.
struct SimBus {
    chip: MockTransport,
    address: Option<u8>,
    selected: bool,
}

impl SimBus {
    fn new(chip: MockTransport) -> Self {
        Self {
            chip,
            address: None,
            selected: false,
        }
    }
}

impl Bus for SimBus {
    fn select(&mut self) -> Result<()> {
        self.selected = true;
        self.address = None;
        Ok(())
    }

    fn deselect(&mut self) -> Result<()> {
        self.selected = false;
        Ok(())
    }

    fn transfer(&mut self, byte: u8) -> Result<u8> {
        assert!(self.selected, "transfer outside chip select");
        let Some(address) = self.address else {
            assert_eq!(byte & 0x01, 0, "address byte LSB must be 0");
            self.address = Some(byte);
            return Ok(0x00);
        };
        let reg = Register::from_addr((address >> 1) & 0x3F).expect("known register");
        if address & 0x80 != 0 {
            self.chip.read_register(reg)
        } else {
            self.chip.write_register(reg, byte)?;
            Ok(0x00)
        }
    }
}

#[test]
fn full_session_over_spi_encoding() {
    crate::common::init_logging();
    let chip = MockTransport::new();
    chip.push_replies([s50_atqa(), serial_reply(*sample_serial().as_bytes()), s50_sak()]);

    let mut dev = DeviceBuilder::new()
        .with_transport(Box::new(SpiTransport::new(SimBus::new(chip.clone()))))
        .with_delay(Box::new(MockDelay::new()))
        .build()
        .unwrap();

    assert_eq!(dev.version().unwrap(), 0x92);
    let card = dev.poll_card(RequestMode::Idle).unwrap();
    assert_eq!(card.serial(), &sample_serial());
    assert_eq!(chip.register(Register::TMode), 0x8D);
    assert_eq!(chip.sent().len(), 3);
}
