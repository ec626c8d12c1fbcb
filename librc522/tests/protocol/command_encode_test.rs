use librc522::protocol::commands::*;
use librc522::registers::PcdCommand;
use librc522::types::{AuthMode, BlockData, RequestMode, SectorKey};

use crate::common::fixtures::sample_serial;

#[test]
fn frame_bodies() {
    assert_eq!(encode_request(RequestMode::Idle), [0x26]);
    assert_eq!(encode_request(RequestMode::All), [0x52]);
    assert_eq!(encode_anticoll(), [0x93, 0x20]);
    assert_eq!(
        encode_select(&sample_serial()),
        [0x93, 0x70, 0x11, 0x22, 0x33, 0x44, 0x44]
    );
    assert_eq!(encode_read(9), [0x30, 0x09]);
    assert_eq!(encode_write(9), [0xA0, 0x09]);
    assert_eq!(encode_halt(), [0x50, 0x00]);
}

#[test]
fn auth_frame_carries_identifier_without_check_byte() {
    let key = SectorKey::from_hex("a0 a1 a2 a3 a4 a5").unwrap();
    let frame = encode_auth(AuthMode::KeyB, 4, &key, &sample_serial());
    assert_eq!(
        hex::encode(frame),
        "6104a0a1a2a3a4a511223344"
    );
}

#[test]
fn command_metadata() {
    let cases = [
        (Command::Request(RequestMode::Idle), false, PcdCommand::Transceive, 7),
        (Command::Anticoll, false, PcdCommand::Transceive, 0),
        (Command::Select(sample_serial()), true, PcdCommand::Transceive, 0),
        (
            Command::Authenticate {
                mode: AuthMode::KeyA,
                block: 1,
                key: SectorKey::DEFAULT,
                serial: sample_serial(),
            },
            false,
            PcdCommand::Authent,
            0,
        ),
        (Command::Read { block: 1 }, true, PcdCommand::Transceive, 0),
        (Command::Write { block: 1 }, true, PcdCommand::Transceive, 0),
        (
            Command::WriteData(BlockData::default()),
            true,
            PcdCommand::Transceive,
            0,
        ),
        (Command::Halt, true, PcdCommand::Transceive, 0),
    ];
    for (cmd, crc, pcd, last_bits) in cases {
        assert_eq!(cmd.needs_crc(), crc, "{:?}", cmd);
        assert_eq!(cmd.pcd_command(), pcd, "{:?}", cmd);
        assert_eq!(cmd.tx_last_bits(), last_bits, "{:?}", cmd);
    }
}

#[test]
fn write_data_is_block_verbatim() {
    let data = crate::common::fixtures::counting_block();
    assert_eq!(Command::WriteData(data).encode(), data.as_bytes().to_vec());
}
