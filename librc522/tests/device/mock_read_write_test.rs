use librc522::transport::CardReply;
use librc522::types::{AuthMode, SectorKey};
use librc522::Error;

use crate::common::fixtures::{block_reply, counting_block, sample_blockdata, sample_serial};
use crate::common::mock_device;

#[test]
fn authenticate_then_read() {
    let block = counting_block();
    let (mut dev, mock) = mock_device(vec![CardReply::Authenticated, block_reply(&block)]);
    dev.authenticate(AuthMode::KeyA, 4, &SectorKey::DEFAULT, &sample_serial())
        .unwrap();
    assert_eq!(dev.read_block(4).unwrap(), block);
    assert_eq!(mock.sent()[1].data[..2], [0x30, 0x04]);
}

#[test]
fn crypto_flag_missing_is_error() {
    let (mut dev, _mock) = mock_device(vec![CardReply::AuthRejected]);
    assert_eq!(
        dev.authenticate(AuthMode::KeyA, 4, &SectorKey::DEFAULT, &sample_serial()),
        Err(Error::AuthenticationFailed)
    );
}

#[test]
fn short_read_is_error() {
    let (mut dev, _mock) = mock_device(vec![CardReply::bytes(&[0u8; 16])]);
    assert_eq!(
        dev.read_block(1),
        Err(Error::BitLength {
            expected: 144,
            actual: 128
        })
    );
}

#[test]
fn write_sends_payload_after_ack() {
    let data = sample_blockdata(0x5A);
    let (mut dev, mock) = mock_device(vec![CardReply::ack(), CardReply::ack()]);
    dev.write_block(8, &data).unwrap();
    let sent = mock.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].data[..16], data.as_bytes()[..]);
}

#[test]
fn nak_on_address_phase_skips_payload() {
    let (mut dev, mock) = mock_device(vec![CardReply::nak(0x00), CardReply::ack()]);
    assert_eq!(
        dev.write_block(8, &sample_blockdata(1)),
        Err(Error::Nack(0x00))
    );
    assert_eq!(mock.sent().len(), 1);
}

#[test]
fn nak_on_data_phase_is_reported() {
    let (mut dev, mock) = mock_device(vec![CardReply::ack(), CardReply::nak(0x01)]);
    assert_eq!(
        dev.write_block(8, &sample_blockdata(1)),
        Err(Error::Nack(0x01))
    );
    assert_eq!(mock.sent().len(), 2);
}

#[test]
fn silent_write_is_not_no_tag() {
    let (mut dev, _mock) = mock_device(vec![CardReply::Silent]);
    assert_eq!(
        dev.write_block(8, &sample_blockdata(1)),
        Err(Error::BitLength {
            expected: 4,
            actual: 0
        })
    );
}
