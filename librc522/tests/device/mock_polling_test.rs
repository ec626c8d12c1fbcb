use librc522::transport::CardReply;
use librc522::types::{CardType, RequestMode};
use librc522::{Error, Status};

use crate::common::fixtures::{s50_atqa, s50_sak, sample_serial, serial_reply, SAMPLE_BCC};
use crate::common::mock_device;

#[test]
fn request_anticoll_and_broken_check_byte() {
    let (mut dev, _mock) = mock_device(vec![
        s50_atqa(),
        serial_reply([0x11, 0x22, 0x33, 0x44, SAMPLE_BCC]),
        serial_reply([0x11, 0x22, 0x33, 0x44, SAMPLE_BCC ^ 0x01]),
    ]);

    let atqa = dev.request(RequestMode::Idle).unwrap();
    assert_eq!(CardType::from_atqa(atqa), CardType::MifareOneS50);

    let serial = dev.anticoll().unwrap();
    assert_eq!(serial.as_bytes(), &[0x11, 0x22, 0x33, 0x44, 0x44]);

    let broken = dev.anticoll();
    assert_eq!(Status::of(&broken), Status::Error);
    assert!(matches!(broken, Err(Error::ChecksumMismatch { .. })));
}

#[test]
fn request_reports_ok_only_for_sixteen_bits() {
    let (mut dev, _mock) = mock_device(vec![
        CardReply::bits(&[0x04], 4),
        CardReply::bytes(&[0x04, 0x00, 0x00]),
        s50_atqa(),
    ]);
    assert!(matches!(
        dev.request(RequestMode::Idle),
        Err(Error::BitLength { expected: 16, actual: 4 })
    ));
    assert!(matches!(
        dev.request(RequestMode::Idle),
        Err(Error::BitLength { expected: 16, actual: 24 })
    ));
    assert!(dev.request(RequestMode::Idle).is_ok());
}

#[test]
fn empty_field_is_no_tag() {
    let (mut dev, _mock) = mock_device(vec![]);
    let result = dev.request(RequestMode::All);
    assert_eq!(Status::of(&result), Status::NoTag);
}

#[test]
fn poll_card_selects() {
    let (mut dev, mock) = mock_device(vec![s50_atqa(), serial_reply(*sample_serial().as_bytes()), s50_sak()]);
    let card = dev.poll_card(RequestMode::Idle).unwrap();
    assert_eq!(card.serial(), &sample_serial());
    assert_eq!(card.size_code(), 0x08);

    let sent = mock.sent();
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[2].data[..7], [0x93, 0x70, 0x11, 0x22, 0x33, 0x44, 0x44]);
    assert_eq!(sent[2].data[7..], [0x51, 0x9C]);
}

#[test]
fn wake_up_request_after_halt() {
    let (mut dev, mock) = mock_device(vec![]);
    dev.halt().unwrap();
    mock.push_reply(s50_atqa());
    dev.request(RequestMode::All).unwrap();
    assert_eq!(mock.sent()[1].data, vec![0x52]);
}
