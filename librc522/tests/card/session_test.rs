use librc522::card::{CardInfo, Keyring};
use librc522::registers::{PcdCommand, Register};
use librc522::transport::CardReply;
use librc522::types::{AuthMode, CardType, RequestMode, SectorKey};
use librc522::Error;

use crate::common::fixtures::{block_reply, counting_block, s50_atqa, s50_sak, sample_serial, serial_reply};
use crate::common::mock_device;

fn poll_replies() -> Vec<CardReply> {
    vec![s50_atqa(), serial_reply(*sample_serial().as_bytes()), s50_sak()]
}

#[test]
fn poll_read_write_halt() {
    let block = counting_block();
    let mut replies = poll_replies();
    replies.extend([
        CardReply::Authenticated,
        block_reply(&block),
        CardReply::Authenticated,
        CardReply::ack(),
        CardReply::ack(),
    ]);
    let (mut dev, mock) = mock_device(replies);

    let card = dev.poll_card(RequestMode::Idle).unwrap();
    let info = CardInfo::from(&card);
    assert_eq!(info.card_type, CardType::MifareOneS50);
    assert_eq!(info.id(), 0x1122_3344);

    let keys = Keyring::new();
    assert_eq!(card.read_block(&mut dev, 4, &keys).unwrap(), block);
    card.write_block(&mut dev, 5, &block, &keys).unwrap();
    card.halt(&mut dev).unwrap();

    let commands: Vec<(PcdCommand, u8)> = mock.sent().iter().map(|f| (f.command, f.data[0])).collect();
    assert_eq!(
        commands,
        vec![
            (PcdCommand::Transceive, 0x26),
            (PcdCommand::Transceive, 0x93),
            (PcdCommand::Transceive, 0x93),
            (PcdCommand::Authent, 0x60),
            (PcdCommand::Transceive, 0x30),
            (PcdCommand::Authent, 0x60),
            (PcdCommand::Transceive, 0xA0),
            (PcdCommand::Transceive, 0x00),
            (PcdCommand::Transceive, 0x50),
        ]
    );
    assert_eq!(mock.register(Register::Status2) & 0x08, 0);
}

#[test]
fn keyring_picks_key_b_for_sector() {
    let mut replies = poll_replies();
    replies.push(CardReply::AuthRejected);
    let (mut dev, mock) = mock_device(replies);
    let card = dev.poll_card(RequestMode::Idle).unwrap();

    let mut keys = Keyring::new();
    keys.set_key(3, AuthMode::KeyB, SectorKey::from_hex("010203040506").unwrap())
        .unwrap();
    assert_eq!(
        card.read_block(&mut dev, 13, &keys),
        Err(Error::AuthenticationFailed)
    );
    let auth = &mock.sent()[3];
    assert_eq!(hex::encode(&auth.data), "610d01020304050611223344");
}
