use librc522::card::trailer::{is_trailer, sector_of, trailer_block};
use librc522::card::{Keyring, SectorTrailer};
use librc522::transport::CardReply;
use librc522::types::{RequestMode, SectorKey};

use crate::common::fixtures::{block_reply, s50_atqa, s50_sak, sample_serial, serial_reply};
use crate::common::mock_device;

#[test]
fn every_sector_has_one_trailer() {
    for sector in 0..16u8 {
        let blocks: Vec<u8> = (0..64u8).filter(|b| sector_of(*b) == sector).collect();
        assert_eq!(blocks.len(), 4);
        let trailers: Vec<u8> = blocks.into_iter().filter(|b| is_trailer(*b)).collect();
        assert_eq!(trailers, vec![trailer_block(sector).unwrap()]);
    }
}

#[test]
fn read_back_trailer() {
    let trailer = SectorTrailer::new(
        SectorKey::new([0; 6]),
        SectorKey::from_hex("b0b1b2b3b4b5").unwrap(),
    );
    let (mut dev, _mock) = mock_device(vec![
        s50_atqa(),
        serial_reply(*sample_serial().as_bytes()),
        s50_sak(),
        CardReply::Authenticated,
        block_reply(&trailer.to_block()),
    ]);
    let card = dev.poll_card(RequestMode::Idle).unwrap();
    let block = card.read_block(&mut dev, trailer_block(2).unwrap(), &Keyring::new()).unwrap();
    assert_eq!(SectorTrailer::from_block(&block), trailer);
}
