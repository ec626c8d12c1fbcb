// Walk through a full card session against the simulated peripheral:
// probe, select, authenticate, read, write and halt.
//
// Run with `RUST_LOG=trace cargo run --example mock_session` to see every
// register-level exchange.

use anyhow::Context;
use librc522::card::Keyring;
use librc522::clock::MockDelay;
use librc522::prelude::*;
use librc522::protocol::crc_a;
use librc522::transport::{CardReply, MockTransport};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let chip = MockTransport::new();
    chip.push_replies(librc522::test_support::s50_poll_replies([0xDE, 0xAD, 0xBE, 0xEF]));

    let mut dev = DeviceBuilder::new()
        .with_transport(Box::new(chip.clone()))
        .with_delay(Box::new(MockDelay::new()))
        .build()
        .context("initializing reader")?;
    println!("MFRC522 version {:#04x}", dev.version()?);

    let card = dev
        .poll_card(RequestMode::Idle)
        .context("no card in the field")?;
    println!(
        "{} serial {} (id {:08X}), size code {:#04x}",
        card.card_type(),
        card.serial(),
        card.serial().to_u32(),
        card.size_code()
    );

    let block = BlockData::try_from(&b"librc522 example"[..])?;
    let mut answer = block.as_bytes().to_vec();
    answer.extend_from_slice(&crc_a(block.as_bytes()));
    chip.push_replies([
        CardReply::Authenticated,
        CardReply::ack(),
        CardReply::ack(),
        CardReply::Authenticated,
        CardReply::bytes(&answer),
    ]);

    let keys = Keyring::new();
    card.write_block(&mut dev, 4, &block, &keys)?;
    let read = card.read_block(&mut dev, 4, &keys)?;
    println!("block 4: {} \"{}\"", read.to_hex(), read.to_ascii_safe());

    card.halt(&mut dev)?;
    println!("{} frames exchanged", chip.sent().len());
    Ok(())
}
