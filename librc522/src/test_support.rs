//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.

use crate::clock::MockDelay;
use crate::device::{Device, Initialized};
use crate::transport::{CardReply, MockTransport};
use crate::Result;

/// Build a MockTransport pre-seeded with the given card replies.
#[doc(hidden)]
pub fn mock_with_replies(replies: Vec<CardReply>) -> MockTransport {
    let mock = MockTransport::new();
    mock.push_replies(replies);
    mock
}

/// Convenience: create and initialize a Device<Initialized> backed by a
/// MockTransport pre-seeded with the provided replies. The returned mock
/// shares state with the device so tests can inspect what was sent.
#[doc(hidden)]
pub fn initialized_mock_device(
    replies: Vec<CardReply>,
) -> Result<(Device<Initialized>, MockTransport)> {
    let mock = mock_with_replies(replies);
    let device =
        Device::new_with_transport(Box::new(mock.clone()), Box::new(MockDelay::new()))
            .initialize()?;
    Ok((device, mock))
}

/// Replies for a Request/Anticoll/Select sequence of a Mifare One S50 with
/// the given identifier bytes.
#[doc(hidden)]
pub fn s50_poll_replies(uid: [u8; 4]) -> Vec<CardReply> {
    let serial = crate::types::SerialNumber::from_uid(uid);
    let sak = [0x08, 0xB6, 0xDD];
    vec![
        CardReply::bytes(&[0x04, 0x00]),
        CardReply::bytes(serial.as_bytes()),
        CardReply::bytes(&sak),
    ]
}
