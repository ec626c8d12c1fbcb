use librc522::protocol::{decode_atqa, decode_block, decode_sak, decode_serial, expect_ack, Frame};
use librc522::Error;
use proptest::prelude::*;

#[test]
fn atqa_needs_sixteen_bits() {
    let ok = Frame::from_parts(&[0x04, 0x00], 16).unwrap();
    assert_eq!(decode_atqa(&ok).unwrap(), [0x04, 0x00]);

    let short = Frame::from_parts(&[0x04], 8).unwrap();
    assert_eq!(
        decode_atqa(&short),
        Err(Error::BitLength {
            expected: 16,
            actual: 8
        })
    );
}

#[test]
fn serial_checks_bcc() {
    let ok = Frame::from_parts(&[0x11, 0x22, 0x33, 0x44, 0x44], 40).unwrap();
    assert_eq!(decode_serial(&ok).unwrap().uid(), [0x11, 0x22, 0x33, 0x44]);

    for bad in [0x66u8, 0x67] {
        let frame = Frame::from_parts(&[0x11, 0x22, 0x33, 0x44, bad], 40).unwrap();
        assert!(matches!(
            decode_serial(&frame),
            Err(Error::ChecksumMismatch { expected: 0x44, .. })
        ));
    }
}

#[test]
fn sak_and_ack() {
    let sak = Frame::from_parts(&[0x08, 0xB6, 0xDD], 24).unwrap();
    assert_eq!(decode_sak(&sak).unwrap(), 0x08);

    let ack = Frame::from_parts(&[0x0A], 4).unwrap();
    assert!(expect_ack(&ack).is_ok());
    let nak = Frame::from_parts(&[0x05], 4).unwrap();
    assert_eq!(expect_ack(&nak), Err(Error::Nack(0x05)));
}

#[test]
fn block_payload_in_order() {
    let bytes: Vec<u8> = (0..18).collect();
    let frame = Frame::from_parts(&bytes[..16], 144).unwrap();
    assert_eq!(decode_block(&frame).unwrap().as_bytes()[..], bytes[..16]);
}

proptest! {
    #[test]
    fn atqa_ok_iff_sixteen_bits(bits in 0usize..160) {
        let bytes = [0x04u8; 16];
        let len = bits.div_ceil(8).clamp(1, 16);
        let frame = Frame::from_parts(&bytes[..len], bits).unwrap();
        prop_assert_eq!(decode_atqa(&frame).is_ok(), bits == 16);
    }

    #[test]
    fn block_ok_iff_144_bits(bits in 0usize..200) {
        let bytes = [0x5Au8; 16];
        let len = bits.div_ceil(8).clamp(1, 16);
        let frame = Frame::from_parts(&bytes[..len], bits).unwrap();
        prop_assert_eq!(decode_block(&frame).is_ok(), bits == 144);
    }

    #[test]
    fn serial_with_wrong_check_byte_rejected(uid in any::<[u8; 4]>(), check in any::<u8>()) {
        let good = uid[0] ^ uid[1] ^ uid[2] ^ uid[3];
        prop_assume!(check != good);
        let mut bytes = uid.to_vec();
        bytes.push(check);
        let frame = Frame::from_parts(&bytes, 40).unwrap();
        prop_assert!(decode_serial(&frame).is_err());
    }
}
