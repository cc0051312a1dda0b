#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Frame construction, parsing and emission tests
//! Boundary conditions on headers and the transport's all-or-nothing contract

use std::io;

use archon_protocol::core::packet::{build_frame, Frame, PacketHeader, BB_HEADER_SIZE};
use archon_protocol::core::record::Record;
use archon_protocol::error::ProtocolError;
use archon_protocol::protocol::packets::*;
use archon_protocol::records::{CharacterStats, FullCharacter, GuildcardData, Inventory};
use archon_protocol::transport::send_frame;
use bytes::Bytes;

// ============================================================================
// FRAME CONSTRUCTION
// ============================================================================

#[test]
fn test_frame_is_header_plus_payload() {
    let stats = CharacterStats {
        atp: 1,
        mst: 2,
        evp: 3,
        hp: 4,
        dfp: 5,
        tp: 6,
        lck: 7,
        ata: 8,
    };
    let bytes = build_frame(0x1234, &stats).expect("frame");
    assert_eq!(bytes.len(), BB_HEADER_SIZE + CharacterStats::SIZE);
    assert_eq!(&bytes[0..2], &24u16.to_le_bytes());
    assert_eq!(&bytes[2..4], &0x1234u16.to_le_bytes());
    assert_eq!(&bytes[4..8], &[0, 0, 0, 0]);
    assert_eq!(&bytes[8..], stats.to_bytes().as_ref());
}

#[test]
fn test_inventory_frame_size_field() {
    let bytes = build_frame(0x61, &Inventory::default()).expect("frame");
    let header = PacketHeader::from_bytes(&bytes[..BB_HEADER_SIZE]).expect("header");
    assert_eq!(usize::from(header.size), 8 + 604);
    assert_eq!(header.packet_type, 0x61);
    assert_eq!(header.padding, 0);
}

#[test]
fn test_oversized_payload_rejected() {
    let payload = Bytes::from(vec![0u8; usize::from(u16::MAX) - BB_HEADER_SIZE + 1]);
    match Frame::new(0xDC, payload) {
        Err(ProtocolError::OversizedPacket(n)) => assert_eq!(n, usize::from(u16::MAX) + 1),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_guildcard_book_fits_one_frame() {
    let bytes = build_frame(0xDC, &GuildcardData::default()).expect("frame");
    assert_eq!(bytes.len(), GuildcardData::SIZE + 8);
}

#[test]
fn test_largest_payload_accepted() {
    let payload = Bytes::from(vec![0xAB; usize::from(u16::MAX) - BB_HEADER_SIZE]);
    let frame = Frame::new(0x01, payload).expect("frame at the limit");
    assert_eq!(frame.len(), usize::from(u16::MAX));
}

// ============================================================================
// FRAME PARSING
// ============================================================================

#[test]
fn test_parse_truncated_header() {
    assert!(matches!(
        Frame::from_bytes(&[8, 0, 5]),
        Err(ProtocolError::InvalidHeader)
    ));
}

#[test]
fn test_parse_size_below_header() {
    assert!(matches!(
        Frame::from_bytes(&[4, 0, 5, 0, 0, 0, 0, 0]),
        Err(ProtocolError::InvalidHeader)
    ));
}

#[test]
fn test_parse_size_disagrees_with_buffer() {
    let mut bytes = disconnect_frame().to_vec();
    bytes.push(0);
    assert!(matches!(
        Frame::from_bytes(&bytes),
        Err(ProtocolError::Shape { .. })
    ));
}

#[test]
fn test_decode_payload_wrong_type() {
    let bytes = redirect_frame([127, 0, 0, 1], 12001).expect("frame");
    let frame = Frame::from_bytes(&bytes).expect("parse");
    match frame.decode_payload::<RedirectPayload>(WELCOME_TYPE) {
        Err(ProtocolError::UnexpectedPacketType { expected, actual }) => {
            assert_eq!(expected, WELCOME_TYPE);
            assert_eq!(actual, REDIRECT_TYPE);
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_decode_payload_wrong_record() {
    let bytes = redirect_frame([127, 0, 0, 1], 12001).expect("frame");
    let frame = Frame::from_bytes(&bytes).expect("parse");
    assert!(matches!(
        frame.decode_payload::<CharacterStats>(REDIRECT_TYPE),
        Err(ProtocolError::Shape { expected: 16, actual: 8, .. })
    ));
}

// ============================================================================
// WELCOME SCENARIO
// ============================================================================

#[test]
fn test_welcome_scenario() {
    let vectors = CryptVectors {
        server: std::array::from_fn(|i| i as u8),
        client: std::array::from_fn(|i| 0x80 | i as u8),
    };
    let mut wire = Vec::new();
    send_frame(&mut wire, &welcome_frame(&vectors).expect("frame")).expect("send");

    assert_eq!(wire.len(), 200);
    assert_eq!(u16::from_le_bytes([wire[0], wire[1]]), 200);
    assert_eq!(u16::from_le_bytes([wire[2], wire[3]]), WELCOME_TYPE);

    let banner = BB_COPYRIGHT.as_bytes();
    assert_eq!(&wire[8..8 + banner.len()], banner);
    assert!(wire[8 + banner.len()..104].iter().all(|&b| b == 0));
    assert_eq!(&wire[104..152], &vectors.server[..]);
    assert_eq!(&wire[152..200], &vectors.client[..]);
}

// ============================================================================
// EMISSION
// ============================================================================

struct OneShot {
    accepted: usize,
    calls: usize,
}

impl io::Write for OneShot {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.calls += 1;
        Ok(buf.len().min(self.accepted))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_partial_write_not_retried() {
    let bytes = full_character_frame(&FullCharacter::default()).expect("frame");
    let mut transport = OneShot {
        accepted: 4096,
        calls: 0,
    };
    let err = send_frame(&mut transport, &bytes).unwrap_err();
    assert!(matches!(
        err,
        ProtocolError::ShortWrite {
            expected: 12896,
            written: 4096
        }
    ));
    assert_eq!(transport.calls, 1);
}

#[test]
fn test_complete_write_single_call() {
    let bytes = full_character_frame(&FullCharacter::default()).expect("frame");
    let mut transport = OneShot {
        accepted: usize::MAX,
        calls: 0,
    };
    send_frame(&mut transport, &bytes).expect("send");
    assert_eq!(transport.calls, 1);
}
