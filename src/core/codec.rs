//! # Frame Codec
//!
//! `tokio_util` codec that splits a plaintext byte stream into frames using
//! the header's size field, and writes frames back out.
//!
//! The codec sits after decryption on the read side and before encryption
//! on the write side.

use bytes::{Buf, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::trace;

use crate::core::packet::{Frame, PacketHeader, BB_HEADER_SIZE};
use crate::core::record::Record;
use crate::error::{ProtocolError, Result};

#[derive(Debug, Default, Clone, Copy)]
pub struct FrameCodec;

impl Decoder for FrameCodec {
    type Item = Frame;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Frame>> {
        if src.len() < BB_HEADER_SIZE {
            return Ok(None);
        }

        let header = PacketHeader::read_from(&mut &src[..BB_HEADER_SIZE]);
        let total = usize::from(header.size);
        if total < BB_HEADER_SIZE {
            return Err(ProtocolError::InvalidHeader);
        }
        if src.len() < total {
            src.reserve(total - src.len());
            return Ok(None);
        }

        let mut frame = src.split_to(total);
        frame.advance(BB_HEADER_SIZE);
        trace!(packet_type = header.packet_type, size = total, "decoded frame");
        Ok(Some(Frame {
            header,
            payload: frame.freeze(),
        }))
    }
}

impl Encoder<Frame> for FrameCodec {
    type Error = ProtocolError;

    fn encode(&mut self, item: Frame, dst: &mut BytesMut) -> Result<()> {
        if usize::from(item.header.size) != item.len() {
            return Err(ProtocolError::InvalidHeader);
        }
        item.write_to(dst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::CharacterStats;

    #[test]
    fn test_decode_waits_for_full_frame() {
        let bytes = Frame::from_record(0x42, &CharacterStats::default())
            .expect("frame")
            .to_bytes();
        let mut codec = FrameCodec;
        let mut buf = BytesMut::from(&bytes[..10]);
        assert!(codec.decode(&mut buf).expect("partial decode").is_none());
        assert_eq!(buf.len(), 10);

        buf.extend_from_slice(&bytes[10..]);
        let frame = codec.decode(&mut buf).expect("decode").expect("complete frame");
        assert_eq!(frame.header.packet_type, 0x42);
        assert_eq!(frame.payload.len(), CharacterStats::SIZE);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_decode_rejects_undersized_header() {
        let mut buf = BytesMut::from(&[4u8, 0, 1, 0, 0, 0, 0, 0][..]);
        assert!(matches!(
            FrameCodec.decode(&mut buf),
            Err(ProtocolError::InvalidHeader)
        ));
    }

    #[test]
    fn test_encode_rejects_tampered_header() {
        let mut frame = Frame::header_only(0x05);
        frame.header.size = 12;
        let mut dst = BytesMut::new();
        assert!(FrameCodec.encode(frame, &mut dst).is_err());
    }
}
