//! # Packet
//!
//! Defines the Blue Burst packet header and the `Frame` structure that
//! pairs a header with its payload.
//!
//! Every outbound packet is a header followed immediately by the payload
//! record. The header's size field counts itself, so a payload of `P`
//! bytes produces a frame of `8 + P` bytes whose first two bytes are
//! `8 + P` in little-endian order.
//!
//! ## Responsibilities
//! - Build frames from fixed-layout records
//! - Parse frames back into header and payload
//! - Reject sizes that the 16-bit length field cannot carry
//!
//! Frames are handed to the cipher and transport untouched; this module
//! never encrypts or pads for the cipher block size.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::core::record::Record;
use crate::error::{ProtocolError, Result};

/// Total size of the fixed-length header
pub const BB_HEADER_SIZE: usize = 8; // 2 size + 2 type + 4 padding

/// Largest frame the size field can describe
pub const MAX_FRAME_SIZE: usize = u16::MAX as usize;

/// Header preceding every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PacketHeader {
    pub size: u16,
    pub packet_type: u16,
    pub padding: u32,
}

impl Record for PacketHeader {
    const NAME: &'static str = "PacketHeader";
    const SIZE: usize = BB_HEADER_SIZE;

    fn write_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_u16_le(self.size);
        buf.put_u16_le(self.packet_type);
        buf.put_u32_le(self.padding);
    }

    fn read_from<B: Buf>(buf: &mut B) -> Self {
        Self {
            size: buf.get_u16_le(),
            packet_type: buf.get_u16_le(),
            padding: buf.get_u32_le(),
        }
    }
}

/// A header-prefixed packet ready for the cipher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub header: PacketHeader,
    pub payload: Bytes,
}

impl Frame {
    /// Wrap raw payload bytes in a header of the given type.
    pub fn new(packet_type: u16, payload: Bytes) -> Result<Self> {
        let total = BB_HEADER_SIZE + payload.len();
        if total > MAX_FRAME_SIZE {
            return Err(ProtocolError::OversizedPacket(total));
        }
        Ok(Self {
            header: PacketHeader {
                size: total as u16,
                packet_type,
                padding: 0,
            },
            payload,
        })
    }

    /// Wrap an encoded record.
    pub fn from_record<R: Record>(packet_type: u16, record: &R) -> Result<Self> {
        Self::new(packet_type, record.to_bytes())
    }

    /// A frame with no payload, such as a disconnect.
    pub fn header_only(packet_type: u16) -> Self {
        Self {
            header: PacketHeader {
                size: BB_HEADER_SIZE as u16,
                packet_type,
                padding: 0,
            },
            payload: Bytes::new(),
        }
    }

    /// Total encoded length
    pub fn len(&self) -> usize {
        BB_HEADER_SIZE + self.payload.len()
    }

    /// True when the frame carries no payload
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Append header and payload to `dst`.
    pub fn write_to(&self, dst: &mut BytesMut) {
        dst.reserve(self.len());
        self.header.write_to(dst);
        dst.extend_from_slice(&self.payload);
    }

    /// Serialize header and payload into one buffer.
    pub fn to_bytes(&self) -> Bytes {
        let mut out = BytesMut::with_capacity(self.len());
        self.write_to(&mut out);
        out.freeze()
    }

    /// Parse a complete frame. The header's size field must match the
    /// buffer length exactly.
    pub fn from_bytes(buf: &[u8]) -> Result<Self> {
        if buf.len() < BB_HEADER_SIZE {
            return Err(ProtocolError::InvalidHeader);
        }
        let header = PacketHeader::from_bytes(&buf[..BB_HEADER_SIZE])?;
        let declared = usize::from(header.size);
        if declared < BB_HEADER_SIZE {
            return Err(ProtocolError::InvalidHeader);
        }
        if declared != buf.len() {
            return Err(ProtocolError::Shape {
                record: "Frame",
                expected: declared,
                actual: buf.len(),
            });
        }
        Ok(Self {
            header,
            payload: Bytes::copy_from_slice(&buf[BB_HEADER_SIZE..]),
        })
    }

    /// Decode the payload as `R`, checking the packet type first.
    pub fn decode_payload<R: Record>(&self, expected_type: u16) -> Result<R> {
        if self.header.packet_type != expected_type {
            return Err(ProtocolError::UnexpectedPacketType {
                expected: expected_type,
                actual: self.header.packet_type,
            });
        }
        R::from_bytes(&self.payload)
    }
}

/// Build the wire bytes for `record` under `packet_type`.
pub fn build_frame<R: Record>(packet_type: u16, record: &R) -> Result<Bytes> {
    let total = BB_HEADER_SIZE + R::SIZE;
    if total > MAX_FRAME_SIZE {
        return Err(ProtocolError::OversizedPacket(total));
    }
    let mut out = BytesMut::with_capacity(total);
    PacketHeader {
        size: total as u16,
        packet_type,
        padding: 0,
    }
    .write_to(&mut out);
    record.write_to(&mut out);
    Ok(out.freeze())
}
