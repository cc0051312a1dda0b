//! Login server packet types and the frames built from them.

use bytes::{Buf, BufMut, Bytes};

use crate::core::packet::{build_frame, Frame, BB_HEADER_SIZE};
use crate::core::record::{get_array, Record};
use crate::error::Result;
use crate::records::{CharacterPreview, FullCharacter};

// Packet types.
pub const WELCOME_TYPE: u16 = 0x03;
pub const DISCONNECT_TYPE: u16 = 0x05;
pub const REDIRECT_TYPE: u16 = 0x19;
pub const LOGIN_TYPE: u16 = 0x93;
pub const CHARACTER_PREVIEW_TYPE: u16 = 0xE5;
pub const FULL_CHARACTER_TYPE: u16 = 0xE7;

/// Size of the welcome frame including its header
pub const WELCOME_SIZE: usize = 0xC8;

/// Length of each cipher vector in the welcome frame
pub const CRYPT_VECTOR_SIZE: usize = 48;

/// Banner the client checks for in the welcome packet.
pub const BB_COPYRIGHT: &str =
    "Phantasy Star Online Blue Burst Game Server. Copyright 1999-2004 SONICTEAM.";

/// [`BB_COPYRIGHT`] rendered into its 96-byte field.
pub const COPYRIGHT_BYTES: [u8; 96] = render_copyright();

const fn render_copyright() -> [u8; 96] {
    let src = BB_COPYRIGHT.as_bytes();
    let mut out = [0u8; 96];
    let mut i = 0;
    while i < src.len() && i < out.len() {
        out[i] = src[i];
        i += 1;
    }
    out
}

/// The two per-connection cipher vectors owned by the encryption layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CryptVectors {
    pub server: [u8; CRYPT_VECTOR_SIZE],
    pub client: [u8; CRYPT_VECTOR_SIZE],
}

/// Payload of the welcome packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WelcomePayload {
    pub copyright: [u8; 96],
    pub server_vector: [u8; CRYPT_VECTOR_SIZE],
    pub client_vector: [u8; CRYPT_VECTOR_SIZE],
}

impl WelcomePayload {
    pub fn new(vectors: &CryptVectors) -> Self {
        Self {
            copyright: COPYRIGHT_BYTES,
            server_vector: vectors.server,
            client_vector: vectors.client,
        }
    }

    /// Frame offset of the server vector
    pub const SERVER_VECTOR_OFFSET: usize = BB_HEADER_SIZE + 96;

    /// Frame offset of the client vector
    pub const CLIENT_VECTOR_OFFSET: usize = Self::SERVER_VECTOR_OFFSET + CRYPT_VECTOR_SIZE;
}

impl Record for WelcomePayload {
    const NAME: &'static str = "WelcomePayload";
    const SIZE: usize = 96 + 2 * CRYPT_VECTOR_SIZE;

    fn write_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_slice(&self.copyright);
        buf.put_slice(&self.server_vector);
        buf.put_slice(&self.client_vector);
    }

    fn read_from<B: Buf>(buf: &mut B) -> Self {
        Self {
            copyright: get_array(buf),
            server_vector: get_array(buf),
            client_vector: get_array(buf),
        }
    }
}

/// Points the client at another server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RedirectPayload {
    pub ip: [u8; 4],
    pub port: u16,
    pub padding: u16,
}

impl Record for RedirectPayload {
    const NAME: &'static str = "RedirectPayload";
    const SIZE: usize = 8;

    fn write_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_slice(&self.ip);
        buf.put_u16_le(self.port);
        buf.put_u16_le(self.padding);
    }

    fn read_from<B: Buf>(buf: &mut B) -> Self {
        Self {
            ip: get_array(buf),
            port: buf.get_u16_le(),
            padding: buf.get_u16_le(),
        }
    }
}

/// One slot of the character selection menu.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PreviewPayload {
    pub slot: u32,
    pub preview: CharacterPreview,
}

impl Record for PreviewPayload {
    const NAME: &'static str = "PreviewPayload";
    const SIZE: usize = 4 + CharacterPreview::SIZE;

    fn write_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_u32_le(self.slot);
        self.preview.write_to(buf);
    }

    fn read_from<B: Buf>(buf: &mut B) -> Self {
        Self {
            slot: buf.get_u32_le(),
            preview: CharacterPreview::read_from(buf),
        }
    }
}

/// Welcome frame carrying the banner and both cipher vectors.
pub fn welcome_frame(vectors: &CryptVectors) -> Result<Bytes> {
    build_frame(WELCOME_TYPE, &WelcomePayload::new(vectors))
}

/// Redirect frame for the given IPv4 bytes and port.
pub fn redirect_frame(ip: [u8; 4], port: u16) -> Result<Bytes> {
    build_frame(
        REDIRECT_TYPE,
        &RedirectPayload {
            ip,
            port,
            padding: 0,
        },
    )
}

/// Selection menu entry for `slot`.
pub fn preview_frame(slot: u32, preview: &CharacterPreview) -> Result<Bytes> {
    build_frame(
        CHARACTER_PREVIEW_TYPE,
        &PreviewPayload {
            slot,
            preview: *preview,
        },
    )
}

/// Full character transfer.
pub fn full_character_frame(character: &FullCharacter) -> Result<Bytes> {
    build_frame(FULL_CHARACTER_TYPE, character)
}

/// Header-only disconnect frame.
pub fn disconnect_frame() -> Bytes {
    Frame::header_only(DISCONNECT_TYPE).to_bytes()
}
