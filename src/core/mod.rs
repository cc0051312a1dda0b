//! # Core Protocol Components
//!
//! Fixed-layout record encoding and packet framing.
//!
//! ## Components
//! - **Record**: the fixed-size encode/decode contract and text helpers
//! - **Packet**: the 8-byte header and header-prefixed frames
//! - **Codec**: Tokio codec for framing over byte streams
//!
//! ## Wire Format
//! ```text
//! [Size(2)] [Type(2)] [Padding(4)] [Payload(Size - 8)]
//! ```
//!
//! All integers are little-endian. Size includes the header itself.

pub mod codec;
pub mod packet;
pub mod record;
