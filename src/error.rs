//! # Error Types
//!
//! Error handling for the record, framing and collaborator layers.
//!
//! ## Error Categories
//! - **Shape Errors**: a buffer whose length does not match a record's fixed size
//! - **Framing Errors**: bad headers, oversized frames, unexpected packet types
//! - **Transport Errors**: failed or partial writes, reported and never retried
//! - **Resource Errors**: use of a collaborator (datastore) before it was attached
//! - **Configuration Errors**: unreadable or unparsable configuration
//!
//! All errors implement `std::error::Error` for interoperability.
//!
//! ## Example Usage
//! ```rust
//! use archon_protocol::error::{ProtocolError, Result};
//! use archon_protocol::records::CharacterStats;
//! use archon_protocol::core::record::Record;
//!
//! fn parse_stats(data: &[u8]) -> Result<CharacterStats> {
//!     CharacterStats::from_bytes(data)
//! }
//!
//! match parse_stats(&[0u8; 3]) {
//!     Err(ProtocolError::Shape { expected, actual, .. }) => {
//!         assert_eq!((expected, actual), (16, 3));
//!     }
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use std::io;
use thiserror::Error;

/// Error message constants to reduce allocations in error paths.
pub mod constants {
    /// Collaborator resources
    pub const ERR_DATASTORE_UNINITIALIZED: &str = "Attempt to reference uninitialized datastore";

    /// Synchronization
    pub const ERR_STORE_READ_LOCK: &str = "Failed to acquire read lock on character store";
    pub const ERR_STORE_WRITE_LOCK: &str = "Failed to acquire write lock on character store";
}

// ProtocolError is the primary error type for all protocol operations
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed {record}: expected {expected} bytes, got {actual}")]
    Shape {
        record: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid packet header")]
    InvalidHeader,

    #[error("Packet too large: {0} bytes")]
    OversizedPacket(usize),

    #[error("Unexpected packet type: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedPacketType { expected: u16, actual: u16 },

    #[error("Short write: {written} of {expected} bytes accepted by transport")]
    ShortWrite { expected: usize, written: usize },

    #[error("Uninitialized resource: {0}")]
    Uninitialized(&'static str),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unknown character class: {0:#04x}")]
    UnknownCharClass(u8),

    #[error("Custom error: {0}")]
    Custom(String),
}

/// Type alias for Results using ProtocolError
pub type Result<T> = std::result::Result<T, ProtocolError>;
