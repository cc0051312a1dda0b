//! # Archon Protocol
//!
//! Binary entity records and packet framing for a Phantasy Star Online
//! Blue Burst login and character server.
//!
//! Every record the client exchanges has a fixed, historically frozen byte
//! layout. This crate models those records as plain Rust values, encodes
//! and decodes them little-endian at their exact sizes, and wraps them in
//! the 8-byte header the client expects.
//!
//! ## Layout
//! - [`core`]: the `Record` contract, frame header and stream codec
//! - [`records`]: character, item, bank and guildcard records
//! - [`protocol`]: packet types and frame builders
//! - [`transport`]: single-write frame emission
//! - [`service`]: server context and character datastore
//! - [`config`]: server configuration
//! - [`utils`]: logging setup and payload hex dumps
//!
//! ## Example
//! ```
//! use archon_protocol::protocol::packets::{welcome_frame, CryptVectors};
//!
//! let vectors = CryptVectors { server: [1; 48], client: [2; 48] };
//! let frame = welcome_frame(&vectors).unwrap();
//! assert_eq!(frame.len(), 200);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod protocol;
pub mod records;
pub mod service;
pub mod transport;
pub mod utils;

pub use config::ServerConfig;
pub use error::{ProtocolError, Result};
pub use service::{CharacterStore, MemoryStore, ServerContext};
