//! # Protocol Packets
//!
//! Packet type constants and the payload records carried by the login and
//! character servers.
//!
//! ## Frames
//! ```text
//! 0x03 Welcome          header + banner(96) + server vector(48) + client vector(48) = 200
//! 0x05 Disconnect       header only                                             =   8
//! 0x19 Redirect         header + ip(4) + port(2) + padding(2)                   =  16
//! 0xE5 Character slot   header + slot(4) + preview(124)                         = 136
//! 0xE7 Full character   header + full character(12888)                          = 12896
//! ```

pub mod packets;
