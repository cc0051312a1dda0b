//! # Transport
//!
//! The boundary between framing and the network. The crate never opens
//! sockets; it hands finished frames to whatever writer the connection
//! layer supplies and reports whether every byte was accepted.

pub mod sender;

pub use sender::{send_frame, send_frame_async, send_framed, Transport};
