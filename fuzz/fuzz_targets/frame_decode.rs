#![no_main]

use archon_protocol::core::codec::FrameCodec;
use archon_protocol::core::packet::Frame;
use bytes::BytesMut;
use libfuzzer_sys::fuzz_target;
use tokio_util::codec::Decoder;

fuzz_target!(|data: &[u8]| {
    // Whole-frame parsing must never panic
    let _ = Frame::from_bytes(data);

    // Stream splitting must consume or wait, never loop or panic
    let mut codec = FrameCodec;
    let mut buf = BytesMut::from(data);
    while let Ok(Some(frame)) = codec.decode(&mut buf) {
        assert_eq!(usize::from(frame.header.size), frame.len());
    }
});
