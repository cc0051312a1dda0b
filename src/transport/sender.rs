//! Frame emission.
//!
//! A frame is handed to the transport in a single write. If the transport
//! accepts fewer bytes than the frame holds, or fails, the send is reported
//! as failed; retrying is the connection layer's decision.

use futures::{Sink, SinkExt};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, trace, warn};

use crate::core::packet::Frame;
use crate::error::{ProtocolError, Result};
use crate::utils::hexdump;

/// Byte sink accepting encrypted frames.
pub trait Transport {
    /// Write `buf`, returning how many bytes were accepted.
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize>;
}

impl<W: std::io::Write> Transport for W {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        std::io::Write::write(self, buf)
    }
}

fn check_written(expected: usize, written: usize) -> Result<()> {
    if written != expected {
        warn!(expected, written, "transport accepted a partial frame");
        return Err(ProtocolError::ShortWrite { expected, written });
    }
    Ok(())
}

/// Send one frame's bytes through `transport`.
pub fn send_frame<T: Transport + ?Sized>(transport: &mut T, frame: &[u8]) -> Result<()> {
    trace!(payload = %hexdump::format_payload(frame), "sending frame");
    let written = transport.write(frame).map_err(|e| {
        warn!(error = %e, len = frame.len(), "transport write failed");
        ProtocolError::Io(e)
    })?;
    check_written(frame.len(), written)?;
    debug!(len = frame.len(), "frame sent");
    Ok(())
}

/// Async counterpart of [`send_frame`] for Tokio writers.
pub async fn send_frame_async<W>(writer: &mut W, frame: &[u8]) -> Result<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    trace!(payload = %hexdump::format_payload(frame), "sending frame");
    let written = writer.write(frame).await?;
    check_written(frame.len(), written)?;
    debug!(len = frame.len(), "frame sent");
    Ok(())
}

/// Send a frame through a framed sink such as `Framed<_, FrameCodec>`.
pub async fn send_framed<S>(sink: &mut S, frame: Frame) -> Result<()>
where
    S: Sink<Frame, Error = ProtocolError> + Unpin,
{
    let packet_type = frame.header.packet_type;
    sink.send(frame).await?;
    debug!(packet_type, "frame sent");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Accepts at most `limit` bytes per write.
    struct Choked {
        limit: usize,
        sink: Vec<u8>,
    }

    impl io::Write for Choked {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let n = buf.len().min(self.limit);
            self.sink.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Broken;

    impl io::Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "peer gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_full_write_succeeds() {
        let mut out: Vec<u8> = Vec::new();
        send_frame(&mut out, &[8, 0, 5, 0, 0, 0, 0, 0]).expect("send");
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn test_short_write_is_failure() {
        let mut transport = Choked {
            limit: 5,
            sink: Vec::new(),
        };
        let err = send_frame(&mut transport, &[0u8; 8]).unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::ShortWrite {
                expected: 8,
                written: 5
            }
        ));
        // no retry: only the first chunk reached the transport
        assert_eq!(transport.sink.len(), 5);
    }

    #[test]
    fn test_transport_error_surfaces() {
        let err = send_frame(&mut Broken, &[0u8; 8]).unwrap_err();
        assert!(matches!(err, ProtocolError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    }

    #[tokio::test]
    async fn test_async_send() {
        let mut out: Vec<u8> = Vec::new();
        send_frame_async(&mut out, &[1, 2, 3]).await.expect("send");
        assert_eq!(out, vec![1, 2, 3]);
    }
}
