//! Plumbing between the async fetch stage and the blocking extraction sink.
//!
//! The response body is forwarded chunk by chunk into a bounded channel. The
//! sink runs on a blocking thread and sees the channel as a plain
//! [`std::io::Read`], so the archive crates can consume it directly.

use crate::error::Result;
use crate::http::ByteStream;

use bytes::Bytes;
use futures::StreamExt;
use std::io::{self, Read};
use tokio::sync::mpsc;
use tracing::debug;

/// Number of body chunks buffered between feed and sink.
pub(crate) const CHANNEL_CAPACITY: usize = 16;

pub(crate) type ChunkSender = mpsc::Sender<io::Result<Bytes>>;

/// Blocking reader over the chunks sent by [`feed`].
///
/// Must only be read from a blocking context.
pub(crate) struct ChannelReader {
    rx: mpsc::Receiver<io::Result<Bytes>>,
    current: Bytes,
}

impl ChannelReader {
    pub(crate) fn new(rx: mpsc::Receiver<io::Result<Bytes>>) -> Self {
        Self {
            rx,
            current: Bytes::new(),
        }
    }
}

impl Read for ChannelReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        while self.current.is_empty() {
            match self.rx.blocking_recv() {
                Some(Ok(chunk)) => self.current = chunk,
                Some(Err(e)) => return Err(e),
                None => return Ok(0),
            }
        }
        let n = buf.len().min(self.current.len());
        buf[..n].copy_from_slice(&self.current[..n]);
        self.current = self.current.slice(n..);
        Ok(n)
    }
}

/// Forward the response body into the channel.
///
/// A transfer error is passed on to the sink, so it stops reading, and also
/// returned. If the sink hangs up early the rest of the body is dropped.
pub(crate) async fn feed(mut stream: ByteStream, tx: ChunkSender) -> Result<u64> {
    let mut total: u64 = 0;
    while let Some(item) = stream.next().await {
        match item {
            Ok(chunk) => {
                total += chunk.len() as u64;
                if tx.send(Ok(chunk)).await.is_err() {
                    debug!("Extraction sink closed before the end of the body");
                    break;
                }
            }
            Err(e) => {
                let _ = tx.send(Err(io::Error::other(e.to_string()))).await;
                return Err(e.into());
            }
        }
    }
    Ok(total)
}

/// Read until `buf` is full or the reader is exhausted.
pub(crate) fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
