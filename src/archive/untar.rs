//! Tar extraction with optional gzip decompression.
//!
//! Some releases named `.tar.gz` are served already decompressed, so the
//! stream is sniffed for the gzip magic bytes and only decoded when present.

use super::pipeline::read_up_to;
use crate::error::{Error, Result};

use flate2::read::MultiGzDecoder;
use std::io::{self, Cursor, Read};
use std::path::Path;
use tracing::debug;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Wrap `reader` in a gzip decoder if the stream starts with the gzip magic
/// bytes, otherwise hand the bytes through unchanged.
pub fn maybe_gunzip<'a, R: Read + 'a>(mut reader: R) -> Result<Box<dyn Read + 'a>> {
    let mut head = [0u8; 2];
    let n = read_up_to(&mut reader, &mut head)
        .map_err(|e| Error::archive("Failed to read archive header", e))?;
    let rest = Cursor::new(head[..n].to_vec()).chain(reader);

    if n == GZIP_MAGIC.len() && head == GZIP_MAGIC {
        debug!("Archive is gzip compressed");
        Ok(Box::new(MultiGzDecoder::new(rest)))
    } else {
        debug!("Archive is not gzip compressed, passing through");
        Ok(Box::new(rest))
    }
}

/// Records whether the wrapped reader ran dry.
///
/// `tar` stops at the first end-of-archive block without reading further, so
/// hitting the end of the input means the archive was cut short.
struct EofTracker<R> {
    inner: R,
    hit_eof: bool,
}

impl<R: Read> Read for EofTracker<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n == 0 && !buf.is_empty() {
            self.hit_eof = true;
        }
        Ok(n)
    }
}

/// Unpack a (possibly gzipped) tar stream under `dest`.
///
/// Fails when the stream ends before the end-of-archive marker, which also
/// covers an empty body.
pub fn unpack<R: Read>(reader: R, dest: &Path) -> Result<()> {
    let reader = EofTracker {
        inner: maybe_gunzip(reader)?,
        hit_eof: false,
    };
    let mut archive = tar::Archive::new(reader);
    archive
        .unpack(dest)
        .map_err(|e| Error::archive(format!("Failed to unpack tar archive into {}", dest.display()), e))?;

    if archive.into_inner().hit_eof {
        return Err(Error::Archive {
            message: "Tar archive ended before its end-of-archive marker".into(),
            cause: None,
        });
    }
    Ok(())
}
