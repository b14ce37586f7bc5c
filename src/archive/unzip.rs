//! Zip extraction.
//!
//! The zip central directory sits at the end of the file, so the stream is
//! spooled into an anonymous temporary file before it is read.

use crate::error::{Error, Result};

use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;
use tracing::debug;

/// Unpack a zip stream under `dest`.
pub fn unpack<R: Read>(mut reader: R, dest: &Path) -> Result<()> {
    let mut spool = tempfile::tempfile()?;
    let size = io::copy(&mut reader, &mut spool)
        .map_err(|e| Error::archive("Failed to receive zip archive", e))?;
    spool.seek(SeekFrom::Start(0))?;
    debug!(size, "Zip archive spooled");

    let mut archive = ::zip::ZipArchive::new(spool)
        .map_err(|e| Error::archive("Failed to read zip archive", e))?;
    archive
        .extract(dest)
        .map_err(|e| Error::archive(format!("Failed to unpack zip archive into {}", dest.display()), e))
}
