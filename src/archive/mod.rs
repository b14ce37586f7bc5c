//! Archive extraction.
//!
//! The downloaded body flows through an explicit pipeline:
//!
//! ```text
//! fetch ──▶ feed (async) ──channel──▶ sink (blocking): [gunzip?] ─▶ tar
//!                                                    or spool ─▶ zip
//! ```
//!
//! Both stages report completion or failure, and [`extract`] waits for both,
//! so an error in any stage fails the install.

mod pipeline;
pub mod untar;
pub mod unzip;

use pipeline::ChannelReader;

use crate::artifact::ArchiveFormat;
use crate::error::{Error, Result};
use crate::http::ByteStream;

use std::io::Read;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::debug;

/// Extraction strategy, chosen once from the archive format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    Zip,
    TarGz,
}

impl From<ArchiveFormat> for Extraction {
    fn from(format: ArchiveFormat) -> Self {
        match format {
            ArchiveFormat::Zip => Extraction::Zip,
            ArchiveFormat::TarGz => Extraction::TarGz,
        }
    }
}

impl Extraction {
    /// Run the blocking sink over `reader`.
    pub fn unpack<R: Read>(self, reader: R, dest: &Path) -> Result<()> {
        std::fs::create_dir_all(dest)?;
        match self {
            Extraction::Zip => unzip::unpack(reader, dest),
            Extraction::TarGz => untar::unpack(reader, dest),
        }
    }
}

/// Stream `body` into the archive sink rooted at `install_path`.
pub async fn extract(body: ByteStream, install_path: &Path, extraction: Extraction) -> Result<()> {
    let (tx, rx) = mpsc::channel(pipeline::CHANNEL_CAPACITY);
    let dest: PathBuf = install_path.to_path_buf();

    debug!(?extraction, dest = %dest.display(), "Starting extraction");
    let sink = tokio::task::spawn_blocking(move || extraction.unpack(ChannelReader::new(rx), &dest));
    let (fed, unpacked) = tokio::join!(pipeline::feed(body, tx), sink);

    let bytes = fed?;
    unpacked.map_err(|e| Error::Internal(format!("Extraction task failed: {}", e)))??;
    debug!(bytes, "Extraction finished");
    Ok(())
}
