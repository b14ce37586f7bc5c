//! Release artifact naming.
//!
//! An [`ArtifactDescriptor`] is derived from validated [`RequestParameters`];
//! nothing about it is stored.

use crate::catalog::is_windows_platform;
use crate::error::{Error, Result};
use crate::params::RequestParameters;

use reqwest::Url;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// Name of the top-level directory inside every go-ipfs archive.
pub const DIST_DIR: &str = "go-ipfs";

/// Archive format of a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    TarGz,
}

impl ArchiveFormat {
    /// File extension, without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ArchiveFormat::Zip => "zip",
            ArchiveFormat::TarGz => "tar.gz",
        }
    }
}

/// The archive to download for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    /// File name reported to the caller, e.g. `ipfs_v0.4.5_linux-amd64.tar.gz`.
    pub file_name: String,
    /// Full URL of the archive on the distribution server.
    pub download_url: Url,
    pub format: ArchiveFormat,
}

impl ArtifactDescriptor {
    /// Compute the descriptor for validated parameters.
    pub fn new(params: &RequestParameters) -> Result<Self> {
        let format = if is_windows_platform(params.platform) {
            ArchiveFormat::Zip
        } else {
            ArchiveFormat::TarGz
        };
        let file_name = format!(
            "ipfs_{}_{}-{}.{}",
            params.version,
            params.platform,
            params.arch,
            format.extension()
        );
        let url = format!(
            "{}/{}/{}/go-{}",
            params.dist_url.trim_end_matches('/'),
            DIST_DIR,
            params.version,
            file_name
        );
        let download_url = Url::parse(&url)
            .map_err(|e| Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", url, e)))?;

        Ok(Self {
            file_name,
            download_url,
            format,
        })
    }

    /// Human readable name, e.g. `go-ipfs v0.4.5 linux-amd64`.
    pub fn display_name(&self) -> String {
        let stem = self
            .file_name
            .strip_suffix(self.format.extension())
            .and_then(|s| s.strip_suffix('.'))
            .unwrap_or(&self.file_name);
        format!("go-{}", stem.replace('_', " "))
    }
}

/// Directory the archive's top-level entry lands in, with a trailing separator.
pub fn installed_dir(install_path: &Path) -> PathBuf {
    install_path.join(format!("{DIST_DIR}{MAIN_SEPARATOR}"))
}
