//! go-ipfs-dep downloads the go-ipfs release for a version, operating system
//! and CPU architecture and extracts it into a directory.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use go_ipfs_dep::{download, Error};
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let installed = download(Some("v0.4.5"), Some("linux"), Some("amd64"), Some(Path::new("/tmp/out"))).await?;
//! assert_eq!(installed.file, "ipfs_v0.4.5_linux-amd64.tar.gz");
//! # Ok(())
//! # }
//! ```
//!
//! Arguments left as `None` fall back to the package default version, the
//! host platform and architecture, and the current directory. The environment
//! variables `TARGET_VERSION`, `TARGET_OS`, `TARGET_ARCH` and
//! `GO_IPFS_DIST_URL` override both arguments and defaults.
//!
//! # Module Organization
//!
//! - [`catalog`] - supported versions, platforms and architectures
//! - [`params`] - environment/argument/default resolution
//! - [`artifact`] - archive naming and URLs
//! - [`http`] - HTTP client and the fetch stage
//! - [`archive`] - streaming tar.gz and zip extraction
//! - [`installer`] - the `Installer` and `InstallerBuilder`
//! - [`error`] - the `Error` enum

pub mod archive;
pub mod artifact;
pub mod catalog;
pub mod error;
pub mod http;
pub mod installer;
pub mod params;
pub mod report;

pub use artifact::{ArchiveFormat, ArtifactDescriptor};
pub use catalog::{is_windows_platform, verify, Arch, Platform, ARCHS, PLATFORMS, VERSIONS};
pub use error::{Error, Field, Result};
pub use http::{create_http_client, HttpClientConfig};
pub use installer::{InstallResult, Installer, InstallerBuilder, Stage};
pub use params::{EnvSource, InstallRequest, PackageDefaults, ProcessEnv, RequestParameters};

use std::path::Path;

/// Download and install go-ipfs.
///
/// Reads overrides from the process environment and prints status lines to
/// standard output. Use [`InstallerBuilder`] for anything more specific.
pub async fn download(
    version: Option<&str>,
    platform: Option<&str>,
    arch: Option<&str>,
    install_path: Option<&Path>,
) -> Result<InstallResult> {
    let mut builder = InstallerBuilder::new();
    if let Some(version) = version {
        builder = builder.version(version);
    }
    if let Some(platform) = platform {
        builder = builder.platform(platform);
    }
    if let Some(arch) = arch {
        builder = builder.arch(arch);
    }
    if let Some(install_path) = install_path {
        builder = builder.install_path(install_path);
    }
    builder.build().install().await
}
