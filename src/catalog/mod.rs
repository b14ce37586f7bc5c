//! Support catalog of published go-ipfs builds.
//!
//! The catalog is a fixed set of versions, platforms and architectures. A
//! request is only sent to the distribution server once [`verify`] accepted
//! all three values.
//!
//! # Examples
//!
//! ```rust
//! use go_ipfs_dep::catalog::{self, Arch, Platform};
//!
//! let (platform, arch) = catalog::verify("v0.4.5", "linux", "amd64")?;
//! assert_eq!(platform, Platform::Linux);
//! assert_eq!(arch, Arch::Amd64);
//! assert!(!catalog::is_windows_platform(platform));
//! # Ok::<(), go_ipfs_dep::Error>(())
//! ```

pub mod platform;

pub use platform::{Arch, Platform};

use crate::error::{Error, Field, Result};

/// Released go-ipfs versions.
pub const VERSIONS: &[&str] = &[
    "v0.4.0", "v0.4.1", "v0.4.2", "v0.4.3", "v0.4.4", "v0.4.5", "v0.4.6", "v0.4.7", "v0.4.8",
    "v0.4.9", "v0.4.10", "v0.4.11", "v0.4.12", "v0.4.13", "v0.4.14", "v0.4.15", "v0.4.16",
    "v0.4.17", "v0.4.18", "v0.4.19", "v0.4.20", "v0.4.21", "v0.4.22", "v0.4.23",
];

/// Platform identifiers with published builds.
pub const PLATFORMS: &[&str] = &["darwin", "freebsd", "linux", "openbsd", "windows"];

/// Architecture identifiers with published builds.
pub const ARCHS: &[&str] = &["386", "amd64", "arm", "arm64"];

/// Check a requested combination against the catalog.
///
/// The fields are checked in order (version, platform, architecture) and the
/// first unknown one is reported.
pub fn verify(version: &str, platform: &str, arch: &str) -> Result<(Platform, Arch)> {
    if !VERSIONS.contains(&version) {
        return Err(unsupported(Field::Version, version));
    }
    let platform = platform
        .parse::<Platform>()
        .map_err(|_| unsupported(Field::Platform, platform))?;
    let arch = arch
        .parse::<Arch>()
        .map_err(|_| unsupported(Field::Arch, arch))?;
    Ok((platform, arch))
}

/// Whether builds for this platform ship as zip archives instead of tar.gz.
pub fn is_windows_platform(platform: Platform) -> bool {
    platform == Platform::Windows
}

fn unsupported(field: Field, value: &str) -> Error {
    Error::Unsupported {
        field,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sets_match_enums() {
        let platforms: Vec<_> = Platform::ALL.iter().map(Platform::as_str).collect();
        assert_eq!(platforms, PLATFORMS);
        let archs: Vec<_> = Arch::ALL.iter().map(Arch::as_str).collect();
        assert_eq!(archs, ARCHS);
    }

    #[test]
    fn test_verify_reports_first_bad_field() {
        let err = verify("v9.9.9", "plan9", "mips").unwrap_err();
        assert!(matches!(err, Error::Unsupported { field: Field::Version, .. }));

        let err = verify("v0.4.5", "plan9", "mips").unwrap_err();
        assert!(matches!(err, Error::Unsupported { field: Field::Platform, .. }));

        let err = verify("v0.4.5", "linux", "mips").unwrap_err();
        match err {
            Error::Unsupported { field, value } => {
                assert_eq!(field, Field::Arch);
                assert_eq!(value, "mips");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_only_windows_uses_zip() {
        for platform in Platform::ALL {
            assert_eq!(is_windows_platform(platform), platform == Platform::Windows);
        }
    }
}
