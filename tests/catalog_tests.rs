//! Tests for the support catalog and artifact naming.

use go_ipfs_dep::artifact::installed_dir;
use go_ipfs_dep::{
    is_windows_platform, verify, ArchiveFormat, ArtifactDescriptor, Error, Field, Platform,
    RequestParameters, ARCHS, PLATFORMS, VERSIONS,
};
use std::path::PathBuf;

fn params(platform: &str, arch: &str) -> RequestParameters {
    let (platform, arch) = verify("v0.4.5", platform, arch).unwrap();
    RequestParameters {
        version: "v0.4.5".into(),
        platform,
        arch,
        install_path: PathBuf::from("/opt/deps"),
        dist_url: "https://dist.ipfs.io".into(),
    }
}

#[test]
fn test_every_catalog_combination_verifies() {
    for version in VERSIONS {
        for platform in PLATFORMS {
            for arch in ARCHS {
                assert!(verify(version, platform, arch).is_ok());
            }
        }
    }
}

#[test]
fn test_unknown_values_are_rejected() {
    let cases = [
        ("v0.3.0", "linux", "amd64", Field::Version),
        ("0.4.5", "linux", "amd64", Field::Version),
        ("v0.4.5", "win32", "amd64", Field::Platform),
        ("v0.4.5", "linux", "x64", Field::Arch),
    ];
    for (version, platform, arch, expected) in cases {
        match verify(version, platform, arch) {
            Err(Error::Unsupported { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected {expected} to be rejected, got {other:?}"),
        }
    }
}

#[test]
fn test_archive_format_follows_platform() {
    for platform in PLATFORMS {
        let artifact = ArtifactDescriptor::new(&params(platform, "amd64")).unwrap();
        let windows = is_windows_platform(platform.parse::<Platform>().unwrap());
        if windows {
            assert_eq!(artifact.format, ArchiveFormat::Zip);
            assert!(artifact.file_name.ends_with(".zip"));
        } else {
            assert_eq!(artifact.format, ArchiveFormat::TarGz);
            assert!(artifact.file_name.ends_with(".tar.gz"));
        }
    }
}

#[test]
fn test_download_url_layout() {
    let artifact = ArtifactDescriptor::new(&params("freebsd", "386")).unwrap();
    assert_eq!(
        artifact.download_url.as_str(),
        "https://dist.ipfs.io/go-ipfs/v0.4.5/go-ipfs_v0.4.5_freebsd-386.tar.gz"
    );
}

#[test]
fn test_installed_dir_ends_with_separator() {
    let dir = installed_dir(&PathBuf::from("/opt/deps"));
    assert!(dir.to_string_lossy().ends_with(std::path::MAIN_SEPARATOR));
    assert!(dir.ends_with("go-ipfs"));
}
