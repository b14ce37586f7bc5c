#![allow(dead_code)]

use bytes::Bytes;
use flate2::{write::GzEncoder, Compression};
use futures::stream::{self, StreamExt};
use go_ipfs_dep::http::ByteStream;
use go_ipfs_dep::params::env::GO_IPFS_DIST_URL;
use go_ipfs_dep::InstallerBuilder;
use std::collections::HashMap;
use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use zip::write::SimpleFileOptions;

// Common test constants
pub const TEST_VERSION: &str = "v0.4.5";
pub const IPFS_BINARY: &[u8] = b"#!/bin/sh\necho ipfs\n";
pub const README: &[u8] = b"go-ipfs test distribution\n";

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Files every test distribution contains, under the `go-ipfs/` top-level entry
pub fn dist_files() -> Vec<(&'static str, &'static [u8])> {
    vec![("go-ipfs/ipfs", IPFS_BINARY), ("go-ipfs/README.md", README)]
}

/// Builds an uncompressed tar archive
pub fn create_tar(files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());
    for (path, data) in files {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o755);
        builder
            .append_data(&mut header, path, *data)
            .expect("Failed to append tar entry");
    }
    builder.into_inner().expect("Failed to finish tar archive")
}

/// Builds a gzip compressed tar archive
pub fn create_tar_gz(files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(&create_tar(files))
        .expect("Failed to compress tar archive");
    encoder.finish().expect("Failed to finish gzip stream")
}

/// Builds a zip archive
pub fn create_zip(files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    for (path, data) in files {
        zip.start_file(*path, options).expect("Failed to start zip entry");
        zip.write_all(data).expect("Failed to write zip entry");
    }
    zip.finish().expect("Failed to finish zip archive").into_inner()
}

/// Splits `data` into a byte stream of `chunk_size` pieces
pub fn create_byte_stream(data: Vec<u8>, chunk_size: usize) -> ByteStream {
    let chunks: Vec<reqwest::Result<Bytes>> = data
        .chunks(chunk_size)
        .map(|c| Ok(Bytes::copy_from_slice(c)))
        .collect();
    stream::iter(chunks).boxed()
}

/// Builds an environment map from key/value pairs
pub fn create_env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Installer builder that talks to `dist_url` and ignores the process environment
pub fn create_test_installer_builder(dist_url: &str, install_path: &Path) -> InstallerBuilder {
    InstallerBuilder::hidden()
        .env(create_env(&[(GO_IPFS_DIST_URL, dist_url)]))
        .install_path(install_path)
}

/// Request path of a release archive on the distribution server
pub fn release_path(version: &str, platform: &str, arch: &str, ext: &str) -> String {
    format!("/go-ipfs/{version}/go-ipfs_{version}_{platform}-{arch}.{ext}")
}

/// Asserts that the test distribution was extracted under `install_path`
pub fn assert_dist_installed(install_path: &Path) {
    let dist = install_path.join("go-ipfs");
    assert_eq!(fs::read(dist.join("ipfs")).expect("ipfs missing"), IPFS_BINARY);
    assert_eq!(fs::read(dist.join("README.md")).expect("README missing"), README);
}

/// Asserts that nothing was written at `path`
pub fn assert_untouched(path: &Path) {
    assert!(!path.exists(), "Nothing should exist at path: {:?}", path);
}

/// Serves `head` followed by `body` to the first connection, then hangs up.
///
/// Lets a test announce a longer `Content-Length` than it sends, which the mock
/// server cannot do. Returns the base URL.
pub async fn serve_cut_short(head: String, body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Listener has no address");

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("Failed to accept");
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.expect("Failed to read request");
            if n == 0 {
                return;
            }
            request.extend_from_slice(&buf[..n]);
        }
        socket.write_all(head.as_bytes()).await.expect("Failed to write head");
        socket.write_all(&body).await.expect("Failed to write body");
        socket.flush().await.expect("Failed to flush");
    });

    format!("http://{addr}")
}
