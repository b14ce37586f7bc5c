//! HTTP client and the fetch stage.
//!
//! - [`client`] - reqwest client creation with tracing middleware
//! - [`fetch`] - the single GET that yields the archive as a byte stream

pub mod client;
pub mod fetch;

pub use client::{create_http_client, HttpClientConfig};
pub use fetch::{ByteStream, Fetcher};
