//! The fetch stage: one GET, status check, body as a stream.

use crate::error::{Error, Result};
use crate::report::Reporter;

use bytes::Bytes;
use futures::stream::{BoxStream, StreamExt};
use reqwest::{StatusCode, Url};
use reqwest_middleware::ClientWithMiddleware;
use tracing::debug;

/// Response body of a successful fetch.
pub type ByteStream = BoxStream<'static, reqwest::Result<Bytes>>;

/// Issues the download request.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: ClientWithMiddleware,
    reporter: Reporter,
}

impl Fetcher {
    pub fn new(client: ClientWithMiddleware, reporter: Reporter) -> Self {
        Self { client, reporter }
    }

    /// Send exactly one GET for `url`.
    ///
    /// Resolves once the response headers arrived. Only `200 OK` counts as
    /// success; for any other status the body is read and returned as part of
    /// [`Error::Status`].
    pub async fn fetch(&self, url: &Url) -> Result<ByteStream> {
        self.reporter.downloading(url);

        let res = self.client.get(url.clone()).send().await?;
        let status = res.status();
        debug!(%status, "Response headers received");

        if status != StatusCode::OK {
            let body = match res.text().await {
                Ok(body) => body,
                Err(e) => format!("<unreadable body: {}>", e),
            };
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(res.bytes_stream().boxed())
    }
}
