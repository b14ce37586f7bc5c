//! Error handling for go-ipfs-dep.
//!
//! Every failure of an install is reported through the single [`Error`] enum.
//! The variants fall into three families, which callers can tell apart with
//! [`Error::is_validation`], [`Error::is_transfer`] and [`Error::is_extraction`]:
//!
//! - validation: the requested version, platform or architecture is unknown;
//! - transfer: the server answered with something other than `200 OK`, or the
//!   connection failed;
//! - extraction: the archive could not be decompressed or unpacked.

use std::{fmt, io, time::Duration};
use thiserror::Error;

/// The request field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Version,
    Platform,
    Arch,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Version => "version",
            Field::Platform => "platform",
            Field::Arch => "architecture",
        };
        f.write_str(name)
    }
}

/// Errors that can happen while installing go-ipfs.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested combination is not in the support catalog.
    ///
    /// Raised before any network activity.
    #[error("No binary available for {field} '{value}'")]
    Unsupported { field: Field, value: String },

    /// The distribution server answered with a status other than `200 OK`.
    #[error("Download failed with HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// The request could not be sent or the connection failed.
    #[error("Request error: {source}")]
    Request {
        #[from]
        source: reqwest_middleware::Error,
    },

    /// Error from the Reqwest library while streaming the response body.
    #[error("Reqwest error: {source}")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// The archive could not be decompressed or unpacked.
    #[error("Archive error: {message}")]
    Archive {
        message: String,
        #[source]
        cause: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The computed download URL is not a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// I/O Error.
    #[error("I/O error: {source}")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// The install did not finish within the configured timeout.
    #[error("Install timed out after {0:?}")]
    TimedOut(Duration),

    /// Error from an underlying system.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub(crate) fn archive(
        message: impl Into<String>,
        cause: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Archive {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    /// Whether the request was rejected by the support catalog.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Unsupported { .. })
    }

    /// Whether the download itself failed, either on status or on the wire.
    pub fn is_transfer(&self) -> bool {
        matches!(
            self,
            Error::Status { .. } | Error::Request { .. } | Error::Reqwest { .. }
        )
    }

    /// Whether unpacking the downloaded archive failed.
    pub fn is_extraction(&self) -> bool {
        matches!(self, Error::Archive { .. })
    }

    /// The HTTP status code carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Reqwest { source } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for operations that can fail with a go-ipfs-dep error.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_names_field() {
        let err = Error::Unsupported {
            field: Field::Arch,
            value: "sparc".into(),
        };
        assert_eq!(err.to_string(), "No binary available for architecture 'sparc'");
        assert!(err.is_validation());
        assert!(!err.is_transfer());
    }

    #[test]
    fn test_status_message_includes_code() {
        let err = Error::Status {
            status: 404,
            body: "not found".into(),
        };
        assert!(err.to_string().contains("404"));
        assert_eq!(err.status(), Some(404));
        assert!(err.is_transfer());
    }

    #[test]
    fn test_archive_helper_keeps_cause() {
        let err = Error::archive("bad tar", io::Error::other("truncated"));
        assert!(err.is_extraction());
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("truncated"));
    }
}
