//! Builder pattern implementation for creating Installer instances.
//!
//! # Examples
//!
//! ```rust
//! use go_ipfs_dep::InstallerBuilder;
//! use std::time::Duration;
//!
//! let installer = InstallerBuilder::new()
//!     .version("v0.4.5")
//!     .platform("linux")
//!     .arch("amd64")
//!     .install_path("vendor")
//!     .timeout(Duration::from_secs(300))
//!     .on_complete(|result| println!("go-ipfs is in {}", result.dir.display()))
//!     .build();
//! ```

use super::{config::InstallerConfig, installer::Installer, result::InstallResult};
use crate::http::HttpClientConfig;
use crate::params::{EnvSource, PackageDefaults};

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use std::{path::PathBuf, sync::Arc, time::Duration};

/// A builder used to create an [`Installer`].
///
/// ```rust
/// # fn main()  {
/// use go_ipfs_dep::InstallerBuilder;
///
/// let i = InstallerBuilder::new().version("v0.4.23").install_path("deps").build();
/// # }
/// ```
#[derive(Default)]
pub struct InstallerBuilder {
    config: InstallerConfig,
}

impl InstallerBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        InstallerBuilder::default()
    }

    /// Convenience function to silence the status lines.
    pub fn hidden() -> Self {
        let mut builder = InstallerBuilder::default();
        builder.config.report = false;
        builder
    }

    /// Sets the go-ipfs version, e.g. `v0.4.5`.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.config.request.version = Some(version.into());
        self
    }

    /// Sets the platform identifier, e.g. `linux`.
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.config.request.platform = Some(platform.into());
        self
    }

    /// Sets the architecture identifier, e.g. `amd64`.
    pub fn arch(mut self, arch: impl Into<String>) -> Self {
        self.config.request.arch = Some(arch.into());
        self
    }

    /// Sets the directory the archive is extracted into.
    pub fn install_path(mut self, install_path: impl Into<PathBuf>) -> Self {
        self.config.request.install_path = Some(install_path.into());
        self
    }

    /// Read environment overrides from `env` instead of the process environment.
    pub fn env<E: EnvSource + 'static>(mut self, env: E) -> Self {
        self.config.env = Arc::new(env);
        self
    }

    /// Set the package-level defaults.
    pub fn defaults(mut self, defaults: PackageDefaults) -> Self {
        self.config.defaults = defaults;
        self
    }

    /// Set the HTTP client configuration.
    pub fn http(mut self, http: HttpClientConfig) -> Self {
        self.config.http = http;
        self
    }

    /// Route the download through a proxy.
    pub fn proxy(mut self, proxy: reqwest::Proxy) -> Self {
        self.config.http.proxy = Some(proxy);
        self
    }

    /// Add an http header to the download request.
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        let mut new = match self.config.http.headers {
            Some(ref h) => h.to_owned(),
            _ => HeaderMap::new(),
        };
        new.insert(name, value);

        self.config.http.headers = Some(new);
        self
    }

    /// Fail with [`Error::TimedOut`](crate::Error::TimedOut) if the install
    /// takes longer than `timeout`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set callback for when the install completes successfully.
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: Fn(&InstallResult) + Send + Sync + 'static,
    {
        self.config.on_complete = Some(Arc::new(Box::new(callback)));
        self
    }

    /// Create the [`Installer`] with the specified options.
    pub fn build(self) -> Installer {
        Installer::new(self.config)
    }
}
