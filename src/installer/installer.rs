//! Core installer: resolve, validate, fetch, extract.
//!
//! # Examples
//!
//! ```rust,no_run
//! use go_ipfs_dep::InstallerBuilder;
//!
//! # async fn example() -> Result<(), go_ipfs_dep::Error> {
//! let result = InstallerBuilder::new()
//!     .version("v0.4.5")
//!     .install_path("/tmp/out")
//!     .build()
//!     .install()
//!     .await?;
//! println!("{} installed to {}", result.file, result.dir.display());
//! # Ok(())
//! # }
//! ```

use super::config::InstallerConfig;
use super::result::{InstallResult, Stage};
use crate::archive::{self, Extraction};
use crate::artifact::{installed_dir, ArtifactDescriptor, DIST_DIR};
use crate::error::{Error, Result};
use crate::http::{create_http_client, Fetcher};
use crate::params::{resolve, RequestParameters};
use crate::report::Reporter;

use std::fmt;
use std::fmt::Debug;
use tracing::{debug, warn};

/// Represents the install controller.
///
/// An installer is created via its builder:
///
/// ```rust
/// # fn main()  {
/// use go_ipfs_dep::InstallerBuilder;
///
/// let i = InstallerBuilder::new().build();
/// # }
/// ```
///
/// Each call to [`Installer::install`] resolves its parameters afresh, so one
/// installer can be reused and called concurrently.
#[derive(Clone)]
pub struct Installer {
    config: InstallerConfig,
}

impl Debug for Installer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Installer")
            .field("config", &self.config)
            .finish()
    }
}

impl Installer {
    /// Creates a new Installer with the given configuration.
    pub(crate) fn new(config: InstallerConfig) -> Self {
        Self { config }
    }

    /// Gets the installer configuration.
    pub fn config(&self) -> &InstallerConfig {
        &self.config
    }

    /// Resolve and validate the parameters this installer would use, without
    /// touching the network.
    pub fn parameters(&self) -> Result<RequestParameters> {
        resolve(
            &self.config.request,
            self.config.env.as_ref(),
            &self.config.defaults,
        )?
        .validate()
    }

    /// Download and extract go-ipfs.
    ///
    /// Errors are printed (unless hidden) and returned; the future can be
    /// dropped at any point to cancel the install.
    pub async fn install(&self) -> Result<InstallResult> {
        let reporter = Reporter::new(self.config.report);

        let result = match self.config.timeout {
            Some(limit) => tokio::time::timeout(limit, self.run(reporter))
                .await
                .unwrap_or(Err(Error::TimedOut(limit))),
            None => self.run(reporter).await,
        };

        match result {
            Ok(ref installed) => {
                if let Some(ref callback) = self.config.on_complete {
                    callback(installed);
                }
            }
            Err(ref e) => {
                warn!(stage = %Stage::Failed, error = %e, "Install failed");
                reporter.failed(e);
            }
        }
        result
    }

    async fn run(&self, reporter: Reporter) -> Result<InstallResult> {
        debug!(stage = %Stage::Resolving);
        let resolved = resolve(
            &self.config.request,
            self.config.env.as_ref(),
            &self.config.defaults,
        )?;

        debug!(stage = %Stage::Validating, ?resolved);
        let params = resolved.validate()?;
        let artifact = ArtifactDescriptor::new(&params)?;

        debug!(stage = %Stage::Fetching, url = %artifact.download_url);
        let client = create_http_client(self.config.http.clone())?;
        let body = Fetcher::new(client, reporter)
            .fetch(&artifact.download_url)
            .await?;

        debug!(stage = %Stage::Extracting, format = ?artifact.format);
        archive::extract(body, &params.install_path, Extraction::from(artifact.format)).await?;

        let dir = installed_dir(&params.install_path);
        if !dir.is_dir() {
            return Err(Error::Archive {
                message: format!("Archive did not contain a {} directory", DIST_DIR),
                cause: None,
            });
        }
        reporter.downloaded(&artifact.file_name);
        reporter.installed(&artifact.display_name(), &dir);
        debug!(stage = %Stage::Done, dir = %dir.display());

        Ok(InstallResult {
            file: artifact.file_name,
            dir,
        })
    }
}
