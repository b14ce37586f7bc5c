//! Configuration structures for the installer.

use super::result::InstallResult;
use crate::http::HttpClientConfig;
use crate::params::{EnvSource, InstallRequest, PackageDefaults, ProcessEnv};

use std::sync::Arc;
use std::time::Duration;

/// Callback type for install completion events.
pub type InstallCallback = Box<dyn Fn(&InstallResult) + Send + Sync>;

/// Configuration structure for the installer.
#[derive(Clone)]
pub struct InstallerConfig {
    /// Arguments given by the caller.
    pub request: InstallRequest,
    /// Where environment overrides are read from.
    pub env: Arc<dyn EnvSource>,
    /// Package-level defaults.
    pub defaults: PackageDefaults,
    /// HTTP client settings.
    pub http: HttpClientConfig,
    /// Upper bound for the whole install. `None` waits forever.
    pub timeout: Option<Duration>,
    /// Print the status lines to standard output.
    pub report: bool,
    /// Callback for when the install completes.
    pub on_complete: Option<Arc<InstallCallback>>,
}

impl std::fmt::Debug for InstallerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstallerConfig")
            .field("request", &self.request)
            .field("defaults", &self.defaults)
            .field("http", &self.http)
            .field("timeout", &self.timeout)
            .field("report", &self.report)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            request: InstallRequest::default(),
            env: Arc::new(ProcessEnv),
            defaults: PackageDefaults::default(),
            http: HttpClientConfig::default(),
            timeout: None,
            report: true,
            on_complete: None,
        }
    }
}
