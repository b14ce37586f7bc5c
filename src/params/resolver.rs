//! Resolution of request parameters.
//!
//! Every field goes through [`first_defined`]: an environment override wins
//! over the caller's argument, which wins over the built-in default.

use super::defaults::PackageDefaults;
use super::env::{EnvSource, GO_IPFS_DIST_URL, TARGET_ARCH, TARGET_OS, TARGET_VERSION};
use crate::catalog::{self, Arch, Platform};
use crate::error::Result;

use std::path::{self, PathBuf};

/// Optional arguments supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallRequest {
    pub version: Option<String>,
    pub platform: Option<String>,
    pub arch: Option<String>,
    pub install_path: Option<PathBuf>,
}

/// Fully resolved but not yet validated parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub version: String,
    pub platform: String,
    pub arch: String,
    pub install_path: PathBuf,
    pub dist_url: String,
}

/// Parameters accepted by the support catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParameters {
    pub version: String,
    pub platform: Platform,
    pub arch: Arch,
    /// Always absolute.
    pub install_path: PathBuf,
    pub dist_url: String,
}

/// Return the first value that is defined: environment, then argument, then
/// the lazily computed default.
pub fn first_defined<T>(env: Option<T>, argument: Option<T>, default: impl FnOnce() -> T) -> T {
    env.or(argument).unwrap_or_else(default)
}

/// Merge the caller's request with environment overrides and package defaults.
///
/// Reads nothing but the environment source and, when no install path is
/// given, the current working directory.
pub fn resolve(
    request: &InstallRequest,
    env: &dyn EnvSource,
    defaults: &PackageDefaults,
) -> Result<Resolved> {
    let version = first_defined(env.var(TARGET_VERSION), request.version.clone(), || {
        defaults.version()
    });
    let platform = first_defined(env.var(TARGET_OS), request.platform.clone(), || {
        Platform::host().to_string()
    });
    let arch = first_defined(env.var(TARGET_ARCH), request.arch.clone(), || {
        Arch::host().to_string()
    });
    let dist_url = first_defined(env.var(GO_IPFS_DIST_URL), None, || defaults.dist_url.clone());

    let install_path = match request.install_path {
        Some(ref p) => p.clone(),
        None => std::env::current_dir()?,
    };
    let install_path = path::absolute(install_path)?;

    Ok(Resolved {
        version,
        platform,
        arch,
        install_path,
        dist_url,
    })
}

impl Resolved {
    /// Check the resolved values against the support catalog.
    pub fn validate(self) -> Result<RequestParameters> {
        let (platform, arch) = catalog::verify(&self.version, &self.platform, &self.arch)?;
        Ok(RequestParameters {
            version: self.version,
            platform,
            arch,
            install_path: self.install_path,
            dist_url: self.dist_url,
        })
    }
}
