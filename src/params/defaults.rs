//! Package-level defaults for version and distribution URL.

use semver::Version;

/// Default distribution server.
pub const DEFAULT_DIST_URL: &str = "https://dist.ipfs.io";

/// Lowest-precedence values used when neither the environment nor the caller
/// provide one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDefaults {
    /// Declared go-ipfs version. When `None`, the crate version is used.
    pub version: Option<String>,
    /// Distribution base URL.
    pub dist_url: String,
}

impl Default for PackageDefaults {
    fn default() -> Self {
        Self {
            version: None,
            dist_url: DEFAULT_DIST_URL.to_string(),
        }
    }
}

impl PackageDefaults {
    /// Creates defaults from a package descriptor.
    pub fn new(version: Option<String>, dist_url: impl Into<String>) -> Self {
        Self {
            version,
            dist_url: dist_url.into(),
        }
    }

    /// The default go-ipfs version.
    pub fn version(&self) -> String {
        match self.version {
            Some(ref v) => v.clone(),
            None => version_tag(env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Turn a package version into a release tag: drop any pre-release or build
/// suffix and prefix a `v`.
pub fn version_tag(package_version: &str) -> String {
    match Version::parse(package_version) {
        Ok(v) => format!("v{}.{}.{}", v.major, v.minor, v.patch),
        Err(_) => {
            let core = package_version
                .split(['-', '+'])
                .next()
                .unwrap_or(package_version);
            format!("v{}", core.trim_start_matches('v'))
        }
    }
}
