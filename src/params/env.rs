//! Environment lookup used for parameter overrides.

use std::collections::HashMap;

/// Overrides the distribution version.
pub const TARGET_VERSION: &str = "TARGET_VERSION";
/// Overrides the platform identifier.
pub const TARGET_OS: &str = "TARGET_OS";
/// Overrides the architecture identifier.
pub const TARGET_ARCH: &str = "TARGET_ARCH";
/// Overrides the distribution base URL.
pub const GO_IPFS_DIST_URL: &str = "GO_IPFS_DIST_URL";

/// A source of environment variables.
///
/// Empty values are treated as unset.
pub trait EnvSource: Send + Sync {
    /// Look up a variable, returning `None` when it is unset or empty.
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.is_empty())
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| !v.is_empty()).cloned()
    }
}
