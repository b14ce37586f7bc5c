//! Parameter resolution.
//!
//! Turns an [`InstallRequest`] of optional arguments into validated
//! [`RequestParameters`], applying per field:
//!
//! 1. the environment override (`TARGET_VERSION`, `TARGET_OS`, `TARGET_ARCH`,
//!    `GO_IPFS_DIST_URL`);
//! 2. the caller's argument;
//! 3. the default (package version, host OS/arch, current directory,
//!    package distribution URL).
//!
//! # Examples
//!
//! ```rust
//! use go_ipfs_dep::params::{resolve, InstallRequest, PackageDefaults};
//! use std::collections::HashMap;
//!
//! let env = HashMap::from([("TARGET_OS".to_string(), "windows".to_string())]);
//! let request = InstallRequest {
//!     version: Some("v0.4.5".into()),
//!     platform: Some("linux".into()),
//!     arch: Some("amd64".into()),
//!     install_path: Some("/tmp/out".into()),
//! };
//!
//! let params = resolve(&request, &env, &PackageDefaults::default())?.validate()?;
//! assert_eq!(params.platform.as_str(), "windows");
//! # Ok::<(), go_ipfs_dep::Error>(())
//! ```

pub mod defaults;
pub mod env;
pub mod resolver;

pub use defaults::{version_tag, PackageDefaults, DEFAULT_DIST_URL};
pub use env::{EnvSource, ProcessEnv};
pub use resolver::{first_defined, resolve, InstallRequest, RequestParameters, Resolved};
