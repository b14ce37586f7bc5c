//! Installer module: orchestration, builder pattern and configuration.
//!
//! - `installer` - the [`Installer`] that runs resolve → validate → fetch → extract
//! - `builder` - [`InstallerBuilder`] for configuring an installer
//! - `config` - configuration structures and callback types
//! - `result` - [`InstallResult`] and the [`Stage`] an install goes through
//!
//! # Examples
//!
//! ```rust,no_run
//! use go_ipfs_dep::InstallerBuilder;
//!
//! # async fn example() -> Result<(), go_ipfs_dep::Error> {
//! let result = InstallerBuilder::hidden()
//!     .version("v0.4.23")
//!     .platform("darwin")
//!     .arch("arm64")
//!     .install_path("./vendor")
//!     .build()
//!     .install()
//!     .await?;
//! assert_eq!(result.file, "ipfs_v0.4.23_darwin-arm64.tar.gz");
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod installer;
pub mod result;

pub use builder::InstallerBuilder;
pub use config::{InstallCallback, InstallerConfig};
pub use installer::Installer;
pub use result::{InstallResult, Stage};
