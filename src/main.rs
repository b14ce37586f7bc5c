//! Command-line front end for go-ipfs-dep.

use clap::Parser;
use color_eyre::Result;
use go_ipfs_dep::{InstallerBuilder, PackageDefaults, ARCHS, PLATFORMS, VERSIONS};
use std::{path::PathBuf, process::ExitCode, time::Duration};
use tracing_subscriber::EnvFilter;

/// Download and install go-ipfs for a version, OS and architecture.
///
/// TARGET_VERSION, TARGET_OS, TARGET_ARCH and GO_IPFS_DIST_URL take
/// precedence over the options below.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// go-ipfs version to install, e.g. v0.4.5
    #[arg(long = "target-version")]
    target_version: Option<String>,

    /// Platform identifier (darwin, freebsd, linux, openbsd, windows)
    #[arg(long = "os")]
    platform: Option<String>,

    /// Architecture identifier (386, amd64, arm, arm64)
    #[arg(long)]
    arch: Option<String>,

    /// Distribution server used when GO_IPFS_DIST_URL is not set
    #[arg(long)]
    dist_url: Option<String>,

    /// Give up after this many seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Do not print status lines
    #[arg(short, long)]
    quiet: bool,

    /// List the supported versions, platforms and architectures, then exit
    #[arg(long)]
    list: bool,

    /// Directory to extract into (defaults to the current directory)
    install_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    Ok(run(Cli::parse()).await)
}

async fn run(cli: Cli) -> ExitCode {
    if cli.list {
        println!("versions: {}", VERSIONS.join(", "));
        println!("platforms: {}", PLATFORMS.join(", "));
        println!("archs: {}", ARCHS.join(", "));
        return ExitCode::SUCCESS;
    }

    let mut builder = if cli.quiet {
        InstallerBuilder::hidden()
    } else {
        InstallerBuilder::new()
    };
    if let Some(version) = cli.target_version {
        builder = builder.version(version);
    }
    if let Some(platform) = cli.platform {
        builder = builder.platform(platform);
    }
    if let Some(arch) = cli.arch {
        builder = builder.arch(arch);
    }
    if let Some(path) = cli.install_path {
        builder = builder.install_path(path);
    }
    if let Some(dist_url) = cli.dist_url {
        builder = builder.defaults(PackageDefaults::new(None, dist_url));
    }
    if let Some(secs) = cli.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    // The installer already reported the failure on stdout.
    match builder.build().install().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
