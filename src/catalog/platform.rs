//! Platform and architecture identifiers used by the go-ipfs distribution.

use std::{fmt, str::FromStr};

/// Operating systems for which go-ipfs publishes builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Darwin,
    FreeBsd,
    Linux,
    OpenBsd,
    Windows,
}

/// CPU architectures for which go-ipfs publishes builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    X86,
    Amd64,
    Arm,
    Arm64,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Darwin,
        Platform::FreeBsd,
        Platform::Linux,
        Platform::OpenBsd,
        Platform::Windows,
    ];

    /// Identifier used in release file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Darwin => "darwin",
            Platform::FreeBsd => "freebsd",
            Platform::Linux => "linux",
            Platform::OpenBsd => "openbsd",
            Platform::Windows => "windows",
        }
    }

    /// Distribution identifier of the host operating system.
    ///
    /// Hosts without a mapping return Rust's own name, which the catalog then
    /// rejects.
    pub fn host() -> &'static str {
        host_platform(std::env::consts::OS)
    }
}

impl Arch {
    pub const ALL: [Arch; 4] = [Arch::X86, Arch::Amd64, Arch::Arm, Arch::Arm64];

    /// Identifier used in release file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::X86 => "386",
            Arch::Amd64 => "amd64",
            Arch::Arm => "arm",
            Arch::Arm64 => "arm64",
        }
    }

    /// Distribution identifier of the host CPU architecture.
    pub fn host() -> &'static str {
        host_arch(std::env::consts::ARCH)
    }
}

pub(crate) fn host_platform(os: &'static str) -> &'static str {
    match os {
        "macos" => "darwin",
        other => other,
    }
}

pub(crate) fn host_arch(arch: &'static str) -> &'static str {
    match arch {
        "x86_64" => "amd64",
        "x86" => "386",
        "aarch64" => "arm64",
        other => other,
    }
}

impl FromStr for Platform {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or(())
    }
}

impl FromStr for Arch {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Arch::ALL.into_iter().find(|a| a.as_str() == s).ok_or(())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_mapping() {
        assert_eq!(host_platform("macos"), "darwin");
        assert_eq!(host_platform("linux"), "linux");
        assert_eq!(host_platform("windows"), "windows");
        assert_eq!(host_arch("x86_64"), "amd64");
        assert_eq!(host_arch("x86"), "386");
        assert_eq!(host_arch("aarch64"), "arm64");
        assert_eq!(host_arch("riscv64"), "riscv64");
    }

    #[test]
    fn test_parse_round_trips_identifiers() {
        assert_eq!("linux".parse::<Platform>(), Ok(Platform::Linux));
        assert_eq!("386".parse::<Arch>(), Ok(Arch::X86));
        assert!("Linux".parse::<Platform>().is_err());
        assert!("x86_64".parse::<Arch>().is_err());
    }
}
