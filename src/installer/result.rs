//! Install outcome and progress stages.

use std::fmt;
use std::path::PathBuf;

/// Stages an install goes through.
///
/// `Failed` can be entered from validation, fetching and extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Resolving,
    Validating,
    Fetching,
    Extracting,
    Done,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Resolving => "resolving",
            Stage::Validating => "validating",
            Stage::Fetching => "fetching",
            Stage::Extracting => "extracting",
            Stage::Done => "done",
            Stage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// What a successful install reports back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallResult {
    /// Archive file name, e.g. `ipfs_v0.4.5_linux-amd64.tar.gz`.
    pub file: String,
    /// Directory holding the installed distribution, with a trailing separator.
    pub dir: PathBuf,
}
