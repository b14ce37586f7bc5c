//! Human-readable status lines written to standard output.

use crate::error::Error;

use console::style;
use reqwest::Url;
use std::path::Path;

/// Prints the install status lines, unless hidden.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    enabled: bool,
}

impl Reporter {
    /// Creates a reporter that prints only when `enabled` is set.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Announces the request for `url`.
    pub fn downloading(&self, url: &Url) {
        if self.enabled {
            println!("Downloading {}", url);
        }
    }

    /// Reports that the archive was received.
    pub fn downloaded(&self, file_name: &str) {
        if self.enabled {
            println!("Downloaded {}", file_name);
        }
    }

    /// Reports where the distribution was installed.
    pub fn installed(&self, display_name: &str, dir: &Path) {
        if self.enabled {
            println!(
                "{}",
                style(format!("Installed {} to {}", display_name, dir.display())).green()
            );
        }
    }

    /// Reports a failed install.
    pub fn failed(&self, error: &Error) {
        if self.enabled {
            println!("{}", style(error).red());
            println!("Download failed!");
        }
    }
}
