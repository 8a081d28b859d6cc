// src/config.rs

use clap::ValueEnum;

/// Output rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Rust statics (byte table, then range tables for UTF-8).
    #[default]
    Text,
    /// One JSON document with the same data.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub format: Format,
    /// Run the three range scans concurrently.
    pub parallel: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            format: Format::Text,
            parallel: true,
        }
    }
}

impl Options {
    /// Defaults adjusted by the environment: `CHARTAB_SEQUENTIAL=1` disables
    /// parallel range scans.
    pub fn from_env() -> Self {
        Self {
            parallel: !env_flag("CHARTAB_SEQUENTIAL"),
            ..Self::default()
        }
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.trim(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}
