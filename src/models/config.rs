use std::path::PathBuf;

use crate::services::ingest::DEFAULT_MAX_DECODED_PIXELS;

/// State file used by the CLI when `STATE_FILE` is not set.
pub const DEFAULT_CLI_STATE_FILE: &str = ".image-to-code.yaml";

/// Runtime configuration read from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Listen address for `serve` (`BIND_ADDR`)
    pub bind_addr: String,

    /// Preferences file (`STATE_FILE`); `None` keeps preferences in memory
    pub state_file: Option<PathBuf>,

    /// Largest accepted upload body in bytes (`MAX_UPLOAD_BYTES`)
    pub max_upload_bytes: usize,

    /// Largest accepted image in pixels (`MAX_DECODED_PIXELS`)
    pub max_decoded_pixels: u64,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_max_upload_bytes() -> usize {
    32 * 1024 * 1024 // 32 MiB
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Unparseable numbers are logged and replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let bind_addr = lookup("BIND_ADDR").unwrap_or(defaults.bind_addr);
        let state_file = lookup("STATE_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let max_upload_bytes = parse_or(&lookup, "MAX_UPLOAD_BYTES", defaults.max_upload_bytes);
        let max_decoded_pixels =
            parse_or(&lookup, "MAX_DECODED_PIXELS", defaults.max_decoded_pixels);

        Self {
            bind_addr,
            state_file,
            max_upload_bytes,
            max_decoded_pixels,
        }
    }

    /// Preferences file for the CLI, which always persists.
    pub fn cli_state_file(&self) -> PathBuf {
        self.state_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CLI_STATE_FILE))
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T
where
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, value = %raw, %e, "Invalid config value, using default");
                default
            }
        },
        None => default,
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            state_file: None,
            max_upload_bytes: default_max_upload_bytes(),
            max_decoded_pixels: DEFAULT_MAX_DECODED_PIXELS,
        }
    }
}
