//! Front end configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::cli::Cli;

/// Settings for the terminal front end.
///
/// Every field has a default, so an empty or missing file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Ask before abandoning a round with `r`.
    #[serde(default = "default_confirm_new_round")]
    confirm_new_round: bool,

    /// Delay between the end of a round and the result banner.
    #[serde(default = "default_announce_delay_ms")]
    announce_delay_ms: u64,

    /// Where logs are written (the terminal itself is taken by the UI).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_confirm_new_round() -> bool {
    true
}

fn default_announce_delay_ms() -> u64 {
    280
}

fn default_log_file() -> PathBuf {
    PathBuf::from("neon_tictactoe.log")
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            confirm_new_round: default_confirm_new_round(),
            announce_delay_ms: default_announce_delay_ms(),
            log_file: default_log_file(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        debug!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of file values.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if cli.no_confirm {
            self.confirm_new_round = false;
        }
        if let Some(delay) = cli.announce_delay_ms {
            self.announce_delay_ms = delay;
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
        self
    }

    /// Banner delay as a [`Duration`].
    pub fn announce_delay(&self) -> Duration {
        Duration::from_millis(self.announce_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "announce_delay_ms = 50").expect("write");

        let config = TuiConfig::from_file(file.path()).expect("valid config");
        assert_eq!(*config.announce_delay_ms(), 50);
        assert!(*config.confirm_new_round());
        assert_eq!(config.log_file(), &PathBuf::from("neon_tictactoe.log"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = TuiConfig::load_or_default(dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(config, TuiConfig::default());
        assert_eq!(config.announce_delay(), Duration::from_millis(280));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "confirm_new_round = \"sometimes\"").expect("write");

        let err = TuiConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let cli = Cli::parse_from([
            "neon_tictactoe",
            "--no-confirm",
            "--announce-delay-ms",
            "0",
            "--log-file",
            "/tmp/ttt.log",
        ]);
        let config = TuiConfig::default().with_cli(&cli);
        assert!(!*config.confirm_new_round());
        assert_eq!(config.announce_delay(), Duration::ZERO);
        assert_eq!(config.log_file(), &PathBuf::from("/tmp/ttt.log"));
    }
}
