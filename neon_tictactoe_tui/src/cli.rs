//! Command-line interface for neon_tictactoe.

use std::path::PathBuf;

use clap::Parser;

/// Neon Tic-Tac-Toe - two players sharing one terminal
#[derive(Parser, Debug)]
#[command(name = "neon_tictactoe")]
#[command(about = "Two-player tic-tac-toe with undo and match scores", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, default_value = "neon_tictactoe.toml")]
    pub config: PathBuf,

    /// Start new rounds without asking first
    #[arg(long)]
    pub no_confirm: bool,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Delay before the result banner appears, in milliseconds
    #[arg(long)]
    pub announce_delay_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["neon_tictactoe"]);
        assert_eq!(cli.config, PathBuf::from("neon_tictactoe.toml"));
        assert!(!cli.no_confirm);
        assert!(cli.log_file.is_none());
        assert!(cli.announce_delay_ms.is_none());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "neon_tictactoe",
            "--config",
            "other.toml",
            "--no-confirm",
            "--announce-delay-ms",
            "0",
        ]);
        assert_eq!(cli.config, PathBuf::from("other.toml"));
        assert!(cli.no_confirm);
        assert_eq!(cli.announce_delay_ms, Some(0));
    }
}
