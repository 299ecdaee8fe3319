//! Command-line interface definitions.

pub mod check;
pub mod output;
pub mod preview;
pub mod run;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::domain::Platform;

/// Stakewire - staking alerts for Telegram and Discord.
#[derive(Parser, Debug)]
#[command(name = "stakewire")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start both bots (foreground)
    Run(RunArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),

    /// Print the sample alert without sending it
    Preview(PreviewArgs),
}

/// Subcommands for `stakewire check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file and environment
    Config(ConfigPathArg),
    /// Test Telegram and Discord credentials against the live APIs
    Connection(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file (optional; defaults apply when absent)
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to configuration file (optional; defaults apply when absent)
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}

/// Platform selector for `preview`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlatformArg {
    Telegram,
    Discord,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Telegram => Self::Telegram,
            PlatformArg::Discord => Self::Discord,
        }
    }
}

/// Arguments for the `preview` subcommand.
#[derive(Parser, Debug)]
pub struct PreviewArgs {
    /// Only render for this platform (default: both)
    #[arg(short, long, value_enum)]
    pub platform: Option<PlatformArg>,

    /// Path to configuration file (optional; defaults apply when absent)
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_flags() {
        let cli = Cli::parse_from(["stakewire", "run", "--log-level", "debug", "--json-logs"]);
        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.json_logs);
        assert_eq!(args.config, PathBuf::from("config.toml"));
    }

    #[test]
    fn test_parse_preview_platform() {
        let cli = Cli::parse_from(["stakewire", "preview", "--platform", "discord"]);
        let Commands::Preview(args) = cli.command else {
            panic!("expected preview");
        };
        assert_eq!(args.platform.map(Platform::from), Some(Platform::Discord));
    }

    #[test]
    fn test_rejects_unknown_platform() {
        assert!(Cli::try_parse_from(["stakewire", "preview", "--platform", "slack"]).is_err());
    }

    #[test]
    fn test_parse_check_config() {
        let cli = Cli::parse_from(["stakewire", "check", "config", "-c", "other.toml"]);
        assert!(matches!(
            cli.command,
            Commands::Check(CheckCommand::Config(ConfigPathArg { ref config })) if config == &PathBuf::from("other.toml")
        ));
    }
}
