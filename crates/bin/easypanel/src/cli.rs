//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "easypanel", version, about = "Watch and control services on an EasyGo panel")]
pub struct Cli {
    /// Configuration file (defaults to `./easypanel.toml` when present).
    #[arg(short, long, env = "EASYPANEL_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Keep the board up to date and accept commands on standard input.
    Watch,
    /// Fetch service statuses and system stats once and print them.
    Status,
    /// Start a service.
    Start { name: String },
    /// Stop a service (asks for confirmation).
    Stop {
        name: String,
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
    /// Restart a service.
    Restart { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_stop_with_yes_flag() {
        let cli = Cli::try_parse_from(["easypanel", "stop", "nginx", "--yes"]).unwrap();
        assert!(matches!(cli.command, Command::Stop { ref name, yes: true } if name == "nginx"));
    }

    #[test]
    fn should_parse_config_path() {
        let cli = Cli::try_parse_from(["easypanel", "--config", "/etc/easypanel.toml", "watch"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/etc/easypanel.toml")));
        assert!(matches!(cli.command, Command::Watch));
    }

    #[test]
    fn should_default_to_confirming_stop() {
        let cli = Cli::try_parse_from(["easypanel", "stop", "nginx"]).unwrap();
        assert!(matches!(cli.command, Command::Stop { yes: false, .. }));
    }

    #[test]
    fn should_require_service_name() {
        assert!(Cli::try_parse_from(["easypanel", "restart"]).is_err());
    }

    #[test]
    fn should_have_consistent_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
