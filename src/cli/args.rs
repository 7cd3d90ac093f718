//! Command line argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(name = "racedeck")]
#[command(about = "🏁 Dashboard for managing dedicated racing game servers")]
pub struct Cli {
    /// Path to the config file (defaults to <config dir>/racedeck/config.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Dashboard backend URL, overrides the config file
    #[arg(long, global = true, help = "Backend URL (default: http://localhost:5000)")]
    pub server_url: Option<String>,

    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease logging verbosity (only errors)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone, Debug, PartialEq)]
pub enum Commands {
    /// Show the status of every configured server
    Status,
    /// Start a server
    Start {
        /// Server id as listed in the config
        server_id: String,
    },
    /// Stop a server
    Stop {
        /// Server id as listed in the config
        server_id: String,
    },
    /// Print a server's console log
    Console {
        /// Server id as listed in the config
        server_id: String,
        /// Keep streaming new lines from the push channel until Ctrl+C
        #[arg(short, long)]
        follow: bool,
    },
    /// List the players connected to a server
    Players {
        /// Server id as listed in the config
        server_id: String,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["racedeck"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_console_follow_with_global_flags() {
        let cli = Cli::try_parse_from([
            "racedeck",
            "console",
            "fruits-line",
            "--follow",
            "--server-url",
            "http://10.0.0.5:5000",
            "-vv",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Console {
                server_id: "fruits-line".to_string(),
                follow: true,
            })
        );
        assert_eq!(cli.server_url.as_deref(), Some("http://10.0.0.5:5000"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_start_requires_server_id() {
        assert!(Cli::try_parse_from(["racedeck", "start"]).is_err());
    }
}
