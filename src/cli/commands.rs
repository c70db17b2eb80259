use crate::config::ProviderMode;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "standup")]
#[command(
    author,
    version,
    about = "A CLI team-status analyst: who is stuck, who is free, who is quietly shipping"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (DEBUG) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write structured logs to this file in addition to stderr
    #[arg(long, global = true)]
    pub log_file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a standup project (config + sample roster)
    Init {
        /// Roster file to reference from the config
        #[arg(long, default_value = "team.json")]
        team_file: String,
    },

    /// Classify the team and print the ranked report
    #[command(visible_alias = "r")]
    Report {
        /// Reference instant (ISO-8601, e.g. 2026-01-12T12:15:00Z); defaults to now
        #[arg(long)]
        at: Option<String>,

        /// Provider mode (overrides config)
        #[arg(short, long, value_enum)]
        mode: Option<ProviderModeArg>,

        /// Roster file (overrides config)
        #[arg(long)]
        team_file: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Probe the raw tracker issues for one member
    Issues {
        /// Member email (the identity key)
        email: String,

        /// Provider mode (overrides config)
        #[arg(short, long, value_enum)]
        mode: Option<ProviderModeArg>,

        /// Roster file (overrides config)
        #[arg(long)]
        team_file: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Probe the raw commit timestamps for one member
    Commits {
        /// Member email (the identity key)
        email: String,

        /// Provider mode (overrides config)
        #[arg(short, long, value_enum)]
        mode: Option<ProviderModeArg>,

        /// Roster file (overrides config)
        #[arg(long)]
        team_file: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProviderModeArg {
    Mock,
    Live,
}

impl From<ProviderModeArg> for ProviderMode {
    fn from(arg: ProviderModeArg) -> Self {
        match arg {
            ProviderModeArg::Mock => ProviderMode::Mock,
            ProviderModeArg::Live => ProviderMode::Live,
        }
    }
}
