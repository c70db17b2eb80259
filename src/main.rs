use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use standup::cli::handlers::{
    CommandContext, CommitsParams, IssuesParams, ReportParams, handle_commits, handle_init,
    handle_issues, handle_report,
};
use standup::cli::{Cli, Commands};
use standup::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_file.map(PathBuf::from));

    // reqwest is built without a default TLS provider; install ring once
    let _ = rustls::crypto::ring::default_provider().install_default();

    match cli.command {
        Commands::Init { team_file } => handle_init(team_file),
        Commands::Report {
            at,
            mode,
            team_file,
            json,
        } => {
            let ctx = CommandContext::resolve(mode.map(Into::into), team_file)?;
            handle_report(&ctx, ReportParams { at, json })
        }
        Commands::Issues {
            email,
            mode,
            team_file,
            json,
        } => {
            let ctx = CommandContext::resolve(mode.map(Into::into), team_file)?;
            handle_issues(&ctx, IssuesParams { email, json })
        }
        Commands::Commits {
            email,
            mode,
            team_file,
            json,
        } => {
            let ctx = CommandContext::resolve(mode.map(Into::into), team_file)?;
            handle_commits(&ctx, CommitsParams { email, json })
        }
    }
}
