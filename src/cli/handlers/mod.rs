mod commits;
mod init;
mod issues;
mod report;
mod utils;

pub use commits::{CommitsParams, handle_commits};
pub use init::handle_init;
pub use issues::{IssuesParams, handle_issues};
pub use report::{ReportParams, handle_report};

use crate::config::{ProviderMode, StandupConfig};
use crate::error::StandupError;
use crate::model::Member;
use crate::provider::{CommitProvider, GithubProvider, IssueProvider, JiraProvider, MockRoster};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: StandupConfig,
    pub root: PathBuf,
}

impl CommandContext {
    /// Resolve config from the current directory, then apply CLI overrides.
    ///
    /// An explicit `--team-file` makes an uninitialized directory usable with
    /// default settings; without it, a missing config is an error.
    pub fn resolve(
        mode: Option<ProviderMode>,
        team_file: Option<String>,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (mut config, root) = match StandupConfig::load(&cwd) {
            Ok(loaded) => loaded,
            Err(StandupError::NotInitialized) if team_file.is_some() => {
                (StandupConfig::default(), cwd)
            }
            Err(e) => return Err(e).context("Failed to load configuration"),
        };

        if let Some(mode) = mode {
            config.providers.mode = mode;
        }
        if let Some(team_file) = team_file {
            config.providers.team_file = team_file;
        }

        Ok(Self { config, root })
    }

    /// Build the signal sources for the configured provider mode.
    ///
    /// Live credentials are validated here, before any classification runs.
    pub fn sources(&self) -> Result<SignalSources> {
        let team_file = self.config.team_file_path(&self.root);
        let roster = MockRoster::load(&team_file)
            .with_context(|| format!("Failed to load roster {}", team_file.display()))?;

        match self.config.providers.mode {
            ProviderMode::Mock => Ok(SignalSources::Mock(roster)),
            ProviderMode::Live => {
                let timeout = self.config.live.timeout();
                let jira = JiraProvider::from_env(timeout)?;
                let github = GithubProvider::from_env(timeout)?;
                Ok(SignalSources::Live {
                    roster,
                    jira,
                    github,
                })
            }
        }
    }
}

/// The wired-up providers for one run.
///
/// The roster supplies the member list in both modes; live mode swaps the
/// two signal providers for the real APIs.
pub enum SignalSources {
    Mock(MockRoster),
    Live {
        roster: MockRoster,
        jira: JiraProvider,
        github: GithubProvider,
    },
}

impl SignalSources {
    pub fn members(&self) -> Vec<Member> {
        match self {
            SignalSources::Mock(roster) => roster.members(),
            SignalSources::Live { roster, .. } => roster.members(),
        }
    }

    pub fn issue_provider(&self) -> &dyn IssueProvider {
        match self {
            SignalSources::Mock(roster) => roster,
            SignalSources::Live { jira, .. } => jira,
        }
    }

    pub fn commit_provider(&self) -> &dyn CommitProvider {
        match self {
            SignalSources::Mock(roster) => roster,
            SignalSources::Live { github, .. } => github,
        }
    }
}
