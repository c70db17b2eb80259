use crate::error::{Result, StandupError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = ".standup.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StandupConfig {
    #[serde(default)]
    pub providers: ProviderSettings,

    #[serde(default)]
    pub live: LiveSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Where the two signals come from: the roster file or the live APIs.
    #[serde(default)]
    pub mode: ProviderMode,

    /// Roster file path, relative to the project root. The roster supplies
    /// the member list in both modes; in live mode only name/email/note are
    /// read from it.
    #[serde(default = "default_team_file")]
    pub team_file: String,
}

fn default_team_file() -> String {
    "team.json".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveSettings {
    /// Per-request timeout for live providers; on timeout the member
    /// degrades to "no data" instead of failing the run.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            mode: ProviderMode::default(),
            team_file: default_team_file(),
        }
    }
}

impl Default for LiveSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderMode {
    #[default]
    Mock,
    Live,
}

impl fmt::Display for ProviderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderMode::Mock => write!(f, "mock"),
            ProviderMode::Live => write!(f, "live"),
        }
    }
}

impl LiveSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl StandupConfig {
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        let content = std::fs::read_to_string(&config_path)?;
        let config: StandupConfig = toml::from_str(&content).map_err(StandupError::Toml)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| StandupError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(StandupError::NotInitialized);
            }
        }
    }

    pub fn team_file_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.providers.team_file)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| StandupError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
