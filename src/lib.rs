//! Fantasy Premier League mini-league dashboard
//!
//! Fetches team summaries and gameweek histories from the public FPL API and
//! derives a league dashboard: current standings, a points-by-gameweek matrix,
//! league positions over time and weekly manager awards.

pub mod data;
pub mod league;
pub mod report;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Unique identifier for an FPL entry (one fantasy team)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One team's season summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub entry: EntryId,
    pub team_name: String,
    pub manager: String,
    /// Cumulative points across the whole season
    pub total_points: u32,
    /// Points scored in the most recent gameweek; 0 before the first
    /// gameweek completes
    pub current_gw_points: u32,
}

/// One team's result for one gameweek
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameweekEntry {
    pub team_name: String,
    pub manager: String,
    pub gameweek: u32,
    /// Points scored in this gameweek alone
    pub points: u32,
    /// Cumulative points up to and including this gameweek
    pub total_points: u32,
}

/// Application-wide errors
#[derive(Debug, Error)]
pub enum FplError {
    #[error("API request failed for entry {entry}: {message}")]
    Fetch { entry: EntryId, message: String },

    #[error("Missing field `{field}` in {context} for entry {entry}")]
    MissingField {
        entry: EntryId,
        context: &'static str,
        field: &'static str,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FplError>;

/// Application configuration loaded from config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub league: LeagueConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueConfig {
    /// Display name shown in the dashboard header
    pub name: String,
    /// Entry ids of the teams in the league
    pub team_ids: Vec<EntryId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            league: LeagueConfig {
                name: "Fantasy Premier League".to_string(),
                team_ids: Vec::new(),
            },
            api: ApiConfig {
                base_url: "https://fantasy.premierleague.com/api".to_string(),
                user_agent: "fpl-dashboard/0.1".to_string(),
                timeout_secs: 30,
            },
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FplError::Config(format!("Failed to read config file {}: {}", path, e))
        })?;
        toml::from_str(&content)
            .map_err(|e| FplError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FplError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
