//! Client for the public FPL API
//!
//! Two endpoints per team: the entry summary and the per-gameweek history.
//! Every run fetches fresh data; there is no caching, no retrying and no
//! authentication. Any failed request aborts the whole fetch so the
//! dashboard never renders from a partial league.

use crate::data::models::{self, EntryHistory, EntrySummary};
use crate::league::LeagueData;
use crate::{ApiConfig, EntryId, FplError, GameweekEntry, Result, TeamRecord};
use serde::de::DeserializeOwned;

/// Blocking HTTP client for the FPL API
pub struct FplClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl FplClient {
    pub fn new(config: &ApiConfig) -> Self {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        FplClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch one team's summary and full gameweek history
    pub fn fetch_team(&self, entry: EntryId) -> Result<(TeamRecord, Vec<GameweekEntry>)> {
        let summary: EntrySummary =
            self.get_json(entry, &format!("{}/entry/{}/", self.base_url, entry))?;
        let history: EntryHistory =
            self.get_json(entry, &format!("{}/entry/{}/history/", self.base_url, entry))?;

        models::build_team(entry, summary, history)
    }

    /// Fetch every configured team and assemble the league dataset
    pub fn fetch_league(&self, entries: &[EntryId]) -> Result<LeagueData> {
        let mut teams = Vec::with_capacity(entries.len());
        let mut all_entries = Vec::new();

        for (i, &entry) in entries.iter().enumerate() {
            log::info!("Fetching entry {} ({}/{})", entry, i + 1, entries.len());

            let (record, history) = self.fetch_team(entry)?;
            log::debug!(
                "  {} ({}): {} gameweeks, {} total points",
                record.team_name,
                record.manager,
                history.len(),
                record.total_points
            );

            teams.push(record);
            all_entries.extend(history);
        }

        Ok(LeagueData::new(teams, all_entries))
    }

    /// GET a URL and decode its JSON body
    fn get_json<T: DeserializeOwned>(&self, entry: EntryId, url: &str) -> Result<T> {
        log::debug!("Fetching {}", url);

        let response = self.client.get(url).send()?;

        if !response.status().is_success() {
            return Err(FplError::Fetch {
                entry,
                message: format!("HTTP {}: {}", response.status(), url),
            });
        }

        Ok(response.json()?)
    }
}
