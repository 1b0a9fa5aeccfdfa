//! Current league standings
//!
//! Ranks teams by season total, descending. The sort is stable, so teams
//! with equal totals keep the order they were fetched in.

use crate::TeamRecord;
use serde::Serialize;

/// One row of the standings table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingsRow {
    /// 1-based league position
    pub rank: usize,
    pub team_name: String,
    pub manager: String,
    pub current_gw_points: u32,
    pub total_points: u32,
}

/// The standings table plus the best current-gameweek score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Standings {
    pub rows: Vec<StandingsRow>,
    /// Highest current-gameweek score in the league; None when there are
    /// no teams. Every row matching it counts as a gameweek leader.
    pub top_gw_points: Option<u32>,
}

impl Standings {
    /// True when the row scored the league's best in the current gameweek.
    /// Ties mean several leaders, and all of them are flagged.
    pub fn is_gw_leader(&self, row: &StandingsRow) -> bool {
        self.top_gw_points == Some(row.current_gw_points)
    }
}

/// Build the standings from the fetched team summaries
pub fn build_standings(teams: &[TeamRecord]) -> Standings {
    let mut ordered: Vec<&TeamRecord> = teams.iter().collect();
    ordered.sort_by(|a, b| b.total_points.cmp(&a.total_points));

    let rows = ordered
        .iter()
        .enumerate()
        .map(|(i, team)| StandingsRow {
            rank: i + 1,
            team_name: team.team_name.clone(),
            manager: team.manager.clone(),
            current_gw_points: team.current_gw_points,
            total_points: team.total_points,
        })
        .collect();

    let top_gw_points = teams.iter().map(|t| t.current_gw_points).max();

    Standings {
        rows,
        top_gw_points,
    }
}
