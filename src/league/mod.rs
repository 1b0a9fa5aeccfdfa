//! League table computations
//!
//! Pure transformations over the fetched dataset: standings, the
//! points-by-gameweek matrix, positional rankings over time, the manager of
//! each gameweek and the single highest gameweek score. Each stage reads the
//! same immutable dataset and returns a new derived structure.

pub mod awards;
pub mod history;
pub mod positions;
pub mod standings;

pub use awards::{peak_score, weekly_managers, PeakScore, WeeklyManager};
pub use history::{history_matrix, HistoryMatrix, HistoryRow};
pub use positions::{track_positions, PositionEntry};
pub use standings::{build_standings, Standings, StandingsRow};

use crate::{GameweekEntry, TeamRecord};

/// The full dataset for one dashboard run: every configured team's summary
/// plus every completed gameweek entry
#[derive(Debug, Clone, Default)]
pub struct LeagueData {
    pub teams: Vec<TeamRecord>,
    pub entries: Vec<GameweekEntry>,
}

impl LeagueData {
    pub fn new(teams: Vec<TeamRecord>, entries: Vec<GameweekEntry>) -> Self {
        LeagueData { teams, entries }
    }

    /// True when no teams were fetched at all; every derivation then
    /// produces an empty output
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn standings(&self) -> Standings {
        build_standings(&self.teams)
    }

    pub fn history(&self) -> HistoryMatrix {
        history_matrix(&self.entries)
    }

    pub fn positions(&self) -> Vec<PositionEntry> {
        track_positions(&self.entries)
    }

    pub fn weekly_managers(&self) -> Vec<WeeklyManager> {
        weekly_managers(&self.entries)
    }

    pub fn peak_score(&self) -> Option<PeakScore> {
        peak_score(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EntryId;

    fn make_entry(team: &str, manager: &str, gameweek: u32, points: u32, total: u32) -> GameweekEntry {
        GameweekEntry {
            team_name: team.to_string(),
            manager: manager.to_string(),
            gameweek,
            points,
            total_points: total,
        }
    }

    /// Two teams, two gameweeks, a lead that never changes hands
    fn make_league() -> LeagueData {
        LeagueData::new(
            vec![
                TeamRecord {
                    entry: EntryId(1),
                    team_name: "Team A".to_string(),
                    manager: "Alice Archer".to_string(),
                    total_points: 110,
                    current_gw_points: 60,
                },
                TeamRecord {
                    entry: EntryId(2),
                    team_name: "Team B".to_string(),
                    manager: "Bob Briggs".to_string(),
                    total_points: 150,
                    current_gw_points: 40,
                },
            ],
            vec![
                make_entry("Team A", "Alice Archer", 1, 50, 50),
                make_entry("Team B", "Bob Briggs", 1, 70, 70),
                make_entry("Team A", "Alice Archer", 2, 60, 110),
                make_entry("Team B", "Bob Briggs", 2, 40, 150),
            ],
        )
    }

    #[test]
    fn test_two_team_season() {
        let data = make_league();

        let standings = data.standings();
        assert_eq!(standings.rows[0].team_name, "Team B");
        assert_eq!(standings.rows[0].total_points, 150);
        assert_eq!(standings.rows[1].team_name, "Team A");

        let matrix = data.history();
        assert_eq!(matrix.get("Team B", 1), 70);
        assert_eq!(matrix.get("Team A", 2), 60);

        let positions = data.positions();
        let top_each_week: Vec<&str> = positions
            .iter()
            .filter(|p| p.position == 1)
            .map(|p| p.team_name.as_str())
            .collect();
        assert_eq!(top_each_week, vec!["Team B", "Team B"]);

        let winners = data.weekly_managers();
        assert_eq!(winners[0].team_name, "Team B");
        assert_eq!(winners[0].points, 70);
        assert_eq!(winners[1].team_name, "Team A");
        assert_eq!(winners[1].points, 60);

        let peak = data.peak_score().unwrap();
        assert_eq!(peak.gameweek, 1);
        assert_eq!(peak.team_name, "Team B");
        assert_eq!(peak.points, 70);
    }

    #[test]
    fn test_derivations_are_idempotent() {
        let data = make_league();

        assert_eq!(data.standings(), data.standings());
        assert_eq!(data.history(), data.history());
        assert_eq!(data.positions(), data.positions());
        assert_eq!(data.weekly_managers(), data.weekly_managers());
        assert_eq!(data.peak_score(), data.peak_score());
    }

    #[test]
    fn test_empty_league() {
        let data = LeagueData::default();

        assert!(data.is_empty());
        assert!(data.standings().rows.is_empty());
        assert!(data.history().rows.is_empty());
        assert!(data.positions().is_empty());
        assert!(data.weekly_managers().is_empty());
        assert!(data.peak_score().is_none());
    }
}
