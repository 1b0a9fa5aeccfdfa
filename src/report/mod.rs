//! Dashboard rendering
//!
//! Turns the derived league structures into terminal tables, a positions
//! chart and CSV payloads. A `*` marks highlighted cells: the current
//! gameweek's leaders in the standings and each gameweek's top scorers in
//! the history matrix. Ties are all flagged.

use crate::league::{
    HistoryMatrix, LeagueData, PeakScore, PositionEntry, Standings, WeeklyManager,
};
use chrono::Local;
use serde::Serialize;
use std::collections::HashMap;

/// Shown when there are no teams to report on
pub const EMPTY_MESSAGE: &str =
    "No league data to display. Add entry ids under [league] in config.toml or pass --teams.";

/// Everything one dashboard run derives, ready to render or serialize
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub league: String,
    pub standings: Standings,
    pub history: HistoryMatrix,
    pub positions: Vec<PositionEntry>,
    pub weekly_managers: Vec<WeeklyManager>,
    pub peak_score: Option<PeakScore>,
}

impl DashboardReport {
    /// Run every derivation over the fetched dataset
    pub fn from_data(league: &str, data: &LeagueData) -> Self {
        DashboardReport {
            league: league.to_string(),
            standings: data.standings(),
            history: data.history(),
            positions: data.positions(),
            weekly_managers: data.weekly_managers(),
            peak_score: data.peak_score(),
        }
    }

    /// Render the full dashboard as terminal text
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", self.league));
        out.push_str(&format!("{}\n", "─".repeat(self.league.len().max(24))));
        out.push_str(&format!(
            "Generated {}\n\n",
            Local::now().format("%Y-%m-%d %H:%M")
        ));

        if self.standings.rows.is_empty() {
            out.push_str(EMPTY_MESSAGE);
            out.push('\n');
            return out;
        }

        out.push_str(&standings_table(&self.standings));
        out.push('\n');
        out.push_str(&history_table(&self.history));
        out.push('\n');
        out.push_str(&positions_chart(&self.positions));
        out.push('\n');
        out.push_str(&weekly_managers_table(&self.weekly_managers));
        out.push('\n');
        out.push_str(&peak_section(self.peak_score.as_ref()));
        out
    }
}

/// Render the standings table. Rows flagged `*` scored the league's best
/// in the current gameweek.
pub fn standings_table(standings: &Standings) -> String {
    let mut out = String::new();
    out.push_str("Current League Standings\n");

    if standings.rows.is_empty() {
        out.push_str("  No teams fetched.\n");
        return out;
    }

    let team_w = column_width("Team", standings.rows.iter().map(|r| r.team_name.len()));
    let manager_w = column_width("Manager", standings.rows.iter().map(|r| r.manager.len()));
    let width = 27 + team_w + manager_w;

    out.push_str(&format!("{}\n", "─".repeat(width)));
    out.push_str(&format!(
        "  {:>4}  {:<team_w$}  {:<manager_w$}  {:>6}  {:>7}\n",
        "Rank", "Team", "Manager", "GW Pts", "Total"
    ));

    for row in &standings.rows {
        let marker = if standings.is_gw_leader(row) { " *" } else { "" };
        out.push_str(&format!(
            "  {:>4}  {:<team_w$}  {:<manager_w$}  {:>6}  {:>7}{}\n",
            row.rank, row.team_name, row.manager, row.current_gw_points, row.total_points, marker
        ));
    }

    out
}

/// Render the points-by-gameweek matrix. Each gameweek's top score is
/// flagged `*`.
pub fn history_table(matrix: &HistoryMatrix) -> String {
    let mut out = String::new();
    out.push_str("Gameweek Points History\n");

    if matrix.rows.is_empty() {
        out.push_str("  No gameweek data yet.\n");
        return out;
    }

    let team_w = column_width("Team", matrix.rows.iter().map(|r| r.team_name.len()));
    let width = 2 + team_w + 6 * matrix.gameweeks.len();

    out.push_str(&format!("{}\n", "─".repeat(width)));
    out.push_str(&format!("  {:<team_w$}", "Team"));
    for gw in &matrix.gameweeks {
        out.push_str(&format!("{:>6}", format!("GW{}", gw)));
    }
    out.push('\n');

    for row in &matrix.rows {
        out.push_str(&format!("  {:<team_w$}", row.team_name));
        for col in 0..matrix.gameweeks.len() {
            let marker = if matrix.is_column_leader(row, col) { "*" } else { " " };
            out.push_str(&format!("{:>5}{}", row.points[col], marker));
        }
        out.push('\n');
    }

    out
}

/// Render league positions as a character grid: one column per gameweek,
/// one row per position with first place on top, one letter per team.
pub fn positions_chart(positions: &[PositionEntry]) -> String {
    let mut out = String::new();
    out.push_str("League Positions Over Time\n");

    if positions.is_empty() {
        out.push_str("  No gameweek data yet.\n");
        return out;
    }

    let mut gameweeks: Vec<u32> = positions.iter().map(|p| p.gameweek).collect();
    gameweeks.sort_unstable();
    gameweeks.dedup();

    let mut teams: Vec<&str> = positions.iter().map(|p| p.team_name.as_str()).collect();
    teams.sort_unstable();
    teams.dedup();

    let max_position = positions.iter().map(|p| p.position).max().unwrap_or(0);

    let mut cells: HashMap<(u32, usize), usize> = HashMap::new();
    for p in positions {
        if let Some(team_idx) = teams.iter().position(|&t| t == p.team_name) {
            cells.insert((p.gameweek, p.position), team_idx);
        }
    }

    let width = 6 + 5 * gameweeks.len();
    out.push_str(&format!("{}\n", "─".repeat(width)));

    out.push_str(" Pos │");
    for gw in &gameweeks {
        out.push_str(&format!("{:>5}", format!("GW{}", gw)));
    }
    out.push('\n');

    for pos in 1..=max_position {
        out.push_str(&format!("{:>4} │", pos));
        for gw in &gameweeks {
            match cells.get(&(*gw, pos)) {
                Some(&team_idx) => out.push_str(&format!("{:>5}", team_symbol(team_idx))),
                None => out.push_str("     "),
            }
        }
        out.push('\n');
    }

    out.push('\n');
    for (i, team) in teams.iter().enumerate() {
        out.push_str(&format!("  {} = {}\n", team_symbol(i), team));
    }

    out
}

/// Render the manager-of-the-week table, one row per gameweek
pub fn weekly_managers_table(winners: &[WeeklyManager]) -> String {
    let mut out = String::new();
    out.push_str("Manager of the Week\n");

    if winners.is_empty() {
        out.push_str("  No gameweek data yet.\n");
        return out;
    }

    let team_w = column_width("Team", winners.iter().map(|w| w.team_name.len()));
    let manager_w = column_width("Manager", winners.iter().map(|w| w.manager.len()));
    let width = 18 + team_w + manager_w;

    out.push_str(&format!("{}\n", "─".repeat(width)));
    out.push_str(&format!(
        "  {:>4}  {:<team_w$}  {:<manager_w$}  {:>6}\n",
        "GW", "Team", "Manager", "Points"
    ));

    for winner in winners {
        out.push_str(&format!(
            "  {:>4}  {:<team_w$}  {:<manager_w$}  {:>6}\n",
            winner.gameweek, winner.team_name, winner.manager, winner.points
        ));
    }

    out
}

/// The one-line summary of the season's highest gameweek score
pub fn peak_score_line(peak: &PeakScore) -> String {
    format!(
        "Game Week {}: {} ({}) scored {} points",
        peak.gameweek, peak.manager, peak.team_name, peak.points
    )
}

/// Render the peak score section
pub fn peak_section(peak: Option<&PeakScore>) -> String {
    let mut out = String::new();
    out.push_str("Highest Single Gameweek Score\n");
    out.push_str(&format!("{}\n", "─".repeat(29)));
    match peak {
        Some(p) => out.push_str(&format!("{}\n", peak_score_line(p))),
        None => out.push_str("  No gameweek data yet.\n"),
    }
    out
}

pub fn standings_csv(standings: &Standings) -> String {
    let mut out = String::from("rank,team,manager,gw_points,total_points\n");
    for row in &standings.rows {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            row.rank,
            csv_field(&row.team_name),
            csv_field(&row.manager),
            row.current_gw_points,
            row.total_points
        ));
    }
    out
}

pub fn history_csv(matrix: &HistoryMatrix) -> String {
    let mut out = String::from("team");
    for gw in &matrix.gameweeks {
        out.push_str(&format!(",gw{}", gw));
    }
    out.push('\n');

    for row in &matrix.rows {
        out.push_str(&csv_field(&row.team_name));
        for points in &row.points {
            out.push_str(&format!(",{}", points));
        }
        out.push('\n');
    }
    out
}

pub fn positions_csv(positions: &[PositionEntry]) -> String {
    let mut out = String::from("gameweek,team,position\n");
    for p in positions {
        out.push_str(&format!(
            "{},{},{}\n",
            p.gameweek,
            csv_field(&p.team_name),
            p.position
        ));
    }
    out
}

pub fn weekly_managers_csv(winners: &[WeeklyManager]) -> String {
    let mut out = String::from("gameweek,team,manager,points\n");
    for w in winners {
        out.push_str(&format!(
            "{},{},{},{}\n",
            w.gameweek,
            csv_field(&w.team_name),
            csv_field(&w.manager),
            w.points
        ));
    }
    out
}

/// Width of a left-aligned text column: the widest value, at least as wide
/// as the header
fn column_width(header: &str, lengths: impl Iterator<Item = usize>) -> usize {
    lengths.max().unwrap_or(0).max(header.len())
}

/// Letter used for a team in the positions chart, by legend order
fn team_symbol(index: usize) -> char {
    const SYMBOLS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
    SYMBOLS.get(index).copied().map(char::from).unwrap_or('?')
}

/// Quote a CSV field when it contains a delimiter
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::{build_standings, history_matrix, track_positions, weekly_managers};
    use crate::{EntryId, GameweekEntry, TeamRecord};

    fn make_team(id: u64, name: &str, total: u32, current_gw: u32) -> TeamRecord {
        TeamRecord {
            entry: EntryId(id),
            team_name: name.to_string(),
            manager: format!("Manager {}", id),
            total_points: total,
            current_gw_points: current_gw,
        }
    }

    fn make_entry(team: &str, gameweek: u32, points: u32, total: u32) -> GameweekEntry {
        GameweekEntry {
            team_name: team.to_string(),
            manager: format!("{} Manager", team),
            gameweek,
            points,
            total_points: total,
        }
    }

    fn sample_data() -> LeagueData {
        LeagueData::new(
            vec![
                make_team(1, "Alpha", 110, 60),
                make_team(2, "Beta", 110, 40),
            ],
            vec![
                make_entry("Alpha", 1, 50, 50),
                make_entry("Beta", 1, 70, 70),
                make_entry("Alpha", 2, 60, 110),
                make_entry("Beta", 2, 40, 110),
            ],
        )
    }

    #[test]
    fn test_standings_table_marks_leader() {
        let standings = build_standings(&[
            make_team(1, "Alpha", 110, 60),
            make_team(2, "Beta", 110, 40),
        ]);

        let table = standings_table(&standings);

        let alpha_line = table.lines().find(|l| l.contains("Alpha")).unwrap();
        let beta_line = table.lines().find(|l| l.contains("Beta")).unwrap();
        assert!(alpha_line.ends_with('*'));
        assert!(!beta_line.ends_with('*'));
    }

    #[test]
    fn test_standings_table_empty() {
        let table = standings_table(&Standings::default());
        assert!(table.contains("No teams fetched"));
    }

    #[test]
    fn test_history_table_marks_top_scorers() {
        let matrix = history_matrix(&[
            make_entry("Alpha", 1, 50, 50),
            make_entry("Beta", 1, 70, 70),
        ]);

        let table = history_table(&matrix);

        assert!(table.contains("GW1"));
        let beta_line = table.lines().find(|l| l.contains("Beta")).unwrap();
        let alpha_line = table.lines().find(|l| l.contains("Alpha")).unwrap();
        assert!(beta_line.contains("70*"));
        assert!(!alpha_line.contains('*'));
    }

    #[test]
    fn test_positions_chart_layout() {
        let positions = track_positions(&[
            make_entry("Alpha", 1, 50, 50),
            make_entry("Beta", 1, 70, 70),
        ]);

        let chart = positions_chart(&positions);
        let lines: Vec<&str> = chart.lines().collect();

        // Header row, then position 1 (Beta) above position 2 (Alpha)
        assert!(lines.iter().any(|l| l.contains("GW1")));
        let pos1 = lines.iter().find(|l| l.starts_with("   1 │")).unwrap();
        let pos2 = lines.iter().find(|l| l.starts_with("   2 │")).unwrap();
        assert!(pos1.contains('B'));
        assert!(pos2.contains('A'));
        // Legend maps letters to teams in sorted order
        assert!(chart.contains("A = Alpha"));
        assert!(chart.contains("B = Beta"));
    }

    #[test]
    fn test_peak_score_line_wording() {
        let peak = PeakScore {
            gameweek: 1,
            team_name: "Beta".to_string(),
            manager: "John Smith".to_string(),
            points: 70,
        };

        assert_eq!(
            peak_score_line(&peak),
            "Game Week 1: John Smith (Beta) scored 70 points"
        );
    }

    #[test]
    fn test_weekly_managers_table() {
        let winners = weekly_managers(&[
            make_entry("Alpha", 1, 50, 50),
            make_entry("Beta", 1, 70, 70),
        ]);

        let table = weekly_managers_table(&winners);
        assert!(table.contains("Manager of the Week"));
        assert!(table.contains("Beta"));
        assert!(!table.contains("Alpha Manager"));
    }

    #[test]
    fn test_dashboard_render_sections() {
        let report = DashboardReport::from_data("Office League", &sample_data());
        let text = report.render();

        assert!(text.starts_with("Office League\n"));
        assert!(text.contains("Current League Standings"));
        assert!(text.contains("Gameweek Points History"));
        assert!(text.contains("League Positions Over Time"));
        assert!(text.contains("Manager of the Week"));
        assert!(text.contains("Highest Single Gameweek Score"));
        assert!(text.contains("Game Week 1: Beta Manager (Beta) scored 70 points"));
    }

    #[test]
    fn test_dashboard_render_empty() {
        let report = DashboardReport::from_data("Office League", &LeagueData::default());
        let text = report.render();

        assert!(text.contains(EMPTY_MESSAGE));
        assert!(!text.contains("Current League Standings"));
    }

    #[test]
    fn test_csv_quoting() {
        let standings = build_standings(&[make_team(1, "Salt, Pepper", 100, 40)]);
        let csv = standings_csv(&standings);

        assert!(csv.starts_with("rank,team,manager,gw_points,total_points\n"));
        assert!(csv.contains("\"Salt, Pepper\""));
    }

    #[test]
    fn test_history_csv_columns() {
        let matrix = history_matrix(&[
            make_entry("Alpha", 1, 50, 50),
            make_entry("Alpha", 3, 60, 110),
        ]);

        let csv = history_csv(&matrix);
        assert!(csv.starts_with("team,gw1,gw3\n"));
        assert!(csv.contains("Alpha,50,60"));
    }

    #[test]
    fn test_positions_csv() {
        let csv = positions_csv(&track_positions(&[
            make_entry("Alpha", 1, 50, 50),
            make_entry("Beta", 1, 70, 70),
        ]));

        assert_eq!(csv, "gameweek,team,position\n1,Beta,1\n1,Alpha,2\n");
    }
}
