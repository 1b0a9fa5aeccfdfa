//! Points-by-gameweek history matrix
//!
//! Pivots the flat gameweek entries into a grid with one row per team and
//! one column per gameweek. Teams missing a gameweek get 0 for that cell.

use crate::GameweekEntry;
use serde::Serialize;
use std::collections::HashMap;

/// One team's row of the matrix, aligned with `HistoryMatrix::gameweeks`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRow {
    pub team_name: String,
    pub points: Vec<u32>,
}

/// The pivoted points grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct HistoryMatrix {
    /// Column labels: every gameweek observed anywhere in the dataset,
    /// ascending
    pub gameweeks: Vec<u32>,
    /// One row per team, sorted by team name
    pub rows: Vec<HistoryRow>,
    /// Per-column maximum, aligned with `gameweeks`
    pub column_max: Vec<u32>,
}

impl HistoryMatrix {
    /// Points for a (team, gameweek) cell; 0 when the pair never appeared
    pub fn get(&self, team_name: &str, gameweek: u32) -> u32 {
        let row = match self.rows.iter().find(|r| r.team_name == team_name) {
            Some(row) => row,
            None => return 0,
        };
        self.gameweeks
            .iter()
            .position(|&gw| gw == gameweek)
            .and_then(|col| row.points.get(col).copied())
            .unwrap_or(0)
    }

    /// True when the cell holds its column's maximum. Ties mean a gameweek
    /// has several top scorers, and all of them are flagged.
    pub fn is_column_leader(&self, row: &HistoryRow, col: usize) -> bool {
        match (row.points.get(col), self.column_max.get(col)) {
            (Some(points), Some(max)) => points == max,
            _ => false,
        }
    }
}

/// Pivot the flat entries into the points grid.
///
/// When the same (team, gameweek) pair appears more than once, the last
/// entry wins.
pub fn history_matrix(entries: &[GameweekEntry]) -> HistoryMatrix {
    let mut gameweeks: Vec<u32> = entries.iter().map(|e| e.gameweek).collect();
    gameweeks.sort_unstable();
    gameweeks.dedup();

    let mut team_names: Vec<&str> = entries.iter().map(|e| e.team_name.as_str()).collect();
    team_names.sort_unstable();
    team_names.dedup();

    let mut cells: HashMap<(&str, u32), u32> = HashMap::new();
    for entry in entries {
        cells.insert((entry.team_name.as_str(), entry.gameweek), entry.points);
    }

    let rows: Vec<HistoryRow> = team_names
        .iter()
        .map(|&team| HistoryRow {
            team_name: team.to_string(),
            points: gameweeks
                .iter()
                .map(|&gw| cells.get(&(team, gw)).copied().unwrap_or(0))
                .collect(),
        })
        .collect();

    let column_max = (0..gameweeks.len())
        .map(|col| rows.iter().map(|r| r.points[col]).max().unwrap_or(0))
        .collect();

    HistoryMatrix {
        gameweeks,
        rows,
        column_max,
    }
}
