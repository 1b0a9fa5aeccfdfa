//! League positions over time
//!
//! Each gameweek is ranked independently: teams are ordered by the
//! cumulative total they had recorded at that gameweek, and positions run
//! from 1 (best) down. A team absent from a gameweek simply has no position
//! there; later gameweeks are unaffected.

use crate::GameweekEntry;
use serde::Serialize;

/// A team's league position after one gameweek
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionEntry {
    pub gameweek: u32,
    pub team_name: String,
    /// 1-based position within this gameweek
    pub position: usize,
}

/// Rank every team within every gameweek by cumulative total points.
///
/// Output is ordered by gameweek ascending, then position. Ties keep the
/// order entries appear in the input, so re-ranking the same dataset always
/// gives the same result.
pub fn track_positions(entries: &[GameweekEntry]) -> Vec<PositionEntry> {
    let mut gameweeks: Vec<u32> = entries.iter().map(|e| e.gameweek).collect();
    gameweeks.sort_unstable();
    gameweeks.dedup();

    let mut positions = Vec::new();
    for gw in gameweeks {
        let mut week: Vec<&GameweekEntry> =
            entries.iter().filter(|e| e.gameweek == gw).collect();
        week.sort_by(|a, b| b.total_points.cmp(&a.total_points));

        positions.extend(week.iter().enumerate().map(|(i, entry)| PositionEntry {
            gameweek: gw,
            team_name: entry.team_name.clone(),
            position: i + 1,
        }));
    }

    positions
}
