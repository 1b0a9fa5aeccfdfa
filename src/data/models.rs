//! Typed views of the FPL API payloads
//!
//! Serde models for the two endpoints the dashboard reads, plus validation
//! into the crate's domain records. Every field the dashboard needs is
//! optional at the wire level so a missing field becomes a named error
//! rather than a serde failure.

use crate::{EntryId, FplError, GameweekEntry, Result, TeamRecord};
use serde::Deserialize;

/// Raw payload of `entry/{id}/` (only the fields the dashboard reads)
#[derive(Debug, Clone, Deserialize)]
pub struct EntrySummary {
    pub name: Option<String>,
    pub player_first_name: Option<String>,
    pub player_last_name: Option<String>,
    pub summary_overall_points: Option<u32>,
}

/// Raw payload of `entry/{id}/history/`
#[derive(Debug, Clone, Deserialize)]
pub struct EntryHistory {
    pub current: Option<Vec<GameweekRow>>,
}

/// One gameweek row within the history payload
#[derive(Debug, Clone, Deserialize)]
pub struct GameweekRow {
    pub event: Option<u32>,
    pub points: Option<u32>,
    pub total_points: Option<u32>,
}

/// Validate the raw payloads for one entry into domain records.
///
/// Returns the team's summary record plus one `GameweekEntry` per completed
/// gameweek. An empty history is valid (the season has not started); the
/// current-gameweek score defaults to 0 in that case.
pub fn build_team(
    entry: EntryId,
    summary: EntrySummary,
    history: EntryHistory,
) -> Result<(TeamRecord, Vec<GameweekEntry>)> {
    let missing = |context: &'static str, field: &'static str| FplError::MissingField {
        entry,
        context,
        field,
    };

    let team_name = summary.name.ok_or_else(|| missing("team summary", "name"))?;
    let first = summary
        .player_first_name
        .ok_or_else(|| missing("team summary", "player_first_name"))?;
    let last = summary
        .player_last_name
        .ok_or_else(|| missing("team summary", "player_last_name"))?;
    let total_points = summary
        .summary_overall_points
        .ok_or_else(|| missing("team summary", "summary_overall_points"))?;
    let manager = format!("{} {}", first, last);

    let rows = history
        .current
        .ok_or_else(|| missing("history", "current"))?;
    if rows.is_empty() {
        log::warn!(
            "Entry {} has no gameweek history yet; current gameweek score defaults to 0",
            entry
        );
    }

    let mut entries = Vec::with_capacity(rows.len());
    for row in rows {
        let gameweek = row.event.ok_or_else(|| missing("history row", "event"))?;
        let points = row.points.ok_or_else(|| missing("history row", "points"))?;
        let cumulative = row
            .total_points
            .ok_or_else(|| missing("history row", "total_points"))?;
        entries.push(GameweekEntry {
            team_name: team_name.clone(),
            manager: manager.clone(),
            gameweek,
            points,
            total_points: cumulative,
        });
    }

    // The most recent gameweek is the last row of the history
    let current_gw_points = entries.last().map(|e| e.points).unwrap_or(0);

    let record = TeamRecord {
        entry,
        team_name,
        manager,
        total_points,
        current_gw_points,
    };

    Ok((record, entries))
}
