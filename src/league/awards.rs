//! Weekly manager awards and the season's peak score
//!
//! Points are summed per (gameweek, team) before picking winners, so
//! duplicate entries accumulate rather than shadow each other. Both awards
//! break ties in favour of the first team encountered: within a gameweek
//! that is input order, across the season the earlier gameweek wins.

use crate::GameweekEntry;
use serde::Serialize;

/// The manager of one gameweek
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyManager {
    pub gameweek: u32,
    pub team_name: String,
    pub manager: String,
    pub points: u32,
}

/// The single highest gameweek score of the whole season
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeakScore {
    pub gameweek: u32,
    pub team_name: String,
    pub manager: String,
    pub points: u32,
}

/// One team's summed points within one gameweek
#[derive(Debug, Clone)]
struct WeekPoints {
    team_name: String,
    manager: String,
    points: u32,
}

/// Sum points per (gameweek, team). Gameweeks come out ascending; teams
/// within a gameweek keep first-encounter order.
fn week_points(entries: &[GameweekEntry]) -> Vec<(u32, Vec<WeekPoints>)> {
    let mut gameweeks: Vec<u32> = entries.iter().map(|e| e.gameweek).collect();
    gameweeks.sort_unstable();
    gameweeks.dedup();

    gameweeks
        .into_iter()
        .map(|gw| {
            let mut teams: Vec<WeekPoints> = Vec::new();
            for entry in entries.iter().filter(|e| e.gameweek == gw) {
                match teams.iter_mut().find(|t| t.team_name == entry.team_name) {
                    Some(team) => team.points += entry.points,
                    None => teams.push(WeekPoints {
                        team_name: entry.team_name.clone(),
                        manager: entry.manager.clone(),
                        points: entry.points,
                    }),
                }
            }
            (gw, teams)
        })
        .collect()
}

/// Pick the manager of each gameweek: the team with the most points that
/// week. Returns one winner per gameweek, ascending.
pub fn weekly_managers(entries: &[GameweekEntry]) -> Vec<WeeklyManager> {
    week_points(entries)
        .into_iter()
        .filter_map(|(gw, teams)| {
            best_of_week(&teams).map(|best| WeeklyManager {
                gameweek: gw,
                team_name: best.team_name.clone(),
                manager: best.manager.clone(),
                points: best.points,
            })
        })
        .collect()
}

/// Find the single highest gameweek score across the season. None when
/// there are no entries at all.
pub fn peak_score(entries: &[GameweekEntry]) -> Option<PeakScore> {
    let mut peak: Option<PeakScore> = None;

    for (gw, teams) in week_points(entries) {
        for team in teams {
            // Strictly greater, so the first score of any tie stands
            let beats = peak.as_ref().map_or(true, |p| team.points > p.points);
            if beats {
                peak = Some(PeakScore {
                    gameweek: gw,
                    team_name: team.team_name,
                    manager: team.manager,
                    points: team.points,
                });
            }
        }
    }

    peak
}

fn best_of_week(teams: &[WeekPoints]) -> Option<&WeekPoints> {
    let mut best: Option<&WeekPoints> = None;
    for team in teams {
        // Strictly greater keeps the first of any tie
        if best.map_or(true, |b| team.points > b.points) {
            best = Some(team);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry(team: &str, manager: &str, gameweek: u32, points: u32) -> GameweekEntry {
        GameweekEntry {
            team_name: team.to_string(),
            manager: manager.to_string(),
            gameweek,
            points,
            total_points: 0,
        }
    }

    #[test]
    fn test_weekly_managers() {
        let entries = vec![
            make_entry("Alpha", "Jane Doe", 1, 50),
            make_entry("Beta", "John Smith", 1, 70),
            make_entry("Alpha", "Jane Doe", 2, 60),
            make_entry("Beta", "John Smith", 2, 40),
        ];

        let winners = weekly_managers(&entries);

        assert_eq!(winners.len(), 2);
        assert_eq!(winners[0].gameweek, 1);
        assert_eq!(winners[0].team_name, "Beta");
        assert_eq!(winners[0].manager, "John Smith");
        assert_eq!(winners[0].points, 70);
        assert_eq!(winners[1].gameweek, 2);
        assert_eq!(winners[1].team_name, "Alpha");
        assert_eq!(winners[1].points, 60);
    }

    #[test]
    fn test_weekly_tie_first_encountered_wins() {
        let entries = vec![
            make_entry("Alpha", "Jane Doe", 1, 60),
            make_entry("Beta", "John Smith", 1, 60),
        ];

        let winners = weekly_managers(&entries);

        assert_eq!(winners.len(), 1);
        assert_eq!(winners[0].team_name, "Alpha");
    }

    #[test]
    fn test_duplicate_entries_accumulate() {
        let entries = vec![
            make_entry("Alpha", "Jane Doe", 1, 30),
            make_entry("Beta", "John Smith", 1, 50),
            make_entry("Alpha", "Jane Doe", 1, 30),
        ];

        let winners = weekly_managers(&entries);

        // Alpha's duplicate rows sum to 60 and beat Beta's 50
        assert_eq!(winners[0].team_name, "Alpha");
        assert_eq!(winners[0].points, 60);
    }

    #[test]
    fn test_peak_score() {
        let entries = vec![
            make_entry("Alpha", "Jane Doe", 1, 50),
            make_entry("Beta", "John Smith", 1, 70),
            make_entry("Alpha", "Jane Doe", 2, 60),
            make_entry("Beta", "John Smith", 2, 40),
        ];

        let peak = peak_score(&entries).unwrap();

        assert_eq!(peak.gameweek, 1);
        assert_eq!(peak.team_name, "Beta");
        assert_eq!(peak.manager, "John Smith");
        assert_eq!(peak.points, 70);
    }

    #[test]
    fn test_peak_tie_earliest_gameweek_wins() {
        let entries = vec![
            make_entry("Alpha", "Jane Doe", 1, 70),
            make_entry("Beta", "John Smith", 2, 70),
        ];

        let peak = peak_score(&entries).unwrap();

        assert_eq!(peak.gameweek, 1);
        assert_eq!(peak.team_name, "Alpha");
    }

    #[test]
    fn test_peak_tie_within_gameweek() {
        let entries = vec![
            make_entry("Beta", "John Smith", 1, 70),
            make_entry("Alpha", "Jane Doe", 1, 70),
        ];

        let peak = peak_score(&entries).unwrap();

        // Same gameweek, same score: first in input order stands
        assert_eq!(peak.team_name, "Beta");
    }

    #[test]
    fn test_empty() {
        assert!(weekly_managers(&[]).is_empty());
        assert!(peak_score(&[]).is_none());
    }
}
