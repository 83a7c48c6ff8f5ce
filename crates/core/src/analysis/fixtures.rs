use crate::ingest::types::{Fixture, Team};
use serde::Serialize;
use std::collections::HashMap;

/// Gameweeks of fixtures projected per team. Squad scoring reads the first
/// [`SCORING_WINDOW`]; captaincy reads only the first entry.
pub const FETCH_HORIZON: u32 = 8;
pub const SCORING_WINDOW: usize = 5;

/// Difficulty assumed when a team has no qualifying fixtures (mid-season
/// blanks, end of calendar). Keeps averages defined without special-casing.
pub const NEUTRAL_DIFFICULTY: f64 = 3.0;

/// Placeholder short code for a team id missing from the catalog.
pub const UNKNOWN_TEAM: &str = "UNK";

#[derive(Debug, Clone, Serialize)]
pub struct ProjectedFixture {
    pub gameweek: u32,
    pub opponent: String,
    /// Opponent code for display, `@`-prefixed when the fixture is away.
    pub label: String,
    pub difficulty: u8,
    pub is_home: bool,
}

pub fn team_lookup(teams: &[Team]) -> HashMap<u32, &Team> {
    teams.iter().map(|t| (t.id, t)).collect()
}

fn short_name(teams: &HashMap<u32, &Team>, id: u32) -> String {
    teams
        .get(&id)
        .map(|t| t.short_name.clone())
        .unwrap_or_else(|| UNKNOWN_TEAM.to_string())
}

/// For every known team, the scheduled fixtures with gameweek in
/// `[current_gw, current_gw + FETCH_HORIZON]`, ascending by gameweek, seen
/// from that team's own perspective. Teams without qualifying fixtures map
/// to an empty window.
pub fn project_fixtures(
    fixtures: &[Fixture],
    current_gw: u32,
    teams: &HashMap<u32, &Team>,
) -> HashMap<u32, Vec<ProjectedFixture>> {
    let mut out: HashMap<u32, Vec<ProjectedFixture>> = HashMap::new();
    for id in teams.keys() {
        out.entry(*id).or_default();
    }

    let horizon = current_gw + FETCH_HORIZON;
    for f in fixtures {
        let Some(gw) = f.event else { continue };
        if gw < current_gw || gw > horizon {
            continue;
        }

        out.entry(f.team_h).or_default().push(ProjectedFixture {
            gameweek: gw,
            opponent: short_name(teams, f.team_a),
            label: short_name(teams, f.team_a),
            difficulty: f.team_h_difficulty,
            is_home: true,
        });

        out.entry(f.team_a).or_default().push(ProjectedFixture {
            gameweek: gw,
            opponent: short_name(teams, f.team_h),
            label: format!("@{}", short_name(teams, f.team_h)),
            difficulty: f.team_a_difficulty,
            is_home: false,
        });
    }

    for window in out.values_mut() {
        window.sort_by_key(|f| f.gameweek);
    }

    out
}

/// Mean difficulty over a window; the neutral default when the window is
/// empty, never a divide-by-zero artifact.
pub fn average_difficulty(window: &[ProjectedFixture]) -> f64 {
    if window.is_empty() {
        return NEUTRAL_DIFFICULTY;
    }
    window.iter().map(|f| f.difficulty as f64).sum::<f64>() / window.len() as f64
}
