use crate::analysis::fixtures::{
    average_difficulty, ProjectedFixture, NEUTRAL_DIFFICULTY, SCORING_WINDOW, UNKNOWN_TEAM,
};
use crate::analysis::scoring;
use crate::domain::report::AnalyzedPick;
use crate::domain::squad::{format_price, Position};
use crate::ingest::types::{Element, Pick, Team};
use anyhow::{Context, Result};
use std::collections::HashMap;

pub fn player_lookup(elements: &[Element]) -> HashMap<u32, &Element> {
    elements.iter().map(|e| (e.id, e)).collect()
}

/// Join the manager's picks against the player catalog and per-team fixture
/// windows. A pick referencing a player id the catalog does not know is a
/// malformed snapshot, not a displayable row.
pub fn analyze_squad(
    picks: &[Pick],
    players: &HashMap<u32, &Element>,
    windows: &HashMap<u32, Vec<ProjectedFixture>>,
    teams: &HashMap<u32, &Team>,
) -> Result<Vec<AnalyzedPick>> {
    let mut out = Vec::with_capacity(picks.len());

    for pick in picks {
        let player = players
            .get(&pick.element)
            .copied()
            .with_context(|| format!("pick references unknown player id {}", pick.element))?;

        let window = windows
            .get(&player.team)
            .map(|w| w.as_slice())
            .unwrap_or(&[]);
        let scoring_window = &window[..window.len().min(SCORING_WINDOW)];

        let form = player.form_value();
        let avg_difficulty = average_difficulty(scoring_window);
        let score = scoring::pick_rating(form, avg_difficulty);

        let (next_difficulty, next_is_home) = window
            .first()
            .map(|f| (f.difficulty as f64, f.is_home))
            .unwrap_or((NEUTRAL_DIFFICULTY, false));

        let fixtures_label = scoring_window
            .iter()
            .map(|f| f.label.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let team_code = teams
            .get(&player.team)
            .map(|t| t.short_name.clone())
            .unwrap_or_else(|| UNKNOWN_TEAM.to_string());

        let position_kind = Position::from_code(player.element_type)?;

        out.push(AnalyzedPick {
            player_id: player.id,
            name: player.web_name.clone(),
            team: team_code,
            position: position_kind.short_label().to_string(),
            price: format_price(player.now_cost),
            form,
            fixtures: fixtures_label,
            rating: scoring::rating_label(score).to_string(),
            rating_class: scoring::rating_class(score).to_string(),
            is_captain: pick.is_captain,
            is_vice_captain: pick.is_vice_captain,
            team_id: player.team,
            position_kind,
            price_tenths: player.now_cost,
            ownership: player.ownership_percent(),
            avg_difficulty,
            next_difficulty,
            next_is_home,
        });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(id: u32, team: u32, element_type: u8, form: &str, now_cost: u32) -> Element {
        Element {
            id,
            web_name: format!("Player{id}"),
            team,
            element_type,
            now_cost,
            form: form.to_string(),
            selected_by_percent: "10.0".to_string(),
            total_points: 50,
            status: "a".to_string(),
        }
    }

    fn team(id: u32, short: &str) -> Team {
        Team {
            id,
            name: short.to_string(),
            short_name: short.to_string(),
        }
    }

    fn pick(element: u32) -> Pick {
        Pick {
            element,
            position: 1,
            multiplier: 1,
            is_captain: false,
            is_vice_captain: false,
        }
    }

    fn projected(gameweek: u32, label: &str, difficulty: u8, is_home: bool) -> ProjectedFixture {
        ProjectedFixture {
            gameweek,
            opponent: label.trim_start_matches('@').to_string(),
            label: label.to_string(),
            difficulty,
            is_home,
        }
    }

    #[test]
    fn scores_pick_over_first_five_fixtures_only() {
        let elements = vec![element(1, 1, 3, "4.0", 75)];
        let players = player_lookup(&elements);
        let teams_vec = vec![team(1, "ARS")];
        let teams = team_lookup_of(&teams_vec);

        // Six fixtures; the sixth (difficulty 5) must not affect the average.
        let mut windows = HashMap::new();
        windows.insert(
            1,
            vec![
                projected(5, "BOU", 2, true),
                projected(6, "@MCI", 4, false),
                projected(7, "BRE", 3, true),
                projected(8, "@LIV", 4, false),
                projected(9, "FUL", 2, true),
                projected(10, "@CHE", 5, false),
            ],
        );

        let squad = analyze_squad(&[pick(1)], &players, &windows, &teams).unwrap();
        assert_eq!(squad.len(), 1);
        let p = &squad[0];
        assert_eq!(p.avg_difficulty, 3.0);
        // 2*4 + 2*(5-3) = 12 -> Good.
        assert_eq!(p.rating, "Good");
        assert_eq!(p.rating_class, "good");
        assert_eq!(p.fixtures, "BOU, @MCI, BRE, @LIV, FUL");
        assert_eq!(p.next_difficulty, 2.0);
        assert!(p.next_is_home);
        assert_eq!(p.price, "£7.5m");
        assert_eq!(p.position, "MID");
    }

    #[test]
    fn empty_window_uses_neutral_difficulty() {
        let elements = vec![element(1, 1, 4, "5.0", 90)];
        let players = player_lookup(&elements);
        let teams_vec = vec![team(1, "ARS")];
        let teams = team_lookup_of(&teams_vec);
        let windows = HashMap::from([(1, Vec::new())]);

        let squad = analyze_squad(&[pick(1)], &players, &windows, &teams).unwrap();
        let p = &squad[0];
        assert_eq!(p.avg_difficulty, NEUTRAL_DIFFICULTY);
        assert_eq!(p.next_difficulty, NEUTRAL_DIFFICULTY);
        assert!(!p.next_is_home);
        assert!(p.fixtures.is_empty());
        // 2*5 + 2*(5-3) = 14 -> Excellent, boundary inclusive.
        assert_eq!(p.rating, "Excellent");
    }

    #[test]
    fn unknown_pick_id_is_an_error() {
        let elements = vec![element(1, 1, 1, "3.0", 45)];
        let players = player_lookup(&elements);
        let teams_vec = vec![team(1, "ARS")];
        let teams = team_lookup_of(&teams_vec);
        let windows = HashMap::new();

        let res = analyze_squad(&[pick(999)], &players, &windows, &teams);
        assert!(res.is_err());
    }

    fn team_lookup_of(teams: &[Team]) -> HashMap<u32, &Team> {
        crate::analysis::fixtures::team_lookup(teams)
    }
}
