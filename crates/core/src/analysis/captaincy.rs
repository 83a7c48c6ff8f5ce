use crate::analysis::scoring;
use crate::domain::report::{AnalyzedPick, CaptaincyPick};

const MAX_PICKS: usize = 3;

/// Rank the whole squad by captaincy score over the immediate next fixture
/// and keep the top three. The leading pick gets the fuller reasoning,
/// including how widely the player is owned.
pub fn rank_captains(squad: &[AnalyzedPick]) -> Vec<CaptaincyPick> {
    let mut scored: Vec<(f64, &AnalyzedPick)> = squad
        .iter()
        .map(|p| {
            (
                scoring::captaincy_score(p.form, p.next_difficulty, p.next_is_home),
                p,
            )
        })
        .collect();

    scored.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.1.player_id.cmp(&b.1.player_id))
    });
    scored.truncate(MAX_PICKS);

    scored
        .into_iter()
        .enumerate()
        .map(|(rank, (score, p))| {
            let venue = if p.next_is_home { "home" } else { "away" };
            let reasoning = if rank == 0 {
                format!(
                    "Best option: form {:.1}, {venue} fixture rated {:.0}/5, owned by {:.1}% of managers",
                    p.form, p.next_difficulty, p.ownership
                )
            } else {
                format!(
                    "Alternative: form {:.1} with a {venue} fixture rated {:.0}/5",
                    p.form, p.next_difficulty
                )
            };

            CaptaincyPick {
                name: p.name.clone(),
                confidence: scoring::captaincy_confidence(score),
                reasoning,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::squad::Position;

    fn analyzed(id: u32, name: &str, form: f64, next_difficulty: f64, next_is_home: bool) -> AnalyzedPick {
        AnalyzedPick {
            player_id: id,
            name: name.to_string(),
            team: "ARS".to_string(),
            position: "MID".to_string(),
            price: "£8.0m".to_string(),
            form,
            fixtures: String::new(),
            rating: String::new(),
            rating_class: String::new(),
            is_captain: false,
            is_vice_captain: false,
            team_id: 1,
            position_kind: Position::Midfielder,
            price_tenths: 80,
            ownership: 42.5,
            avg_difficulty: 3.0,
            next_difficulty,
            next_is_home,
        }
    }

    #[test]
    fn returns_top_three_in_strictly_descending_order() {
        let squad = vec![
            analyzed(1, "A", 3.0, 3.0, false), // 30 + 15 = 45
            analyzed(2, "B", 7.0, 2.0, true),  // 70 + 20 + 5 = 95
            analyzed(3, "C", 5.0, 3.0, true),  // 50 + 15 + 5 = 70
            analyzed(4, "D", 1.0, 5.0, false), // 10 + 5 = 15
        ];

        let picks = rank_captains(&squad);
        assert_eq!(picks.len(), 3);
        let names: Vec<&str> = picks.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
        assert!(picks[0].confidence >= picks[1].confidence);
        assert!(picks[1].confidence >= picks[2].confidence);
    }

    #[test]
    fn small_squad_yields_min_of_three_and_size() {
        let squad = vec![
            analyzed(1, "A", 3.0, 3.0, false),
            analyzed(2, "B", 4.0, 3.0, false),
        ];
        assert_eq!(rank_captains(&squad).len(), 2);
        assert!(rank_captains(&[]).is_empty());
    }

    #[test]
    fn confidence_is_capped_at_95() {
        // Score 95 -> 114 before the cap.
        let squad = vec![analyzed(1, "A", 7.0, 2.0, true)];
        assert_eq!(rank_captains(&squad)[0].confidence, 95);
    }

    #[test]
    fn only_top_pick_mentions_ownership() {
        let squad = vec![
            analyzed(1, "A", 7.0, 2.0, true),
            analyzed(2, "B", 5.0, 3.0, true),
        ];

        let picks = rank_captains(&squad);
        assert!(picks[0].reasoning.contains("42.5%"));
        assert!(!picks[1].reasoning.contains('%'));
    }

    #[test]
    fn home_bonus_breaks_otherwise_equal_scores() {
        let squad = vec![
            analyzed(1, "Away", 5.0, 2.0, false), // 50 + 20 = 70
            analyzed(2, "Home", 5.0, 2.0, true),  // 50 + 20 + 5 = 75
        ];

        let picks = rank_captains(&squad);
        assert_eq!(picks[0].name, "Home");
    }
}
