use crate::analysis::fixtures::{average_difficulty, ProjectedFixture, SCORING_WINDOW};
use crate::analysis::scoring;
use crate::domain::report::{AnalyzedPick, TransferSuggestion};
use crate::domain::squad::{format_signed_price, Position};
use crate::ingest::types::Element;
use std::collections::{HashMap, HashSet};

/// A squad member is a transfer-out candidate when form drops below this or
/// the upcoming run is harder than [`WEAK_DIFFICULTY_THRESHOLD`].
pub const WEAK_FORM_THRESHOLD: f64 = 3.0;
pub const WEAK_DIFFICULTY_THRESHOLD: f64 = 3.5;

const MAX_WEAK_CONSIDERED: usize = 3;
const MAX_SUGGESTIONS: usize = 2;

/// Pair the weakest squad members with the best affordable same-position
/// replacements from the rest of the pool. At most two pairs; the same
/// incoming player is never proposed twice.
pub fn suggest_transfers(
    squad: &[AnalyzedPick],
    pool: &[Element],
    windows: &HashMap<u32, Vec<ProjectedFixture>>,
    bank_tenths: u32,
) -> Vec<TransferSuggestion> {
    let squad_ids: HashSet<u32> = squad.iter().map(|p| p.player_id).collect();

    let mut weak: Vec<&AnalyzedPick> = squad
        .iter()
        .filter(|p| p.form < WEAK_FORM_THRESHOLD || p.avg_difficulty > WEAK_DIFFICULTY_THRESHOLD)
        .collect();
    weak.sort_by(|a, b| {
        a.form
            .partial_cmp(&b.form)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    weak.truncate(MAX_WEAK_CONSIDERED);

    let mut out = Vec::new();
    let mut proposed: HashSet<u32> = HashSet::new();

    for outgoing in weak {
        let budget = outgoing.price_tenths + bank_tenths;

        let best = pool
            .iter()
            .filter(|c| !squad_ids.contains(&c.id) && !proposed.contains(&c.id))
            .filter(|c| {
                Position::from_code(c.element_type)
                    .map(|p| p == outgoing.position_kind)
                    .unwrap_or(false)
            })
            .filter(|c| c.now_cost <= budget)
            .filter(|c| c.status == "a")
            .filter(|c| c.form_value() > outgoing.form)
            .map(|c| {
                let window = windows.get(&c.team).map(|w| w.as_slice()).unwrap_or(&[]);
                let avg = average_difficulty(&window[..window.len().min(SCORING_WINDOW)]);
                (scoring::candidate_score(c.form_value(), avg), avg, c)
            })
            .max_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        let Some((_, incoming_avg, incoming)) = best else {
            continue;
        };

        proposed.insert(incoming.id);

        let incoming_form = incoming.form_value();
        let cost_change_tenths = incoming.now_cost as i64 - outgoing.price_tenths as i64;

        out.push(TransferSuggestion {
            out_name: outgoing.name.clone(),
            in_name: incoming.web_name.clone(),
            cost_change: format_signed_price(cost_change_tenths),
            projected_points: scoring::projected_points_delta(incoming_form, outgoing.form),
            reasoning: format!(
                "{} is struggling (form {:.1}, run difficulty {:.1}); {} offers form {:.1} with a {:.1}-difficulty run",
                outgoing.name, outgoing.form, outgoing.avg_difficulty,
                incoming.web_name, incoming_form, incoming_avg
            ),
            out_id: outgoing.player_id,
            in_id: incoming.id,
            cost_change_tenths,
        });
    }

    out.truncate(MAX_SUGGESTIONS);
    out
}
