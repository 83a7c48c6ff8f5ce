use crate::analysis::transfers::WEAK_FORM_THRESHOLD;
use crate::domain::report::{AnalyzedPick, Insight, TransferSuggestion};
use crate::domain::squad::format_price;

const EASY_RUN_DIFFICULTY: f64 = 2.5;
const HARD_RUN_DIFFICULTY: f64 = 4.0;
const EASY_RUN_COUNT: usize = 5;
const HARD_RUN_COUNT: usize = 5;
const POOR_FORM_COUNT: usize = 3;
const NOTABLE_VALUE_TENTHS: u32 = 1010;

/// A fixed battery of independent threshold checks. Order matters only for
/// the final pair: transfers-found and no-transfers are mutually exclusive
/// and always close the list.
pub fn build_insights(
    squad: &[AnalyzedPick],
    transfers: &[TransferSuggestion],
    squad_value_tenths: u32,
) -> Vec<Insight> {
    let mut out = Vec::new();

    let easy = squad
        .iter()
        .filter(|p| p.avg_difficulty <= EASY_RUN_DIFFICULTY)
        .count();
    if easy >= EASY_RUN_COUNT {
        out.push(Insight {
            title: "Favourable fixtures".to_string(),
            message: format!("{easy} of your players have an easy upcoming run — a good week to hold"),
        });
    }

    let hard = squad
        .iter()
        .filter(|p| p.avg_difficulty >= HARD_RUN_DIFFICULTY)
        .count();
    if hard >= HARD_RUN_COUNT {
        out.push(Insight {
            title: "Tough run ahead".to_string(),
            message: format!("{hard} of your players face a difficult fixture run"),
        });
    }

    let poor = squad
        .iter()
        .filter(|p| p.form < WEAK_FORM_THRESHOLD)
        .count();
    if poor >= POOR_FORM_COUNT {
        out.push(Insight {
            title: "Form worries".to_string(),
            message: format!("{poor} of your players are in poor form"),
        });
    }

    if squad_value_tenths >= NOTABLE_VALUE_TENTHS {
        out.push(Insight {
            title: "Squad value".to_string(),
            message: format!("Your squad is now worth {}", format_price(squad_value_tenths)),
        });
    }

    if transfers.is_empty() {
        out.push(Insight {
            title: "No transfers needed".to_string(),
            message: "Your squad looks settled — no clear upgrades this week".to_string(),
        });
    } else {
        out.push(Insight {
            title: "Transfer targets".to_string(),
            message: format!("{} upgrade(s) identified — see the suggestions", transfers.len()),
        });
    }

    out
}
