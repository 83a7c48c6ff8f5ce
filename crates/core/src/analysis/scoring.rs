//! The numeric policy behind every recommendation, kept as named pure
//! functions so coefficients can be tuned without touching pipeline shape.

/// Composite pick rating: recent form weighted against the average
/// difficulty of the upcoming run. Higher is better; difficulty 5 zeroes
/// the fixture term.
pub fn pick_rating(form: f64, avg_difficulty: f64) -> f64 {
    2.0 * form + 2.0 * (5.0 - avg_difficulty)
}

pub fn rating_label(score: f64) -> &'static str {
    if score >= 14.0 {
        "Excellent"
    } else if score >= 10.0 {
        "Good"
    } else if score >= 6.0 {
        "Average"
    } else {
        "Poor"
    }
}

pub fn rating_class(score: f64) -> &'static str {
    if score >= 14.0 {
        "excellent"
    } else if score >= 10.0 {
        "good"
    } else if score >= 6.0 {
        "average"
    } else {
        "poor"
    }
}

/// Ranking score for a replacement candidate, over the candidate's own
/// upcoming window.
pub fn candidate_score(form: f64, avg_difficulty: f64) -> f64 {
    2.0 * form - avg_difficulty
}

/// Naive per-transfer projection: the form gap carried over five gameweeks.
pub fn projected_points_delta(incoming_form: f64, outgoing_form: f64) -> f64 {
    (incoming_form - outgoing_form) * 5.0
}

/// Captaincy score over the immediate next fixture only.
pub fn captaincy_score(form: f64, next_difficulty: f64, is_home: bool) -> f64 {
    let home_bonus = if is_home { 5.0 } else { 0.0 };
    10.0 * form + 5.0 * (6.0 - next_difficulty) + home_bonus
}

/// Confidence percentage shown next to a captaincy pick, capped at 95 —
/// never certain.
pub fn captaincy_confidence(score: f64) -> u32 {
    (score * 1.2).round().clamp(0.0, 95.0) as u32
}
