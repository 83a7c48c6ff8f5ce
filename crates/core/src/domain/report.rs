use serde::Serialize;

use crate::domain::squad::Position;

/// Everything the analysis pipeline produces for one manager. This is the
/// response body of the analyze endpoint; fields marked `serde(skip)` are
/// intermediate numerics the downstream engines consume.
#[derive(Debug, Clone, Serialize)]
pub struct SquadReport {
    pub manager: ManagerSummary,
    pub squad: Vec<AnalyzedPick>,
    pub transfers: Vec<TransferSuggestion>,
    pub captaincy: Vec<CaptaincyPick>,
    pub insights: Vec<Insight>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ManagerSummary {
    pub name: String,
    pub team_name: String,
    pub team_value: String,
    pub bank: String,
    pub overall_rank: Option<u64>,
    pub gameweek_rank: Option<u64>,
    pub total_points: i64,
    pub gameweek: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzedPick {
    pub player_id: u32,
    pub name: String,
    pub team: String,
    pub position: String,
    pub price: String,
    pub form: f64,
    pub fixtures: String,
    pub rating: String,
    pub rating_class: String,
    pub is_captain: bool,
    pub is_vice_captain: bool,

    // Raw inputs for the transfer/captaincy/insight engines.
    #[serde(skip)]
    pub team_id: u32,
    #[serde(skip)]
    pub position_kind: Position,
    #[serde(skip)]
    pub price_tenths: u32,
    #[serde(skip)]
    pub ownership: f64,
    #[serde(skip)]
    pub avg_difficulty: f64,
    #[serde(skip)]
    pub next_difficulty: f64,
    #[serde(skip)]
    pub next_is_home: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransferSuggestion {
    pub out_name: String,
    pub in_name: String,
    pub cost_change: String,
    pub projected_points: f64,
    pub reasoning: String,

    #[serde(skip)]
    pub out_id: u32,
    #[serde(skip)]
    pub in_id: u32,
    #[serde(skip)]
    pub cost_change_tenths: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaptaincyPick {
    pub name: String,
    /// 0..=95, derived from the captaincy score.
    pub confidence: u32,
    pub reasoning: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Insight {
    pub title: String,
    pub message: String,
}
