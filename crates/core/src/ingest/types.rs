use chrono::{DateTime, Utc};
use serde::Deserialize;

/// The `bootstrap-static` catalog: gameweek calendar, team table and the
/// full player pool in one payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Bootstrap {
    pub events: Vec<Event>,
    pub teams: Vec<Team>,
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub id: u32,
    pub is_current: bool,
    pub is_next: bool,
    pub finished: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub short_name: String,
}

/// A player row. `now_cost` is fixed-point tenths; `form` and
/// `selected_by_percent` arrive as decimal strings.
#[derive(Debug, Clone, Deserialize)]
pub struct Element {
    pub id: u32,
    pub web_name: String,
    pub team: u32,
    pub element_type: u8,
    pub now_cost: u32,
    pub form: String,
    pub selected_by_percent: String,
    pub total_points: i64,
    /// Availability flag: "a" = available, otherwise injured/suspended/etc.
    pub status: String,
}

impl Element {
    pub fn form_value(&self) -> f64 {
        lenient_decimal(&self.form)
    }

    pub fn ownership_percent(&self) -> f64 {
        lenient_decimal(&self.selected_by_percent)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManagerProfile {
    pub player_first_name: String,
    pub player_last_name: String,
    pub name: String,
    pub summary_overall_points: Option<i64>,
    pub summary_overall_rank: Option<u64>,
    pub summary_event_rank: Option<u64>,
    pub current_event: Option<u32>,
    pub last_deadline_value: Option<u32>,
    pub last_deadline_bank: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PicksResponse {
    /// Absent on some historical gameweeks; callers fall back to the
    /// profile's last-deadline figures.
    pub entry_history: Option<EntryHistory>,
    pub picks: Vec<Pick>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntryHistory {
    pub value: u32,
    pub bank: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pick {
    pub element: u32,
    pub position: u8,
    pub multiplier: u8,
    pub is_captain: bool,
    pub is_vice_captain: bool,
}

/// One scheduled match. `event` is null for fixtures not yet assigned to a
/// gameweek; those never enter projection.
#[derive(Debug, Clone, Deserialize)]
pub struct Fixture {
    pub id: u32,
    pub event: Option<u32>,
    pub team_h: u32,
    pub team_a: u32,
    pub team_h_difficulty: u8,
    pub team_a_difficulty: u8,
    pub kickoff_time: Option<DateTime<Utc>>,
    pub finished: bool,
}

/// Upstream decimal strings are best-effort display data; malformed input
/// degrades to 0.0 instead of failing the whole request.
pub fn lenient_decimal(s: &str) -> f64 {
    s.trim().parse().unwrap_or(0.0)
}
