pub mod captaincy;
pub mod fixtures;
pub mod insights;
pub mod scoring;
pub mod squad;
pub mod transfers;

use crate::domain::report::{ManagerSummary, SquadReport};
use crate::domain::squad::format_price;
use crate::ingest::fpl::{self, FantasyDataClient};
use anyhow::Result;

/// Run the full pipeline for one manager: fetch, join, score, recommend.
///
/// The fetch plan has two phases. The catalog, the manager profile and the
/// fixture list are independent and issued concurrently; the picks call
/// needs the current gameweek out of the catalog, so it waits for phase one.
/// Any fetch failure aborts the whole request — there is no partial report.
pub async fn analyze_manager(
    client: &dyn FantasyDataClient,
    manager_id: u32,
) -> Result<SquadReport> {
    let (bootstrap, profile, fixture_list) = tokio::try_join!(
        client.bootstrap(),
        client.manager_profile(manager_id),
        client.fixtures(),
    )?;

    let gameweek = fpl::current_gameweek(&bootstrap)?;

    let picks = client.picks(manager_id, gameweek).await?;

    tracing::debug!(
        manager_id,
        gameweek,
        players = bootstrap.elements.len(),
        fixtures = fixture_list.len(),
        picks = picks.picks.len(),
        "fetched upstream snapshot"
    );

    let teams = fixtures::team_lookup(&bootstrap.teams);
    let players = squad::player_lookup(&bootstrap.elements);
    let windows = fixtures::project_fixtures(&fixture_list, gameweek, &teams);

    let analyzed = squad::analyze_squad(&picks.picks, &players, &windows, &teams)?;

    let (value_tenths, bank_tenths) = match &picks.entry_history {
        Some(h) => (h.value, h.bank),
        None => (
            profile.last_deadline_value.unwrap_or(0),
            profile.last_deadline_bank.unwrap_or(0),
        ),
    };

    let suggestions =
        transfers::suggest_transfers(&analyzed, &bootstrap.elements, &windows, bank_tenths);
    let captains = captaincy::rank_captains(&analyzed);
    let notes = insights::build_insights(&analyzed, &suggestions, value_tenths);

    let manager = ManagerSummary {
        name: format!("{} {}", profile.player_first_name, profile.player_last_name),
        team_name: profile.name,
        team_value: format_price(value_tenths),
        bank: format_price(bank_tenths),
        overall_rank: profile.summary_overall_rank,
        gameweek_rank: profile.summary_event_rank,
        total_points: profile.summary_overall_points.unwrap_or(0),
        gameweek,
    };

    Ok(SquadReport {
        manager,
        squad: analyzed,
        transfers: suggestions,
        captaincy: captains,
        insights: notes,
    })
}
